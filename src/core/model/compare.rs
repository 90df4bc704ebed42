use crate::core::model::buffer::{Buffer, ByteSeq};

/// Determines whether two byte sequences hold the same content.
///
/// Returns false immediately if the lengths differ; otherwise compares
/// element-by-element in index order, short-circuiting on the first mismatch.
/// Two equal-length empty sequences are trivially equal.
pub fn seqs_equal<A, B>(b1: &A, b2: &B) -> bool
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    if b1.length() != b2.length() {
        return false;
    }
    for i in 0..b1.length() {
        if b1.byte_at(i) != b2.byte_at(i) {
            return false;
        }
    }
    true
}

/// Determines whether two Buffers hold the same content.
pub fn buffers_equal(b1: &Buffer, b2: &Buffer) -> bool {
    seqs_equal(b1, b2)
}

/// Determines whether two byte slices hold the same content.
pub fn byte_arrays_equal(b1: &[u8], b2: &[u8]) -> bool {
    seqs_equal(b1, b2)
}
