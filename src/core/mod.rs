pub mod model;
pub mod random;
#[cfg(test)]
pub mod testutil;

pub use crate::core::model::buffer::Buffer;
pub use crate::core::model::buffer::ByteSeq;
pub use crate::core::model::compare::buffers_equal;
pub use crate::core::model::compare::byte_arrays_equal;
pub use crate::core::model::compare::seqs_equal;
pub use crate::core::random::source::RandomSource;
