use crate::core::model::buffer::Buffer;
use crate::core::random::primitive::random_byte;
use rand::Rng;

/// Generate `length` random bytes.
pub fn random_byte_array(rng: &mut impl Rng, length: usize) -> Vec<u8> {
    fill(rng, length, None)
}

/// Generate `length` random bytes, none of which equals `avoid`.
///
/// Each position is drawn by rejection sampling: the draw is repeated until
/// the result differs from `avoid`. The loop is unbounded but terminates with
/// overwhelming probability on every draw.
pub fn random_byte_array_avoiding(rng: &mut impl Rng, length: usize, avoid: u8) -> Vec<u8> {
    fill(rng, length, Some(avoid))
}

/// Generate a Buffer of `length` random bytes.
pub fn random_buffer(rng: &mut impl Rng, length: usize) -> Buffer {
    Buffer::from_vec(random_byte_array(rng, length))
}

/// Generate a Buffer of `length` random bytes, none of which equals `avoid`.
pub fn random_buffer_avoiding(rng: &mut impl Rng, length: usize, avoid: u8) -> Buffer {
    Buffer::from_vec(random_byte_array_avoiding(rng, length, avoid))
}

fn fill(rng: &mut impl Rng, length: usize, avoid: Option<u8>) -> Vec<u8> {
    let mut line = Vec::with_capacity(length);
    for _ in 0..length {
        let byte = loop {
            let candidate = random_byte(rng);
            if avoid != Some(candidate) {
                break candidate;
            }
        };
        line.push(byte);
    }
    line
}
