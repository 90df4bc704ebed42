//! Pseudo-random value generation for tests.
//!
//! Every free function in the submodules takes the generator explicitly, so a
//! caller that needs reproducible output can pass a seeded generator. The
//! [`source::RandomSource`] wrapper restores the "just give me a value"
//! ergonomics on top of the same functions.

pub mod bytes;
pub mod primitive;
pub mod source;
pub mod text;

pub use crate::core::random::bytes::{
    random_buffer, random_buffer_avoiding, random_byte_array, random_byte_array_avoiding,
};
pub use crate::core::random::primitive::{
    random_bool, random_byte, random_char, random_f32, random_f64, random_i16, random_i32,
    random_i64,
};
pub use crate::core::random::text::{random_alpha_string, random_unicode_string};
