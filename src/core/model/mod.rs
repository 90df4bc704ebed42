pub mod buffer;
pub mod compare;
