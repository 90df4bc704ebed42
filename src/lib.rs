//! Helpers for test suites: pseudo-random primitive values, byte arrays,
//! buffers and strings, plus byte-sequence equality comparison.

pub mod core;
