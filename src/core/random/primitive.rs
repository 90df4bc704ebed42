use rand::Rng;

/// Generate a random i32 over the full range.
pub fn random_i32(rng: &mut impl Rng) -> i32 {
    rng.random()
}

/// Generate a random i64 over the full range.
pub fn random_i64(rng: &mut impl Rng) -> i64 {
    rng.random()
}

/// Generate a random boolean.
pub fn random_bool(rng: &mut impl Rng) -> bool {
    rng.random_bool(0.5)
}

/// Generate a random f32 in [0, 1).
pub fn random_f32(rng: &mut impl Rng) -> f32 {
    rng.random()
}

/// Generate a random f64 in [0, 1).
pub fn random_f64(rng: &mut impl Rng) -> f64 {
    rng.random()
}

/// Generate a random byte as `floor(random * 255) - 128`, reinterpreted as u8.
///
/// Note: this construction is not uniform over the full byte range; the value
/// 0x7f is never produced. It is kept as-is for compatibility with existing
/// consumers rather than corrected.
pub fn random_byte(rng: &mut impl Rng) -> u8 {
    ((rng.random::<f64>() * 255.0) as i32 - 128) as u8
}

/// Generate a random char with a code point in [0, 16).
///
/// Note: only ever produces 16 distinct low-value code points, not general
/// Unicode; kept as-is for compatibility.
pub fn random_char(rng: &mut impl Rng) -> char {
    char::from(rng.random_range(0u8..16))
}

/// Generate a random i16 as `range[0, 16) - i16::MAX`.
///
/// Note: the result clusters near the negative end of the i16 range instead
/// of being uniform; kept as-is for compatibility.
pub fn random_i16(rng: &mut impl Rng) -> i16 {
    rng.random_range(0i16..16) - i16::MAX
}
