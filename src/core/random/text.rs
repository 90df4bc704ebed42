use crate::core::random::primitive::random_f64;
use rand::Rng;

/// Reserved code points excluded from generated unicode strings.
const RESERVED_LOW: u32 = 0xFFFE;
/// UTF-16 surrogate range, invalid as standalone scalar values.
const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END: u32 = 0xDFFF;

/// Generate a string of `length` random unicode code points.
///
/// Candidates are drawn as `floor(0xFFFF * random)`; draws that land in the
/// surrogate range [0xD800, 0xDFFF] or at the reserved code points
/// 0xFFFE/0xFFFF are rejected and redrawn. `length` counts code points, not
/// encoded bytes.
pub fn random_unicode_string(rng: &mut impl Rng, length: usize) -> String {
    let mut builder = String::with_capacity(length);
    for _ in 0..length {
        let code = loop {
            let candidate = (0xFFFF as f64 * random_f64(rng)) as u32;
            if (SURROGATE_START..=SURROGATE_END).contains(&candidate) || candidate >= RESERVED_LOW {
                continue;
            }
            break candidate;
        };
        // safe: everything below 0xFFFE outside the surrogate range is a valid scalar value
        builder.push(char::from_u32(code).expect("rejected candidates cannot reach here"));
    }
    builder
}

/// Generate a string of `length` random ascii alpha characters.
///
/// Each character is `65 + floor(25 * random)`, i.e. uppercase A through Y.
/// Note: the multiplier is 25, so 'Z' is never produced; kept as-is for
/// compatibility rather than corrected.
pub fn random_alpha_string(rng: &mut impl Rng, length: usize) -> String {
    let mut builder = String::with_capacity(length);
    for _ in 0..length {
        builder.push(char::from(65 + (25.0 * random_f64(rng)) as u8));
    }
    builder
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::testutil::fixtures::seeded_rng;

    #[test]
    fn test_random_unicode_string_length_counts_code_points() {
        let mut rng = seeded_rng(20);
        for n in [0usize, 1, 10, 100] {
            assert_eq!(random_unicode_string(&mut rng, n).chars().count(), n);
        }
    }

    #[test]
    fn test_random_unicode_string_excludes_illegal_chars() {
        let mut rng = seeded_rng(21);
        for _ in 0..100 {
            for c in random_unicode_string(&mut rng, 100).chars() {
                let code = c as u32;
                assert!(code < RESERVED_LOW, "reserved code point {code:#x}");
                assert!(
                    !(SURROGATE_START..=SURROGATE_END).contains(&code),
                    "surrogate code point {code:#x}"
                );
            }
        }
    }

    #[test]
    fn test_random_alpha_string_is_a_through_y() {
        let mut rng = seeded_rng(22);
        for _ in 0..100 {
            let s = random_alpha_string(&mut rng, 100);
            assert_eq!(s.len(), 100);
            for c in s.chars() {
                assert!(('A'..='Y').contains(&c), "unexpected char {c}");
            }
        }
    }

    #[test]
    fn test_random_alpha_string_empty() {
        let mut rng = seeded_rng(23);
        assert_eq!(random_alpha_string(&mut rng, 0), "");
        assert_eq!(random_unicode_string(&mut rng, 0), "");
    }
}
