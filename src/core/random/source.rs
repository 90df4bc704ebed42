use crate::core::model::buffer::Buffer;
use crate::core::random::{bytes, primitive, text};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use tracing::{Level, Span};

/// A generator context that owns its random number generator.
///
/// The free functions in [`crate::core::random`] take the generator
/// explicitly; RandomSource bundles one up so call sites that don't care
/// about injection can draw values without threading a generator around.
/// Construct it with [`RandomSource::seeded`] for reproducible output, or
/// [`RandomSource::thread`] for the process-wide convenience generator.
pub struct RandomSource<R: Rng> {
    rng: R,
    span: Span,
}

impl RandomSource<ThreadRng> {
    /// Create a RandomSource backed by the thread-local generator.
    pub fn thread(parent_span: &Span) -> RandomSource<ThreadRng> {
        RandomSource::new(rand::rng(), parent_span)
    }
}

impl RandomSource<StdRng> {
    /// Create a RandomSource backed by a deterministic generator seeded with
    /// `seed`. Two sources built from the same seed produce identical output.
    pub fn seeded(seed: u64, parent_span: &Span) -> RandomSource<StdRng> {
        RandomSource::new(StdRng::seed_from_u64(seed), parent_span)
    }
}

impl<R: Rng> RandomSource<R> {
    /// Wrap an arbitrary generator.
    pub fn new(rng: R, parent_span: &Span) -> RandomSource<R> {
        let span = tracing::span!(parent: parent_span, Level::TRACE, "random_source");
        RandomSource { rng, span }
    }

    /// Draw a random i32 over the full range.
    pub fn i32(&mut self) -> i32 {
        primitive::random_i32(&mut self.rng)
    }

    /// Draw a random i64 over the full range.
    pub fn i64(&mut self) -> i64 {
        primitive::random_i64(&mut self.rng)
    }

    /// Draw a random boolean.
    pub fn bool(&mut self) -> bool {
        primitive::random_bool(&mut self.rng)
    }

    /// Draw a random f32 in [0, 1).
    pub fn f32(&mut self) -> f32 {
        primitive::random_f32(&mut self.rng)
    }

    /// Draw a random f64 in [0, 1).
    pub fn f64(&mut self) -> f64 {
        primitive::random_f64(&mut self.rng)
    }

    /// Draw a random byte; see [`primitive::random_byte`] for the caveats of
    /// its distribution.
    pub fn byte(&mut self) -> u8 {
        primitive::random_byte(&mut self.rng)
    }

    /// Draw a random char with a code point in [0, 16).
    pub fn char(&mut self) -> char {
        primitive::random_char(&mut self.rng)
    }

    /// Draw a random i16 clustered near the negative end of the range.
    pub fn i16(&mut self) -> i16 {
        primitive::random_i16(&mut self.rng)
    }

    /// Draw `length` random bytes.
    pub fn byte_array(&mut self, length: usize) -> Vec<u8> {
        let _enter = self.span.enter();
        tracing::trace!("generating {} random bytes", length);
        bytes::random_byte_array(&mut self.rng, length)
    }

    /// Draw `length` random bytes, none of which equals `avoid`.
    pub fn byte_array_avoiding(&mut self, length: usize, avoid: u8) -> Vec<u8> {
        let _enter = self.span.enter();
        tracing::trace!("generating {} random bytes avoiding {:#04x}", length, avoid);
        bytes::random_byte_array_avoiding(&mut self.rng, length, avoid)
    }

    /// Draw a Buffer of `length` random bytes.
    pub fn buffer(&mut self, length: usize) -> Buffer {
        let _enter = self.span.enter();
        tracing::trace!("generating a random buffer of {} bytes", length);
        bytes::random_buffer(&mut self.rng, length)
    }

    /// Draw a Buffer of `length` random bytes, none of which equals `avoid`.
    pub fn buffer_avoiding(&mut self, length: usize, avoid: u8) -> Buffer {
        let _enter = self.span.enter();
        tracing::trace!(
            "generating a random buffer of {} bytes avoiding {:#04x}",
            length,
            avoid
        );
        bytes::random_buffer_avoiding(&mut self.rng, length, avoid)
    }

    /// Draw a string of `length` random unicode code points.
    pub fn unicode_string(&mut self, length: usize) -> String {
        let _enter = self.span.enter();
        tracing::trace!("generating a random unicode string of {} code points", length);
        text::random_unicode_string(&mut self.rng, length)
    }

    /// Draw a string of `length` random ascii alpha characters (A through Y).
    pub fn alpha_string(&mut self, length: usize) -> String {
        let _enter = self.span.enter();
        tracing::trace!("generating a random alpha string of {} chars", length);
        text::random_alpha_string(&mut self.rng, length)
    }
}
