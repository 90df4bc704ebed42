use crate::core::random::source::RandomSource;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{Level, Span};

/// Generate a detached span for tests.
pub fn span_fixture() -> Span {
    tracing::span!(Level::INFO, "test")
}

/// Generate a deterministic generator for tests; the same seed yields the
/// same draw sequence.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generate a deterministic RandomSource for tests.
pub fn seeded_source(seed: u64) -> RandomSource<StdRng> {
    RandomSource::seeded(seed, &span_fixture())
}

/// Install a subscriber that forwards trace output to the test harness.
/// Safe to call from multiple tests; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(Level::TRACE)
        .try_init();
}
