use std::time::Duration;

use rand::Rng;

/// Base delay between send ticks.
pub const TICK_BASE: Duration = Duration::from_millis(1000);
/// Upper bound (exclusive) of the random jitter added to `TICK_BASE`.
pub const TICK_JITTER_MS: u64 = 500;

/// Source of per-tick delays. Injected so tests can supply a
/// deterministic implementation instead of real randomness.
pub trait TickJitter: Send + Sync {
    fn tick_delay(&self) -> Duration;
}

/// Production jitter: a uniform draw in `[0, 500ms)` on top of the 1s
/// base, redrawn for every tick. Models variable per-recipient latency.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformTickJitter;

impl TickJitter for UniformTickJitter {
    fn tick_delay(&self) -> Duration {
        let mut rng = rand::thread_rng();
        TICK_BASE + Duration::from_millis(rng.gen_range(0..TICK_JITTER_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_jitter_stays_in_range() {
        let jitter = UniformTickJitter;
        for _ in 0..200 {
            let delay = jitter.tick_delay();
            assert!(delay >= TICK_BASE);
            assert!(delay < TICK_BASE + Duration::from_millis(TICK_JITTER_MS));
        }
    }
}
