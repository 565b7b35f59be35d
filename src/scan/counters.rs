use super::types::Tally;
use std::sync::atomic::{AtomicU64, Ordering};

/// The two accumulators shared by every worker in a run.
///
/// Workers only ever add; nobody reads until the join barrier has passed,
/// so relaxed ordering is enough and a [`snapshot`](Counters::snapshot)
/// taken after the join sees every increment.
#[derive(Debug, Default)]
pub struct Counters {
    valid: AtomicU64,
    invalid: AtomicU64,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a worker-local tally with one atomic add per counter
    pub fn publish(&self, tally: Tally) {
        if tally.valid > 0 {
            self.valid.fetch_add(tally.valid, Ordering::Relaxed);
        }
        if tally.invalid > 0 {
            self.invalid.fetch_add(tally.invalid, Ordering::Relaxed);
        }
    }

    /// Current totals. Only meaningful once all workers are joined.
    pub fn snapshot(&self) -> Tally {
        Tally {
            valid: self.valid.load(Ordering::Relaxed),
            invalid: self.invalid.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_accumulates() {
        let counters = Counters::new();
        counters.publish(Tally { valid: 1, invalid: 2 });
        counters.publish(Tally::default());
        counters.publish(Tally { valid: 5, invalid: 0 });

        assert_eq!(counters.snapshot(), Tally { valid: 6, invalid: 2 });
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        let counters = Counters::new();

        crossbeam::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|_| {
                    for i in 0..10_000 {
                        if i % 2 == 0 {
                            counters.publish(Tally { valid: 1, invalid: 0 });
                        } else {
                            counters.publish(Tally { valid: 0, invalid: 1 });
                        }
                    }
                });
            }
        })
        .unwrap();

        assert_eq!(counters.snapshot(), Tally { valid: 40_000, invalid: 40_000 });
    }
}
