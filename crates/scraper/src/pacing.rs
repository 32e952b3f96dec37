// ABOUTME: Randomized pauses between requests to a board.
// ABOUTME: RandomDelay sleeps a uniform draw from a millisecond range; NoDelay never sleeps.

use std::ops::Range;
use std::thread;
use std::time::Duration;

/// Called before every request the scraper makes to a board.
pub trait Pacer {
    fn pause(&mut self);
}

#[derive(Debug, Clone)]
pub struct RandomDelay {
    range_ms: Range<u64>,
}

impl RandomDelay {
    pub fn new(range_ms: Range<u64>) -> Self {
        Self { range_ms }
    }

    /// Draws the next pause. An empty range means no pause.
    pub fn next_delay(&self) -> Duration {
        if self.range_ms.is_empty() {
            return Duration::ZERO;
        }
        Duration::from_millis(fastrand::u64(self.range_ms.clone()))
    }
}

impl Pacer for RandomDelay {
    fn pause(&mut self) {
        let delay = self.next_delay();
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self) {}
}
