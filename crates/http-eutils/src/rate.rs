use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{Instant, sleep_until};

/// Spaces requests at least `interval` apart.
///
/// Clones share the same schedule, so every request going out through one
/// transport (and its clones) counts against the same ceiling. Waiters are
/// served in the order they arrived.
#[derive(Clone, Debug)]
pub(crate) struct RateLimiter {
    next_slot: Arc<Mutex<Option<Instant>>>,
    interval: Duration,
}

impl RateLimiter {
    #[inline]
    pub fn new(interval: Duration) -> Self {
        Self {
            next_slot: Arc::new(Mutex::new(None)),
            interval,
        }
    }

    /// Waits until the caller may send its request.
    pub async fn acquire(&self) {
        if self.interval.is_zero() {
            return;
        }

        let mut next_slot = self.next_slot.lock().await;
        let now = Instant::now();
        let slot = match *next_slot {
            Some(slot) if slot > now => {
                trace!("rate limited for {:?}", slot - now);
                sleep_until(slot).await;
                slot
            }
            _ => now,
        };
        *next_slot = Some(slot + self.interval);
    }
}
