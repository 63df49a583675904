//! Minimum-interval gate in front of the model endpoint.
//!
//! Replaces a fixed per-row sleep: the gate only delays a call when the
//! previous one was less than one interval ago, so skipped rows and slow
//! fetches count toward the wait instead of adding to it. The first call
//! never waits.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

pub struct MinIntervalGate {
    interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl MinIntervalGate {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_call: Mutex::new(None),
        }
    }

    /// Gate allowing `calls_per_minute` calls per minute. `0` disables waiting.
    #[must_use]
    pub fn per_minute(calls_per_minute: u32) -> Self {
        let interval = if calls_per_minute == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(60) / calls_per_minute
        };
        Self::new(interval)
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Waits until a call is allowed, then records it. Returns the time slept.
    pub async fn acquire(&self) -> Duration {
        let mut last_call = self.last_call.lock().await;
        let mut slept = Duration::ZERO;

        if let Some(prev) = *last_call {
            let elapsed = prev.elapsed();
            if elapsed < self.interval {
                slept = self.interval - elapsed;
                tracing::info!(
                    delay_ms = u64::try_from(slept.as_millis()).unwrap_or(u64::MAX),
                    "throttling model request"
                );
                tokio::time::sleep(slept).await;
            }
        }

        *last_call = Some(Instant::now());
        slept
    }
}
