//! Polling waits on frame-derived conditions.

use std::time::{Duration, Instant};

use super::cancel::{self, CancelToken};
use super::config::EngineConfig;
use crate::error::Cancelled;
use crate::input::Randomizer;

/// Polls a predicate until it holds or a timeout passes.
///
/// Predicates may run many times per call, so they should be cheap and free
/// of side effects.
pub struct Waiter {
    poll_interval_ms: (u64, u64),
    cancel: CancelToken,
    random: Randomizer,
}

impl Waiter {
    /// Polls every 20 to 30 ms, observing the global cancel token.
    pub fn new() -> Self {
        Self {
            poll_interval_ms: (20, 30),
            cancel: cancel::global().clone(),
            random: Randomizer::new(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        let (min_ms, max_ms) = config.poll_interval_ms;
        Self::new().with_poll_interval(min_ms, max_ms)
    }

    /// Sleep range between polls in milliseconds. A reversed range is
    /// swapped.
    pub fn with_poll_interval(mut self, min_ms: u64, max_ms: u64) -> Self {
        self.poll_interval_ms = (min_ms.min(max_ms), min_ms.max(max_ms));
        self
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn with_randomizer(mut self, random: Randomizer) -> Self {
        self.random = random;
        self
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    fn poll_delay(&mut self) -> Duration {
        let (min_ms, max_ms) = self.poll_interval_ms;
        self.random
            .duration_ms(min_ms, max_ms)
            .unwrap_or(Duration::from_millis(min_ms))
    }

    /// Evaluates `predicate` until it returns true or `timeout` elapses.
    ///
    /// The predicate is evaluated once more after the timeout, so a
    /// condition that becomes true right at the deadline is still seen.
    /// Returns within `timeout` plus one poll interval.
    pub fn wait_for<F>(&mut self, timeout: Duration, mut predicate: F) -> Result<bool, Cancelled>
    where
        F: FnMut() -> bool,
    {
        let start = Instant::now();
        loop {
            self.cancel.check()?;
            let elapsed = start.elapsed();
            if elapsed >= timeout {
                break;
            }
            if predicate() {
                return Ok(true);
            }
            // Never sleep past the deadline
            let remaining = timeout.saturating_sub(start.elapsed());
            let delay = self.poll_delay().min(remaining);
            self.cancel.sleep(delay)?;
        }
        Ok(predicate())
    }

    /// [`wait_for`](Self::wait_for) with a timeout drawn uniformly from
    /// `[min, max)`. Fails with `InvalidRange` when `min > max` and with
    /// `Cancelled` when the token fires.
    pub fn wait_for_random<F>(
        &mut self,
        min: Duration,
        max: Duration,
        predicate: F,
    ) -> anyhow::Result<bool>
    where
        F: FnMut() -> bool,
    {
        let timeout = self
            .random
            .duration_ms(min.as_millis() as u64, max.as_millis() as u64)?;
        Ok(self.wait_for(timeout, predicate)?)
    }
}

impl Default for Waiter {
    fn default() -> Self {
        Self::new()
    }
}

/// Waits for `predicate` with default polling and no cancellation.
pub fn wait_for<F>(timeout: Duration, predicate: F) -> bool
where
    F: FnMut() -> bool,
{
    Waiter::new()
        .with_cancel_token(CancelToken::new())
        .wait_for(timeout, predicate)
        .unwrap_or(false)
}
