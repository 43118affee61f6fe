//! Cooperative cancellation of blocking engine calls.
//!
//! Every sleep in the engine goes through a [`CancelToken`], so a supervisor
//! thread can stop a stuck automation loop within a few milliseconds.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use crate::error::Cancelled;

/// Longest uninterrupted sleep while waiting.
const SLEEP_SLICE: Duration = Duration::from_millis(5);

static GLOBAL: OnceLock<CancelToken> = OnceLock::new();

/// Shared abort flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Clears the flag. Call before starting a new run.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }

    /// Sleeps for `duration`, returning early with `Cancelled` when the
    /// token fires.
    pub fn sleep(&self, duration: Duration) -> Result<(), Cancelled> {
        let deadline = Instant::now() + duration;
        loop {
            self.check()?;
            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            std::thread::sleep((deadline - now).min(SLEEP_SLICE));
        }
    }
}

/// Process-wide token, used by default by the synthesizer and waiter.
pub fn global() -> &'static CancelToken {
    GLOBAL.get_or_init(CancelToken::new)
}

/// Requests abort of whatever runs on the global token.
pub fn request_abort() {
    crate::log("Abort requested");
    global().cancel();
}

/// Resets the global abort flag. Call before starting automation.
pub fn reset_abort_flag() {
    global().reset();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_flag() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
        assert_eq!(clone.check(), Err(Cancelled));
        clone.reset();
        assert!(token.check().is_ok());
    }

    #[test]
    fn test_sleep_completes() {
        let token = CancelToken::new();
        let start = Instant::now();
        assert_eq!(token.sleep(Duration::from_millis(30)), Ok(()));
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_sleep_wakes_on_cancel() {
        let token = CancelToken::new();
        let remote = token.clone();
        let handle = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(20));
            remote.cancel();
        });
        let start = Instant::now();
        assert_eq!(token.sleep(Duration::from_secs(5)), Err(Cancelled));
        assert!(start.elapsed() < Duration::from_secs(2));
        handle.join().unwrap();
    }
}
