use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Cancellation signal for a run, checked before each test and each case.
///
/// Clones share the same flag, so a context handed to a runner can be cancelled
/// from elsewhere.
#[derive(Clone, Debug, Default)]
pub struct RunContext {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Some(Instant::now() + timeout),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation().is_some()
    }

    /// Why the run should stop, if it should.
    pub fn cancellation(&self) -> Option<&'static str> {
        if self.cancelled.load(Ordering::SeqCst) {
            return Some("context cancelled");
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some("deadline exceeded"),
            _ => None,
        }
    }
}
