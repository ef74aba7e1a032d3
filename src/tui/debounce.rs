//! Debounce control for search requests
//!
//! Keystrokes and page flips arrive far faster than the API should be hit.
//! The debouncer holds the latest (query, page) pair and releases it only
//! after a quiet period, so a burst of edits costs one request.

use std::time::{Duration, Instant};

/// Quiet period between the last change and the fetch it triggers
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Debounce controller for (query, page) fetches
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(String, u32)>,
    armed_at: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer with the default delay (300ms)
    pub fn new() -> Self {
        Self::with_delay(DEBOUNCE_DELAY)
    }

    /// Create a debouncer with a custom delay
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            armed_at: None,
        }
    }

    /// Replace any pending pair and restart the quiet period
    pub fn schedule(&mut self, query: String, page: u32) {
        self.pending = Some((query, page));
        self.armed_at = Some(Instant::now());
    }

    /// Disarm without firing
    pub fn cancel(&mut self) {
        self.pending = None;
        self.armed_at = None;
    }

    /// True while a pair is waiting out its quiet period
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Hand out the pending pair once its quiet period has elapsed.
    /// Each scheduled pair is released at most once.
    pub fn take_ready(&mut self) -> Option<(String, u32)> {
        let armed_at = self.armed_at?;
        if armed_at.elapsed() < self.delay {
            return None;
        }
        self.armed_at = None;
        self.pending.take()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
