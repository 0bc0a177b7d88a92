//! Depth, deadline and cancellation limits for one search.

use super::error::{AbortReason, SearchError};
use derive_getters::Getters;
use derive_setters::Setters;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Shared flag that stops an in-flight search.
///
/// Raising the flag from any thread makes the search return
/// [`SearchError::Aborted`] at its next limit check.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token that is not raised.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Returns true once [`CancelToken::cancel`] has been called.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Bounds for a single search.
#[derive(Debug, Clone, Getters, Setters)]
#[setters(prefix = "with_", strip_option)]
pub struct SearchLimits {
    /// Maximum number of plies below the root.
    max_depth: u32,
    /// Wall-clock instant after which the search aborts.
    deadline: Option<Instant>,
    /// Cooperative cancellation flag.
    cancel: Option<CancelToken>,
}

impl SearchLimits {
    /// Limits with only a depth bound.
    pub fn depth(max_depth: u32) -> Self {
        Self {
            max_depth,
            deadline: None,
            cancel: None,
        }
    }

    /// Sets the deadline to `budget` from now.
    pub fn with_budget(self, budget: Duration) -> Self {
        self.with_deadline(Instant::now() + budget)
    }

    /// Fails if the deadline passed or the token was raised.
    pub(crate) fn check(&self) -> Result<(), SearchError> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Err(SearchError::Aborted(AbortReason::Cancelled));
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(SearchError::Aborted(AbortReason::DeadlineExceeded));
        }
        Ok(())
    }
}
