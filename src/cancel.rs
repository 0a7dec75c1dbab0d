//! cooperative cancellation shared by every request in a run

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

use crate::error::RequestError;

/// A cancellation flag plus an optional deadline.
///
/// Clones share the same flag, so a token handed to a signal handler trips
/// every request made with the original.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that also expires once `limit` has elapsed from now.
    ///
    /// A limit too far in the future to represent means no deadline.
    pub fn with_deadline(limit: Duration) -> Self {
        Self {
            cancelled: Default::default(),
            deadline: Instant::now().checked_add(limit),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
            || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// The timeout to use for the next request: `max` clamped to whatever is
    /// left before the deadline.
    ///
    /// Returns an error if the token is already cancelled or expired.
    pub fn request_timeout(&self, max: Duration) -> Result<Duration, RequestError> {
        if self.cancelled.load(Ordering::Acquire) {
            return Err(RequestError::Cancelled);
        }
        match self.deadline {
            None => Ok(max),
            Some(deadline) => match deadline.checked_duration_since(Instant::now()) {
                Some(left) if !left.is_zero() => Ok(left.min(max)),
                _ => Err(RequestError::Cancelled),
            },
        }
    }
}
