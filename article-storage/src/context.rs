//! Execution context threaded through every repository call.
//!
//! Carries a cancellation token and an optional deadline. [`ExecContext::run`] races a store
//! future against both; the losing future is dropped, which aborts the in-flight query.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::error::StorageError;

#[derive(Debug, Clone, Default)]
pub struct ExecContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl ExecContext {
    /// A context that is never cancelled on its own and has no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the deadline to `timeout` from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Keeps the earlier of the current and the given deadline.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        });
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// A context cancelled together with `self`, which can also be cancelled on its own.
    pub fn child(&self) -> Self {
        Self {
            cancel: self.cancel.child_token(),
            deadline: self.deadline,
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Drives `fut` to completion unless the context is cancelled or its deadline passes first.
    pub async fn run<T, E, F>(&self, op: &'static str, fut: F) -> Result<T, StorageError>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<StorageError>,
    {
        let bounded = async {
            match self.deadline {
                Some(deadline) => match tokio::time::timeout_at(deadline, fut).await {
                    Ok(res) => res.map_err(Into::into),
                    Err(_) => {
                        warn!(op, "store call hit its deadline");
                        Err(StorageError::DeadlineExceeded)
                    }
                },
                None => fut.await.map_err(Into::into),
            }
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                warn!(op, "store call cancelled");
                Err(StorageError::Cancelled)
            }
            res = bounded => res,
        }
    }
}
