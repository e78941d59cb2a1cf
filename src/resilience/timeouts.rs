//! Timeout enforcement.
//!
//! # Responsibilities
//! - Wrap datastore calls with a deadline
//! - Report which operation ran out of time, and after how long
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - Timeout errors are distinct from other errors
//! - The wrapped future is dropped on expiry; nothing is retried

use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// A downstream operation did not finish within its deadline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} timed out after {after:?}")]
pub struct DeadlineExceeded {
    pub operation: &'static str,
    pub after: Duration,
}

/// Run a fallible future under a deadline.
///
/// The inner error and the timeout collapse into the caller's error type.
pub async fn with_deadline<F, T, E>(
    operation: &'static str,
    after: Duration,
    fut: F,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: From<DeadlineExceeded>,
{
    match tokio::time::timeout(after, fut).await {
        Ok(result) => result,
        Err(_) => {
            tracing::debug!(operation, after = ?after, "Deadline exceeded");
            Err(DeadlineExceeded { operation, after }.into())
        }
    }
}
