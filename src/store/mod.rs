//! Datastore client subsystem.
//!
//! # Data Flow
//! ```text
//! lifecycle::startup
//!     → mongo.rs / postgres.rs (connect once, bounded by connect_timeout)
//!     → Handle<dyn DocumentStore> / Handle<dyn RelationalStore>
//!     → http::server::AppState (shared read-only by every handler)
//! ```
//!
//! # Design Decisions
//! - Handlers depend on the traits, never on the drivers, so tests use fakes
//! - A handle is created once and never reconnected or invalidated
//! - An unavailable handle is a normal state carrying the reason

pub mod mongo;
pub mod postgres;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::resilience::DeadlineExceeded;

pub use mongo::MongoStore;
pub use postgres::PostgresStore;

/// Errors from datastore operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    #[error(transparent)]
    Postgres(#[from] tokio_postgres::Error),

    #[error(transparent)]
    Deadline(#[from] DeadlineExceeded),

    /// Failures from stores that are not backed by a driver.
    #[error("{0}")]
    Other(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A schema-flexible store that can enumerate its databases.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn list_database_names(&self) -> StoreResult<Vec<String>>;
}

/// A SQL store that can report its server version.
#[async_trait]
pub trait RelationalStore: Send + Sync {
    async fn server_version(&self) -> StoreResult<String>;
}

/// Outcome of establishing a long-lived client.
pub enum Handle<T: ?Sized> {
    Established(Arc<T>),
    Unavailable { reason: String },
}

impl<T: ?Sized> Handle<T> {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Handle::Unavailable {
            reason: reason.into(),
        }
    }

    /// The client, or the reason there is none.
    pub fn get(&self) -> Result<&Arc<T>, &str> {
        match self {
            Handle::Established(client) => Ok(client),
            Handle::Unavailable { reason } => Err(reason),
        }
    }

    pub fn is_established(&self) -> bool {
        matches!(self, Handle::Established(_))
    }
}

impl<T: ?Sized> Clone for Handle<T> {
    fn clone(&self) -> Self {
        match self {
            Handle::Established(client) => Handle::Established(Arc::clone(client)),
            Handle::Unavailable { reason } => Handle::Unavailable {
                reason: reason.clone(),
            },
        }
    }
}

impl<T: ?Sized> From<Arc<T>> for Handle<T> {
    fn from(client: Arc<T>) -> Self {
        Handle::Established(client)
    }
}

impl<T: ?Sized> std::fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Handle::Established(_) => f.write_str("Established"),
            Handle::Unavailable { reason } => {
                f.debug_struct("Unavailable").field("reason", reason).finish()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Versioned;

    #[async_trait]
    impl RelationalStore for Versioned {
        async fn server_version(&self) -> StoreResult<String> {
            Ok("PostgreSQL 16.2".into())
        }
    }

    #[tokio::test]
    async fn test_established_handle_exposes_client() {
        let handle: Handle<dyn RelationalStore> =
            Handle::from(Arc::new(Versioned) as Arc<dyn RelationalStore>);
        assert!(handle.is_established());

        let client = handle.get().unwrap();
        assert_eq!(client.server_version().await.unwrap(), "PostgreSQL 16.2");
        assert_eq!(format!("{:?}", handle), "Established");
    }

    #[test]
    fn test_unavailable_handle_keeps_reason() {
        let handle: Handle<dyn DocumentStore> = Handle::unavailable("connection refused");
        let copy = handle.clone();

        assert!(!copy.is_established());
        assert_eq!(copy.get().err(), Some("connection refused"));
    }
}
