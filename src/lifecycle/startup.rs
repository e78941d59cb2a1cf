//! Startup orchestration.
//!
//! # Responsibilities
//! - Hold off for the configured boot delay
//! - Attempt each datastore connection once, under a deadline
//! - Record per-dependency availability for the HTTP layer
//!
//! # Design Decisions
//! - Best effort: a failed connection is logged and never aborts startup
//! - The two attempts are independent and run concurrently
//! - No retry and no health-check loop after this point

use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::{DocumentStore, Handle, MongoStore, PostgresStore, RelationalStore, StoreResult};

/// Datastore clients handed to the HTTP server.
#[derive(Clone, Debug)]
pub struct Dependencies {
    pub document_store: Handle<dyn DocumentStore>,
    pub relational_store: Handle<dyn RelationalStore>,
}

impl Dependencies {
    /// Neither store reachable; useful when running without datastores.
    pub fn unavailable(reason: &str) -> Self {
        Self {
            document_store: Handle::unavailable(reason),
            relational_store: Handle::unavailable(reason),
        }
    }
}

/// Run the startup sequence: delay, then connect to both stores.
pub async fn initialize(config: &AppConfig) -> Dependencies {
    tracing::info!(
        delay_secs = config.startup.delay.as_secs_f64(),
        "Application booting, waiting before connecting to datastores"
    );
    tokio::time::sleep(config.startup.delay).await;

    let timeout = config.startup.connect_timeout;
    let (mongo, postgres) = tokio::join!(
        MongoStore::connect(&config.datastores.mongo_uri, timeout),
        PostgresStore::connect(&config.datastores.postgres_uri, timeout),
    );

    Dependencies {
        document_store: establish("mongo", mongo, |s| {
            Arc::new(s) as Arc<dyn DocumentStore>
        }),
        relational_store: establish("postgres", postgres, |s| {
            Arc::new(s) as Arc<dyn RelationalStore>
        }),
    }
}

fn establish<S, T: ?Sized>(
    name: &'static str,
    attempt: StoreResult<S>,
    erase: impl FnOnce(S) -> Arc<T>,
) -> Handle<T> {
    match attempt {
        Ok(store) => {
            tracing::info!(store = name, "Successfully connected");
            Handle::Established(erase(store))
        }
        Err(e) => {
            tracing::warn!(store = name, error = %e, "Connection failed, continuing without it");
            Handle::unavailable(e.to_string())
        }
    }
}
