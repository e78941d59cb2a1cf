//! Endpoint handlers. Each one is independent of the others.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use std::time::Duration;

use crate::http::request::request_id;
use crate::http::response::{
    external_envelope, ApiError, DatabaseList, RawJson, VersionReport, MONGO_SOURCE,
    POSTGRES_SOURCE,
};
use crate::http::server::AppState;
use crate::noise::{self, NoisyResponse};
use crate::resilience::with_deadline;

pub const GREETING: &str = "Hello, World!";

/// `/hello`
pub async fn hello() -> &'static str {
    GREETING
}

/// `/noisy`
pub async fn noisy(State(state): State<AppState>) -> Json<NoisyResponse> {
    Json(noise::generate(&state.clock))
}

/// `/slow`
///
/// Parks on a timer, not a thread, so it does not hold a worker while waiting.
pub async fn slow(State(state): State<AppState>, headers: HeaderMap) -> String {
    tracing::info!(
        request_id = %request_id(&headers),
        delay = ?state.slow_delay,
        "Received /slow request, sleeping"
    );
    tokio::time::sleep(state.slow_delay).await;
    format!("Finished processing after {}", describe(state.slow_delay))
}

/// `/mongo`
pub async fn mongo(State(state): State<AppState>) -> Result<Json<DatabaseList>, ApiError> {
    let store = state
        .document_store
        .get()
        .map_err(|reason| ApiError::NotInitialized {
            store: "Mongo",
            reason: reason.to_string(),
        })?;

    let dbs = with_deadline(
        "list databases",
        state.timeouts.document_query,
        store.list_database_names(),
    )
    .await
    .map_err(|error| ApiError::Query {
        store: "Mongo",
        error,
    })?;

    Ok(Json(DatabaseList {
        source: MONGO_SOURCE,
        dbs,
    }))
}

/// `/external`
pub async fn external(State(state): State<AppState>) -> Result<RawJson, ApiError> {
    let body = state.external.fetch().await?;
    Ok(external_envelope(state.external.url(), &body))
}

/// `/postgres`
pub async fn postgres(State(state): State<AppState>) -> Result<Json<VersionReport>, ApiError> {
    let store = state
        .relational_store
        .get()
        .map_err(|reason| ApiError::NotInitialized {
            store: "Postgres",
            reason: reason.to_string(),
        })?;

    let version = with_deadline(
        "version query",
        state.timeouts.relational_query,
        store.server_version(),
    )
    .await
    .map_err(|error| ApiError::Query {
        store: "Postgres",
        error,
    })?;

    Ok(Json(VersionReport {
        source: POSTGRES_SOURCE,
        version,
    }))
}

/// Whole seconds read as "35 seconds"; anything finer falls back to Debug.
fn describe(delay: Duration) -> String {
    if delay.subsec_nanos() == 0 {
        format!("{} seconds", delay.as_secs())
    } else {
        format!("{:?}", delay)
    }
}
