//! Response bodies and error mapping.
//!
//! # Responsibilities
//! - JSON envelopes for the datastore endpoints
//! - Verbatim wrapping of the upstream body for `/external`
//! - Map request-level failures to status codes with plain-text bodies
//!
//! # Design Decisions
//! - Error bodies expose the underlying message to the caller
//! - Missing handles and failed queries are 500; the outbound proxy is 502

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::external::ExternalError;
use crate::store::StoreError;

pub const MONGO_SOURCE: &str = "mongo";
pub const POSTGRES_SOURCE: &str = "postgres";
pub const EXTERNAL_SOURCE: &str = "external_api";

/// Body of `/mongo`.
#[derive(Debug, Serialize)]
pub struct DatabaseList {
    pub source: &'static str,
    pub dbs: Vec<String>,
}

/// Body of `/postgres`.
#[derive(Debug, Serialize)]
pub struct VersionReport {
    pub source: &'static str,
    pub version: String,
}

/// A pre-rendered JSON document, sent as-is.
#[derive(Debug)]
pub struct RawJson(pub String);

impl IntoResponse for RawJson {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, "application/json")], self.0).into_response()
    }
}

/// Wrap an upstream body without parsing it.
///
/// The body is spliced in verbatim; if it is not JSON, neither is the result.
pub fn external_envelope(url: &Url, body: &str) -> RawJson {
    let url = serde_json::Value::String(url.to_string());
    RawJson(format!(
        r#"{{"source": "{}", "url": {}, "response": {}}}"#,
        EXTERNAL_SOURCE, url, body
    ))
}

/// Request-level failures.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{store} not initialized: {reason}")]
    NotInitialized { store: &'static str, reason: String },

    #[error("{store} query failed: {error}")]
    Query {
        store: &'static str,
        #[source]
        error: StoreError,
    },

    #[error("Failed to call external API: {0}")]
    Upstream(#[from] ExternalError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotInitialized { .. } | ApiError::Query { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = %status, error = %self, "Request failed");
        (status, self.to_string()).into_response()
    }
}
