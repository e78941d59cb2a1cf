//! Configuration validation.
//!
//! # Responsibilities
//! - Reject an empty bind address
//! - Reject zero timeouts (a zero deadline fails every call)
//! - Check the external target parses as an http(s) URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system
//! - Connection strings are not checked here; a bad one makes that store
//!   unavailable at startup instead of stopping the process

use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::config::schema::AppConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("external URL {url:?} is invalid: {reason}")]
    ExternalUrl { url: String, reason: String },
}

/// Validate a loaded configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.trim().is_empty() {
        errors.push(ValidationError::Empty("bind_address"));
    }

    let timeouts: [(&'static str, Duration); 4] = [
        ("connect_timeout", config.startup.connect_timeout),
        ("document_query", config.timeouts.document_query),
        ("relational_query", config.timeouts.relational_query),
        ("external_request", config.timeouts.external_request),
    ];
    for (name, value) in timeouts {
        if value.is_zero() {
            errors.push(ValidationError::ZeroTimeout(name));
        }
    }

    let raw_url = &config.endpoints.external_url;
    match Url::parse(raw_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::ExternalUrl {
            url: raw_url.clone(),
            reason: format!("unsupported scheme {}", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::ExternalUrl {
            url: raw_url.clone(),
            reason: e.to_string(),
        }),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
