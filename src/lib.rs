//! Demonstration HTTP service.
//!
//! Six endpoints, each doing one trivial thing: a static greeting, random
//! JSON, a long sleep, listing MongoDB databases, reading the PostgreSQL
//! version, and wrapping one outbound HTTP call.

// Core subsystems
pub mod config;
pub mod http;
pub mod lifecycle;

// Clients and payloads
pub mod external;
pub mod noise;
pub mod store;

// Cross-cutting concerns
pub mod observability;
pub mod resilience;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::{Dependencies, Shutdown};
