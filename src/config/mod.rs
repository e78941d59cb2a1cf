//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! schema.rs defaults (constants)
//!     → loader.rs (overlay MONGO_URI, POSTGRES_URI, *_DELAY_SECS)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → read once by startup and the HTTP server
//! ```
//!
//! # Design Decisions
//! - Environment only; no config file, no CLI flags
//! - All fields have defaults so an empty environment is valid
//! - Validation separates parsing from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_config_from, ConfigError};
pub use schema::AppConfig;
pub use schema::DatastoreConfig;
pub use schema::EndpointConfig;
pub use schema::ListenerConfig;
pub use schema::StartupConfig;
pub use schema::TimeoutConfig;
