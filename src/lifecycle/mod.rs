//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Boot delay → connect document store ┐
//!                → connect relational store ┴→ Dependencies → HTTP server
//!
//! Shutdown (shutdown.rs):
//!     Trigger → listener stops accepting → process exits
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger shutdown
//! ```
//!
//! # Design Decisions
//! - Listener binds only after startup finished (traffic only when ready)
//! - Startup never fails on datastore errors; it records them

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{Shutdown, ShutdownSignal};
pub use startup::{initialize, Dependencies};
