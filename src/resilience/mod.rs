//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Datastore call from a handler or the startup sequencer:
//!     → timeouts.rs (enforce deadline)
//!     → On expiry: DeadlineExceeded surfaces as that request's error
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every external call has a deadline
//! - No retries, no circuit breaking: one attempt per request

pub mod timeouts;

pub use timeouts::{with_deadline, DeadlineExceeded};
