//! Randomized payloads for the `/noisy` endpoint.

use rand::Rng;
use serde::Serialize;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Exclusive upper bound of the nonce.
pub const NONCE_BOUND: u32 = 1_000_000;

/// Per-request payload. Never stored.
#[derive(Debug, Clone, Serialize)]
pub struct NoisyResponse {
    pub request_id: String,
    pub nonce: u32,
    pub timestamp: i64,
}

/// Wall-clock nanoseconds that never repeat or go backwards.
///
/// If the system clock stalls or steps back, the last value is bumped by one.
#[derive(Debug, Default)]
pub struct NanoClock {
    last: AtomicI64,
}

impl NanoClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> i64 {
        let wall = unix_nanos();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let next = wall.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, next, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(actual) => prev = actual,
            }
        }
    }
}

fn unix_nanos() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_nanos()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Build a fresh payload from the thread-local RNG.
pub fn generate(clock: &NanoClock) -> NoisyResponse {
    let mut rng = rand::thread_rng();
    NoisyResponse {
        request_id: format!("req-{}", rng.gen_range(0..i64::MAX)),
        nonce: rng.gen_range(0..NONCE_BOUND),
        timestamp: clock.now(),
    }
}
