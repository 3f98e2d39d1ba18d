//! Observability module for monitoring a session.
//!
//! This module provides command counters and timing on top of `tracing`.

pub mod metrics;

pub use metrics::{SessionMetrics, Timer};
