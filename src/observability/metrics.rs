//! Session metrics tracking.
//!
//! Counts the commands handled during one interactive session and logs a
//! summary when the session ends.

use std::time::Instant;

/// Counters for one assistant session.
#[derive(Debug, Clone, Default)]
pub struct SessionMetrics {
    commands_total: u64,
    command_errors_total: u64,
    searches_total: u64,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a handled command.
    pub fn track_command(&mut self, command: &str, duration_us: u128, success: bool) {
        self.commands_total += 1;

        if !success {
            self.command_errors_total += 1;
        }

        tracing::debug!(
            command = %command,
            duration_us = duration_us,
            success = success,
            "Command handled"
        );
    }

    /// Track a contact search.
    pub fn track_search(&mut self, result_count: usize) {
        self.searches_total += 1;
        tracing::debug!(result_count = result_count, "Search completed");
    }

    pub fn commands_total(&self) -> u64 {
        self.commands_total
    }

    pub fn command_errors_total(&self) -> u64 {
        self.command_errors_total
    }

    pub fn searches_total(&self) -> u64 {
        self.searches_total
    }

    /// Get the command error rate (0.0 to 1.0).
    pub fn command_error_rate(&self) -> f64 {
        if self.commands_total == 0 {
            0.0
        } else {
            self.command_errors_total as f64 / self.commands_total as f64
        }
    }

    /// Emit the counters as a single log event.
    pub fn log_summary(&self) {
        tracing::info!(
            commands = self.commands_total,
            command_errors = self.command_errors_total,
            error_rate = self.command_error_rate(),
            searches = self.searches_total,
            "Session finished"
        );
    }
}

/// A timer for tracking command duration.
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time in microseconds.
    pub fn elapsed_us(&self) -> u128 {
        self.start.elapsed().as_micros()
    }
}
