//! Port for structured session event logging.
//!
//! Defines the [`EventLog`] trait for recording practice session events
//! (session start, appended turns, classifications, failures) to a
//! machine-readable log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures the transcript as
//! events. The log is write-only and never read back.

use serde_json::Value;

/// A structured session event for logging.
pub struct SessionEvent {
    /// Event type identifier (e.g., "session_started", "turn_appended").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl SessionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging session events.
///
/// `log` is synchronous and non-fallible so it can never disturb the
/// session; write failures are dropped by the implementation.
pub trait EventLog: Send + Sync {
    fn log(&self, event: SessionEvent);
}

/// No-op implementation for tests and when event logging is disabled.
pub struct NoEventLog;

impl EventLog for NoEventLog {
    fn log(&self, _event: SessionEvent) {}
}
