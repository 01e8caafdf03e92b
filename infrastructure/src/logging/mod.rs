//! Logging infrastructure: structured transcript event logging.
//!
//! Provides [`JsonlEventLog`], a JSONL file writer that implements the
//! [`EventLog`](doq_application::EventLog) port.

mod jsonl_event_log;

pub use jsonl_event_log::JsonlEventLog;
