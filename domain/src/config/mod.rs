//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod service_status;

pub use service_status::{PLACEHOLDER_API_KEY, ServiceStatus};
