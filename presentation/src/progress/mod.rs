//! Progress reporting while the service is working

pub mod reporter;
