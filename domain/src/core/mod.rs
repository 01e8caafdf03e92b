//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - domain-level errors
//! - [`string`] - small text helpers used for transcript display

pub mod error;
pub mod string;
