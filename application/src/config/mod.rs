//! Application-level configuration.
//!
//! - [`StrategyMode`] / [`ClassifierChoice`] - which strategies a session uses
//! - [`ServiceParams`] - model and temperature for remote strategies

pub mod practice_params;

pub use practice_params::{
    ClassifierChoice, DEFAULT_MODEL, DEFAULT_TEMPERATURE, ServiceParams, StrategyMode,
};
