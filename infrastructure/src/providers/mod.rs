//! Strategy selection from configuration

pub mod routing;

pub use routing::StrategyRouter;
