//! Classifier and responder strategies.
//!
//! | Concern | Offline | Remote |
//! |---------|---------|--------|
//! | Feedback | [`HeuristicClassifier`] | [`RemoteScoringClassifier`] |
//! | Client lines | [`CannedResponder`] | [`RemoteResponder`] |
//!
//! Each pair implements one port, so the practice session never knows
//! which one it is talking to.

pub mod canned_responder;
pub mod heuristic_classifier;
pub mod remote_classifier;
pub mod remote_responder;

pub use canned_responder::CannedResponder;
pub use heuristic_classifier::HeuristicClassifier;
pub use remote_classifier::RemoteScoringClassifier;
pub use remote_responder::RemoteResponder;
