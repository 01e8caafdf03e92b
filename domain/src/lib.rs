//! Domain layer for doq-coach
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Practice Session
//!
//! A role-play between a trainee coach and a simulated client. The
//! [`Session`] aggregate owns an append-only transcript of [`Turn`]s and a
//! lifecycle (`not-started`, `active`, `ended`).
//!
//! ## Dialogic Orientation Quadrant (DOQ)
//!
//! Every trainee utterance is placed above the line (solution-focused) or
//! below the line (problem-focused). [`KeywordRubric`] does this offline;
//! [`parse_rubric_score`] reads the score out of a remote rubric reply.

pub mod chat;
pub mod config;
pub mod core;
pub mod corpus;
pub mod practice;
pub mod prompt;
pub mod rubric;

// Re-export commonly used types
pub use chat::message::{Message, Role};
pub use config::{PLACEHOLDER_API_KEY, ServiceStatus};
pub use core::{
    error::DomainError,
    string::{single_line, truncate},
};
pub use corpus::client_statement;
pub use practice::{
    session::{Session, SessionState},
    settings::{Difficulty, FeedbackTiming, PracticeSettings, SessionConfig, Theme},
    stats::SessionStats,
    turn::{Classification, Speaker, Turn, TurnId, Verdict},
};
pub use prompt::{CoachPromptTemplate, DoqGuidelines};
pub use rubric::{
    keywords::{KeywordRubric, RubricTally, WeightedKeyword},
    parsing::{parse_rubric_score, verdict_for_score},
};
