//! Prompt domain
//!
//! Templates for the simulated client, the scoring rubric and the DOQ
//! guideline card.

mod template;

pub use template::{CoachPromptTemplate, DoqGuidelines};
