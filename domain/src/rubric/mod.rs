//! Rubrics for classifying trainee utterances.
//!
//! - [`keywords::KeywordRubric`] - weighted vocabulary scoring (offline)
//! - [`parsing`] - score extraction from remote rubric replies

pub mod keywords;
pub mod parsing;
