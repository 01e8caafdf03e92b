//! Keyword rubric for offline utterance scoring.
//!
//! Two weighted vocabularies, solution-oriented and problem-oriented, are
//! matched against the lowercased utterance by substring containment. Each
//! keyword contributes its weight once when it appears anywhere in the text.

use crate::practice::turn::{Classification, Verdict};
use serde::{Deserialize, Serialize};

/// Solution-oriented ("above the line") vocabulary
pub const SOLUTION_KEYWORDS: &[&str] = &[
    "hope",
    "better",
    "different",
    "notice",
    "working",
    "helpful",
    "improve",
    "progress",
    "success",
    "achieved",
    "managed",
    "handled",
    "learned",
    "strategies",
    "resources",
    "support",
    "strengths",
    "capabilities",
];

/// Problem-oriented ("below the line") vocabulary
pub const PROBLEM_KEYWORDS: &[&str] = &[
    "problem",
    "issue",
    "struggle",
    "difficult",
    "hard",
    "bad",
    "wrong",
    "fix",
    "solve",
    "cure",
    "treatment",
    "therapy",
    "diagnosis",
    "feel",
    "emotion",
    "upset",
    "angry",
    "sad",
    "depressed",
    "why",
];

const ABOVE_LINE_ADVICE: &str =
    "Great! This question stays above the line by focusing on possibilities and resources.";

const BELOW_LINE_ADVICE: &str = "Consider reframing to focus on what's working, what will be different, or what the client will notice in the better future.";

/// A keyword with its weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedKeyword {
    pub keyword: String,
    pub weight: u32,
}

impl WeightedKeyword {
    pub fn new(keyword: impl Into<String>, weight: u32) -> Self {
        Self {
            keyword: keyword.into().to_lowercase(),
            weight,
        }
    }
}

/// Totals produced by scoring one utterance against a [`KeywordRubric`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RubricTally {
    pub solution: u32,
    pub problem: u32,
}

impl RubricTally {
    /// Solution total minus problem total
    pub fn score(&self) -> i64 {
        i64::from(self.solution) - i64::from(self.problem)
    }

    /// Above the line only when solution talk strictly outweighs problem talk
    pub fn verdict(&self) -> Verdict {
        if self.solution > self.problem {
            Verdict::AboveLine
        } else {
            Verdict::BelowLine
        }
    }
}

/// Weighted solution/problem vocabularies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRubric {
    solution: Vec<WeightedKeyword>,
    problem: Vec<WeightedKeyword>,
}

impl Default for KeywordRubric {
    /// The standard DOQ vocabularies, every keyword weighted 1
    fn default() -> Self {
        Self::new(
            SOLUTION_KEYWORDS.iter().map(|k| WeightedKeyword::new(*k, 1)).collect(),
            PROBLEM_KEYWORDS.iter().map(|k| WeightedKeyword::new(*k, 1)).collect(),
        )
    }
}

impl KeywordRubric {
    pub fn new(solution: Vec<WeightedKeyword>, problem: Vec<WeightedKeyword>) -> Self {
        Self { solution, problem }
    }

    pub fn solution_keywords(&self) -> &[WeightedKeyword] {
        &self.solution
    }

    pub fn problem_keywords(&self) -> &[WeightedKeyword] {
        &self.problem
    }

    pub fn tally(&self, text: &str) -> RubricTally {
        let lowered = text.to_lowercase();
        RubricTally {
            solution: matched_weight(&self.solution, &lowered),
            problem: matched_weight(&self.problem, &lowered),
        }
    }

    /// Score an utterance and build its classification.
    pub fn classify(&self, text: &str) -> Classification {
        let tally = self.tally(text);
        let verdict = tally.verdict();
        let advice = match verdict {
            Verdict::AboveLine => ABOVE_LINE_ADVICE,
            Verdict::BelowLine => BELOW_LINE_ADVICE,
        };
        Classification::new(verdict, format!("{}: {}", verdict.label(), advice))
            .with_score(tally.score())
    }
}

fn matched_weight(keywords: &[WeightedKeyword], lowered: &str) -> u32 {
    keywords
        .iter()
        .filter(|k| lowered.contains(k.keyword.as_str()))
        .map(|k| k.weight)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_question_is_above_line() {
        let rubric = KeywordRubric::default();
        let c = rubric.classify("What's working well for you and what strengths can you build on?");
        assert_eq!(c.verdict, Verdict::AboveLine);
        assert_eq!(c.score, Some(2));
        assert!(c.rationale.starts_with("Above Line"));
    }

    #[test]
    fn test_problem_question_is_below_line() {
        let rubric = KeywordRubric::default();
        let c = rubric.classify("Why do you think this problem keeps happening?");
        assert_eq!(c.verdict, Verdict::BelowLine);
        assert_eq!(c.score, Some(-2));
        assert!(c.rationale.contains("reframing"));
    }

    #[test]
    fn test_tie_is_below_line() {
        let rubric = KeywordRubric::default();
        let tally = rubric.tally("What support would help with the issue?");
        assert_eq!(tally.solution, 1);
        assert_eq!(tally.problem, 1);
        assert_eq!(tally.verdict(), Verdict::BelowLine);
    }

    #[test]
    fn test_no_keywords_is_below_line() {
        let rubric = KeywordRubric::default();
        let c = rubric.classify("Tell me more.");
        assert_eq!(c.verdict, Verdict::BelowLine);
        assert_eq!(c.score, Some(0));
    }

    #[test]
    fn test_case_insensitive_containment() {
        let rubric = KeywordRubric::default();
        // "HOPEFUL" contains "hope"
        assert_eq!(rubric.tally("HOPEFUL about it").solution, 1);
    }

    #[test]
    fn test_keyword_counts_once() {
        let rubric = KeywordRubric::default();
        assert_eq!(rubric.tally("hope hope hope").solution, 1);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let rubric = KeywordRubric::default();
        let text = "What did you notice was different on the better days?";
        assert_eq!(rubric.classify(text), rubric.classify(text));
    }

    #[test]
    fn test_custom_weights() {
        let rubric = KeywordRubric::new(
            vec![WeightedKeyword::new("Scale", 3)],
            vec![WeightedKeyword::new("why", 2)],
        );
        let tally = rubric.tally("On a scale of 1-10, why not higher?");
        assert_eq!(tally.solution, 3);
        assert_eq!(tally.problem, 2);
        assert_eq!(tally.verdict(), Verdict::AboveLine);
        assert_eq!(tally.score(), 1);
    }
}
