//! Transcript entities: turns and their classifications

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a turn, unique and strictly increasing within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TurnId(u64);

impl TurnId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Speaker {
    Trainee,
    SimulatedClient,
}

impl Speaker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Speaker::Trainee => "trainee",
            Speaker::SimulatedClient => "simulated-client",
        }
    }
}

/// Position of a trainee utterance relative to the Dialogic Orientation line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    /// Solution-focused: resources, exceptions, preferred future
    AboveLine,
    /// Problem-focused: causes, deficits, advice
    BelowLine,
}

impl Verdict {
    pub fn is_above_line(&self) -> bool {
        matches!(self, Verdict::AboveLine)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::AboveLine => "Above Line",
            Verdict::BelowLine => "Below Line",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Feedback on one trainee utterance (Value Object)
///
/// Created once by a classifier and attached to its turn; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub verdict: Verdict,
    pub rationale: String,
    /// Higher means more solution-focused. The scale depends on the classifier.
    pub score: Option<i64>,
}

impl Classification {
    pub fn new(verdict: Verdict, rationale: impl Into<String>) -> Self {
        Self {
            verdict,
            rationale: rationale.into(),
            score: None,
        }
    }

    pub fn with_score(mut self, score: i64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn is_above_line(&self) -> bool {
        self.verdict.is_above_line()
    }
}

/// One exchange unit of the transcript (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    id: TurnId,
    speaker: Speaker,
    text: String,
    created_at: DateTime<Utc>,
    classification: Option<Classification>,
}

impl Turn {
    pub(crate) fn new(id: TurnId, speaker: Speaker, text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            speaker,
            text,
            created_at,
            classification: None,
        }
    }

    pub fn id(&self) -> TurnId {
        self.id
    }

    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn classification(&self) -> Option<&Classification> {
        self.classification.as_ref()
    }

    pub fn is_trainee(&self) -> bool {
        self.speaker == Speaker::Trainee
    }

    /// Attach a classification. Returns false if one is already present.
    pub(crate) fn attach(&mut self, classification: Classification) -> bool {
        if self.classification.is_some() || !self.is_trainee() {
            return false;
        }
        self.classification = Some(classification);
        true
    }
}
