//! Session configuration value objects.
//!
//! [`PracticeSettings`] is the raw, possibly incomplete input collected by a
//! caller. [`PracticeSettings::validate`] turns it into a [`SessionConfig`],
//! which is immutable for the lifetime of a session.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Topical domain of the role-play (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    General,
    Nutrition,
    Exercise,
    Stress,
    Sleep,
    Burnout,
    Confidence,
    Pain,
}

impl Theme {
    /// Every theme, in menu order.
    pub const ALL: [Theme; 8] = [
        Theme::General,
        Theme::Nutrition,
        Theme::Exercise,
        Theme::Stress,
        Theme::Sleep,
        Theme::Burnout,
        Theme::Confidence,
        Theme::Pain,
    ];

    /// Stable identifier used in config files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::General => "general",
            Theme::Nutrition => "nutrition",
            Theme::Exercise => "exercise",
            Theme::Stress => "stress",
            Theme::Sleep => "sleep",
            Theme::Burnout => "burnout",
            Theme::Confidence => "confidence",
            Theme::Pain => "pain",
        }
    }

    /// Human-readable label shown to the trainee and used in prompts
    pub fn label(&self) -> &'static str {
        match self {
            Theme::General => "General Health & Wellness",
            Theme::Nutrition => "Healthy Eating",
            Theme::Exercise => "Physical Activity",
            Theme::Stress => "Stress Management",
            Theme::Sleep => "Sleep & Recovery",
            Theme::Burnout => "Burnout & Work-Life Balance",
            Theme::Confidence => "Building Confidence",
            Theme::Pain => "Pain Management",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == wanted)
            .ok_or_else(|| DomainError::UnrecognizedSetting {
                field: "theme",
                value: s.to_string(),
            })
    }
}

/// How demanding the simulated client is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(DomainError::UnrecognizedSetting {
                field: "difficulty",
                value: s.to_string(),
            }),
        }
    }
}

/// When classification feedback is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackTiming {
    /// Classify each trainee turn as it is submitted
    #[default]
    Immediate,
    /// Classify all trainee turns in bulk when the session ends
    Deferred,
}

impl FeedbackTiming {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackTiming::Immediate => "immediate",
            FeedbackTiming::Deferred => "deferred",
        }
    }

    pub fn is_immediate(&self) -> bool {
        matches!(self, FeedbackTiming::Immediate)
    }
}

impl fmt::Display for FeedbackTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FeedbackTiming {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "immediate" => Ok(FeedbackTiming::Immediate),
            "deferred" | "end" => Ok(FeedbackTiming::Deferred),
            _ => Err(DomainError::UnrecognizedSetting {
                field: "feedback",
                value: s.to_string(),
            }),
        }
    }
}

/// Validated configuration of one practice session (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub theme: Theme,
    pub difficulty: Difficulty,
    pub feedback_timing: FeedbackTiming,
}

impl SessionConfig {
    pub fn new(theme: Theme, difficulty: Difficulty, feedback_timing: FeedbackTiming) -> Self {
        Self {
            theme,
            difficulty,
            feedback_timing,
        }
    }
}

/// Raw session settings as collected from a caller.
///
/// Every field is optional and untyped so that missing or misspelled
/// values can be reported as configuration errors instead of being
/// silently defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticeSettings {
    pub theme: Option<String>,
    pub difficulty: Option<String>,
    pub feedback: Option<String>,
}

impl PracticeSettings {
    pub fn new(
        theme: impl Into<String>,
        difficulty: impl Into<String>,
        feedback: impl Into<String>,
    ) -> Self {
        Self {
            theme: Some(theme.into()),
            difficulty: Some(difficulty.into()),
            feedback: Some(feedback.into()),
        }
    }

    /// Validate every field, reporting the first missing or unrecognized one.
    pub fn validate(&self) -> Result<SessionConfig, DomainError> {
        let theme = required(&self.theme, "theme")?.parse::<Theme>()?;
        let difficulty = required(&self.difficulty, "difficulty")?.parse::<Difficulty>()?;
        let feedback_timing = required(&self.feedback, "feedback")?.parse::<FeedbackTiming>()?;
        Ok(SessionConfig::new(theme, difficulty, feedback_timing))
    }
}

impl From<SessionConfig> for PracticeSettings {
    fn from(config: SessionConfig) -> Self {
        Self::new(
            config.theme.as_str(),
            config.difficulty.as_str(),
            config.feedback_timing.as_str(),
        )
    }
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, DomainError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DomainError::MissingSetting { field }),
    }
}
