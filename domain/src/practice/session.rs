//! Practice session aggregate

use super::settings::SessionConfig;
use super::stats::SessionStats;
use super::turn::{Classification, Speaker, Turn, TurnId};
use crate::core::error::DomainError;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a practice session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionState {
    #[default]
    NotStarted,
    Active,
    Ended,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::NotStarted => "not-started",
            SessionState::Active => "active",
            SessionState::Ended => "ended",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A role-play session: configuration, append-only transcript and lifecycle.
///
/// Transitions:
///
/// ```text
/// NotStarted --begin--> Active --finish--> Ended
/// ```
///
/// Discarding a session (reset) is done by replacing it with
/// [`Session::new`]; there is no transition back from `Ended`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    state: SessionState,
    config: Option<SessionConfig>,
    turns: Vec<Turn>,
    next_id: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> Option<&SessionConfig> {
        self.config.as_ref()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn turn(&self, id: TurnId) -> Option<&Turn> {
        self.turns.iter().find(|t| t.id() == id)
    }

    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats::from_turns(&self.turns)
    }

    /// Start the session with the client's opening line.
    pub fn begin(
        &mut self,
        config: SessionConfig,
        opening: impl Into<String>,
    ) -> Result<TurnId, DomainError> {
        self.expect_state("start", SessionState::NotStarted)?;
        let opening = non_empty(opening.into())?;
        self.config = Some(config);
        self.state = SessionState::Active;
        Ok(self.push(Speaker::SimulatedClient, opening))
    }

    /// Append a trainee utterance.
    pub fn append_trainee(&mut self, text: impl Into<String>) -> Result<TurnId, DomainError> {
        self.expect_state("submit", SessionState::Active)?;
        let text = non_empty(text.into())?;
        Ok(self.push(Speaker::Trainee, text))
    }

    /// Append a simulated-client reply.
    pub fn append_client(&mut self, text: impl Into<String>) -> Result<TurnId, DomainError> {
        self.expect_state("reply", SessionState::Active)?;
        let text = non_empty(text.into())?;
        Ok(self.push(Speaker::SimulatedClient, text))
    }

    /// Attach a classification to a trainee turn.
    ///
    /// Returns false if the turn does not exist, is not a trainee turn, or
    /// already carries a classification.
    pub fn attach_classification(&mut self, id: TurnId, classification: Classification) -> bool {
        self.turns
            .iter_mut()
            .find(|t| t.id() == id)
            .is_some_and(|t| t.attach(classification))
    }

    /// Trainee turns without a classification, in transcript order.
    pub fn unclassified_trainee_turns(&self) -> Vec<(TurnId, String)> {
        self.turns
            .iter()
            .filter(|t| t.is_trainee() && t.classification().is_none())
            .map(|t| (t.id(), t.text().to_string()))
            .collect()
    }

    /// Move the session to `Ended`.
    pub fn finish(&mut self) -> Result<(), DomainError> {
        self.expect_state("end", SessionState::Active)?;
        self.state = SessionState::Ended;
        Ok(())
    }

    fn expect_state(
        &self,
        operation: &'static str,
        expected: SessionState,
    ) -> Result<(), DomainError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(DomainError::InvalidTransition {
                operation,
                state: self.state,
            })
        }
    }

    fn push(&mut self, speaker: Speaker, text: String) -> TurnId {
        self.next_id += 1;
        let id = TurnId::new(self.next_id);
        let created_at = self.next_timestamp();
        self.turns.push(Turn::new(id, speaker, text, created_at));
        id
    }

    // Two appends within the clock's resolution must still be ordered.
    fn next_timestamp(&self) -> DateTime<Utc> {
        let now = Utc::now();
        match self.turns.last() {
            Some(last) if now <= last.created_at() => {
                last.created_at() + TimeDelta::microseconds(1)
            }
            _ => now,
        }
    }
}

fn non_empty(text: String) -> Result<String, DomainError> {
    if text.trim().is_empty() {
        Err(DomainError::EmptyUtterance)
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::settings::{Difficulty, FeedbackTiming, Theme};
    use crate::practice::turn::Verdict;

    fn config() -> SessionConfig {
        SessionConfig::new(Theme::Stress, Difficulty::Beginner, FeedbackTiming::Immediate)
    }

    fn active_session() -> Session {
        let mut session = Session::new();
        session.begin(config(), "I'm feeling really stressed lately.").unwrap();
        session
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert_eq!(session.state(), SessionState::NotStarted);
        assert!(session.turns().is_empty());
        assert!(session.config().is_none());
    }

    #[test]
    fn test_begin_appends_client_opening() {
        let session = active_session();
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.turns().len(), 1);
        assert_eq!(session.turns()[0].speaker(), Speaker::SimulatedClient);
        assert_eq!(session.config(), Some(&config()));
    }

    #[test]
    fn test_begin_twice_is_invalid() {
        let mut session = active_session();
        let err = session.begin(config(), "again").unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidTransition {
                operation: "start",
                state: SessionState::Active
            }
        );
        assert_eq!(session.turns().len(), 1);
    }

    #[test]
    fn test_ids_and_timestamps_strictly_increase() {
        let mut session = active_session();
        for i in 0..20 {
            session.append_trainee(format!("question {i}")).unwrap();
            session.append_client(format!("answer {i}")).unwrap();
        }
        for pair in session.turns().windows(2) {
            assert!(pair[0].id() < pair[1].id());
            assert!(pair[0].created_at() < pair[1].created_at());
        }
    }

    #[test]
    fn test_empty_utterance_rejected() {
        let mut session = active_session();
        assert_eq!(
            session.append_trainee("   ").unwrap_err(),
            DomainError::EmptyUtterance
        );
        assert_eq!(session.turns().len(), 1);
    }

    #[test]
    fn test_append_requires_active() {
        let mut session = Session::new();
        assert!(session.append_trainee("hello").is_err());

        let mut session = active_session();
        session.finish().unwrap();
        assert!(session.append_trainee("hello").is_err());
        assert!(session.finish().is_err());
    }

    #[test]
    fn test_attach_classification_once() {
        let mut session = active_session();
        let id = session.append_trainee("What has helped before?").unwrap();
        let c = Classification::new(Verdict::AboveLine, "good");
        assert!(session.attach_classification(id, c.clone()));
        assert!(!session.attach_classification(id, c));
        assert!(session.unclassified_trainee_turns().is_empty());
    }

    #[test]
    fn test_unclassified_trainee_turns_in_order() {
        let mut session = active_session();
        let first = session.append_trainee("one").unwrap();
        session.append_client("reply").unwrap();
        let second = session.append_trainee("two").unwrap();
        let pending = session.unclassified_trainee_turns();
        assert_eq!(
            pending,
            vec![(first, "one".to_string()), (second, "two".to_string())]
        );
    }
}
