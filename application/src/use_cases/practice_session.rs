//! Practice Session use case.
//!
//! Drives a role-play between a trainee and a simulated client:
//!
//! ```text
//! NotStarted --start--> Active --end--> Ended
//!      ^                   |              |
//!      +------reset--------+------reset---+
//! ```
//!
//! The transcript is an append-only log owned by this use case; callers only
//! ever see snapshots. Statistics are projected from the transcript on
//! demand.
//!
//! # Concurrency
//!
//! Every method takes `&self`. The session lives behind a mutex that is never
//! held across an `.await`, and an in-flight flag admits one outstanding
//! service call at a time: a second `submit_utterance` issued while one is
//! pending is ignored instead of interleaving its appends. A reset bumps an
//! epoch counter so that a call resolving afterwards cannot write into the
//! fresh session.

use crate::ports::event_log::{EventLog, NoEventLog, SessionEvent};
use crate::ports::progress::{NoProgress, PracticeProgress};
use crate::ports::responder::GenerationError;
use crate::ports::strategy_source::{PracticeStrategies, StrategySource};
use doq_domain::{
    Classification, DomainError, PracticeSettings, ServiceStatus, Session, SessionConfig,
    SessionState, SessionStats, Turn, TurnId, single_line, truncate,
};
use serde::Serialize;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced by the practice session.
///
/// Classification problems never appear here: they are absorbed by the
/// classifier strategies.
#[derive(Error, Debug)]
pub enum PracticeError {
    #[error("Invalid session configuration: {0}")]
    ConfigInvalid(DomainError),

    #[error("{}", .0.message())]
    ServiceNotConfigured(ServiceStatus),

    #[error(transparent)]
    GenerationFailed(#[from] GenerationError),

    #[error("Cannot {operation} while the session is {state}")]
    InvalidState {
        operation: &'static str,
        state: SessionState,
    },

    #[error("Another request is still in progress")]
    Busy,

    #[error("The session was reset while waiting for a response")]
    Superseded,
}

impl PracticeError {
    /// Errors a trainee can act on directly; everything else is a caller bug
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            PracticeError::ConfigInvalid(_)
                | PracticeError::ServiceNotConfigured(_)
                | PracticeError::GenerationFailed(_)
        )
    }
}

/// Why a submission was dropped without touching the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    EmptyUtterance,
    InFlight,
}

/// Result of [`PracticeSessionUseCase::submit_utterance`]
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The trainee turn (classified in immediate mode) and the client's reply
    Replied { trainee: Turn, client: Turn },
    /// Nothing was appended
    Ignored(IgnoredReason),
}

/// Feedback for one trainee turn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnFeedback {
    pub turn_id: TurnId,
    pub text: String,
    pub classification: Classification,
}

/// Returned by [`PracticeSessionUseCase::end`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub stats: SessionStats,
    /// Classified trainee turns in transcript order
    pub feedback: Vec<TurnFeedback>,
}

impl SessionSummary {
    fn from_session(session: &Session) -> Self {
        let feedback = session
            .turns()
            .iter()
            .filter_map(|turn| {
                turn.classification().map(|c| TurnFeedback {
                    turn_id: turn.id(),
                    text: turn.text().to_string(),
                    classification: c.clone(),
                })
            })
            .collect();

        Self {
            stats: session.stats(),
            feedback,
        }
    }
}

struct SessionSlot {
    session: Session,
    strategies: Option<PracticeStrategies>,
    epoch: u64,
}

impl SessionSlot {
    fn fresh(epoch: u64) -> Self {
        Self {
            session: Session::new(),
            strategies: None,
            epoch,
        }
    }

    fn expect_state(
        &self,
        operation: &'static str,
        expected: SessionState,
    ) -> Result<(), PracticeError> {
        let state = self.session.state();
        if state == expected {
            Ok(())
        } else {
            Err(PracticeError::InvalidState { operation, state })
        }
    }
}

/// Clears the in-flight flag when the pending operation finishes, however it
/// finishes.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Use case owning one practice session.
pub struct PracticeSessionUseCase {
    strategy_source: Arc<dyn StrategySource>,
    slot: Mutex<SessionSlot>,
    in_flight: AtomicBool,
    event_log: Arc<dyn EventLog>,
    progress: Arc<dyn PracticeProgress>,
}

impl PracticeSessionUseCase {
    pub fn new(strategy_source: Arc<dyn StrategySource>) -> Self {
        Self {
            strategy_source,
            slot: Mutex::new(SessionSlot::fresh(0)),
            in_flight: AtomicBool::new(false),
            event_log: Arc::new(NoEventLog),
            progress: Arc::new(NoProgress),
        }
    }

    /// Create with a session event log.
    pub fn with_event_log(mut self, event_log: Arc<dyn EventLog>) -> Self {
        self.event_log = event_log;
        self
    }

    /// Create with a progress notifier.
    pub fn with_progress(mut self, progress: Arc<dyn PracticeProgress>) -> Self {
        self.progress = progress;
        self
    }

    // ==================== Read Accessors ====================

    pub fn state(&self) -> SessionState {
        self.lock().session.state()
    }

    /// Snapshot of the whole session
    pub fn session(&self) -> Session {
        self.lock().session.clone()
    }

    pub fn transcript(&self) -> Vec<Turn> {
        self.lock().session.turns().to_vec()
    }

    pub fn config(&self) -> Option<SessionConfig> {
        self.lock().session.config().copied()
    }

    pub fn stats(&self) -> SessionStats {
        self.lock().session.stats()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Names of the classifier and responder chosen at start, if any
    pub fn strategy_names(&self) -> Option<(&'static str, &'static str)> {
        self.lock()
            .strategies
            .as_ref()
            .map(|s| (s.classifier.name(), s.responder.name()))
    }

    // ==================== Operations ====================

    /// Start a session and return the client's opening turn.
    ///
    /// On any error the session stays `NotStarted`.
    pub async fn start(
        &self,
        settings: impl Into<PracticeSettings>,
    ) -> Result<Turn, PracticeError> {
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(PracticeError::Busy)?;

        let epoch = {
            let slot = self.lock();
            slot.expect_state("start", SessionState::NotStarted)?;
            slot.epoch
        };

        let settings: PracticeSettings = settings.into();
        let config = settings.validate().map_err(PracticeError::ConfigInvalid)?;
        let strategies = self
            .strategy_source
            .select()
            .map_err(PracticeError::ServiceNotConfigured)?;

        info!(
            "Starting practice session: theme={}, difficulty={}, feedback={}, responder={}, classifier={}",
            config.theme,
            config.difficulty,
            config.feedback_timing,
            strategies.responder.name(),
            strategies.classifier.name()
        );

        self.progress.on_client_thinking();
        let opening = strategies.responder.generate_opening(&config).await;
        self.progress.on_idle();

        let opening = match opening {
            Ok(text) => text,
            Err(e) => {
                warn!("Opening line failed: {}", e);
                self.log("generation_failed", json!({ "stage": "opening", "error": e.to_string() }));
                return Err(e.into());
            }
        };

        let mut slot = self.lock();
        if slot.epoch != epoch {
            return Err(PracticeError::Superseded);
        }
        let id = slot
            .session
            .begin(config, opening)
            .map_err(|e| domain_failure("start", e))?;
        slot.strategies = Some(strategies);

        let turn = turn_snapshot(&slot.session, id)?;
        drop(slot);

        self.log("session_started", json!({ "config": config }));
        self.log("turn_appended", json!({ "turn": turn }));
        Ok(turn)
    }

    /// Submit a trainee utterance and wait for the client's reply.
    ///
    /// Blank text, or a call while another is pending, is ignored without
    /// changing anything. If the client reply fails, the trainee turn stays
    /// in the transcript, no reply is appended, and the session stays
    /// `Active`.
    pub async fn submit_utterance(&self, text: &str) -> Result<SubmitOutcome, PracticeError> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            debug!("Submission ignored: another request is in flight");
            return Ok(SubmitOutcome::Ignored(IgnoredReason::InFlight));
        };

        let (trainee_id, config, strategies, epoch) = {
            let mut slot = self.lock();
            slot.expect_state("submit", SessionState::Active)?;
            if text.trim().is_empty() {
                return Ok(SubmitOutcome::Ignored(IgnoredReason::EmptyUtterance));
            }
            let (config, strategies) = match (slot.session.config().copied(), slot.strategies.clone()) {
                (Some(config), Some(strategies)) => (config, strategies),
                _ => {
                    return Err(PracticeError::InvalidState {
                        operation: "submit",
                        state: slot.session.state(),
                    });
                }
            };
            let id = slot
                .session
                .append_trainee(text)
                .map_err(|e| domain_failure("submit", e))?;
            (id, config, strategies, slot.epoch)
        };

        debug!("Trainee turn {}: {}", trainee_id, truncate(&single_line(text), 80));
        self.log(
            "turn_appended",
            json!({ "turn": self.turn_in_epoch(trainee_id, epoch)? }),
        );

        if config.feedback_timing.is_immediate() {
            self.progress.on_classifying(1);
            let classification = strategies.classifier.classify(text).await;
            self.progress.on_idle();
            self.attach(trainee_id, classification, epoch)?;
        }

        let transcript = {
            let slot = self.lock();
            if slot.epoch != epoch {
                return Err(PracticeError::Superseded);
            }
            slot.session.turns().to_vec()
        };

        self.progress.on_client_thinking();
        let reply = strategies.responder.generate_next(&config, &transcript).await;
        self.progress.on_idle();

        let reply = match reply {
            Ok(text) => text,
            Err(e) => {
                warn!("Client reply to turn {} failed: {}", trainee_id, e);
                self.log(
                    "generation_failed",
                    json!({ "stage": "reply", "after_turn": trainee_id, "error": e.to_string() }),
                );
                return Err(e.into());
            }
        };

        let (trainee, client) = {
            let mut slot = self.lock();
            if slot.epoch != epoch {
                return Err(PracticeError::Superseded);
            }
            let client_id = slot
                .session
                .append_client(reply)
                .map_err(|e| domain_failure("reply", e))?;
            (
                turn_snapshot(&slot.session, trainee_id)?,
                turn_snapshot(&slot.session, client_id)?,
            )
        };

        self.log("turn_appended", json!({ "turn": client }));
        Ok(SubmitOutcome::Replied { trainee, client })
    }

    /// End the session.
    ///
    /// With deferred feedback, every unclassified trainee turn is classified
    /// first, in transcript order.
    pub async fn end(&self) -> Result<SessionSummary, PracticeError> {
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(PracticeError::Busy)?;

        let (pending, strategies, epoch) = {
            let slot = self.lock();
            slot.expect_state("end", SessionState::Active)?;
            let deferred = slot
                .session
                .config()
                .is_some_and(|c| !c.feedback_timing.is_immediate());
            let pending = if deferred {
                slot.session.unclassified_trainee_turns()
            } else {
                Vec::new()
            };
            (pending, slot.strategies.clone(), slot.epoch)
        };

        if let Some(strategies) = strategies.filter(|_| !pending.is_empty()) {
            info!("Classifying {} deferred turns", pending.len());
            self.progress.on_classifying(pending.len());
            for (id, text) in &pending {
                let classification = strategies.classifier.classify(text).await;
                if let Err(e) = self.attach(*id, classification, epoch) {
                    self.progress.on_idle();
                    return Err(e);
                }
            }
            self.progress.on_idle();
        }

        let summary = {
            let mut slot = self.lock();
            if slot.epoch != epoch {
                return Err(PracticeError::Superseded);
            }
            slot.session
                .finish()
                .map_err(|e| domain_failure("end", e))?;
            SessionSummary::from_session(&slot.session)
        };

        info!(
            "Practice session ended: {} classified, {}% above the line",
            summary.stats.total_classified_turns, summary.stats.above_line_percentage
        );
        self.log("session_ended", json!({ "stats": summary.stats }));
        Ok(summary)
    }

    /// Discard the session and return to `NotStarted`. Valid in any state.
    pub fn reset(&self) {
        let previous = {
            let mut slot = self.lock();
            let previous = slot.session.state();
            let epoch = slot.epoch + 1;
            *slot = SessionSlot::fresh(epoch);
            previous
        };
        info!("Practice session reset (was {})", previous);
        self.log("session_reset", json!({ "previous_state": previous }));
    }

    // ==================== Helpers ====================

    fn lock(&self) -> MutexGuard<'_, SessionSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn attach(
        &self,
        id: TurnId,
        classification: Classification,
        epoch: u64,
    ) -> Result<(), PracticeError> {
        let mut slot = self.lock();
        if slot.epoch != epoch {
            return Err(PracticeError::Superseded);
        }
        if slot.session.attach_classification(id, classification.clone()) {
            drop(slot);
            debug!("Turn {} classified {}", id, classification.verdict);
            self.log(
                "turn_classified",
                json!({ "turn_id": id, "classification": classification }),
            );
        }
        Ok(())
    }

    fn turn_in_epoch(&self, id: TurnId, epoch: u64) -> Result<Turn, PracticeError> {
        let slot = self.lock();
        if slot.epoch != epoch {
            return Err(PracticeError::Superseded);
        }
        turn_snapshot(&slot.session, id)
    }

    fn log(&self, event_type: &'static str, payload: serde_json::Value) {
        self.event_log.log(SessionEvent::new(event_type, payload));
    }
}

fn turn_snapshot(session: &Session, id: TurnId) -> Result<Turn, PracticeError> {
    session
        .turn(id)
        .cloned()
        .ok_or(PracticeError::InvalidState {
            operation: "read turn",
            state: session.state(),
        })
}

fn domain_failure(operation: &'static str, error: DomainError) -> PracticeError {
    match error {
        DomainError::InvalidTransition { state, .. } => {
            PracticeError::InvalidState { operation, state }
        }
        other => PracticeError::ConfigInvalid(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::classifier::UtteranceClassifier;
    use crate::ports::responder::ClientResponder;
    use crate::ports::strategy_source::FixedStrategies;
    use crate::ports::text_generation::GatewayError;
    use crate::strategies::{CannedResponder, HeuristicClassifier};
    use crate::test_support::{
        CountingClassifier, FailingResponder, GatedResponder, ScriptedResponder,
    };
    use doq_domain::{Speaker, Verdict};

    // ==================== Test Helpers ====================

    fn use_case(
        classifier: Arc<dyn UtteranceClassifier>,
        responder: Arc<dyn ClientResponder>,
    ) -> PracticeSessionUseCase {
        PracticeSessionUseCase::new(Arc::new(FixedStrategies(PracticeStrategies::new(
            classifier, responder,
        ))))
    }

    fn offline() -> PracticeSessionUseCase {
        use_case(Arc::new(HeuristicClassifier::new()), Arc::new(CannedResponder::new()))
    }

    fn immediate() -> PracticeSettings {
        PracticeSettings::new("stress", "beginner", "immediate")
    }

    fn deferred() -> PracticeSettings {
        PracticeSettings::new("stress", "beginner", "deferred")
    }

    struct NotConfigured;

    impl StrategySource for NotConfigured {
        fn select(&self) -> Result<PracticeStrategies, ServiceStatus> {
            Err(ServiceStatus::MissingCredential)
        }
    }

    struct RecordingLog(Mutex<Vec<&'static str>>);

    impl EventLog for RecordingLog {
        fn log(&self, event: SessionEvent) {
            self.0.lock().unwrap().push(event.event_type);
        }
    }

    fn assert_alternates(turns: &[Turn]) {
        assert_eq!(turns[0].speaker(), Speaker::SimulatedClient);
        for pair in turns.windows(2) {
            assert!(pair[0].id() < pair[1].id());
            assert!(pair[0].created_at() < pair[1].created_at());
            assert_ne!(pair[0].speaker(), pair[1].speaker());
        }
    }

    // ==================== start ====================

    #[tokio::test]
    async fn test_start_appends_opening() {
        let practice = offline();
        let opening = practice
            .start(PracticeSettings::new("nutrition", "beginner", "immediate"))
            .await
            .unwrap();

        assert_eq!(practice.state(), SessionState::Active);
        assert_eq!(opening.speaker(), Speaker::SimulatedClient);
        assert_eq!(
            opening.text(),
            doq_domain::client_statement(doq_domain::Theme::Nutrition, doq_domain::Difficulty::Beginner)
        );
        assert_eq!(practice.transcript().len(), 1);
        assert_eq!(practice.strategy_names(), Some(("heuristic", "canned")));
    }

    #[tokio::test]
    async fn test_start_with_invalid_config() {
        let practice = offline();
        let err = practice
            .start(PracticeSettings::new("stress", "expert", "immediate"))
            .await
            .unwrap_err();
        assert!(matches!(err, PracticeError::ConfigInvalid(_)));
        assert_eq!(practice.state(), SessionState::NotStarted);

        let err = practice.start(PracticeSettings::default()).await.unwrap_err();
        assert!(matches!(
            err,
            PracticeError::ConfigInvalid(DomainError::MissingSetting { field: "theme" })
        ));
        assert!(practice.transcript().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_config_fails_before_any_generation() {
        let responder = Arc::new(ScriptedResponder::new());
        let practice = use_case(Arc::new(CountingClassifier::new()), responder.clone());

        let err = practice
            .start(PracticeSettings::new("gardening", "beginner", "immediate"))
            .await
            .unwrap_err();
        assert!(matches!(err, PracticeError::ConfigInvalid(_)));
        assert_eq!(responder.opening_calls(), 0);
        assert!(practice.strategy_names().is_none());

        practice.start(immediate()).await.unwrap();
        assert_eq!(responder.opening_calls(), 1);
    }

    #[tokio::test]
    async fn test_start_when_service_not_configured() {
        let practice = PracticeSessionUseCase::new(Arc::new(NotConfigured));
        let err = practice.start(immediate()).await.unwrap_err();
        assert!(matches!(err, PracticeError::ServiceNotConfigured(_)));
        assert!(err.to_string().contains("OpenAI API key not found"));
        assert_eq!(practice.state(), SessionState::NotStarted);
    }

    #[tokio::test]
    async fn test_start_generation_failure_stays_not_started() {
        let practice = use_case(Arc::new(HeuristicClassifier::new()), Arc::new(FailingResponder));
        let err = practice.start(immediate()).await.unwrap_err();
        assert!(matches!(err, PracticeError::GenerationFailed(_)));
        assert_eq!(practice.state(), SessionState::NotStarted);
        assert!(practice.transcript().is_empty());
        assert!(!practice.is_in_flight());
    }

    #[tokio::test]
    async fn test_start_twice_is_invalid() {
        let practice = offline();
        practice.start(immediate()).await.unwrap();
        let err = practice.start(immediate()).await.unwrap_err();
        assert!(matches!(
            err,
            PracticeError::InvalidState {
                operation: "start",
                state: SessionState::Active
            }
        ));
        assert_eq!(practice.transcript().len(), 1);
    }

    // ==================== submit_utterance ====================

    #[tokio::test]
    async fn test_immediate_submission_classifies_then_replies() {
        let classifier = Arc::new(CountingClassifier::new());
        let responder = Arc::new(ScriptedResponder::new());
        let practice = use_case(classifier.clone(), responder.clone());
        practice.start(immediate()).await.unwrap();

        let outcome = practice.submit_utterance("What has helped before?").await.unwrap();
        let SubmitOutcome::Replied { trainee, client } = outcome else {
            panic!("Expected a reply");
        };
        assert_eq!(trainee.speaker(), Speaker::Trainee);
        assert!(trainee.classification().is_some());
        assert_eq!(client.text(), "reply 1");
        assert_eq!(classifier.calls(), vec!["What has helped before?"]);

        // The responder saw the classified trainee turn as the latest entry
        let seen = &responder.transcripts()[0];
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].text(), "What has helped before?");
        assert!(seen[1].classification().is_some());
    }

    #[tokio::test]
    async fn test_transcript_alternates_and_is_ordered() {
        let practice = use_case(
            Arc::new(HeuristicClassifier::new()),
            Arc::new(ScriptedResponder::new()),
        );
        practice.start(immediate()).await.unwrap();
        for question in ["What is working?", "What else?", "What would be different?"] {
            practice.submit_utterance(question).await.unwrap();
        }
        let turns = practice.transcript();
        assert_eq!(turns.len(), 7);
        assert_alternates(&turns);
    }

    #[tokio::test]
    async fn test_responder_receives_transcript_before_call() {
        let responder = Arc::new(ScriptedResponder::new());
        let practice = use_case(Arc::new(HeuristicClassifier::new()), responder.clone());
        practice.start(immediate()).await.unwrap();
        practice.submit_utterance("first").await.unwrap();
        practice.submit_utterance("second").await.unwrap();

        let seen = responder.transcripts();
        assert_eq!(seen[0].len(), 2);
        assert_eq!(seen[1].len(), 4);
        assert_eq!(seen[1][2].text(), "reply 1");
        assert_eq!(seen[1][3].text(), "second");
    }

    #[tokio::test]
    async fn test_blank_submission_is_noop() {
        let practice = offline();
        practice.start(immediate()).await.unwrap();
        let before = practice.session();

        for text in ["", "   ", "\n\t"] {
            let outcome = practice.submit_utterance(text).await.unwrap();
            assert_eq!(outcome, SubmitOutcome::Ignored(IgnoredReason::EmptyUtterance));
        }
        assert_eq!(practice.session(), before);
    }

    #[tokio::test]
    async fn test_submit_before_start_is_invalid() {
        let practice = offline();
        let err = practice.submit_utterance("hello").await.unwrap_err();
        assert!(matches!(
            err,
            PracticeError::InvalidState {
                operation: "submit",
                state: SessionState::NotStarted
            }
        ));
    }

    #[tokio::test]
    async fn test_generation_failure_keeps_trainee_turn() {
        let practice = use_case(
            Arc::new(HeuristicClassifier::new()),
            Arc::new(ScriptedResponder::failing_on(vec![2])),
        );
        practice.start(immediate()).await.unwrap();
        practice.submit_utterance("What is working?").await.unwrap();

        let err = practice.submit_utterance("What else?").await.unwrap_err();
        assert!(matches!(
            err,
            PracticeError::GenerationFailed(GenerationError(GatewayError::ConnectionError(_)))
        ));

        let turns = practice.transcript();
        assert_eq!(turns.len(), 4);
        let last = turns.last().unwrap();
        assert_eq!(last.speaker(), Speaker::Trainee);
        assert_eq!(last.text(), "What else?");
        assert_eq!(practice.state(), SessionState::Active);
        assert!(!practice.is_in_flight());

        // The caller may submit again; the session carries on
        let outcome = practice.submit_utterance("What would be better?").await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Replied { .. }));
        assert_eq!(practice.transcript().len(), 6);
    }

    #[tokio::test]
    async fn test_second_submission_while_pending_is_ignored() {
        let responder = Arc::new(GatedResponder::new());
        let practice = Arc::new(use_case(Arc::new(HeuristicClassifier::new()), responder.clone()));
        practice.start(immediate()).await.unwrap();

        let first = {
            let practice = practice.clone();
            tokio::spawn(async move { practice.submit_utterance("What is better?").await })
        };
        responder.entered.notified().await;
        assert!(practice.is_in_flight());

        let second = practice.submit_utterance("What else?").await.unwrap();
        assert_eq!(second, SubmitOutcome::Ignored(IgnoredReason::InFlight));
        assert_eq!(practice.transcript().len(), 2);

        responder.release.notify_one();
        let first = first.await.unwrap().unwrap();
        assert!(matches!(first, SubmitOutcome::Replied { .. }));
        assert_eq!(practice.transcript().len(), 3);
        assert!(!practice.is_in_flight());
    }

    #[tokio::test]
    async fn test_reset_while_pending_discards_late_reply() {
        let responder = Arc::new(GatedResponder::new());
        let practice = Arc::new(use_case(Arc::new(HeuristicClassifier::new()), responder.clone()));
        practice.start(immediate()).await.unwrap();

        let pending = {
            let practice = practice.clone();
            tokio::spawn(async move { practice.submit_utterance("What is better?").await })
        };
        responder.entered.notified().await;
        practice.reset();
        responder.release.notify_one();

        let err = pending.await.unwrap().unwrap_err();
        assert!(matches!(err, PracticeError::Superseded));
        assert_eq!(practice.state(), SessionState::NotStarted);
        assert!(practice.transcript().is_empty());
    }

    // ==================== end ====================

    #[tokio::test]
    async fn test_deferred_classifies_only_at_end() {
        let classifier = Arc::new(CountingClassifier::new());
        let practice = use_case(classifier.clone(), Arc::new(ScriptedResponder::new()));
        practice.start(deferred()).await.unwrap();

        practice.submit_utterance("one").await.unwrap();
        practice.submit_utterance("two").await.unwrap();
        practice.submit_utterance("three").await.unwrap();

        assert!(classifier.calls().is_empty());
        assert!(practice.transcript().iter().all(|t| t.classification().is_none()));
        assert_eq!(practice.stats().total_classified_turns, 0);

        let summary = practice.end().await.unwrap();
        assert_eq!(classifier.calls(), vec!["one", "two", "three"]);
        assert_eq!(summary.feedback.len(), 3);
        assert_eq!(summary.stats.total_classified_turns, 3);
        assert_eq!(summary.stats.above_line_percentage, 100);

        let turns = practice.transcript();
        for turn in &turns {
            assert_eq!(turn.classification().is_some(), turn.is_trainee());
        }
        assert_eq!(practice.state(), SessionState::Ended);
    }

    #[tokio::test]
    async fn test_immediate_end_does_not_reclassify() {
        let classifier = Arc::new(CountingClassifier::new());
        let practice = use_case(classifier.clone(), Arc::new(ScriptedResponder::new()));
        practice.start(immediate()).await.unwrap();
        practice.submit_utterance("one").await.unwrap();

        let summary = practice.end().await.unwrap();
        assert_eq!(classifier.calls().len(), 1);
        assert_eq!(summary.feedback.len(), 1);
        assert_eq!(summary.feedback[0].text, "one");
    }

    #[tokio::test]
    async fn test_end_stats_with_heuristic() {
        let practice = use_case(
            Arc::new(HeuristicClassifier::new()),
            Arc::new(ScriptedResponder::new()),
        );
        practice.start(deferred()).await.unwrap();
        practice
            .submit_utterance("What's working well for you and what strengths can you build on?")
            .await
            .unwrap();
        practice
            .submit_utterance("Why do you think this problem keeps happening?")
            .await
            .unwrap();

        let summary = practice.end().await.unwrap();
        assert_eq!(summary.stats.above_line_count, 1);
        assert_eq!(summary.stats.below_line_count, 1);
        assert_eq!(summary.stats.above_line_percentage, 50);
        assert_eq!(summary.feedback[0].classification.verdict, Verdict::AboveLine);
        assert_eq!(summary.feedback[1].classification.verdict, Verdict::BelowLine);
    }

    #[tokio::test]
    async fn test_ended_session_rejects_operations() {
        let practice = offline();
        practice.start(immediate()).await.unwrap();
        practice.end().await.unwrap();

        assert!(matches!(
            practice.submit_utterance("hi").await.unwrap_err(),
            PracticeError::InvalidState { .. }
        ));
        assert!(matches!(
            practice.end().await.unwrap_err(),
            PracticeError::InvalidState { .. }
        ));
        assert!(matches!(
            practice.start(immediate()).await.unwrap_err(),
            PracticeError::InvalidState { .. }
        ));
    }

    #[tokio::test]
    async fn test_end_before_start_is_invalid() {
        let practice = offline();
        assert!(matches!(
            practice.end().await.unwrap_err(),
            PracticeError::InvalidState {
                operation: "end",
                state: SessionState::NotStarted
            }
        ));
    }

    // ==================== reset ====================

    #[tokio::test]
    async fn test_reset_from_every_state() {
        let practice = offline();

        practice.reset();
        assert_eq!(practice.session(), Session::new());

        practice.start(immediate()).await.unwrap();
        practice.submit_utterance("What is working?").await.unwrap();
        practice.reset();
        assert_eq!(practice.state(), SessionState::NotStarted);
        assert!(practice.transcript().is_empty());
        assert!(practice.config().is_none());
        assert!(practice.strategy_names().is_none());

        practice.start(deferred()).await.unwrap();
        practice.end().await.unwrap();
        practice.reset();
        assert_eq!(practice.session(), Session::new());

        // A fresh start works after reset
        practice.start(immediate()).await.unwrap();
        assert_eq!(practice.transcript().len(), 1);
    }

    #[tokio::test]
    async fn test_event_log_records_lifecycle() {
        let log = Arc::new(RecordingLog(Mutex::new(Vec::new())));
        let practice = offline().with_event_log(log.clone());
        practice.start(immediate()).await.unwrap();
        practice.submit_utterance("What is better?").await.unwrap();
        practice.end().await.unwrap();
        practice.reset();

        let events = log.0.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                "session_started",
                "turn_appended",
                "turn_appended",
                "turn_classified",
                "turn_appended",
                "session_ended",
                "session_reset",
            ]
        );
    }

    #[test]
    fn test_user_facing_errors() {
        assert!(PracticeError::ServiceNotConfigured(ServiceStatus::PlaceholderCredential)
            .is_user_facing());
        assert!(!PracticeError::Busy.is_user_facing());
        assert_eq!(
            PracticeError::ServiceNotConfigured(ServiceStatus::PlaceholderCredential).to_string(),
            ServiceStatus::PlaceholderCredential.message()
        );
    }
}
