//! Hand-written test doubles shared by the unit tests of this crate.

use crate::ports::classifier::UtteranceClassifier;
use crate::ports::responder::{ClientResponder, GenerationError};
use crate::ports::text_generation::{CompletionRequest, GatewayError, TextGenerationService};
use async_trait::async_trait;
use doq_domain::{Classification, SessionConfig, Turn, Verdict};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

/// Text-generation service that replays scripted results in order and
/// records every request it receives.
pub struct ScriptedService {
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedService {
    pub fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from(replies)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replies<const N: usize>(replies: [&str; N]) -> Self {
        Self::new(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerationService for ScriptedService {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more replies".to_string())))
    }
}

/// Responder that returns numbered lines, or fails on chosen calls.
///
/// Call numbering counts `generate_next` calls only, starting at 1.
pub struct ScriptedResponder {
    fail_on: Vec<usize>,
    opening_calls: AtomicUsize,
    next_calls: AtomicUsize,
    transcripts: Mutex<Vec<Vec<Turn>>>,
}

impl ScriptedResponder {
    pub fn new() -> Self {
        Self::failing_on(vec![])
    }

    pub fn failing_on(fail_on: Vec<usize>) -> Self {
        Self {
            fail_on,
            opening_calls: AtomicUsize::new(0),
            next_calls: AtomicUsize::new(0),
            transcripts: Mutex::new(Vec::new()),
        }
    }

    pub fn opening_calls(&self) -> usize {
        self.opening_calls.load(Ordering::SeqCst)
    }

    /// Transcripts received by each `generate_next` call
    pub fn transcripts(&self) -> Vec<Vec<Turn>> {
        self.transcripts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClientResponder for ScriptedResponder {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn generate_opening(&self, _config: &SessionConfig) -> Result<String, GenerationError> {
        self.opening_calls.fetch_add(1, Ordering::SeqCst);
        Ok("opening".to_string())
    }

    async fn generate_next(
        &self,
        _config: &SessionConfig,
        transcript: &[Turn],
    ) -> Result<String, GenerationError> {
        let call = self.next_calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.transcripts.lock().unwrap().push(transcript.to_vec());
        if self.fail_on.contains(&call) {
            return Err(GatewayError::ConnectionError("scripted failure".to_string()).into());
        }
        Ok(format!("reply {call}"))
    }
}

/// Responder whose opening always fails
pub struct FailingResponder;

#[async_trait]
impl ClientResponder for FailingResponder {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn generate_opening(&self, _config: &SessionConfig) -> Result<String, GenerationError> {
        Err(GatewayError::RequestFailed("unavailable".to_string()).into())
    }

    async fn generate_next(
        &self,
        _config: &SessionConfig,
        _transcript: &[Turn],
    ) -> Result<String, GenerationError> {
        Err(GatewayError::RequestFailed("unavailable".to_string()).into())
    }
}

/// Responder whose `generate_next` waits until released.
pub struct GatedResponder {
    pub entered: Notify,
    pub release: Notify,
}

impl GatedResponder {
    pub fn new() -> Self {
        Self {
            entered: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl ClientResponder for GatedResponder {
    fn name(&self) -> &'static str {
        "gated"
    }

    async fn generate_opening(&self, _config: &SessionConfig) -> Result<String, GenerationError> {
        Ok("opening".to_string())
    }

    async fn generate_next(
        &self,
        _config: &SessionConfig,
        _transcript: &[Turn],
    ) -> Result<String, GenerationError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok("released".to_string())
    }
}

/// Classifier that counts calls and marks everything above the line
pub struct CountingClassifier {
    pub calls: Mutex<Vec<String>>,
}

impl CountingClassifier {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UtteranceClassifier for CountingClassifier {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn classify(&self, text: &str) -> Classification {
        self.calls.lock().unwrap().push(text.to_string());
        Classification::new(Verdict::AboveLine, "ok").with_score(1)
    }
}
