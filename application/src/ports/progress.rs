//! Progress notification port
//!
//! Defines the interface for reporting progress while the practice session
//! waits on the text-generation service.

/// Callback for progress updates during a practice session
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, status line, etc.)
pub trait PracticeProgress: Send + Sync {
    /// Called before the simulated client is asked for a line
    fn on_client_thinking(&self);

    /// Called before a trainee utterance is classified
    fn on_classifying(&self, _turns: usize) {}

    /// Called when the pending call has resolved, successfully or not
    fn on_idle(&self);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl PracticeProgress for NoProgress {
    fn on_client_thinking(&self) {}
    fn on_idle(&self) {}
}
