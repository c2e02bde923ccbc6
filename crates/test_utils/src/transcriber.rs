//! Scripted speech-to-text stand-in

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use core_kernel::DomainPort;
use domain_billing::{RecognitionFailure, Transcriber};

/// A `Transcriber` that replays queued results in order
///
/// Once the queue is empty every call reports `Unintelligible`.
#[derive(Debug, Default)]
pub struct ScriptedTranscriber {
    replies: Mutex<VecDeque<Result<String, RecognitionFailure>>>,
    calls: AtomicUsize,
}

impl ScriptedTranscriber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hears `text` once, then nothing intelligible
    pub fn hearing(text: &str) -> Arc<Self> {
        Arc::new(Self::new().then_hear(text))
    }

    /// Fails once with `failure`
    pub fn failing(failure: RecognitionFailure) -> Arc<Self> {
        Arc::new(Self::new().then_fail(failure))
    }

    /// Queues a successful transcription
    pub fn then_hear(self, text: &str) -> Self {
        self.push(Ok(text.to_string()));
        self
    }

    /// Queues a recognition failure
    pub fn then_fail(self, failure: RecognitionFailure) -> Self {
        self.push(Err(failure));
        self
    }

    /// Number of audio clips submitted so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(&self, reply: Result<String, RecognitionFailure>) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
    }
}

impl DomainPort for ScriptedTranscriber {}

#[async_trait]
impl Transcriber for ScriptedTranscriber {
    async fn transcribe(&self, _audio: &[u8]) -> Result<String, RecognitionFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.pop_front())
            .unwrap_or(Err(RecognitionFailure::Unintelligible))
    }
}
