//! Speech-to-text port
//!
//! Voice billing depends on an external recognition service. The engine only
//! sees this trait, so parsing and billing can be exercised without audio
//! hardware or network access.

use async_trait::async_trait;
use thiserror::Error;

use core_kernel::DomainPort;

/// Why a spoken utterance produced no usable text
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecognitionFailure {
    /// The service heard nothing it could transcribe
    #[error("Could not understand the audio")]
    Unintelligible,

    /// The service could not be reached or returned an error
    #[error("Could not request results: {0}")]
    ServiceUnavailable(String),

    /// No recognition service is configured
    #[error("Voice input is not configured")]
    Disabled,
}

/// Converts captured audio into text
#[async_trait]
pub trait Transcriber: DomainPort {
    /// Returns the transcription of `audio`
    ///
    /// # Errors
    ///
    /// Returns a `RecognitionFailure` when the audio is unintelligible or
    /// the service is unavailable. Never retried.
    async fn transcribe(&self, audio: &[u8]) -> Result<String, RecognitionFailure>;
}
