//! HTTP speech-to-text adapter
//!
//! Posts raw audio to a recognition service and reads back a JSON body of the
//! form `{"transcript": "..."}`.
//!
//! # Error Handling
//!
//! Service responses are mapped to `RecognitionFailure`:
//! - 422 or an empty transcript -> `Unintelligible`
//! - any other non-2xx status -> `ServiceUnavailable`
//! - transport errors and timeouts -> `ServiceUnavailable`
//!
//! Requests are never retried.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

use core_kernel::DomainPort;

use crate::voice::{RecognitionFailure, Transcriber};

/// Configuration for the HTTP transcriber
#[derive(Debug, Clone)]
pub struct HttpTranscriberConfig {
    /// Full URL of the transcription endpoint
    pub endpoint: String,
    /// Optional bearer token
    pub api_key: Option<String>,
    /// MIME type sent with the audio
    pub content_type: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl HttpTranscriberConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            content_type: "audio/wav".to_string(),
            timeout_secs: 30,
        }
    }

    /// Sets the bearer token sent with each request
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the audio MIME type
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Sets the request timeout
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    transcript: String,
}

/// `Transcriber` backed by a remote HTTP service
#[derive(Debug, Clone)]
pub struct HttpTranscriber {
    config: HttpTranscriberConfig,
    agent: ureq::Agent,
}

impl HttpTranscriber {
    pub fn new(config: HttpTranscriberConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        Self { config, agent }
    }

    pub fn config(&self) -> &HttpTranscriberConfig {
        &self.config
    }

    fn transcribe_blocking(&self, audio: &[u8]) -> Result<String, RecognitionFailure> {
        let mut request = self
            .agent
            .post(&self.config.endpoint)
            .set("Content-Type", &self.config.content_type);
        if let Some(key) = &self.config.api_key {
            request = request.set("Authorization", &format!("Bearer {}", key));
        }

        match request.send_bytes(audio) {
            Ok(response) => {
                let body: TranscriptionResponse = response.into_json().map_err(|e| {
                    RecognitionFailure::ServiceUnavailable(format!("invalid response body: {}", e))
                })?;
                transcript_text(body)
            }
            Err(ureq::Error::Status(422, _)) => Err(RecognitionFailure::Unintelligible),
            Err(ureq::Error::Status(code, _)) => Err(RecognitionFailure::ServiceUnavailable(
                format!("transcription service returned status {}", code),
            )),
            Err(other) => Err(RecognitionFailure::ServiceUnavailable(other.to_string())),
        }
    }
}

fn transcript_text(body: TranscriptionResponse) -> Result<String, RecognitionFailure> {
    let text = body.transcript.trim();
    if text.is_empty() {
        return Err(RecognitionFailure::Unintelligible);
    }
    Ok(text.to_string())
}

impl DomainPort for HttpTranscriber {}

#[async_trait]
impl Transcriber for HttpTranscriber {
    #[instrument(skip(self, audio), fields(endpoint = %self.config.endpoint))]
    async fn transcribe(&self, audio: &[u8]) -> Result<String, RecognitionFailure> {
        let client = self.clone();
        let audio = audio.to_vec();

        // ureq blocks, so keep it off the async workers
        let text = tokio::task::spawn_blocking(move || client.transcribe_blocking(&audio))
            .await
            .map_err(|e| RecognitionFailure::ServiceUnavailable(e.to_string()))??;

        debug!(chars = text.len(), "Transcription received");
        Ok(text)
    }
}
