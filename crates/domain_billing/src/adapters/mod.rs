//! Adapters for the billing ports that live alongside the domain
//!
//! - `InMemoryStore`: a `StorePort` held entirely in memory
//! - `HttpTranscriber`: a `Transcriber` backed by a remote speech-to-text service
//!
//! The SQLite store adapter lives in `infra_db`.

pub mod memory;
pub mod http_transcriber;

pub use memory::InMemoryStore;
pub use http_transcriber::{HttpTranscriber, HttpTranscriberConfig};
