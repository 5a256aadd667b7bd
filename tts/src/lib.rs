//! Request text-to-speech audio from a `/synthesize` server.
//!
//! The crate exposes a [`Synthesizer`] trait so callers can swap the HTTP
//! client for an in-process fake, along with the [`HttpSynthesizer`] that
//! talks to a real server.

pub mod client;
pub mod request;

use async_trait::async_trait;
use thiserror::Error;

pub use client::HttpSynthesizer;
pub use request::SynthesisRequest;

#[derive(Debug, Error)]
pub enum TTSError {
    /// Text was empty after trimming; nothing is sent.
    #[error("text is empty")]
    EmptyText,
    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("invalid server url: {0}")]
    Url(#[from] url::ParseError),
}

impl TTSError {
    /// Status code reported by the server, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            TTSError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience result type used throughout this crate.
pub type Result<T> = std::result::Result<T, TTSError>;

/// Text-to-speech backend.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Return the complete audio payload for `request`.
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>>;
}
