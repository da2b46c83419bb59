//! # Generation Backend
//!
//! The seam between the composer screen and whatever eventually turns a
//! prompt into an image. The screen never talks to a backend directly: the
//! reducer snapshots the composer state into an owned [`GenerationRequest`]
//! and the event loop hands that single value to the backend, so an in-flight
//! edit can never change what was submitted.
//!
//! Today the only backend is [`NoopBackend`]. A real backend implements
//! [`GenerationBackend`] and gets wired up in `tui::build_backend`.

use std::fmt;

use async_trait::async_trait;
use log::info;
use serde::{Deserialize, Serialize};

use crate::core::ratio::AspectRatio;

/// Everything a backend needs to fulfill one generation request, captured at
/// the moment the Generate button was pressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub ratio: AspectRatio,
}

/// Errors a backend can produce.
#[derive(Debug)]
pub enum GenerateError {
    /// Backend misconfigured (unknown name, missing credentials).
    Config(String),
    /// The backend failed while handling the request.
    Backend(String),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Config(msg) => write!(f, "config error: {msg}"),
            GenerateError::Backend(msg) => write!(f, "backend error: {msg}"),
        }
    }
}

impl std::error::Error for GenerateError {}

#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Returns the name of the backend.
    fn name(&self) -> &str;

    /// Handle one generation request. The request is owned by the backend
    /// from here on.
    async fn generate(&self, request: GenerationRequest) -> Result<(), GenerateError>;
}

/// The stub backend: accepts every request and does nothing with it.
pub struct NoopBackend;

#[async_trait]
impl GenerationBackend for NoopBackend {
    fn name(&self) -> &str {
        "noop"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<(), GenerateError> {
        info!(
            "noop backend received request (ratio {}, prompt {} bytes)",
            request.ratio.label(),
            request.prompt.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_backend_accepts_any_request() {
        let backend = NoopBackend;
        let request = GenerationRequest {
            prompt: String::new(),
            ratio: AspectRatio::Square,
        };
        tokio_test::block_on(async {
            assert!(backend.generate(request).await.is_ok());
        });
    }

    #[test]
    fn test_request_serializes_with_ratio_label() {
        let request = GenerationRequest {
            prompt: "a red fox".to_string(),
            ratio: AspectRatio::Portrait,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"prompt":"a red fox","ratio":"4:5"}"#);
    }

    #[test]
    fn test_error_display() {
        let err = GenerateError::Config("unknown backend 'dalle'".to_string());
        assert_eq!(err.to_string(), "config error: unknown backend 'dalle'");
    }
}
