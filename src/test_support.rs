//! Test utilities shared across the crate.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::state::App;
use crate::generate::{GenerateError, GenerationBackend, GenerationRequest};

/// A backend that records every request it receives, for asserting what was
/// actually handed across the seam.
#[derive(Default)]
pub struct RecordingBackend {
    requests: Mutex<Vec<GenerationRequest>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationBackend for RecordingBackend {
    fn name(&self) -> &str {
        "recording"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<(), GenerateError> {
        self.requests.lock().unwrap().push(request);
        Ok(())
    }
}

/// Creates a test App with a RecordingBackend.
pub fn test_app() -> App {
    App::new(Arc::new(RecordingBackend::new()), "testos".to_string())
}
