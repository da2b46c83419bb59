//! # Application State
//!
//! Core business state for Muse. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn GenerationBackend>  // generation collaborator (noop today)
//! ├── composer: ComposerState              // prompt text + selected ratio
//! ├── platform: String                     // platform identity for the inset table
//! └── status_message: String               // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::config::ResolvedConfig;
use crate::core::ratio::AspectRatio;
use crate::generate::GenerationBackend;

/// The two pieces of state the screen owns, as an explicit serializable
/// record. Everything else on screen is either derived (preview size) or
/// presentation-only (focus, cursors, the press flash).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComposerState {
    /// Free-form prompt text, exactly as typed. No trimming, no length cap.
    pub prompt: String,
    /// The selected aspect-ratio chip. Always exactly one.
    pub ratio: AspectRatio,
}

pub struct App {
    pub backend: Arc<dyn GenerationBackend>,
    pub composer: ComposerState,
    pub platform: String,
    pub status_message: String,
}

impl App {
    pub fn new(backend: Arc<dyn GenerationBackend>, platform: String) -> Self {
        Self {
            backend,
            composer: ComposerState::default(),
            platform,
            status_message: String::from("Ready."),
        }
    }

    pub fn from_config(backend: Arc<dyn GenerationBackend>, config: &ResolvedConfig) -> Self {
        Self::new(backend, config.platform.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_initial_state() {
        let app = test_app();
        assert_eq!(app.composer.prompt, "");
        assert_eq!(app.composer.ratio, AspectRatio::Square);
        assert_eq!(app.status_message, "Ready.");
    }

    #[test]
    fn test_composer_state_round_trips_through_json() {
        let state = ComposerState {
            prompt: "  a misty forest\nat dawn  ".to_string(),
            ratio: AspectRatio::Widescreen,
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: ComposerState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
