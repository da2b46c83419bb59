//! # Actions
//!
//! Everything that can happen on the composer screen becomes an `Action`.
//! User types in the prompt field? That's `Action::EditPrompt(text)`.
//! User picks a chip? That's `Action::SelectRatio(value)`.
//!
//! The `update()` function takes the current state and an action,
//! then returns an `Effect`. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! This makes everything testable: `assert_eq!(update(state, action), expected)`.
//! Both transitions are total functions — any string is a valid prompt, any
//! of the three presets is a valid ratio — so nothing here can fail.

use crate::core::ratio::AspectRatio;
use crate::core::state::App;
use crate::generate::GenerationRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the prompt text wholesale (the input component syncs its full
    /// buffer on every change, so this fires per keystroke).
    EditPrompt(String),
    /// Select an aspect-ratio chip. Re-selecting the current one is a no-op.
    SelectRatio(AspectRatio),
    /// The Generate button was pressed.
    PressGenerate,
    /// Leave the screen.
    Quit,
}

/// What the event loop should do after a state update.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    /// Hand this request to the generation backend. The request owns its
    /// data: it was snapshotted from the state at press time, so edits that
    /// land after the press cannot change what gets submitted.
    Dispatch(GenerationRequest),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::EditPrompt(text) => {
            app.composer.prompt = text;
            Effect::None
        }
        Action::SelectRatio(value) => {
            app.composer.ratio = value;
            Effect::None
        }
        Action::PressGenerate => Effect::Dispatch(GenerationRequest {
            prompt: app.composer.prompt.clone(),
            ratio: app.composer.ratio,
        }),
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_edit_prompt_is_verbatim() {
        let mut app = test_app();
        let text = "  two spaces, a\nnewline, and a trailing tab\t";
        let effect = update(&mut app, Action::EditPrompt(text.to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.composer.prompt, text);
    }

    #[test]
    fn test_edit_prompt_replaces_rather_than_appends() {
        let mut app = test_app();
        update(&mut app, Action::EditPrompt("first".to_string()));
        update(&mut app, Action::EditPrompt("second".to_string()));
        assert_eq!(app.composer.prompt, "second");
    }

    #[test]
    fn test_select_ratio_sets_exactly_that_value() {
        let mut app = test_app();
        for ratio in AspectRatio::ALL {
            update(&mut app, Action::SelectRatio(ratio));
            assert_eq!(app.composer.ratio, ratio);
        }
    }

    #[test]
    fn test_reselecting_current_ratio_is_a_noop() {
        let mut app = test_app();
        update(&mut app, Action::SelectRatio(AspectRatio::Portrait));
        let before = app.composer.clone();
        let effect = update(&mut app, Action::SelectRatio(AspectRatio::Portrait));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.composer, before);
    }

    #[test]
    fn test_press_generate_leaves_state_unchanged() {
        let mut app = test_app();
        update(&mut app, Action::EditPrompt("a castle".to_string()));
        update(&mut app, Action::SelectRatio(AspectRatio::Widescreen));
        let before = app.composer.clone();

        let effect = update(&mut app, Action::PressGenerate);

        assert_eq!(app.composer, before);
        match effect {
            Effect::Dispatch(request) => {
                assert_eq!(request.prompt, "a castle");
                assert_eq!(request.ratio, AspectRatio::Widescreen);
            }
            other => panic!("expected Dispatch, got {other:?}"),
        }
    }

    #[test]
    fn test_press_with_empty_prompt_still_dispatches() {
        // No disabled state exists for empty prompts.
        let mut app = test_app();
        let effect = update(&mut app, Action::PressGenerate);
        assert_eq!(
            effect,
            Effect::Dispatch(GenerationRequest {
                prompt: String::new(),
                ratio: AspectRatio::Square,
            })
        );
    }

    #[test]
    fn test_edits_after_press_do_not_touch_the_request() {
        let mut app = test_app();
        update(&mut app, Action::EditPrompt("before".to_string()));
        let effect = update(&mut app, Action::PressGenerate);

        update(&mut app, Action::EditPrompt("after".to_string()));

        match effect {
            Effect::Dispatch(request) => assert_eq!(request.prompt, "before"),
            other => panic!("expected Dispatch, got {other:?}"),
        }
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
