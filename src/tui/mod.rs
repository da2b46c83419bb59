//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screen,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The core module could be driven by a different adapter (a mobile shell,
//! a web view) without touching any of its logic.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Flashing** (right after a Generate press): draws every ~80ms so the
//!   pressed style appears and clears promptly.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous
//! redraws.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{info, warn};
use std::io::stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::generate::{GenerateError, GenerationBackend, GenerationRequest, NoopBackend};
use crate::tui::component::EventHandler;
use crate::tui::components::{ChipEvent, InputEvent, PromptInput, RatioChipsState};
use crate::tui::components::ratio_chips::hit_test_chip;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::ScreenAreas;

/// How long the button renders in its pressed style after a press.
const PRESS_FLASH: Duration = Duration::from_millis(150);

/// Which element owns the keyboard. Tab cycles in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Chips,
    Prompt,
    Button,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Chips => Focus::Prompt,
            Focus::Prompt => Focus::Button,
            Focus::Button => Focus::Chips,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Chips => Focus::Button,
            Focus::Prompt => Focus::Chips,
            Focus::Button => Focus::Prompt,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    // Persistent component states
    pub chips: RatioChipsState,
    pub prompt: PromptInput,
    // Press-flash timestamp (None = button at rest)
    pub pressed_at: Option<Instant>,
    // Explicit inset from config; None = platform table
    pub keyboard_inset_override: Option<u16>,
    // Interactive regions of the last-drawn frame
    pub areas: ScreenAreas,
}

impl TuiState {
    pub fn new(keyboard_inset_override: Option<u16>) -> Self {
        Self {
            focus: Focus::Prompt, // User expects to type immediately
            chips: RatioChipsState::new(),
            prompt: PromptInput::new(),
            pressed_at: None,
            keyboard_inset_override,
            areas: ScreenAreas::default(),
        }
    }

    /// Whether the pressed style is still showing.
    pub fn press_flash_active(&self) -> bool {
        self.pressed_at
            .is_some_and(|at| at.elapsed() < PRESS_FLASH)
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Enable the Kitty keyboard protocol unconditionally; terminals that
        // don't support it ignore the sequence harmlessly.
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Build a backend from a resolved config's backend name.
pub fn build_backend(
    config: &ResolvedConfig,
) -> Result<Arc<dyn GenerationBackend>, GenerateError> {
    match config.backend.as_str() {
        "noop" => Ok(Arc::new(NoopBackend)),
        other => Err(GenerateError::Config(format!(
            "unknown backend '{other}' (available: noop)"
        ))),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend = build_backend(&config).map_err(std::io::Error::other)?;
    let mut app = App::from_config(backend, &config);
    let mut tui = TuiState::new(config.keyboard_inset_rows);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        let flashing = tui.press_flash_active();
        if flashing {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while the press flash runs, long when idle
        let timeout = if flashing || tui.pressed_at.is_some() {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // The flash just ended: one more draw to restore the resting style
        if tui.pressed_at.is_some() && !tui.press_flash_active() {
            tui.pressed_at = None;
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of focus
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Ctrl+G presses Generate from anywhere
            if matches!(event, TuiEvent::Generate) {
                press_generate(&mut app, &mut tui);
                continue;
            }

            // Focus cycling
            if matches!(event, TuiEvent::FocusNext) {
                tui.focus = tui.focus.next();
                continue;
            }
            if matches!(event, TuiEvent::FocusPrev) {
                tui.focus = tui.focus.prev();
                continue;
            }

            // Taps go to whatever was drawn under the pointer
            if let TuiEvent::MouseClick(col, row) = event {
                let position = ratatui::layout::Position::new(col, row);
                if let Some(ratio) = hit_test_chip(tui.areas.chips, col, row) {
                    tui.focus = Focus::Chips;
                    update(&mut app, Action::SelectRatio(ratio));
                } else if tui.areas.input.contains(position) {
                    tui.focus = Focus::Prompt;
                } else if tui.areas.button.contains(position) {
                    tui.focus = Focus::Button;
                    press_generate(&mut app, &mut tui);
                }
                continue;
            }

            // Modal event dispatch
            match tui.focus {
                Focus::Chips => {
                    if let Some(ChipEvent::Select(ratio)) = tui.chips.handle_event(&event) {
                        update(&mut app, Action::SelectRatio(ratio));
                    }
                }
                Focus::Prompt => {
                    // Esc also dismisses the keyboard
                    if matches!(event, TuiEvent::Escape) {
                        tui.focus = Focus::Button;
                        continue;
                    }
                    if let Some(input_event) = tui.prompt.handle_event(&event) {
                        match input_event {
                            InputEvent::Changed(text) => {
                                update(&mut app, Action::EditPrompt(text));
                            }
                            // "done" blurs the field and nothing else
                            InputEvent::Dismiss => {
                                tui.focus = Focus::Button;
                            }
                        }
                    }
                }
                Focus::Button => match event {
                    TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                        press_generate(&mut app, &mut tui);
                    }
                    _ => {}
                },
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Press the Generate button: start the visual flash, snapshot the state
/// into a request, and hand it to the backend.
fn press_generate(app: &mut App, tui: &mut TuiState) {
    tui.pressed_at = Some(Instant::now());
    if let Effect::Dispatch(request) = update(app, Action::PressGenerate) {
        spawn_generation(app.backend.clone(), request);
    }
}

/// Hand one owned request to the backend on a background task. The request
/// was snapshotted at press time, so edits typed while this runs cannot
/// change what was submitted.
fn spawn_generation(backend: Arc<dyn GenerationBackend>, request: GenerationRequest) {
    info!(
        "Dispatching generation request (ratio {}, prompt {} bytes)",
        request.ratio.label(),
        request.prompt.len()
    );
    tokio::spawn(async move {
        match backend.generate(request).await {
            Ok(()) => info!("Generation request accepted by '{}'", backend.name()),
            Err(e) => warn!("Generation request failed: {}", e),
        }
    });
}
