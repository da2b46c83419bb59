//! # PromptInput Component
//!
//! The multiline text field where the user describes the image.
//!
//! ## Responsibilities
//!
//! - Capture free-form text verbatim (no trimming, no validation, no cap)
//! - Handle editing (backspace, delete, caret movement, paste)
//! - Show placeholder text while the buffer is empty
//! - Dismiss on Enter — the keyboard "done" action blurs the field and
//!   nothing else; it does not clear the buffer and does not generate
//!
//! ## State Management
//!
//! The buffer is internal state, synced into core state via
//! `InputEvent::Changed` on every edit. Caret position and scroll state are
//! encapsulated in `CaretState`. Focus is a prop from `TuiState`.

mod caret;
mod wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use caret::CaretState;
use wrap::{
    MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, inner_width, next_char_boundary, prev_char_boundary,
    wrap_line_count, wrap_options,
};

/// Placeholder shown dimmed while the buffer is empty.
pub const PLACEHOLDER: &str = "A serene sunset over mountains in watercolor style";
/// Field label, shown as the block title.
pub const LABEL: &str = "Describe your image";

/// High-level events emitted by the PromptInput
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Text content changed; carries the full buffer for the core sync
    Changed(String),
    /// User hit the keyboard "done" action (Enter) — blur, nothing else
    Dismiss,
}

/// Multiline prompt field.
///
/// # Props
///
/// - `focused`: whether the field currently has keyboard focus
///
/// # State
///
/// - `buffer`: current text, exactly as typed
/// - `caret`: caret position, scroll offset, and cached width
pub struct PromptInput {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether the field has focus (Prop)
    pub focused: bool,
    /// Caret and scroll tracking
    caret: CaretState,
}

impl Default for PromptInput {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: false,
            caret: CaretState::new(),
        }
    }

    /// Required height for the current buffer, clamped to viewport limits.
    /// Returns value in range [1 + VERTICAL_OVERHEAD, MAX_VISIBLE_LINES + VERTICAL_OVERHEAD].
    pub fn calculate_height(&self, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        let content_lines = wrap_line_count(&self.buffer, width);
        content_lines.min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    /// The text visible at the current scroll offset.
    fn visible_text(&self, content_width: u16) -> String {
        if self.caret.scroll_offset == 0 {
            return self.buffer.clone();
        }

        let width = inner_width(content_width);
        if width == 0 {
            return String::new();
        }

        let lines = textwrap::wrap(&self.buffer, wrap_options(width));
        let start = self.caret.scroll_offset as usize;
        let end = (start + MAX_VISIBLE_LINES as usize).min(lines.len());
        lines[start..end].join("\n")
    }

    /// Replace the buffer from the outside (used by the event loop to keep
    /// the field in lockstep with core state, e.g. on startup).
    pub fn set_text(&mut self, text: String) {
        self.caret.pos = text.len();
        self.buffer = text;
    }
}

impl Component for PromptInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.caret.last_content_width = area.width;
        self.caret.update_scroll_offset(&self.buffer, area.width);

        let border_style = if self.focused {
            Style::default().fg(Color::Blue)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(LABEL);

        let field = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM))
        } else {
            Paragraph::new(self.visible_text(area.width))
                .style(Style::default().fg(Color::White))
        };
        frame.render_widget(field.block(block), area);

        if self.focused {
            let (caret_x, caret_y) = self.caret.screen_pos(&self.buffer, area);
            frame.set_cursor_position((caret_x, caret_y));
        }
    }
}

impl EventHandler for PromptInput {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.caret.pos, *c);
                self.caret.pos += c.len_utf8();
                Some(InputEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Paste(text) => {
                self.buffer.insert_str(self.caret.pos, text);
                self.caret.pos += text.len();
                Some(InputEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                if self.caret.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.caret.pos);
                    self.buffer.drain(prev..self.caret.pos);
                    self.caret.pos = prev;
                    Some(InputEvent::Changed(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.caret.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.caret.pos);
                    self.buffer.drain(self.caret.pos..next);
                    Some(InputEvent::Changed(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.caret.pos > 0 {
                    self.caret.pos = prev_char_boundary(&self.buffer, self.caret.pos);
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.caret.pos < self.buffer.len() {
                    self.caret.pos = next_char_boundary(&self.buffer, self.caret.pos);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.caret.pos = self.buffer[..self.caret.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                None
            }
            TuiEvent::CursorEnd => {
                self.caret.pos = self.buffer[self.caret.pos..]
                    .find('\n')
                    .map(|i| self.caret.pos + i)
                    .unwrap_or(self.buffer.len());
                None
            }
            TuiEvent::CursorUp => {
                self.caret
                    .move_vertically(&self.buffer, -1, self.caret.last_content_width);
                None
            }
            TuiEvent::CursorDown => {
                self.caret
                    .move_vertically(&self.buffer, 1, self.caret.last_content_width);
                None
            }
            // Keyboard "done": blur only. The buffer stays exactly as typed.
            TuiEvent::Submit => Some(InputEvent::Dismiss),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_new_is_empty_and_unfocused() {
        let input = PromptInput::new();
        assert!(input.buffer.is_empty());
        assert!(!input.focused);
    }

    #[test]
    fn test_typing_builds_the_buffer() {
        let mut input = PromptInput::new();

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::Changed("a".to_string())));

        let res = input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(res, Some(InputEvent::Changed("ab".to_string())));

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::Changed("a".to_string())));
    }

    #[test]
    fn test_paste_preserves_newlines() {
        let mut input = PromptInput::new();
        let res = input.handle_event(&TuiEvent::Paste("line one\nline two".to_string()));
        assert_eq!(
            res,
            Some(InputEvent::Changed("line one\nline two".to_string()))
        );
    }

    #[test]
    fn test_dismiss_keeps_the_buffer() {
        let mut input = PromptInput::new();
        input.set_text("hello".to_string());

        let res = input.handle_event(&TuiEvent::Submit);
        assert_eq!(res, Some(InputEvent::Dismiss));
        assert_eq!(input.buffer, "hello", "done must not clear the prompt");
    }

    #[test]
    fn test_backspace_at_start_is_silent() {
        let mut input = PromptInput::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_no_trimming_anywhere() {
        let mut input = PromptInput::new();
        input.handle_event(&TuiEvent::Paste("  padded  ".to_string()));
        input.handle_event(&TuiEvent::Submit);
        assert_eq!(input.buffer, "  padded  ");
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let backend = TestBackend::new(60, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = PromptInput::new();

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("A serene sunset over mountains"));
        assert!(text.contains(LABEL));
    }

    #[test]
    fn test_render_shows_typed_text_instead_of_placeholder() {
        let backend = TestBackend::new(60, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = PromptInput::new();
        input.handle_event(&TuiEvent::InputChar('x'));

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains('x'));
        assert!(!text.contains("serene sunset"));
    }

    #[test]
    fn test_calculate_height_tracks_content() {
        let mut input = PromptInput::new();
        assert_eq!(input.calculate_height(60), 1 + VERTICAL_OVERHEAD);

        input.set_text("a\nb\nc".to_string());
        assert_eq!(input.calculate_height(60), 3 + VERTICAL_OVERHEAD);

        input.set_text("a\nb\nc\nd\ne\nf\ng".to_string());
        assert_eq!(
            input.calculate_height(60),
            MAX_VISIBLE_LINES + VERTICAL_OVERHEAD
        );
    }
}
