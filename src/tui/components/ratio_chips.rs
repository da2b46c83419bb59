//! # Ratio Chips Component
//!
//! The horizontal row of aspect-ratio chips. Exactly one chip — the one whose
//! value equals the selected ratio in core state — renders in the selected
//! style; all others render in the default style.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `RatioChipsState` lives in `TuiState` (the keyboard cursor is
//!   presentation-only and never part of core state)
//! - `RatioChips` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::ratio::AspectRatio;
use crate::tui::event::TuiEvent;

/// Accessibility role every chip exposes; the matching label comes from
/// `AspectRatio::accessibility_label`.
pub const CHIP_ACCESSIBILITY_ROLE: &str = "button";

/// Rows the chip row occupies (bordered pills).
pub const CHIP_ROW_HEIGHT: u16 = 3;
/// Cells of padding between neighboring chips.
const CHIP_GAP: u16 = 1;

/// Persistent state for the chip row.
pub struct RatioChipsState {
    /// Which chip the keyboard cursor is on (not the selection).
    pub cursor: usize,
}

impl Default for RatioChipsState {
    fn default() -> Self {
        Self::new()
    }
}

impl RatioChipsState {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Handle a key event, returning a ChipEvent if a chip was selected.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<ChipEvent> {
        match event {
            TuiEvent::CursorLeft => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = (self.cursor + 1).min(AspectRatio::ALL.len() - 1);
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                Some(ChipEvent::Select(AspectRatio::ALL[self.cursor]))
            }
            // Digits jump straight to a chip
            TuiEvent::InputChar(c @ '1'..='3') => {
                let index = (*c as usize) - ('1' as usize);
                self.cursor = index;
                Some(ChipEvent::Select(AspectRatio::ALL[index]))
            }
            _ => None,
        }
    }
}

/// Events emitted by the chip row.
#[derive(Debug, PartialEq)]
pub enum ChipEvent {
    Select(AspectRatio),
}

/// Transient render wrapper for the chip row.
pub struct RatioChips<'a> {
    state: &'a mut RatioChipsState,
    selected: AspectRatio,
    focused: bool,
}

impl<'a> RatioChips<'a> {
    pub fn new(state: &'a mut RatioChipsState, selected: AspectRatio, focused: bool) -> Self {
        Self {
            state,
            selected,
            focused,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        for (i, (ratio, rect)) in AspectRatio::ALL
            .iter()
            .zip(chip_rects(area))
            .enumerate()
        {
            let is_selected = *ratio == self.selected;
            let on_cursor = self.focused && i == self.state.cursor;

            let (text_style, border_style) = if is_selected {
                (
                    Style::default()
                        .fg(Color::LightBlue)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(Color::Blue),
                )
            } else {
                (
                    Style::default().fg(Color::Gray),
                    Style::default().fg(Color::DarkGray),
                )
            };
            let text_style = if on_cursor {
                text_style.add_modifier(Modifier::REVERSED)
            } else {
                text_style
            };

            let chip = Paragraph::new(ratio.label())
                .style(text_style)
                .alignment(Alignment::Center)
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(border_style),
                );
            frame.render_widget(chip, rect);
        }
    }
}

/// The rect of each chip within the row. Shared by rendering and hit testing
/// so a tap lands on exactly what was drawn.
pub fn chip_rects(area: Rect) -> [Rect; 3] {
    let widths = AspectRatio::ALL.map(|r| r.label().len() as u16 + 4);
    let [a, _, b, _, c] = Layout::horizontal([
        Constraint::Length(widths[0]),
        Constraint::Length(CHIP_GAP),
        Constraint::Length(widths[1]),
        Constraint::Length(CHIP_GAP),
        Constraint::Length(widths[2]),
    ])
    .areas(area);
    [a, b, c]
}

/// Which chip (if any) is under the given screen position.
pub fn hit_test_chip(area: Rect, col: u16, row: u16) -> Option<AspectRatio> {
    AspectRatio::ALL
        .iter()
        .zip(chip_rects(area))
        .find(|(_, rect)| rect.contains(ratatui::layout::Position::new(col, row)))
        .map(|(ratio, _)| *ratio)
}
