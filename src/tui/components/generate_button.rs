//! # Generate Button Component
//!
//! The single call to action. Pressing it snapshots the composer state and
//! hands it to the generation backend; the button itself only provides
//! interaction feedback (a short pressed flash) and carries no other state.
//! There is no disabled rendering — an empty prompt still presses.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

/// Accessibility role and label, consumed read-only by assistive
/// collaborators.
pub const ACCESSIBILITY_ROLE: &str = "button";
pub const ACCESSIBILITY_LABEL: &str = "Generate image from prompt";

pub const BUTTON_HEIGHT: u16 = 3;

const LABEL: &str = "⚡ Generate";
// Button fill, resting and pressed (the pressed shade is slightly darker).
const FILL: Color = Color::Rgb(37, 99, 235);
const FILL_PRESSED: Color = Color::Rgb(29, 78, 216);

pub struct GenerateButton {
    /// Whether the press flash is active (Prop)
    pub pressed: bool,
    /// Whether the button has keyboard focus (Prop)
    pub focused: bool,
}

impl GenerateButton {
    pub fn new(pressed: bool, focused: bool) -> Self {
        Self { pressed, focused }
    }
}

impl Component for GenerateButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let fill = if self.pressed { FILL_PRESSED } else { FILL };

        let border_style = if self.focused {
            Style::default().fg(Color::White).bg(fill)
        } else {
            Style::default().fg(fill).bg(fill)
        };

        let button = Paragraph::new(LABEL)
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(fill)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border_style),
            );
        frame.render_widget(button, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn label_cell_bg(pressed: bool, focused: bool) -> Color {
        let backend = TestBackend::new(30, BUTTON_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut button = GenerateButton::new(pressed, focused);
        terminal.draw(|f| button.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Generate"));

        buffer[(15, 1)].style().bg.unwrap()
    }

    #[test]
    fn test_resting_and_pressed_fills_differ() {
        let resting = label_cell_bg(false, false);
        let pressed = label_cell_bg(true, false);
        assert_eq!(resting, FILL);
        assert_eq!(pressed, FILL_PRESSED);
        assert_ne!(resting, pressed);
    }

    #[test]
    fn test_focus_only_changes_the_border() {
        assert_eq!(label_cell_bg(false, true), FILL);
    }

    #[test]
    fn test_accessibility_metadata_is_exact() {
        assert_eq!(ACCESSIBILITY_ROLE, "button");
        assert_eq!(ACCESSIBILITY_LABEL, "Generate image from prompt");
    }
}
