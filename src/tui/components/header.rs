//! # Header Component
//!
//! Top-of-screen chrome: the BETA badge with a status readout on the right,
//! the screen title, and the subtitle. Purely presentational — it receives
//! the status line as a prop and holds no state of its own.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub const TITLE: &str = "Image AI Generator";
pub const SUBTITLE: &str = "Turn your ideas into visuals in seconds.";

pub struct Header {
    /// Status bar text (Prop)
    pub status_message: String,
}

impl Header {
    /// Rows the header occupies: badge, title, subtitle.
    pub const HEIGHT: u16 = 3;

    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [badge_area, title_area, subtitle_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let badge = Span::styled(
            " BETA ",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        );
        let status = Span::styled(
            self.status_message.as_str(),
            Style::default().fg(Color::DarkGray),
        );
        let pad = badge_area
            .width
            .saturating_sub(6 + self.status_message.len() as u16);
        let badge_row = Line::from(vec![
            badge,
            Span::raw(" ".repeat(pad as usize)),
            status,
        ]);
        frame.render_widget(badge_row, badge_area);

        frame.render_widget(
            Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
            title_area,
        );
        frame.render_widget(
            Span::styled(SUBTITLE, Style::default().fg(Color::DarkGray)),
            subtitle_area,
        );
    }
}
