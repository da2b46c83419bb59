//! # Preview Component
//!
//! The square preview block. It always shows the embedded placeholder art —
//! no generated output exists yet to replace it. The block's size is a prop
//! computed per frame by `core::layout::preview_cells`; a zero-sized block
//! renders nothing (that is the clamp for degenerate viewports).

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

// PLACEHOLDER_ART / PLACEHOLDER_WIDTH / PLACEHOLDER_HEIGHT, embedded by build.rs
include!(concat!(env!("OUT_DIR"), "/placeholder_art.rs"));

pub struct Preview {
    /// Block width in cells (Prop, derived from the viewport)
    pub cols: u16,
    /// Block height in cells (Prop, derived from the viewport)
    pub rows: u16,
}

impl Preview {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }
}

impl Component for Preview {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.cols == 0 || self.rows == 0 {
            return;
        }

        // Center the block horizontally within the row reserved for it.
        let [block_area] = Layout::horizontal([Constraint::Length(self.cols)])
            .flex(Flex::Center)
            .areas(area);
        let block_area = Rect {
            height: self.rows.min(area.height),
            ..block_area
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(block_area);
        frame.render_widget(block, block_area);

        // Center the art inside the block; ratatui truncates whatever
        // doesn't fit when the block is smaller than the asset.
        let [art_area] = Layout::vertical([Constraint::Length(
            PLACEHOLDER_HEIGHT.min(inner.height),
        )])
        .flex(Flex::Center)
        .areas(inner);

        let art = Paragraph::new(PLACEHOLDER_ART)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(if inner.width >= PLACEHOLDER_WIDTH {
                Alignment::Center
            } else {
                Alignment::Left
            });
        frame.render_widget(art, art_area);
    }
}
