//! Caret position tracking and navigation for the prompt field.
//!
//! `CaretState` owns the caret byte offset, scroll offset, and cached width.
//! All navigation methods accept `buffer: &str` explicitly — the text data is
//! owned by `PromptInput`, keeping the dependency visible.

use ratatui::layout::Rect;

use super::wrap::{BORDER_OFFSET, MAX_VISIBLE_LINES, inner_width, wrap_line_count, wrap_options};

/// Caret and scroll state, separated from the text buffer.
pub(super) struct CaretState {
    /// Caret position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Line offset for internal scrolling (0 when content fits in viewport)
    pub scroll_offset: u16,
    /// Cached content width from last render (used for vertical movement)
    pub last_content_width: u16,
}

/// Byte range of one wrapped display line within the buffer.
struct LineSpan {
    start: usize,
    len: usize,
}

/// Walk the wrapped lines and recover each one's byte range in the buffer.
/// Approximate in runs of trimmed whitespace, exact everywhere else — the
/// same trade textwrap itself makes.
fn line_spans(buffer: &str, width: u16) -> Vec<LineSpan> {
    let lines = textwrap::wrap(buffer, wrap_options(width));
    let mut spans = Vec::with_capacity(lines.len() + 1);
    let mut start = 0;
    for line in &lines {
        spans.push(LineSpan {
            start,
            len: line.len(),
        });
        let after = start + line.len();
        let newline = buffer.len() > after && buffer.as_bytes()[after] == b'\n';
        start = after + usize::from(newline);
    }
    if buffer.ends_with('\n') {
        spans.push(LineSpan {
            start: buffer.len(),
            len: 0,
        });
    }
    spans
}

impl CaretState {
    const DEFAULT_WIDTH: u16 = 80;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_content_width: Self::DEFAULT_WIDTH,
        }
    }

    /// Move the caret one display line up or down, keeping the column where
    /// possible. Returns `true` if the caret moved.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16, content_width: u16) -> bool {
        let width = inner_width(content_width);
        if width == 0 || buffer.is_empty() {
            return false;
        }

        let spans = line_spans(buffer, width);
        if spans.is_empty() {
            return false;
        }

        let current = spans
            .iter()
            .position(|s| s.start + s.len >= self.pos)
            .unwrap_or(spans.len() - 1);
        let column = self.pos.saturating_sub(spans[current].start);

        let target = if direction < 0 {
            if current == 0 {
                return false;
            }
            current - 1
        } else {
            if current + 1 >= spans.len() {
                return false;
            }
            current + 1
        };

        self.pos = spans[target].start + column.min(spans[target].len);
        true
    }

    /// Which wrapped display line (0-based) the caret is on.
    pub fn display_line(&self, buffer: &str, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        if width == 0 {
            return 0;
        }

        let before = &buffer[..self.pos];
        let lines = textwrap::wrap(before, wrap_options(width));
        let mut line = lines.len().saturating_sub(1) as u16;

        // A caret sitting right after a newline is on the next (empty) line,
        // which textwrap doesn't emit.
        if self.pos > 0
            && buffer.as_bytes()[self.pos - 1] == b'\n'
            && !lines.last().is_some_and(|l| l.is_empty())
        {
            line += 1;
        }

        line
    }

    /// Keep the caret visible: pull the scroll window up or push it down.
    pub fn update_scroll_offset(&mut self, buffer: &str, content_width: u16) {
        let width = inner_width(content_width);
        if wrap_line_count(buffer, width) <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let line = self.display_line(buffer, content_width);
        if line < self.scroll_offset {
            self.scroll_offset = line;
        } else if line >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = line.saturating_sub(MAX_VISIBLE_LINES - 1);
        }
    }

    /// Screen position for the caret, as (column, row).
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + BORDER_OFFSET, area.y + BORDER_OFFSET);
        }

        let line = self.display_line(buffer, area.width);
        let spans = line_spans(buffer, width);
        let column = spans
            .iter()
            .position(|s| s.start + s.len >= self.pos)
            .map(|i| buffer[spans[i].start..self.pos].chars().count() as u16)
            .unwrap_or(0);

        let visible_line = line.saturating_sub(self.scroll_offset);
        (
            area.x + BORDER_OFFSET + column,
            area.y + BORDER_OFFSET + visible_line,
        )
    }
}
