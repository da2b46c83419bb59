//! # Responsive Preview Sizing
//!
//! Pure viewport math, no UI types. The preview block is a square whose side
//! length is derived from the viewport on every render:
//!
//! ```text
//! side = min(width - HORIZONTAL_PADDING, height * HEIGHT_FRACTION, MAX_PREVIEW)
//! ```
//!
//! The formula itself does not clamp: a pathologically narrow viewport yields
//! a negative side length, and consumers clamp to zero before use
//! (`preview_cells` does this when converting to the terminal grid).

/// Logical pixels reserved for horizontal padding around the preview.
pub const HORIZONTAL_PADDING: f32 = 32.0;
/// Fraction of the viewport height the preview may occupy.
pub const HEIGHT_FRACTION: f32 = 0.35;
/// Hard cap on the preview side length so it stays reasonable on large
/// viewports.
pub const MAX_PREVIEW: f32 = 320.0;

/// Approximate logical-pixel width of one terminal cell.
pub const CELL_WIDTH_PX: f32 = 8.0;
/// Approximate logical-pixel height of one terminal cell.
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// Display-area dimensions in logical pixels, reported by the host
/// environment. Read-only input: this module never mutates or stores it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    pub width: f32,
    pub height: f32,
}

impl ViewportMetrics {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Derive logical-pixel metrics from a terminal cell grid.
    pub fn from_cells(cols: u16, rows: u16) -> Self {
        Self {
            width: f32::from(cols) * CELL_WIDTH_PX,
            height: f32::from(rows) * CELL_HEIGHT_PX,
        }
    }
}

/// Side length of the square preview block, in logical pixels.
///
/// Pure and deterministic: same viewport in, same side out. Monotonically
/// non-decreasing in each dimension until `MAX_PREVIEW` caps it. May return
/// a negative value when `width < HORIZONTAL_PADDING` — callers clamp.
pub fn preview_size(viewport: ViewportMetrics) -> f32 {
    (viewport.width - HORIZONTAL_PADDING)
        .min(viewport.height * HEIGHT_FRACTION)
        .min(MAX_PREVIEW)
}

/// The preview block as a `(cols, rows)` pair on the terminal grid, square in
/// logical pixels. This is the clamping consumer: degenerate viewports
/// produce `(0, 0)`, which renders as no preview at all.
pub fn preview_cells(viewport: ViewportMetrics) -> (u16, u16) {
    let side = preview_size(viewport).max(0.0);
    let cols = (side / CELL_WIDTH_PX).round() as u16;
    let rows = (side / CELL_HEIGHT_PX).round() as u16;
    (cols, rows)
}
