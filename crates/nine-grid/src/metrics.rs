//! Grid arithmetic.
//!
//! All cell geometry is derived here so that measurement and placement can
//! never disagree. Margins are applied between columns and between rows, and
//! never around the outside of the grid.

use glam::Vec2;
use nine_grid_core::{GridConfig, Point, Rect, Size};

/// Number of regular cells shown for `total` items under a cap.
#[inline]
pub fn display_count(total: usize, max_count: usize) -> usize {
    total.min(max_count)
}

/// Number of rows needed for `display` cells.
#[inline]
pub fn line_count(display: usize, span_count: usize) -> usize {
    display.div_ceil(span_count.max(1))
}

/// Side of a square cell for a container `width`.
///
/// The result is floored to a whole pixel and is zero for a non-positive or
/// non-finite width.
pub fn cell_size(width: f32, span_count: usize, item_margin: f32) -> f32 {
    if !width.is_finite() || width <= 0.0 {
        return 0.0;
    }
    let span = span_count.max(1);
    let gaps = item_margin * (span - 1) as f32;
    ((width - gaps) / span as f32).floor().max(0.0)
}

/// Count shown on the overflow overlay bound at child index `slot_index`.
///
/// The overlay sits in the grid's slot list right after the regular cells, so
/// `slot_index` equals the display count. The overlay hides the last visible
/// item, so that item counts as hidden too: the result is
/// `total - display + 1`.
#[inline]
pub fn overflow_label_count(total: usize, slot_index: usize) -> usize {
    total.saturating_sub(slot_index) + 1
}

/// Geometry of one measured grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    span_count: usize,
    item_margin: f32,
    display_count: usize,
    line_count: usize,
    cell_size: f32,
    width: f32,
}

impl GridMetrics {
    /// Compute metrics for `display` regular cells in a container `width`.
    pub fn new(config: &GridConfig, display: usize, width: f32) -> Self {
        let span_count = config.span_count();
        let item_margin = config.item_margin();
        Self {
            span_count,
            item_margin,
            display_count: display,
            line_count: line_count(display, span_count),
            cell_size: cell_size(width, span_count, item_margin),
            width: if width.is_finite() { width.max(0.0) } else { 0.0 },
        }
    }

    #[inline]
    pub fn span_count(&self) -> usize {
        self.span_count
    }

    #[inline]
    pub fn display_count(&self) -> usize {
        self.display_count
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Height of all rows plus the margins between them.
    pub fn content_height(&self) -> f32 {
        if self.line_count == 0 {
            return 0.0;
        }
        self.cell_size * self.line_count as f32 + self.item_margin * (self.line_count - 1) as f32
    }

    /// Resolved container size.
    pub fn content_size(&self) -> Size {
        Size::new(self.width, self.content_height())
    }

    #[inline]
    pub fn column_of(&self, index: usize) -> usize {
        index % self.span_count
    }

    #[inline]
    pub fn row_of(&self, index: usize) -> usize {
        index / self.span_count
    }

    /// Rectangle of cell `index`, row-major from the top-left.
    pub fn cell_rect(&self, index: usize) -> Rect {
        let stride = self.cell_size + self.item_margin;
        let cell = Vec2::new(self.column_of(index) as f32, self.row_of(index) as f32);
        Rect::from_origin_size(Point::from(cell * stride), Size::square(self.cell_size))
    }

    /// Rectangle of the last regular cell, if there is one.
    pub fn last_cell_rect(&self) -> Option<Rect> {
        self.display_count
            .checked_sub(1)
            .map(|index| self.cell_rect(index))
    }
}
