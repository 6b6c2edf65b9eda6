//! The grid layout engine.
//!
//! [`NineGrid`] arranges the visuals of an [`ItemProvider`] into a capped,
//! fixed-column grid of square cells.
//!
//! # Lifecycle
//!
//! Each provider attach starts a new cycle:
//!
//! ```text
//! Empty --attach--> Attached --measure--> Measured --layout--> Bound
//! ```
//!
//! Attaching again at any point discards every slot and starts over. Changing
//! the span count or margin drops a measured grid back to `Attached`, so the
//! change takes effect on the next measure and layout pass. Changing the max
//! count re-creates the slots right away, since it decides how many exist.
//!
//! # Modes
//!
//! - **Single**: one item, and the provider adapts single views and supplied a
//!   single visual. The visual sizes itself; the container takes its height.
//! - **Grid**: `min(n, max_count)` square cells, row-major, plus an optional
//!   overflow overlay stacked on the last cell.
//!
//! # Binding order
//!
//! Regular cells are bound in ascending position, then the overlay.

use std::fmt;

use nine_grid_core::logging::{span_names, targets};
use nine_grid_core::{
    GridConfig, GridResult, PerfSpan, Rect, Size, SlotArena, SlotId, SlotKind,
};

use crate::measure::MeasureSpec;
use crate::metrics::{self, GridMetrics};
use crate::provider::{ItemProvider, SlotVisual};

/// How the current slots are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridMode {
    /// No provider attached.
    #[default]
    Empty,
    /// One unconstrained slot.
    Single,
    /// Square cells, possibly with an overlay.
    Grid,
}

/// Where the engine is in its attach, measure, layout cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LayoutPhase {
    /// No provider attached.
    #[default]
    Empty,
    /// Slots exist but have not been measured.
    Attached,
    /// Geometry is known; slots are not placed yet.
    Measured,
    /// Every slot is placed and bound.
    Bound,
}

/// A capped, fixed-column grid driven by an [`ItemProvider`].
pub struct NineGrid<P: ItemProvider> {
    config: GridConfig,
    provider: Option<P>,
    slots: SlotArena<P::Visual>,
    mode: GridMode,
    phase: LayoutPhase,
    total_count: usize,
    metrics: Option<GridMetrics>,
    measured_size: Option<Size>,
    layout_requested: bool,
}

impl<P: ItemProvider> NineGrid<P> {
    /// Create an empty grid.
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            provider: None,
            slots: SlotArena::new(),
            mode: GridMode::Empty,
            phase: LayoutPhase::Empty,
            total_count: 0,
            metrics: None,
            measured_size: None,
            layout_requested: false,
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Set the number of columns; applies on the next measure pass.
    pub fn set_span_count(&mut self, span_count: usize) -> GridResult<()> {
        self.config.set_span_count(span_count)?;
        self.invalidate_geometry();
        Ok(())
    }

    /// Set the display cap; re-creates slots if a provider is attached.
    pub fn set_max_count(&mut self, max_count: usize) -> GridResult<()> {
        self.config.set_max_count(max_count)?;
        self.refresh();
        Ok(())
    }

    /// Set the spacing between cells; applies on the next measure pass.
    pub fn set_item_margin(&mut self, item_margin: f32) -> GridResult<()> {
        self.config.set_item_margin(item_margin)?;
        self.invalidate_geometry();
        Ok(())
    }

    /// Replace the whole configuration and re-create slots.
    pub fn set_config(&mut self, config: GridConfig) {
        self.config = config;
        self.refresh();
    }

    fn invalidate_geometry(&mut self) {
        self.metrics = None;
        self.measured_size = None;
        if self.phase > LayoutPhase::Attached {
            self.phase = LayoutPhase::Attached;
        }
        self.layout_requested = true;
    }

    // =========================================================================
    // Provider
    // =========================================================================

    /// Attach a provider, re-creating every slot. Returns the provider that
    /// was attached before, if any.
    pub fn attach(&mut self, provider: P) -> Option<P> {
        let previous = self.provider.replace(provider);
        self.rebuild_slots();
        previous
    }

    /// Remove the provider and every slot.
    pub fn detach(&mut self) -> Option<P> {
        let provider = self.provider.take();
        self.rebuild_slots();
        provider
    }

    /// Re-create slots from the attached provider, picking up a changed item
    /// count. Does nothing without a provider.
    pub fn refresh(&mut self) {
        if self.provider.is_some() {
            self.rebuild_slots();
        }
    }

    #[inline]
    pub fn provider(&self) -> Option<&P> {
        self.provider.as_ref()
    }

    #[inline]
    pub fn provider_mut(&mut self) -> Option<&mut P> {
        self.provider.as_mut()
    }

    fn rebuild_slots(&mut self) {
        let _perf = PerfSpan::new(span_names::ATTACH);

        let removed = self.slots.clear();
        self.mode = GridMode::Empty;
        self.phase = LayoutPhase::Empty;
        self.total_count = 0;
        self.metrics = None;
        self.measured_size = None;
        self.layout_requested = true;

        let Some(provider) = self.provider.as_mut() else {
            tracing::debug!(target: targets::ENGINE, removed, "provider detached");
            return;
        };

        let total = provider.item_count();
        self.total_count = total;
        self.phase = LayoutPhase::Attached;

        if provider.adapts_single_view() && total == 1 {
            let view_type = provider.item_view_type(0);
            match provider.create_single_visual(view_type) {
                Some(visual) => {
                    self.slots.push(SlotKind::Single, visual);
                    self.mode = GridMode::Single;
                    tracing::debug!(
                        target: targets::ENGINE,
                        removed,
                        "attached provider in single mode"
                    );
                    return;
                }
                None => tracing::debug!(
                    target: targets::PROVIDER,
                    "no single visual supplied, using a regular cell"
                ),
            }
        }

        let max_count = self.config.max_count();
        let shown = metrics::display_count(total, max_count);
        for position in 0..shown {
            let view_type = provider.item_view_type(position);
            let visual = provider.create_item_visual(view_type);
            self.slots.push(SlotKind::Item, visual);
        }

        let mut overlay = false;
        if provider.supports_overflow_overlay() && total > max_count {
            let view_type = provider.item_view_type(shown);
            match provider.create_overlay_visual(view_type) {
                Some(visual) => {
                    self.slots.push(SlotKind::Overlay, visual);
                    overlay = true;
                }
                None => tracing::debug!(
                    target: targets::PROVIDER,
                    "no overlay visual supplied, overflow indicator disabled"
                ),
            }
        }

        self.mode = GridMode::Grid;
        tracing::debug!(
            target: targets::ENGINE,
            removed,
            total,
            display = shown,
            overlay,
            "attached provider in grid mode"
        );
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Measure treating both axes of `available` as upper bounds.
    pub fn measure_available(&mut self, available: Size) -> Size {
        self.measure(
            MeasureSpec::at_most(available.width),
            MeasureSpec::at_most(available.height),
        )
    }

    /// Compute the container size and measure every slot.
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let _perf = PerfSpan::new(span_names::MEASURE);

        let size = match self.mode {
            GridMode::Empty => Size::new(width.default_size(0.0), height.default_size(0.0)),
            GridMode::Single => self.measure_single(width, height),
            GridMode::Grid => self.measure_grid(width),
        };

        self.measured_size = Some(size);
        if self.provider.is_some() {
            self.phase = LayoutPhase::Measured;
        }

        tracing::trace!(
            target: targets::ENGINE,
            width = size.width,
            height = size.height,
            "measured"
        );
        size
    }

    fn measure_single(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let Some(slot) = self.slots.at_mut(0) else {
            return Size::new(width.default_size(0.0), 0.0);
        };

        let natural = slot.visual_mut().measure(width.loosen(), height.loosen());
        slot.set_measured_size(natural);
        Size::new(width.available_or(natural.width), natural.height)
    }

    fn measure_grid(&mut self, width: MeasureSpec) -> Size {
        let cells = self.slots.count_of(SlotKind::Item);
        let metrics = GridMetrics::new(&self.config, cells, width.available_or(0.0));

        let cell = metrics.cell_size();
        let spec = MeasureSpec::exactly(cell);
        for index in 0..self.slots.len() {
            if let Some(slot) = self.slots.at_mut(index) {
                slot.visual_mut().measure(spec, spec);
                slot.set_measured_size(Size::square(cell));
            }
        }

        self.metrics = Some(metrics);
        metrics.content_size()
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Place every slot and bind it through the provider.
    ///
    /// Does nothing without a provider, and logs a warning if called before
    /// [`measure`](Self::measure).
    pub fn layout(&mut self, container: Size) {
        let _perf = PerfSpan::new(span_names::LAYOUT);

        let Some(provider) = self.provider.as_mut() else {
            return;
        };

        if self.phase < LayoutPhase::Measured {
            tracing::warn!(
                target: targets::ENGINE,
                phase = ?self.phase,
                "layout requested before measure, skipping"
            );
            return;
        }

        match self.mode {
            GridMode::Empty => {}
            GridMode::Single => {
                let rect = Rect::new(0.0, 0.0, container.width, container.height);
                if let Some(slot) = self.slots.at_mut(0) {
                    slot.set_rect(rect);
                    slot.visual_mut().place(rect);
                    provider.bind_single_visual(slot.visual_mut(), 0);
                }
            }
            GridMode::Grid => {
                let Some(metrics) = self.metrics else {
                    return;
                };
                let last_cell = metrics.last_cell_rect();

                for index in 0..self.slots.len() {
                    let Some(slot) = self.slots.at_mut(index) else {
                        continue;
                    };
                    match slot.kind() {
                        SlotKind::Item => {
                            let rect = metrics.cell_rect(index);
                            slot.set_rect(rect);
                            slot.visual_mut().place(rect);
                            provider.bind_item_visual(slot.visual_mut(), index);
                        }
                        SlotKind::Overlay => {
                            let Some(rect) = last_cell else {
                                continue;
                            };
                            slot.set_rect(rect);
                            slot.visual_mut().place(rect);
                            provider.bind_overlay_visual(slot.visual_mut(), index);
                        }
                        SlotKind::Single => {}
                    }
                }
            }
        }

        self.phase = LayoutPhase::Bound;
        self.layout_requested = false;
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    #[inline]
    pub fn mode(&self) -> GridMode {
        self.mode
    }

    #[inline]
    pub fn phase(&self) -> LayoutPhase {
        self.phase
    }

    /// Whether slots or geometry changed since the last layout pass.
    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.layout_requested
    }

    /// Item count read at the last attach.
    #[inline]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Number of regular cells.
    ///
    /// The single-adapted slot is not a regular cell, so this is zero in
    /// [`GridMode::Single`].
    pub fn display_count(&self) -> usize {
        self.slots.count_of(SlotKind::Item)
    }

    /// Number of rows of regular cells; zero in [`GridMode::Single`].
    pub fn line_count(&self) -> usize {
        metrics::line_count(self.display_count(), self.config.span_count())
    }

    /// Number of slots of every kind.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn slots(&self) -> &SlotArena<P::Visual> {
        &self.slots
    }

    /// Rectangle of the slot at a child index, once placed.
    pub fn slot_rect(&self, index: usize) -> Option<Rect> {
        self.slots.at(index).and_then(|slot| slot.rect())
    }

    /// Rectangles of every placed slot, in child order.
    ///
    /// Pass the result to [`Rect::slice_as_bytes`] to upload it as-is.
    pub fn placed_rects(&self) -> Vec<Rect> {
        self.slots.iter().filter_map(|(_, slot)| slot.rect()).collect()
    }

    /// Id of the overflow overlay, if one was created.
    pub fn overlay_slot(&self) -> Option<SlotId> {
        self.slots
            .iter()
            .find(|(_, slot)| slot.kind() == SlotKind::Overlay)
            .map(|(id, _)| id)
    }

    /// Count the overlay displays, if an overlay exists.
    pub fn overflow_count(&self) -> Option<usize> {
        let id = self.overlay_slot()?;
        let slot_index = self.slots.index_of(id)?;
        Some(metrics::overflow_label_count(self.total_count, slot_index))
    }

    /// Size computed by the last measure pass.
    #[inline]
    pub fn measured_size(&self) -> Option<Size> {
        self.measured_size
    }

    /// Geometry from the last grid-mode measure pass.
    #[inline]
    pub fn metrics(&self) -> Option<&GridMetrics> {
        self.metrics.as_ref()
    }
}

impl<P: ItemProvider> Default for NineGrid<P> {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl<P: ItemProvider> fmt::Debug for NineGrid<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NineGrid")
            .field("config", &self.config)
            .field("attached", &self.provider.is_some())
            .field("mode", &self.mode)
            .field("phase", &self.phase)
            .field("total_count", &self.total_count)
            .field("slot_count", &self.slots.len())
            .field("measured_size", &self.measured_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ViewType;

    #[derive(Debug, Default)]
    struct Cell {
        natural_height: f32,
    }

    impl SlotVisual for Cell {
        fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
            Size::new(width.resolve(0.0), height.resolve(self.natural_height))
        }
    }

    struct Fixed {
        count: usize,
        single: bool,
    }

    impl ItemProvider for Fixed {
        type Visual = Cell;

        fn item_count(&self) -> usize {
            self.count
        }

        fn create_item_visual(&mut self, _view_type: ViewType) -> Cell {
            Cell::default()
        }

        fn bind_item_visual(&mut self, _visual: &mut Cell, _position: usize) {}

        fn adapts_single_view(&self) -> bool {
            self.single
        }

        fn create_single_visual(&mut self, _view_type: ViewType) -> Option<Cell> {
            Some(Cell {
                natural_height: 240.0,
            })
        }
    }

    #[test]
    fn test_phases() {
        let mut grid = NineGrid::default();
        assert_eq!(grid.phase(), LayoutPhase::Empty);
        assert!(!grid.needs_layout());

        grid.attach(Fixed {
            count: 4,
            single: false,
        });
        assert_eq!(grid.phase(), LayoutPhase::Attached);
        assert!(grid.needs_layout());

        let size = grid.measure_available(Size::new(302.0, 1000.0));
        assert_eq!(grid.phase(), LayoutPhase::Measured);
        assert_eq!(size, Size::new(302.0, 201.0));

        grid.layout(size);
        assert_eq!(grid.phase(), LayoutPhase::Bound);
        assert!(!grid.needs_layout());
    }

    #[test]
    fn test_layout_before_measure_is_skipped() {
        let mut grid = NineGrid::default();
        grid.attach(Fixed {
            count: 2,
            single: false,
        });
        grid.layout(Size::new(300.0, 300.0));

        assert_eq!(grid.phase(), LayoutPhase::Attached);
        assert_eq!(grid.slot_rect(0), None);
    }

    #[test]
    fn test_no_provider_uses_default_sizing() {
        let mut grid: NineGrid<Fixed> = NineGrid::default();
        let size = grid.measure(MeasureSpec::exactly(120.0), MeasureSpec::Unspecified);
        assert_eq!(size, Size::new(120.0, 0.0));

        grid.layout(size);
        assert_eq!(grid.phase(), LayoutPhase::Empty);
        assert_eq!(grid.mode(), GridMode::Empty);
    }

    #[test]
    fn test_single_mode_takes_visual_height() {
        let mut grid = NineGrid::default();
        grid.attach(Fixed {
            count: 1,
            single: true,
        });
        assert_eq!(grid.mode(), GridMode::Single);

        let size = grid.measure(MeasureSpec::exactly(360.0), MeasureSpec::at_most(800.0));
        assert_eq!(size, Size::new(360.0, 240.0));

        // The single slot is not a regular cell.
        assert_eq!(grid.total_count(), 1);
        assert_eq!(grid.display_count(), 0);
        assert_eq!(grid.line_count(), 0);
    }

    #[test]
    fn test_span_change_requires_remeasure() {
        let mut grid = NineGrid::default();
        grid.attach(Fixed {
            count: 6,
            single: false,
        });
        let size = grid.measure_available(Size::new(300.0, 1000.0));
        grid.layout(size);

        grid.set_span_count(2).unwrap();
        assert_eq!(grid.phase(), LayoutPhase::Attached);
        assert!(grid.needs_layout());
        assert_eq!(grid.line_count(), 3);
        assert!(grid.set_span_count(0).is_err());
        assert_eq!(grid.config().span_count(), 2);
    }

    #[test]
    fn test_max_count_change_recreates_slots() {
        let mut grid = NineGrid::default();
        grid.attach(Fixed {
            count: 12,
            single: false,
        });
        assert_eq!(grid.slot_count(), 9);

        grid.set_max_count(4).unwrap();
        assert_eq!(grid.slot_count(), 4);
        assert_eq!(grid.phase(), LayoutPhase::Attached);
    }

    #[test]
    fn test_detach_clears_everything() {
        let mut grid = NineGrid::default();
        grid.attach(Fixed {
            count: 3,
            single: false,
        });
        let provider = grid.detach();

        assert_eq!(provider.map(|p| p.count), Some(3));
        assert_eq!(grid.slot_count(), 0);
        assert_eq!(grid.mode(), GridMode::Empty);
        assert!(grid.provider().is_none());
        assert!(grid.needs_layout());
    }
}
