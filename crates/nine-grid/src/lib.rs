//! A capped, fixed-column grid layout engine for image galleries.
//!
//! [`NineGrid`] lays out the items of an [`ItemProvider`] as square cells,
//! `span_count` per row, showing at most `max_count` of them. Two optional
//! behaviors are opted into by the provider:
//!
//! - **Single-item adaptation**: a lone item gets one unconstrained, full-width
//!   slot that decides its own height.
//! - **Overflow overlay**: when items exceed the cap, an extra slot is stacked
//!   on the last cell to show how many are hidden.
//!
//! The engine only decides where things go and how many slots exist. How a
//! slot looks, and how its image is loaded, belongs to the provider.
//!
//! # Example
//!
//! ```
//! use nine_grid::prelude::*;
//!
//! let sources: Vec<String> = (0..12).map(|i| format!("photo-{i}.jpg")).collect();
//!
//! let mut grid = NineGrid::new(GridConfig::new(3, 9, 0.0).unwrap());
//! grid.attach(ImageGridProvider::new(sources));
//!
//! let size = grid.measure_available(Size::new(300.0, 1000.0));
//! assert_eq!(size, Size::new(300.0, 300.0));
//!
//! grid.layout(size);
//! assert_eq!(grid.slot_count(), 10);
//! assert_eq!(grid.overflow_count(), Some(4));
//! ```

mod engine;
pub mod image;
mod measure;
mod metrics;
pub mod prelude;
mod provider;

pub use engine::{GridMode, LayoutPhase, NineGrid};
pub use measure::MeasureSpec;
pub use metrics::{GridMetrics, cell_size, display_count, line_count, overflow_label_count};
pub use provider::{ItemProvider, SlotVisual, ViewType};

pub use nine_grid_core::{
    GridConfig, GridError, GridResult, Point, Rect, Size, Slot, SlotArena, SlotId, SlotKind,
    SlotTreeDebug,
};
