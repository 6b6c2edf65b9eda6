//! Core types for Nine Grid.
//!
//! This crate holds the pieces of the grid that do not depend on a provider:
//!
//! - **Geometry**: [`Point`], [`Size`] and [`Rect`] in pixels
//! - **Slots**: the [`SlotArena`] that owns every visual the grid creates
//! - **Configuration**: validated [`GridConfig`] with TOML loading and dp conversion
//! - **Errors**: [`GridError`] and [`GridResult`]
//! - **Logging**: tracing targets, [`PerfSpan`] and the [`SlotTreeDebug`] dump
//!
//! # Example
//!
//! ```
//! use nine_grid_core::GridConfig;
//!
//! let config = GridConfig::from_toml_str("span_count = 4\nmax_count = 8").unwrap();
//! assert_eq!(config.span_count(), 4);
//! assert_eq!(config.max_count(), 8);
//! ```

pub mod config;
mod error;
pub mod geometry;
pub mod logging;
pub mod slot;

pub use config::{
    dp_to_px, GridConfig, DEFAULT_ITEM_MARGIN_DP, DEFAULT_MAX_COUNT, DEFAULT_SPAN_COUNT,
};
pub use error::{GridError, GridResult};
pub use geometry::{Point, Rect, Size};
pub use logging::{PerfSpan, SlotTreeDebug, TreeFormatOptions, TreeStyle};
pub use slot::{Slot, SlotArena, SlotId, SlotKind};
