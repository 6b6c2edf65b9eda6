//! Commonly used types, for glob import.

pub use crate::image::{ImageCell, ImageGridProvider};
pub use crate::{
    GridConfig, GridMode, ItemProvider, LayoutPhase, MeasureSpec, NineGrid, Rect, Size,
    SlotVisual, ViewType,
};
