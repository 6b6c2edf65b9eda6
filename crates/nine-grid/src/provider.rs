//! The item provider contract.
//!
//! A grid never decides how an item looks. It asks an [`ItemProvider`] how
//! many items exist, has it create one visual per slot, and hands each visual
//! back for binding once the slot has a rectangle.
//!
//! Only [`item_count`](ItemProvider::item_count),
//! [`create_item_visual`](ItemProvider::create_item_visual) and
//! [`bind_item_visual`](ItemProvider::bind_item_visual) are required. The two
//! optional behaviors are opted into by overriding their flag methods:
//!
//! - single-item adaptation: [`adapts_single_view`](ItemProvider::adapts_single_view)
//!   with [`create_single_visual`](ItemProvider::create_single_visual) and
//!   [`bind_single_visual`](ItemProvider::bind_single_visual)
//! - overflow overlay: [`supports_overflow_overlay`](ItemProvider::supports_overflow_overlay)
//!   with [`create_overlay_visual`](ItemProvider::create_overlay_visual) and
//!   [`bind_overlay_visual`](ItemProvider::bind_overlay_visual)
//!
//! Returning `None` from an optional creation method is not an error; the grid
//! just runs without that behavior until the next attach.
//!
//! # Example
//!
//! ```
//! use nine_grid::{ItemProvider, SlotVisual, ViewType};
//!
//! #[derive(Default)]
//! struct Label(String);
//!
//! impl SlotVisual for Label {}
//!
//! struct Names(Vec<&'static str>);
//!
//! impl ItemProvider for Names {
//!     type Visual = Label;
//!
//!     fn item_count(&self) -> usize {
//!         self.0.len()
//!     }
//!
//!     fn create_item_visual(&mut self, _view_type: ViewType) -> Label {
//!         Label::default()
//!     }
//!
//!     fn bind_item_visual(&mut self, visual: &mut Label, position: usize) {
//!         visual.0 = self.0[position].to_string();
//!     }
//! }
//! ```

use nine_grid_core::{Rect, Size};

use crate::measure::MeasureSpec;

/// Tag distinguishing heterogeneous item kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewType(pub u32);

impl ViewType {
    /// Tag used when a provider has only one kind of item.
    pub const DEFAULT: Self = Self(0);
}

impl Default for ViewType {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A visual the grid can measure and place.
pub trait SlotVisual {
    /// Report the size this visual wants under the given constraints.
    ///
    /// Grid cells are always recorded at their exact cell size whatever this
    /// returns. The result only matters for the single-adapted slot, whose
    /// height becomes the container height. The default reports zero natural
    /// size, resolved against the constraints.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        Size::new(width.resolve(0.0), height.resolve(0.0))
    }

    /// Called with the final rectangle, before the visual is bound.
    fn place(&mut self, _rect: Rect) {}
}

/// Supplies item count and visuals to a grid.
///
/// Bind methods run synchronously inside the layout pass. Anything slow, such
/// as fetching an image, must be handed off and not awaited.
pub trait ItemProvider {
    /// The visual type created for every slot.
    type Visual: SlotVisual;

    /// Total number of items, read once per attach.
    fn item_count(&self) -> usize;

    /// View type of the item at `position`.
    fn item_view_type(&self, _position: usize) -> ViewType {
        ViewType::DEFAULT
    }

    /// Create the visual for one regular cell.
    fn create_item_visual(&mut self, view_type: ViewType) -> Self::Visual;

    /// Bind item `position` into a placed cell.
    fn bind_item_visual(&mut self, visual: &mut Self::Visual, position: usize);

    // -------------------------------------------------------------------------
    // Single-item adaptation
    // -------------------------------------------------------------------------

    /// Whether a lone item should be laid out unconstrained.
    fn adapts_single_view(&self) -> bool {
        false
    }

    /// Create the unconstrained visual for a lone item.
    fn create_single_visual(&mut self, _view_type: ViewType) -> Option<Self::Visual> {
        None
    }

    /// Bind the lone item into the single visual.
    fn bind_single_visual(&mut self, _visual: &mut Self::Visual, _position: usize) {}

    // -------------------------------------------------------------------------
    // Overflow overlay
    // -------------------------------------------------------------------------

    /// Whether to stack an "extra count" overlay on the last cell when items
    /// exceed the display cap.
    fn supports_overflow_overlay(&self) -> bool {
        false
    }

    /// Create the overlay visual.
    fn create_overlay_visual(&mut self, _view_type: ViewType) -> Option<Self::Visual> {
        None
    }

    /// Bind the overlay. `slot_index` is the overlay's own child index, which
    /// equals the number of regular cells; see
    /// [`overflow_label_count`](crate::overflow_label_count).
    fn bind_overlay_visual(&mut self, _visual: &mut Self::Visual, _slot_index: usize) {}
}
