//! A ready-made provider for a list of images.

use nine_grid_core::{Rect, Size};

use super::queue::{ImageRequestQueue, RequestId};
use crate::measure::MeasureSpec;
use crate::metrics::overflow_label_count;
use crate::provider::{ItemProvider, SlotVisual, ViewType};

/// What an [`ImageCell`] is used for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageCellRole {
    Item,
    /// A lone image sized as `width / aspect_ratio` tall.
    Single { aspect_ratio: f32 },
    Overlay,
}

/// The visual created by [`ImageGridProvider`].
///
/// It holds what a host needs to draw: where the cell is, which image belongs
/// in it, and the overlay text for the overflow cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCell {
    role: ImageCellRole,
    rect: Option<Rect>,
    source: Option<String>,
    request: Option<RequestId>,
    requested_size: Size,
    label: Option<String>,
}

impl ImageCell {
    fn new(role: ImageCellRole) -> Self {
        Self {
            role,
            rect: None,
            source: None,
            request: None,
            requested_size: Size::ZERO,
            label: None,
        }
    }

    #[inline]
    pub fn role(&self) -> ImageCellRole {
        self.role
    }

    /// Last rectangle the grid placed this cell at.
    #[inline]
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Image source bound into this cell.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Load request issued for the current source and cell size.
    #[inline]
    pub fn request(&self) -> Option<RequestId> {
        self.request
    }

    /// Overflow text, such as `+4`, on the overlay cell.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn bind_source(&mut self, source: &str, position: usize, queue: &mut ImageRequestQueue) {
        let target = self.rect.map(|rect| rect.size).unwrap_or(Size::ZERO);
        // Layout rebinds on every pass; ask again only for a new source or cell size.
        if self.request.is_some()
            && self.source.as_deref() == Some(source)
            && self.requested_size == target
        {
            return;
        }
        self.source = Some(source.to_owned());
        self.requested_size = target;
        self.request = Some(queue.submit(source, position, target));
    }
}

impl SlotVisual for ImageCell {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        match self.role {
            ImageCellRole::Single { aspect_ratio } => {
                let w = width.available_or(0.0);
                Size::new(w, height.resolve((w / aspect_ratio).floor()))
            }
            ImageCellRole::Item | ImageCellRole::Overlay => {
                Size::new(width.resolve(0.0), height.resolve(0.0))
            }
        }
    }

    fn place(&mut self, rect: Rect) {
        self.rect = Some(rect);
    }
}

/// Provider over a list of image sources.
///
/// The overflow overlay is on by default and shows `+k`, where `k` counts the
/// images that are not visible, including the one under the overlay.
/// Single-image adaptation is off until an aspect ratio is supplied with
/// [`with_single_aspect_ratio`](Self::with_single_aspect_ratio).
#[derive(Debug)]
pub struct ImageGridProvider {
    sources: Vec<String>,
    queue: ImageRequestQueue,
    overlay: bool,
    single_aspect_ratio: Option<f32>,
}

impl ImageGridProvider {
    pub fn new<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
            queue: ImageRequestQueue::new(),
            overlay: true,
            single_aspect_ratio: None,
        }
    }

    /// Enable or disable the overflow overlay.
    pub fn with_overlay(mut self, enabled: bool) -> Self {
        self.overlay = enabled;
        self
    }

    /// Show a lone image at full width with `height = width / aspect_ratio`.
    ///
    /// Ratios that are not finite and positive leave adaptation off.
    pub fn with_single_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.single_aspect_ratio =
            (aspect_ratio.is_finite() && aspect_ratio > 0.0).then_some(aspect_ratio);
        self
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// The queue load requests are sent to.
    pub fn requests(&self) -> &ImageRequestQueue {
        &self.queue
    }

    /// Text shown on the overlay bound at `slot_index`.
    pub fn overlay_label(&self, slot_index: usize) -> String {
        format!("+{}", overflow_label_count(self.sources.len(), slot_index))
    }
}

impl ItemProvider for ImageGridProvider {
    type Visual = ImageCell;

    fn item_count(&self) -> usize {
        self.sources.len()
    }

    fn create_item_visual(&mut self, _view_type: ViewType) -> ImageCell {
        ImageCell::new(ImageCellRole::Item)
    }

    fn bind_item_visual(&mut self, visual: &mut ImageCell, position: usize) {
        if let Some(source) = self.sources.get(position) {
            visual.bind_source(source, position, &mut self.queue);
        }
    }

    fn adapts_single_view(&self) -> bool {
        self.single_aspect_ratio.is_some()
    }

    fn create_single_visual(&mut self, _view_type: ViewType) -> Option<ImageCell> {
        self.single_aspect_ratio
            .map(|aspect_ratio| ImageCell::new(ImageCellRole::Single { aspect_ratio }))
    }

    fn bind_single_visual(&mut self, visual: &mut ImageCell, position: usize) {
        self.bind_item_visual(visual, position);
    }

    fn supports_overflow_overlay(&self) -> bool {
        self.overlay
    }

    fn create_overlay_visual(&mut self, _view_type: ViewType) -> Option<ImageCell> {
        Some(ImageCell::new(ImageCellRole::Overlay))
    }

    fn bind_overlay_visual(&mut self, visual: &mut ImageCell, slot_index: usize) {
        visual.label = Some(self.overlay_label(slot_index));
    }
}
