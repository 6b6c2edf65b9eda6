//! Image grid support.
//!
//! [`ImageGridProvider`] is the provider most hosts want: a list of image
//! sources, one cell per image, and a `+k` overlay when the list is longer
//! than the grid's cap. Image pixels are never loaded here. Binding a cell
//! queues a [`LoadRequest`] that the host drains and serves asynchronously.

mod provider;
mod queue;

pub use provider::{ImageCell, ImageCellRole, ImageGridProvider};
pub use queue::{ImageRequestQueue, LoadRequest, RequestId};
