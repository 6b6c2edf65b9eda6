//! Pixel geometry for slot placement.
//!
//! Lengths are `f32` pixels. Cell sizes produced by the grid are whole
//! pixels, so rectangles built from them compare exactly. All three types are
//! plain `#[repr(C)]` data, so a host can hand a slice of placed rectangles
//! straight to a GPU buffer.

use bytemuck::{Pod, Zeroable};

/// Top-left corner of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<glam::Vec2> for Point {
    fn from(v: glam::Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Width and height of a container or slot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A grid cell of side `side`.
    #[inline]
    pub const fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// A placed slot: origin plus size, laid out as four `f32`s.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Raw bytes of `rects`, `x, y, width, height` per rectangle.
    pub fn slice_as_bytes(rects: &[Rect]) -> &[u8] {
        bytemuck::cast_slice(rects)
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) {}x{}",
            self.origin.x, self.origin.y, self.size.width, self.size.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Rect::new(0.0, 101.0, 100.0, 100.0).to_string(), "(0, 101) 100x100");
    }

    #[test]
    fn test_rect_bytes_are_four_floats() {
        let rects = [Rect::new(1.0, 2.0, 3.0, 4.0), Rect::new(5.0, 6.0, 7.0, 8.0)];
        let bytes = Rect::slice_as_bytes(&rects);
        assert_eq!(bytes.len(), 32);

        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_point_from_vec2() {
        let p = Point::from(glam::Vec2::new(3.0, 4.0) * 2.0);
        assert_eq!(p, Point::new(6.0, 8.0));
    }
}
