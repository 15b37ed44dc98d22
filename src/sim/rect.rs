//! Axis-aligned screen-space rectangles
//!
//! Screen space: x grows right, y grows down, origin at the top-left corner.

use glam::{IVec2, Vec2};
/// A rectangle stored as top-left position plus size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle of the given size whose bottom-left corner sits at (left, bottom)
    pub fn from_bottom_left(left: f32, bottom: f32, size: Vec2) -> Self {
        Self {
            pos: Vec2::new(left, bottom - size.y),
            size,
        }
    }

    /// Rectangle of the given size centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Move horizontally so the left edge lands on `x`
    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x;
    }

    /// Move vertically so the bottom edge lands on `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    /// Top-left corner snapped to whole pixels
    pub fn pixel_origin(&self) -> IVec2 {
        self.pos.round().as_ivec2()
    }

    /// True if the interiors intersect (touching edges do not count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Strict containment test, edges excluded
    pub fn contains_strict(&self, point: Vec2) -> bool {
        self.left() < point.x
            && point.x < self.right()
            && self.top() < point.y
            && point.y < self.bottom()
    }
}
