//! Parallax background strips
//!
//! Each layer is two screen-wide tiles laid end to end. A tile that scrolls
//! fully past the left edge is moved behind its partner, so the strip never
//! shows a seam.

use glam::Vec2;
use super::rect::Rect;
use crate::tuning::Tuning;

/// Number of parallax layers
pub const LAYER_COUNT: usize = 4;

/// One horizontally wrapping strip
#[derive(Debug, Clone)]
pub struct ScrollLayer {
    pub tiles: [Rect; 2],
    pub speed: f32,
}

impl ScrollLayer {
    /// Two tiles of `size`, bottom-aligned to `bottom`, starting at x = 0
    pub fn new(size: Vec2, bottom: f32, speed: f32) -> Self {
        let first = Rect::from_bottom_left(0.0, bottom, size);
        let second = Rect::from_bottom_left(first.right(), bottom, size);
        Self {
            tiles: [first, second],
            speed,
        }
    }

    pub fn update(&mut self) {
        for tile in &mut self.tiles {
            tile.pos.x -= self.speed;
        }

        if self.tiles[0].right() < 0.0 {
            let x = self.tiles[1].right();
            self.tiles[0].set_left(x);
        }
        if self.tiles[1].right() < 0.0 {
            let x = self.tiles[0].right();
            self.tiles[1].set_left(x);
        }
    }
}

/// Four layers scrolling at `{S, S-12, S-13, S-14}`, nearest first
#[derive(Debug, Clone)]
pub struct Backdrop {
    pub layers: [ScrollLayer; LAYER_COUNT],
    offsets: [f32; LAYER_COUNT],
}

impl Backdrop {
    pub fn new(tuning: &Tuning) -> Self {
        let size = Vec2::new(tuning.screen_width, tuning.screen_height);
        let offsets = tuning.layer_offsets;
        let layers = offsets.map(|offset| {
            ScrollLayer::new(size, tuning.screen_height, tuning.start_speed - offset)
        });
        Self { layers, offsets }
    }

    /// Re-derive every layer's speed from the global speed
    pub fn update_speed(&mut self, speed: f32) {
        for (layer, offset) in self.layers.iter_mut().zip(self.offsets) {
            layer.speed = speed - offset;
        }
    }

    /// Scroll all layers, farthest first
    pub fn update(&mut self) {
        for layer in self.layers.iter_mut().rev() {
            layer.update();
        }
    }
}
