//! Rendering module
//!
//! The core never touches a graphics API. It describes each frame as a
//! sequence of blits and text draws against a [`RenderTarget`]; the host
//! maps [`ImageId`]s to its own textures.

pub mod recorder;
pub mod scene;

pub use recorder::{DrawCommand, DrawRecorder};
pub use scene::draw_session;

use glam::Vec2;

use crate::sim::Rect;
use crate::sprites::Sheet;

/// Every image the game can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageId {
    /// Background strip, 0 = nearest
    Backdrop(usize),
    Obstacle(usize),
    Actor(Sheet, usize),
    HighScoreIcon,
    CurrentScoreIcon,
    ReplayButton,
}

/// Which point of the text box lands on the given position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Horizontally centered, top edge at the position
    MidTop,
    /// Right edge and top edge at the position
    TopRight,
}

/// Font faces the HUD uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    /// Monospaced score digits
    Score,
    /// Stencil face for the game over banner
    Banner,
}

/// Text appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size: f32,
    pub color: [u8; 3],
}

/// Abstract drawable surface
pub trait RenderTarget {
    /// Called before the first draw of a frame
    fn begin_frame(&mut self) {}
    fn blit(&mut self, image: ImageId, rect: Rect);
    fn text(&mut self, text: &str, position: Vec2, anchor: TextAnchor, style: TextStyle);
    /// Show the finished frame
    fn present(&mut self) {}
}
