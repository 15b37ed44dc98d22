//! Render target that records draw calls
//!
//! Used by the headless binary and by tests to inspect what a frame drew.

use glam::Vec2;

use super::{ImageId, RenderTarget, TextAnchor, TextStyle};
use crate::sim::Rect;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Blit {
        image: ImageId,
        rect: Rect,
    },
    Text {
        text: String,
        position: Vec2,
        anchor: TextAnchor,
        style: TextStyle,
    },
}

/// Collects the draw calls of the current frame
#[derive(Debug, Default)]
pub struct DrawRecorder {
    pub commands: Vec<DrawCommand>,
    /// Frames presented so far
    pub frames: u64,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts drawn this frame, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                DrawCommand::Blit { .. } => None,
            })
            .collect()
    }

    /// Images blitted this frame, in order
    pub fn images(&self) -> Vec<ImageId> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Blit { image, .. } => Some(*image),
                DrawCommand::Text { .. } => None,
            })
            .collect()
    }
}

impl RenderTarget for DrawRecorder {
    fn begin_frame(&mut self) {
        self.commands.clear();
    }

    fn blit(&mut self, image: ImageId, rect: Rect) {
        self.commands.push(DrawCommand::Blit { image, rect });
    }

    fn text(&mut self, text: &str, position: Vec2, anchor: TextAnchor, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            anchor,
            style,
        });
    }

    fn present(&mut self) {
        self.frames += 1;
    }
}
