//! Sprite frames consumed by the simulation
//!
//! Decoding image files is the host's job. The core only needs RGBA pixel
//! buffers to build collision masks, plus the number of frames per sheet.
//! [`SpriteSet::placeholder`] generates padded silhouettes procedurally so
//! the headless binary and the tests run without any asset files.

use thiserror::Error;

use crate::tuning::Tuning;

/// Sprite construction errors
#[derive(Debug, Error)]
pub enum SpriteError {
    #[error("{name}: buffer holds {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    BufferSize {
        name: String,
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("sprite sheet `{0}` has no frames")]
    EmptySheet(&'static str),
}

/// Actor sprite sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sheet {
    Idle,
    Run,
    Jump,
}

impl Sheet {
    pub const ALL: [Sheet; 3] = [Sheet::Idle, Sheet::Run, Sheet::Jump];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Sheet::Idle => 0,
            Sheet::Run => 1,
            Sheet::Jump => 2,
        }
    }
}

/// A straight (non-premultiplied) RGBA8 image
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    /// Wrap an RGBA buffer, checking that its length matches the dimensions
    pub fn from_rgba(
        name: &str,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> Result<Self, SpriteError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(SpriteError::BufferSize {
                name: name.to_string(),
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build an image by evaluating `solid(x, y)` per pixel
    fn paint(width: u32, height: u32, solid: impl Fn(i32, i32) -> bool) -> Self {
        let mut pixels = vec![0u8; width as usize * height as usize * 4];
        {
            let texels: &mut [[u8; 4]] = bytemuck::cast_slice_mut(pixels.as_mut_slice());
            for y in 0..height as i32 {
                for x in 0..width as i32 {
                    if solid(x, y) {
                        texels[(y as u32 * width + x as u32) as usize] = [83, 160, 72, 255];
                    }
                }
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// All frames the simulation can display
#[derive(Debug, Clone)]
pub struct SpriteSet {
    idle: Vec<Image>,
    run: Vec<Image>,
    jump: Vec<Image>,
    obstacles: Vec<Image>,
}

impl SpriteSet {
    /// Assemble a sprite set; every sheet needs at least one frame
    pub fn new(
        idle: Vec<Image>,
        run: Vec<Image>,
        jump: Vec<Image>,
        obstacles: Vec<Image>,
    ) -> Result<Self, SpriteError> {
        if idle.is_empty() {
            return Err(SpriteError::EmptySheet("idle"));
        }
        if run.is_empty() {
            return Err(SpriteError::EmptySheet("run"));
        }
        if jump.is_empty() {
            return Err(SpriteError::EmptySheet("jump"));
        }
        if obstacles.is_empty() {
            return Err(SpriteError::EmptySheet("obstacles"));
        }
        Ok(Self {
            idle,
            run,
            jump,
            obstacles,
        })
    }

    /// Procedural stand-ins sized like the classic art: 10 idle, 8 run and
    /// 16 jump frames for the dino, 5 cactus variants.
    pub fn placeholder(tuning: &Tuning) -> Self {
        let (aw, ah) = (tuning.actor_width as u32, tuning.actor_height as u32);
        let os = tuning.obstacle_size as u32;

        let idle = (0..10).map(|f| dino_frame(aw, ah, f % 2, 0)).collect();
        let run = (0..8).map(|f| dino_frame(aw, ah, 0, f as i32 % 4)).collect();
        let jump = (0..16).map(|f| dino_frame(aw, ah, f % 2, 2)).collect();
        let obstacles = (0..5).map(|v| cactus_frame(os, v)).collect();

        Self {
            idle,
            run,
            jump,
            obstacles,
        }
    }

    pub fn sheet(&self, sheet: Sheet) -> &[Image] {
        match sheet {
            Sheet::Idle => &self.idle,
            Sheet::Run => &self.run,
            Sheet::Jump => &self.jump,
        }
    }

    pub fn frame_count(&self, sheet: Sheet) -> usize {
        self.sheet(sheet).len()
    }

    pub fn obstacles(&self) -> &[Image] {
        &self.obstacles
    }

    pub fn variant_count(&self) -> usize {
        self.obstacles.len()
    }
}

/// Dino silhouette: body block, head, tail and two legs, inside a padded frame
fn dino_frame(width: u32, height: u32, blink: u32, stride: i32) -> Image {
    let w = width as i32;
    let h = height as i32;
    Image::paint(width, height, move |x, y| {
        let body = x >= w / 4 && x < w * 3 / 5 && y >= h / 3 && y < h * 3 / 4;
        let head = x >= w / 2 && x < w * 4 / 5 && y >= h / 8 && y < h * 2 / 5;
        let eye = blink == 0 && x >= w * 2 / 3 && x < w * 2 / 3 + 6 && y >= h / 5 && y < h / 5 + 6;
        let tail = x >= w / 10 && x < w / 4 && y >= h / 2 && y < h / 2 + h / 10;
        let leg_shift = stride * 4;
        let leg_a = x >= w / 3 + leg_shift && x < w / 3 + leg_shift + 14 && y >= h * 3 / 4 && y < h - 6;
        let leg_b = x >= w / 2 - leg_shift && x < w / 2 - leg_shift + 14 && y >= h * 3 / 4 && y < h - 6;
        (body || head || tail || leg_a || leg_b) && !eye
    })
}

/// Cactus silhouette: trunk plus one or two arms whose height depends on the variant
fn cactus_frame(size: u32, variant: u32) -> Image {
    let s = size as i32;
    let arm_y = s / 3 + (variant as i32 % 3) * 12;
    let two_arms = variant % 2 == 1;
    Image::paint(size, size, move |x, y| {
        let trunk = x >= s * 2 / 5 && x < s * 3 / 5 && y >= s / 8 && y < s;
        let left_arm = x >= s / 5 && x < s * 2 / 5 && y >= arm_y && y < arm_y + 14;
        let left_post = x >= s / 5 && x < s / 5 + 14 && y >= arm_y - 30 && y < arm_y;
        let right_arm = two_arms && x >= s * 3 / 5 && x < s * 4 / 5 && y >= arm_y + 20 && y < arm_y + 34;
        let right_post =
            two_arms && x >= s * 4 / 5 - 14 && x < s * 4 / 5 && y >= arm_y - 10 && y < arm_y + 20;
        trunk || left_arm || left_post || right_arm || right_post
    })
}
