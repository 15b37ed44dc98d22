//! Pixel opacity masks
//!
//! One bit per pixel, packed into 64-bit words row by row. Overlap tests are
//! exact: two masks collide only when a solid pixel of each lands on the same
//! screen position.

use glam::IVec2;

use crate::consts::ALPHA_THRESHOLD;
use crate::sprites::Image;

/// Bit mask of solid pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: i32,
    height: i32,
    words_per_row: usize,
    bits: Vec<u64>,
}

impl Mask {
    /// Empty mask of the given size
    pub fn new(width: u32, height: u32) -> Self {
        let words_per_row = (width as usize).div_ceil(64);
        Self {
            width: width as i32,
            height: height as i32,
            words_per_row,
            bits: vec![0; words_per_row * height as usize],
        }
    }

    /// Mask of every pixel whose alpha is above the solid threshold
    pub fn from_image(image: &Image) -> Self {
        let mut mask = Self::new(image.width(), image.height());
        let texels: &[[u8; 4]] = bytemuck::cast_slice(image.pixels());
        let width = image.width() as usize;
        for (i, texel) in texels.iter().enumerate() {
            if texel[3] > ALPHA_THRESHOLD {
                mask.set((i % width) as i32, (i / width) as i32, true);
            }
        }
        mask
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn slot(&self, x: i32, y: i32) -> (usize, u64) {
        let word = y as usize * self.words_per_row + x as usize / 64;
        (word, 1u64 << (x as usize % 64))
    }

    /// Read a pixel; out-of-bounds reads are empty
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return false;
        }
        let (word, bit) = self.slot(x, y);
        self.bits[word] & bit != 0
    }

    /// Write a pixel; out-of-bounds writes are ignored
    pub fn set(&mut self, x: i32, y: i32, solid: bool) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        let (word, bit) = self.slot(x, y);
        if solid {
            self.bits[word] |= bit;
        } else {
            self.bits[word] &= !bit;
        }
    }

    /// Number of solid pixels
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|w| w.count_ones()).sum()
    }

    /// First shared solid pixel (in this mask's coordinates) when `other`
    /// is placed with its top-left corner at `offset`.
    pub fn overlap(&self, other: &Mask, offset: IVec2) -> Option<IVec2> {
        let x0 = offset.x.max(0);
        let y0 = offset.y.max(0);
        let x1 = (offset.x + other.width).min(self.width);
        let y1 = (offset.y + other.height).min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x, y) && other.get(x - offset.x, y - offset.y) {
                    return Some(IVec2::new(x, y));
                }
            }
        }
        None
    }

    /// True if any solid pixels coincide at `offset`
    pub fn overlaps(&self, other: &Mask, offset: IVec2) -> bool {
        self.overlap(other, offset).is_some()
    }
}
