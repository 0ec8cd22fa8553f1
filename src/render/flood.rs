use std::collections::VecDeque;

use image::{Rgba, RgbaImage};

use crate::color::{hex_to_rgb, is_ink_pixel};

use super::PaintStrategy;

/// The pixel-exact paint strategy: a raster the size of the drawing that is
/// flood-filled from the tapped pixel, bounded by the line art's ink.
///
/// Filling short-circuits when the seed is an ink pixel or already holds the
/// target color. Pixels exactly at the ink threshold count as paintable.
#[derive(Debug, Clone)]
pub struct FloodCanvas {
    pixels: RgbaImage,
}

impl FloodCanvas {
    /// Seed the raster from the drawing's decoded line art.
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn color_at(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let Rgba([r, g, b, _]) = *self.pixels.get_pixel(x, y);
        (r, g, b)
    }

    /// Flood-fill the region containing `(x, y)` with a hex color. Returns
    /// the number of pixels written; 0 when the fill short-circuits (out of
    /// bounds, malformed color, ink seed, or already the target color).
    pub fn fill(&mut self, x: u32, y: u32, color: &str) -> usize {
        let Some((fr, fg, fb)) = hex_to_rgb(color) else {
            log::warn!("ignoring fill with malformed color {color:?}");
            return 0;
        };
        if x >= self.width() || y >= self.height() {
            return 0;
        }

        let target = self.color_at(x, y);
        if is_ink_pixel(target.0, target.1, target.2) {
            return 0;
        }
        if target == (fr, fg, fb) {
            return 0;
        }

        // 4-neighbour BFS over pixels matching the seed color, stopping at
        // ink and at anything already recolored.
        let fill = Rgba([fr, fg, fb, 255]);
        let mut filled = 0;
        let mut queue = VecDeque::from([(x, y)]);
        while let Some((px, py)) = queue.pop_front() {
            if self.color_at(px, py) != target {
                continue;
            }
            self.pixels.put_pixel(px, py, fill);
            filled += 1;

            if px > 0 {
                queue.push_back((px - 1, py));
            }
            if py > 0 {
                queue.push_back((px, py - 1));
            }
            if px + 1 < self.width() {
                queue.push_back((px + 1, py));
            }
            if py + 1 < self.height() {
                queue.push_back((px, py + 1));
            }
        }
        log::debug!("flood fill at ({x},{y}) colored {filled} pixels");
        filled
    }
}

impl PaintStrategy for FloodCanvas {
    fn paint(&mut self, x: f32, y: f32, color: &str) -> bool {
        if x < 0.0 || y < 0.0 {
            return false;
        }
        self.fill(x as u32, y as u32, color) > 0
    }
}
