mod flood;
mod overlay;

pub use flood::FloodCanvas;
pub use overlay::{Disc, ZONE_RADIUS, discs};

use crate::engine::ColoringEngine;

/// One paint intent, two pluggable semantics.
///
/// The overlay strategy ([`ColoringEngine`]) approximates regions with
/// grid-quantized zones rendered as discs under the line art; the raster
/// strategy ([`FloodCanvas`]) does a pixel-exact boundary-respecting fill.
/// A deployment picks one; their coordinate schemes are deliberately not
/// unified (continuous pixels vs. the zone grid).
pub trait PaintStrategy {
    /// Paint at an image-space point. Returns whether anything changed.
    fn paint(&mut self, x: f32, y: f32, color: &str) -> bool;
}

impl PaintStrategy for ColoringEngine {
    fn paint(&mut self, x: f32, y: f32, color: &str) -> bool {
        self.apply_color(x, y, color)
    }
}
