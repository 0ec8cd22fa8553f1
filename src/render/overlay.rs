use egui::{Color32, Pos2};

use crate::color;
use crate::zone::ZoneMap;

/// Radius of one zone disc, in image units. Large enough that neighbouring
/// grid keys overlap into a continuous patch of color.
pub const ZONE_RADIUS: f32 = 30.0;

/// Disc opacity; the line art drawn on top stays visible through it.
const DISC_ALPHA: u8 = 217;

/// One composited overlay primitive: a colored disc centered on a zone key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: Pos2,
    pub radius: f32,
    pub fill: Color32,
}

/// The overlay rendering contract: turn a zone map into the discs the view
/// layer draws beneath the line-art image, so ink lines keep containing the
/// color visually.
pub fn discs(zones: &ZoneMap) -> Vec<Disc> {
    zones
        .iter()
        .filter_map(|(key, hex)| {
            let fill = color::to_color32(hex)?;
            Some(Disc {
                center: Pos2::new(key.x as f32, key.y as f32),
                radius: ZONE_RADIUS,
                fill: Color32::from_rgba_unmultiplied(fill.r(), fill.g(), fill.b(), DISC_ALPHA),
            })
        })
        .collect()
}
