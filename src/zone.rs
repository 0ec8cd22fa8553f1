use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

/// Grid spacing used to turn a continuous tap coordinate into a stable zone
/// key. Nearby taps land in the same zone instead of stacking overlays.
pub const GRID_QUANTUM: f32 = 8.0;

/// A quantized image-space coordinate identifying one paintable zone.
///
/// Serializes as the string `"x,y"` so progress files keep the shape the
/// mobile releases wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneKey {
    pub x: i32,
    pub y: i32,
}

impl ZoneKey {
    /// Snap a continuous image-space point to the zone grid.
    pub fn quantize(x: f32, y: f32) -> Self {
        Self {
            x: (x / GRID_QUANTUM).round() as i32 * GRID_QUANTUM as i32,
            y: (y / GRID_QUANTUM).round() as i32 * GRID_QUANTUM as i32,
        }
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for ZoneKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("zone key missing comma: {s:?}"))?;
        Ok(Self {
            x: x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?,
            y: y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?,
        })
    }
}

impl Serialize for ZoneKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ZoneKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = ZoneKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a zone key of the form \"x,y\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ZoneKey, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(KeyVisitor)
    }
}

/// All painted zones of one drawing: zone key to assigned hex color.
///
/// Cloning the whole map is the undo/redo snapshot currency; the maps stay
/// small enough (one entry per tapped zone) that full copies are fine.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ZoneMap(HashMap<ZoneKey, String>);

impl ZoneMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color_at(&self, key: ZoneKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    /// Assign a color to a zone, overwriting any previous assignment.
    pub fn set(&mut self, key: ZoneKey, color: String) {
        self.0.insert(key, color);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ZoneKey, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
