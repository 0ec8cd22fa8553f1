mod history;
mod recent;

pub use history::{MAX_UNDO_STEPS, SnapshotHistory};
pub use recent::{MAX_RECENT_COLORS, RecentColors};

use crate::zone::{ZoneKey, ZoneMap};

/// The coloring state machine for one open drawing.
///
/// Owns the live [`ZoneMap`], the bounded undo/redo history and the
/// recent-colors list. Every operation is total: given an in-range color
/// (the palette boundary only hands out catalog colors) nothing here can
/// fail, it can only no-op.
#[derive(Debug, Default)]
pub struct ColoringEngine {
    zones: ZoneMap,
    history: SnapshotHistory,
    recents: RecentColors,
}

impl ColoringEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a drawing from persisted progress.
    pub fn from_saved(zones: ZoneMap, recent_colors: Vec<String>) -> Self {
        Self {
            zones,
            history: SnapshotHistory::new(),
            recents: RecentColors::from_saved(recent_colors),
        }
    }

    /// Paint the zone containing the image-space point `(x, y)`.
    ///
    /// Repainting a zone with the color it already holds is a no-op: no
    /// history push, no recents update. Returns whether anything changed.
    pub fn apply_color(&mut self, x: f32, y: f32, color: &str) -> bool {
        let key = ZoneKey::quantize(x, y);
        if self.zones.color_at(key) == Some(color) {
            return false;
        }

        self.history.record_edit(self.zones.clone());
        self.zones.set(key, color.to_owned());
        self.recents.touch(color);
        log::debug!("painted zone {key} with {color}");
        true
    }

    /// Restore the map from just before the last edit. No-op when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.zones) {
            Some(restored) => {
                self.zones = restored;
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone edit. No-op when there is nothing
    /// to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.zones) {
            Some(restored) => {
                self.zones = restored;
                true
            }
            None => false,
        }
    }

    /// Clear every painted zone. Undoable like any other edit.
    pub fn reset(&mut self) {
        self.history.record_edit(self.zones.clone());
        self.zones.clear();
    }

    /// Finish the drawing: hand the painted zones to the caller (to persist
    /// as a colored work) and reset so the drawing can be colored again.
    pub fn complete(&mut self) -> ZoneMap {
        let finished = self.zones.clone();
        self.reset();
        finished
    }

    pub fn zones(&self) -> &ZoneMap {
        &self.zones
    }

    pub fn recent_colors(&self) -> &[String] {
        self.recents.as_slice()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
