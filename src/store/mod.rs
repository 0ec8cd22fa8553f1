use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::zone::ZoneMap;

/// Errors from the JSON file store.
///
/// Reads are degraded to defaults at the call sites (a coloring session must
/// stay usable with storage unavailable); writes surface the error so the
/// caller can log it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize state: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write state: {0}")]
    Write(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// User settings. Every field has a serde default so files written by older
/// releases merge forward instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub zen_mode_enabled: bool,
    pub sound_enabled: bool,
    /// How many interstitial placeholders have been shown.
    pub ads_count: u32,
    pub works_completed: u32,
    pub total_coloring_minutes: u32,
    pub favorite_colors: Vec<String>,
    pub unlocked_palettes: BTreeSet<String>,
    pub cover_image: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            zen_mode_enabled: false,
            sound_enabled: true,
            ads_count: 0,
            works_completed: 0,
            total_coloring_minutes: 0,
            favorite_colors: Vec::new(),
            unlocked_palettes: BTreeSet::from(["classic".to_owned()]),
            cover_image: None,
        }
    }
}

/// A completed coloring, frozen at the moment the user hit "complete".
/// Never mutated afterwards, only deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColoredWork {
    pub id: String,
    pub drawing_id: String,
    pub drawing_title: String,
    pub zones: ZoneMap,
    /// Seconds since the UNIX epoch.
    pub completed_at: u64,
}

/// In-flight progress for one drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColoringProgress {
    pub drawing_id: String,
    pub zones: ZoneMap,
    pub recent_colors: Vec<String>,
    /// Seconds since the UNIX epoch.
    pub last_modified: u64,
}

/// JSON-file persistence rooted at a data directory.
///
/// Layout: `settings.json`, `works.json` and `progress/<drawing_id>.json`.
/// All writes are last-write-wins whole-file replacements.
#[derive(Debug, Clone)]
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    // ── Settings ────────────────────────────────────────────────────────

    /// Load settings, degrading to defaults when the file is missing or
    /// unreadable.
    pub fn load_settings(&self) -> Settings {
        self.read_or_default(&self.data_dir.join("settings.json"), "settings")
            .unwrap_or_default()
    }

    pub fn save_settings(&self, settings: &Settings) -> StoreResult<()> {
        self.write_json(&self.data_dir.join("settings.json"), settings)
    }

    // ── Colored works ───────────────────────────────────────────────────

    /// All saved works, most recent first. Degrades to an empty gallery.
    pub fn load_colored_works(&self) -> Vec<ColoredWork> {
        self.read_or_default(&self.data_dir.join("works.json"), "colored works")
            .unwrap_or_default()
    }

    /// Prepend a new work, or replace an existing one with the same id.
    pub fn save_colored_work(&self, work: &ColoredWork) -> StoreResult<()> {
        let mut works = self.load_colored_works();
        match works.iter_mut().find(|w| w.id == work.id) {
            Some(existing) => *existing = work.clone(),
            None => works.insert(0, work.clone()),
        }
        self.write_json(&self.data_dir.join("works.json"), &works)
    }

    pub fn delete_colored_work(&self, id: &str) -> StoreResult<()> {
        let mut works = self.load_colored_works();
        works.retain(|w| w.id != id);
        self.write_json(&self.data_dir.join("works.json"), &works)
    }

    // ── Coloring progress ───────────────────────────────────────────────

    /// Saved progress for a drawing, or `None` when there is none (or the
    /// file is unreadable).
    pub fn load_progress(&self, drawing_id: &str) -> Option<ColoringProgress> {
        self.read_or_default(&self.progress_path(drawing_id), "progress")
    }

    pub fn save_progress(&self, progress: &ColoringProgress) -> StoreResult<()> {
        self.write_json(&self.progress_path(progress.drawing_id.as_str()), progress)
    }

    pub fn clear_progress(&self, drawing_id: &str) -> StoreResult<()> {
        let path = self.progress_path(drawing_id);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn progress_path(&self, drawing_id: &str) -> PathBuf {
        self.data_dir.join("progress").join(format!("{drawing_id}.json"))
    }

    // ── Plumbing ────────────────────────────────────────────────────────

    fn read_or_default<T: serde::de::DeserializeOwned>(
        &self,
        path: &Path,
        what: &str,
    ) -> Option<T> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("failed to read {what} from {}: {e}", path.display());
                return None;
            }
        };
        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("failed to parse {what} from {}: {e}", path.display());
                None
            }
        }
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> StoreResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(value)?;
        fs::write(path, json)?;
        Ok(())
    }
}
