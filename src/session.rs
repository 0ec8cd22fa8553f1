use uuid::Uuid;

use crate::catalog::Drawing;
use crate::engine::ColoringEngine;
use crate::state::AppState;
use crate::store::{ColoredWork, ColoringProgress, Store, StoreResult};
use crate::util::time;

/// How long painting must pause before progress is flushed to the store.
pub const DEBOUNCE_SECS: f64 = 1.5;

/// Show the interstitial placeholder after every this-many completed works.
pub const INTERSTITIAL_EVERY_N_WORKS: u32 = 3;

/// What happened when a drawing was completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOutcome {
    pub work_id: String,
    pub show_interstitial: bool,
}

/// One open drawing: the engine plus the debounced persistence boundary.
///
/// Paints (and undo/redo/reset) mark the session dirty and re-arm a single
/// debounce window; [`ColoringSession::tick`] flushes once input pauses.
/// Closing the session flushes immediately, so no pending write outlives it.
#[derive(Debug)]
pub struct ColoringSession {
    drawing: &'static Drawing,
    engine: ColoringEngine,
    /// Time of the most recent unsaved change, if any.
    dirty_at: Option<f64>,
}

impl ColoringSession {
    /// Open a drawing, hydrating from saved progress when there is any.
    pub fn open(drawing: &'static Drawing, store: &Store) -> Self {
        let engine = match store.load_progress(drawing.id) {
            Some(progress) => {
                log::info!(
                    "resuming {} with {} painted zones",
                    drawing.id,
                    progress.zones.len()
                );
                ColoringEngine::from_saved(progress.zones, progress.recent_colors)
            }
            None => ColoringEngine::new(),
        };
        Self {
            drawing,
            engine,
            dirty_at: None,
        }
    }

    pub fn drawing(&self) -> &'static Drawing {
        self.drawing
    }

    pub fn engine(&self) -> &ColoringEngine {
        &self.engine
    }

    /// Paint at an image-space point; re-arms the debounce window if the
    /// paint changed anything.
    pub fn apply_color(&mut self, x: f32, y: f32, color: &str, now: f64) -> bool {
        let changed = self.engine.apply_color(x, y, color);
        if changed {
            self.dirty_at = Some(now);
        }
        changed
    }

    pub fn undo(&mut self, now: f64) -> bool {
        let changed = self.engine.undo();
        if changed {
            self.dirty_at = Some(now);
        }
        changed
    }

    pub fn redo(&mut self, now: f64) -> bool {
        let changed = self.engine.redo();
        if changed {
            self.dirty_at = Some(now);
        }
        changed
    }

    pub fn reset(&mut self, now: f64) {
        self.engine.reset();
        self.dirty_at = Some(now);
    }

    /// Flush progress if the debounce window has elapsed without newer input.
    pub fn tick(&mut self, store: &Store, now: f64) {
        if self
            .dirty_at
            .is_some_and(|dirty_at| now - dirty_at >= DEBOUNCE_SECS)
        {
            self.flush(store);
        }
    }

    /// Persist progress immediately. Failures are logged; the session stays
    /// usable and will retry on the next flush.
    pub fn flush(&mut self, store: &Store) {
        let progress = ColoringProgress {
            drawing_id: self.drawing.id.to_owned(),
            zones: self.engine.zones().clone(),
            recent_colors: self.engine.recent_colors().to_vec(),
            last_modified: time::timestamp_secs(),
        };
        match store.save_progress(&progress) {
            Ok(()) => self.dirty_at = None,
            Err(e) => log::error!("failed to save progress for {}: {e}", self.drawing.id),
        }
    }

    /// Freeze the current zones as a [`ColoredWork`], clear stored progress
    /// and reset the engine so the drawing can be colored again. Increments
    /// `works_completed` exactly once.
    ///
    /// Nothing is torn down until the work is durably saved: on a failed
    /// write the live map, the debounce state and any stored progress are
    /// left untouched for a retry.
    pub fn complete(
        &mut self,
        store: &Store,
        state: &mut AppState,
    ) -> StoreResult<CompletionOutcome> {
        let work = ColoredWork {
            id: Uuid::new_v4().to_string(),
            drawing_id: self.drawing.id.to_owned(),
            drawing_title: self.drawing.title.to_owned(),
            zones: self.engine.zones().clone(),
            completed_at: time::timestamp_secs(),
        };
        let work_id = work.id.clone();
        state.add_colored_work(store, work)?;

        self.engine.reset();
        if let Err(e) = store.clear_progress(self.drawing.id) {
            log::warn!("failed to clear progress for {}: {e}", self.drawing.id);
        }
        self.dirty_at = None;

        state.update_settings(store, |s| s.works_completed += 1);
        let completed = state.settings().works_completed;
        log::info!("completed work {work_id} ({} total)", completed);

        Ok(CompletionOutcome {
            work_id,
            show_interstitial: completed % INTERSTITIAL_EVERY_N_WORKS == 0,
        })
    }

    /// Flush-on-exit: call when navigating away so an armed debounce timer
    /// never fires after teardown.
    pub fn close(&mut self, store: &Store) {
        if self.dirty_at.is_some() {
            self.flush(store);
        }
    }
}
