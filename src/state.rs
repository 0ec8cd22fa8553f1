use crate::store::{ColoredWork, Settings, Store, StoreResult};

/// The explicitly owned application state: user settings plus the gallery of
/// completed works.
///
/// There is exactly one writer (the mutating methods here, which also write
/// through to the [`Store`]) and many readers. Loading degrades to defaults
/// so the app starts even with storage unavailable.
#[derive(Debug)]
pub struct AppState {
    settings: Settings,
    colored_works: Vec<ColoredWork>,
}

impl AppState {
    pub fn load(store: &Store) -> Self {
        Self {
            settings: store.load_settings(),
            colored_works: store.load_colored_works(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Most recent first.
    pub fn colored_works(&self) -> &[ColoredWork] {
        &self.colored_works
    }

    /// Mutate settings and persist the result. The in-memory copy always
    /// updates; a failed write is logged and the session continues.
    pub fn update_settings(&mut self, store: &Store, update: impl FnOnce(&mut Settings)) {
        update(&mut self.settings);
        if let Err(e) = store.save_settings(&self.settings) {
            log::error!("failed to save settings: {e}");
        }
    }

    /// Add a palette to the unlocked set (the simulated rewarded-ad reward).
    pub fn unlock_palette(&mut self, store: &Store, palette_id: &str) {
        log::info!("unlocking palette {palette_id}");
        let id = palette_id.to_owned();
        self.update_settings(store, |s| {
            s.unlocked_palettes.insert(id);
        });
    }

    pub fn is_palette_unlocked(&self, palette_id: &str) -> bool {
        self.settings.unlocked_palettes.contains(palette_id)
    }

    /// Record a freshly completed work at the front of the gallery.
    pub fn add_colored_work(&mut self, store: &Store, work: ColoredWork) -> StoreResult<()> {
        store.save_colored_work(&work)?;
        match self.colored_works.iter_mut().find(|w| w.id == work.id) {
            Some(existing) => *existing = work,
            None => self.colored_works.insert(0, work),
        }
        Ok(())
    }

    pub fn remove_colored_work(&mut self, store: &Store, id: &str) {
        self.colored_works.retain(|w| w.id != id);
        if let Err(e) = store.delete_colored_work(id) {
            log::error!("failed to delete colored work {id}: {e}");
        }
    }
}
