use colorink::catalog;
use colorink::session::{ColoringSession, DEBOUNCE_SECS};
use colorink::state::AppState;
use colorink::store::{ColoringProgress, Settings, Store};
use colorink::zone::ZoneKey;
use tempfile::TempDir;

fn test_store() -> (TempDir, Store) {
    let dir = TempDir::new().unwrap();
    let store = Store::new(dir.path());
    (dir, store)
}

#[test]
fn koi_paint_then_undo_produces_no_work() {
    let (_dir, store) = test_store();
    let drawing = catalog::find("koi").unwrap();

    let mut session = ColoringSession::open(drawing, &store);
    assert!(session.engine().zones().is_empty());

    session.apply_color(100.0, 100.0, "#FF3366", 0.0);
    assert_eq!(session.engine().zones().len(), 1);

    session.undo(1.0);
    assert!(session.engine().zones().is_empty());

    assert!(store.load_colored_works().is_empty());
}

#[test]
fn completing_a_drawing_freezes_the_work_and_resets() {
    let (_dir, store) = test_store();
    let drawing = catalog::find("flower").unwrap();
    let mut state = AppState::load(&store);

    let mut session = ColoringSession::open(drawing, &store);
    session.apply_color(10.0, 10.0, "#FF0000", 0.0);
    session.apply_color(60.0, 60.0, "#00FF00", 0.1);
    session.apply_color(110.0, 110.0, "#0000FF", 0.2);

    let outcome = session.complete(&store, &mut state).unwrap();
    assert!(!outcome.show_interstitial);

    // The work embeds all three zones; the live map is reset.
    let works = store.load_colored_works();
    assert_eq!(works.len(), 1);
    assert_eq!(works[0].id, outcome.work_id);
    assert_eq!(works[0].drawing_id, "flower");
    assert_eq!(works[0].zones.len(), 3);
    assert!(session.engine().zones().is_empty());

    // The counter increments exactly once and the drawing is reusable.
    assert_eq!(state.settings().works_completed, 1);
    assert_eq!(store.load_settings().works_completed, 1);
    assert!(store.load_progress("flower").is_none());
}

#[test]
fn failed_work_save_leaves_the_session_retryable() {
    let (dir, store) = test_store();
    let drawing = catalog::find("koi").unwrap();
    let mut state = AppState::load(&store);
    let mut session = ColoringSession::open(drawing, &store);

    session.apply_color(100.0, 100.0, "#FF3366", 0.0);
    session.flush(&store);
    session.apply_color(200.0, 200.0, "#00CED1", 1.0);

    // Occupy the works path with a directory so the save cannot succeed.
    std::fs::create_dir(dir.path().join("works.json")).unwrap();
    assert!(session.complete(&store, &mut state).is_err());

    // The live map, the counter and the stored progress all survive, and the
    // still-armed debounce must not flush an emptied map over them.
    assert_eq!(session.engine().zones().len(), 2);
    assert_eq!(state.settings().works_completed, 0);
    session.tick(&store, 1.0 + DEBOUNCE_SECS);
    assert_eq!(store.load_progress("koi").unwrap().zones.len(), 2);
}

#[test]
fn every_third_completion_requests_the_interstitial() {
    let (_dir, store) = test_store();
    let drawing = catalog::find("flower").unwrap();
    let mut state = AppState::load(&store);
    let mut session = ColoringSession::open(drawing, &store);

    for expected in [false, false, true] {
        session.apply_color(10.0, 10.0, "#FF0000", 0.0);
        let outcome = session.complete(&store, &mut state).unwrap();
        assert_eq!(outcome.show_interstitial, expected);
    }
}

#[test]
fn progress_flushes_after_the_debounce_window() {
    let (_dir, store) = test_store();
    let drawing = catalog::find("mushroom").unwrap();
    let mut session = ColoringSession::open(drawing, &store);

    session.apply_color(100.0, 100.0, "#FF3366", 0.0);
    session.tick(&store, DEBOUNCE_SECS - 0.5);
    assert!(store.load_progress("mushroom").is_none());

    session.tick(&store, DEBOUNCE_SECS + 0.1);
    let saved = store.load_progress("mushroom").unwrap();
    assert_eq!(saved.zones.len(), 1);
    assert_eq!(saved.recent_colors, ["#FF3366"]);
}

#[test]
fn newer_paints_extend_the_debounce_window() {
    let (_dir, store) = test_store();
    let drawing = catalog::find("mushroom").unwrap();
    let mut session = ColoringSession::open(drawing, &store);

    session.apply_color(100.0, 100.0, "#FF3366", 0.0);
    session.apply_color(200.0, 200.0, "#00CED1", 1.0);
    // The first paint's window has passed, but the second re-armed it.
    session.tick(&store, 1.6);
    assert!(store.load_progress("mushroom").is_none());

    session.tick(&store, 1.0 + DEBOUNCE_SECS);
    assert_eq!(store.load_progress("mushroom").unwrap().zones.len(), 2);
}

#[test]
fn closing_flushes_immediately() {
    let (_dir, store) = test_store();
    let drawing = catalog::find("koi").unwrap();
    let mut session = ColoringSession::open(drawing, &store);

    session.apply_color(100.0, 100.0, "#FF3366", 0.0);
    session.close(&store);
    assert_eq!(store.load_progress("koi").unwrap().zones.len(), 1);
}

#[test]
fn sessions_hydrate_from_saved_progress() {
    let (_dir, store) = test_store();
    let drawing = catalog::find("koi").unwrap();

    let mut first = ColoringSession::open(drawing, &store);
    first.apply_color(100.0, 100.0, "#FF3366", 0.0);
    first.apply_color(200.0, 200.0, "#00CED1", 0.1);
    first.close(&store);

    let second = ColoringSession::open(drawing, &store);
    assert_eq!(second.engine().zones().len(), 2);
    assert_eq!(
        second.engine().zones().color_at(ZoneKey::quantize(100.0, 100.0)),
        Some("#FF3366")
    );
    assert_eq!(second.engine().recent_colors()[0], "#00CED1");
}

#[test]
fn settings_degrade_to_defaults_on_corruption() {
    let (dir, store) = test_store();
    std::fs::write(dir.path().join("settings.json"), "{not json").unwrap();
    assert_eq!(store.load_settings(), Settings::default());
}

#[test]
fn missing_progress_reads_as_absent() {
    let (_dir, store) = test_store();
    assert!(store.load_progress("koi").is_none());
}

#[test]
fn colored_works_are_ordered_most_recent_first() {
    let (_dir, store) = test_store();
    let drawing = catalog::find("flower").unwrap();
    let mut state = AppState::load(&store);
    let mut session = ColoringSession::open(drawing, &store);

    session.apply_color(10.0, 10.0, "#FF0000", 0.0);
    let first = session.complete(&store, &mut state).unwrap();
    session.apply_color(10.0, 10.0, "#00FF00", 1.0);
    let second = session.complete(&store, &mut state).unwrap();

    let works = store.load_colored_works();
    assert_eq!(works.len(), 2);
    assert_eq!(works[0].id, second.work_id);
    assert_eq!(works[1].id, first.work_id);

    state.remove_colored_work(&store, &second.work_id);
    let works = store.load_colored_works();
    assert_eq!(works.len(), 1);
    assert_eq!(works[0].id, first.work_id);
}

#[test]
fn unlocking_a_palette_persists() {
    let (_dir, store) = test_store();
    let mut state = AppState::load(&store);

    assert!(state.is_palette_unlocked("classic"));
    assert!(!state.is_palette_unlocked("neon"));

    state.unlock_palette(&store, "neon");
    assert!(state.is_palette_unlocked("neon"));

    let reloaded = AppState::load(&store);
    assert!(reloaded.is_palette_unlocked("neon"));
}

#[test]
fn save_progress_is_last_write_wins() {
    let (_dir, store) = test_store();
    let mut progress = ColoringProgress {
        drawing_id: "koi".to_owned(),
        zones: Default::default(),
        recent_colors: vec!["#ff0000".to_owned()],
        last_modified: 1,
    };
    store.save_progress(&progress).unwrap();
    progress.recent_colors = vec!["#00ff00".to_owned()];
    progress.last_modified = 2;
    store.save_progress(&progress).unwrap();

    let saved = store.load_progress("koi").unwrap();
    assert_eq!(saved.recent_colors, ["#00ff00"]);
    assert_eq!(saved.last_modified, 2);
}
