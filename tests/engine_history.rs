use colorink::engine::{ColoringEngine, MAX_RECENT_COLORS, MAX_UNDO_STEPS, SnapshotHistory};
use colorink::zone::{GRID_QUANTUM, ZoneKey, ZoneMap};

#[test]
fn nearby_taps_share_a_zone() {
    assert_eq!(ZoneKey::quantize(100.0, 100.0), ZoneKey { x: 104, y: 104 });
    assert_eq!(ZoneKey::quantize(102.0, 101.0), ZoneKey { x: 104, y: 104 });
    assert_ne!(
        ZoneKey::quantize(100.0, 100.0),
        ZoneKey::quantize(100.0 + GRID_QUANTUM * 2.0, 100.0)
    );
}

#[test]
fn apply_color_paints_one_zone() {
    let mut engine = ColoringEngine::new();
    assert!(engine.apply_color(100.0, 100.0, "#FF3366"));
    assert_eq!(engine.zones().len(), 1);
    assert_eq!(
        engine.zones().color_at(ZoneKey::quantize(100.0, 100.0)),
        Some("#FF3366")
    );
}

#[test]
fn repainting_same_color_is_a_no_op() {
    let mut engine = ColoringEngine::new();
    engine.apply_color(100.0, 100.0, "#FF3366");
    engine.apply_color(300.0, 300.0, "#00CED1");
    engine.undo();

    let zones_before = engine.zones().clone();
    let recents_before = engine.recent_colors().to_vec();
    let could_redo = engine.can_redo();

    // Same zone, same color: nothing may change, including history.
    assert!(!engine.apply_color(101.0, 101.0, "#FF3366"));
    assert_eq!(engine.zones(), &zones_before);
    assert_eq!(engine.recent_colors(), recents_before.as_slice());
    assert_eq!(engine.can_redo(), could_redo);
}

#[test]
fn repainting_with_new_color_overwrites() {
    let mut engine = ColoringEngine::new();
    engine.apply_color(100.0, 100.0, "#FF3366");
    engine.apply_color(100.0, 100.0, "#00CED1");
    assert_eq!(engine.zones().len(), 1);
    assert_eq!(
        engine.zones().color_at(ZoneKey::quantize(100.0, 100.0)),
        Some("#00CED1")
    );
}

#[test]
fn undo_then_redo_round_trips() {
    let mut engine = ColoringEngine::new();
    engine.apply_color(10.0, 10.0, "#FF0000");
    engine.apply_color(50.0, 50.0, "#00FF00");
    engine.apply_color(90.0, 90.0, "#0000FF");
    let before = engine.zones().clone();

    assert!(engine.undo());
    assert_ne!(engine.zones(), &before);
    assert!(engine.redo());
    assert_eq!(engine.zones(), &before);
}

#[test]
fn apply_color_clears_redo() {
    let mut engine = ColoringEngine::new();
    engine.apply_color(10.0, 10.0, "#FF0000");
    engine.apply_color(50.0, 50.0, "#00FF00");
    engine.undo();
    assert!(engine.can_redo());

    engine.apply_color(90.0, 90.0, "#0000FF");
    assert!(!engine.can_redo());
}

#[test]
fn undo_redo_no_op_on_empty_stacks() {
    let mut engine = ColoringEngine::new();
    assert!(!engine.undo());
    assert!(!engine.redo());
    assert!(engine.zones().is_empty());
}

#[test]
fn history_never_exceeds_the_cap() {
    let mut engine = ColoringEngine::new();
    for i in 0..(MAX_UNDO_STEPS + 15) {
        engine.apply_color(i as f32 * GRID_QUANTUM * 2.0, 0.0, "#FF3366");
    }

    let mut undone = 0;
    while engine.undo() {
        undone += 1;
    }
    assert_eq!(undone, MAX_UNDO_STEPS);

    let mut redone = 0;
    while engine.redo() {
        redone += 1;
    }
    assert_eq!(redone, MAX_UNDO_STEPS);
}

#[test]
fn cap_evicts_oldest_snapshots_first() {
    let mut history = SnapshotHistory::with_depth(2);
    let mut map = ZoneMap::new();

    for color in ["#111111", "#222222", "#333333"] {
        history.record_edit(map.clone());
        map.set(ZoneKey::quantize(0.0, 0.0), color.to_owned());
    }

    // Depth 2: the snapshot from before "#111111" was evicted.
    let current = map.clone();
    let one_back = history.undo(&current).unwrap();
    assert_eq!(one_back.color_at(ZoneKey::quantize(0.0, 0.0)), Some("#222222"));
    let two_back = history.undo(&one_back).unwrap();
    assert_eq!(two_back.color_at(ZoneKey::quantize(0.0, 0.0)), Some("#111111"));
    assert!(history.undo(&two_back).is_none());
}

#[test]
fn reset_is_undoable() {
    let mut engine = ColoringEngine::new();
    engine.apply_color(10.0, 10.0, "#FF0000");
    engine.apply_color(50.0, 50.0, "#00FF00");
    let before = engine.zones().clone();

    engine.reset();
    assert!(engine.zones().is_empty());
    assert!(!engine.can_redo());

    assert!(engine.undo());
    assert_eq!(engine.zones(), &before);
}

#[test]
fn complete_returns_the_work_and_resets() {
    let mut engine = ColoringEngine::new();
    engine.apply_color(10.0, 10.0, "#FF0000");
    engine.apply_color(50.0, 50.0, "#00FF00");

    let finished = engine.complete();
    assert_eq!(finished.len(), 2);
    assert!(engine.zones().is_empty());

    // The completed state is still reachable through undo.
    assert!(engine.undo());
    assert_eq!(engine.zones(), &finished);
}

#[test]
fn recent_colors_dedupe_and_cap() {
    let mut engine = ColoringEngine::new();
    let colors = [
        "#000001", "#000002", "#000003", "#000004", "#000005", "#000006", "#000007", "#000008",
        "#000009", "#00000a",
    ];
    for (i, color) in colors.iter().enumerate() {
        engine.apply_color(i as f32 * GRID_QUANTUM * 2.0, 0.0, color);
    }

    assert_eq!(engine.recent_colors().len(), MAX_RECENT_COLORS);
    assert_eq!(engine.recent_colors()[0], "#00000a");

    // Reselect an older color: moves to front, length unchanged.
    let len_before = engine.recent_colors().len();
    engine.apply_color(400.0, 400.0, "#000005");
    assert_eq!(engine.recent_colors().len(), len_before);
    assert_eq!(engine.recent_colors()[0], "#000005");

    let mut sorted = engine.recent_colors().to_vec();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), engine.recent_colors().len());
}

#[test]
fn saved_recents_hydrate_in_order() {
    let engine = ColoringEngine::from_saved(
        ZoneMap::new(),
        vec!["#ff0000".to_owned(), "#00ff00".to_owned()],
    );
    assert_eq!(engine.recent_colors(), ["#ff0000", "#00ff00"]);
}

#[test]
fn zone_map_serializes_with_comma_keys() {
    let mut map = ZoneMap::new();
    map.set(ZoneKey { x: 104, y: 56 }, "#ff3366".to_owned());

    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r##"{"104,56":"#ff3366"}"##);

    let parsed: ZoneMap = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, map);
}
