use std::fs;

use orchard_rain::GameConfig;

#[test]
fn defaults_are_valid() {
    let cfg = GameConfig::default();
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    assert_eq!(cfg.garden.trees.len(), 8);
    assert!(!cfg.hide_affordances_after_watering);
    assert_eq!(cfg.rain.visible_secs, 3.0);
    assert_eq!(cfg.rain.fall_secs, 1.2);
}

#[test]
fn shipped_config_matches_defaults() {
    let cfg = GameConfig::load_from_file("assets/config/game.ron").expect("shipped config parses");
    assert_eq!(cfg, GameConfig::default());
}

#[test]
fn later_layer_overrides_individual_keys() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("game.ron");
    let local = dir.path().join("game.local.ron");
    let missing = dir.path().join("nope.ron");
    fs::write(
        &base,
        "(window: (width: 800.0, height: 600.0), rain: (visible_secs: 4.0))",
    )
    .unwrap();
    fs::write(
        &local,
        "(rain: (fall_secs: 2.0), hide_affordances_after_watering: true)",
    )
    .unwrap();

    let (cfg, used, errors) = GameConfig::load_layered([&base, &local, &missing]);
    assert_eq!(used.len(), 2);
    assert_eq!(errors.len(), 1, "missing layer reported: {errors:?}");
    assert_eq!(cfg.window.width, 800.0);
    assert_eq!(cfg.rain.visible_secs, 4.0);
    assert_eq!(cfg.rain.fall_secs, 2.0);
    assert!(cfg.hide_affordances_after_watering);
    // Untouched sections keep their defaults.
    assert_eq!(cfg.label, GameConfig::default().label);
}

#[test]
fn bad_tree_name_rejects_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.ron");
    fs::write(&path, r#"(garden: (trees: [(name: "7up", pos: (0.5, 0.5))]))"#).unwrap();
    assert!(GameConfig::load_from_file(&path).is_err());
    let (cfg, _, errors) = GameConfig::load_layered([&path]);
    assert_eq!(cfg, GameConfig::default());
    assert!(!errors.is_empty());
}

#[test]
fn list_values_are_replaced_not_merged() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("game.ron");
    let local = dir.path().join("game.local.ron");
    fs::write(
        &base,
        r#"(garden: (trees: [
            (name: "mango1", pos: (0.1, 0.1)),
            (name: "mango2", pos: (0.2, 0.2)),
            (name: "mango3", pos: (0.3, 0.3)),
        ], tree_size_frac: 0.25))"#,
    )
    .unwrap();
    fs::write(&local, r#"(garden: (trees: [(name: "magyi7", pos: (0.5, 0.5))]))"#).unwrap();

    let (cfg, used, errors) = GameConfig::load_layered([&base, &local]);
    assert_eq!(used.len(), 2);
    assert!(errors.is_empty(), "{errors:?}");
    let names: Vec<String> = cfg.garden.default_names().iter().map(|n| n.to_string()).collect();
    assert_eq!(names, ["magyi7"]);
    // Sibling keys of the replaced list survive from the lower layer.
    assert_eq!(cfg.garden.tree_size_frac, 0.25);
}
