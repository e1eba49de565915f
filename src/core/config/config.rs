use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::core::tree_name::TreeName;

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Orchard Rain".into(),
            auto_close: 0.0,
        }
    }
}

/// One tree slot: initial name plus normalized position (fractions of scene
/// width/height measured from the bottom-left corner).
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TreeSlotConfig {
    pub name: TreeName,
    pub pos: (f32, f32),
}
impl TreeSlotConfig {
    fn new(species: &str, stage: u32, x: f32, y: f32) -> Self {
        Self {
            name: TreeName::new(species, stage),
            pos: (x, y),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GardenConfig {
    pub trees: Vec<TreeSlotConfig>,
    /// Tree footprint side as a fraction of scene width.
    pub tree_size_frac: f32,
    pub background: String,
    pub textures_dir: String,
}
impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            trees: vec![
                TreeSlotConfig::new("mango", 1, 0.10, 0.70),
                TreeSlotConfig::new("magyi", 2, 0.15, 0.30),
                TreeSlotConfig::new("magyi", 1, 0.30, 0.73),
                TreeSlotConfig::new("magyi", 3, 0.40, 0.30),
                TreeSlotConfig::new("mango", 3, 0.50, 0.65),
                TreeSlotConfig::new("mango", 1, 0.60, 0.35),
                TreeSlotConfig::new("magyi", 3, 0.85, 0.70),
                TreeSlotConfig::new("magyi", 3, 0.75, 0.25),
            ],
            tree_size_frac: 0.2,
            background: "background.png".into(),
            textures_dir: "trees".into(),
        }
    }
}
impl GardenConfig {
    pub fn default_names(&self) -> Vec<TreeName> {
        self.trees.iter().map(|t| t.name.clone()).collect()
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WaterButtonConfig {
    pub width_frac: f32,
    pub height_frac: f32,
    pub margin: f32,
    pub texture: String,
}
impl Default for WaterButtonConfig {
    fn default() -> Self {
        Self {
            width_frac: 0.09,
            height_frac: 0.07,
            margin: 10.0,
            texture: "waterdrop.png".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AffordanceConfig {
    /// Side as a fraction of the tree footprint.
    pub size_frac: f32,
    /// Vertical offset above the tree centre, as a fraction of tree height.
    pub offset_frac: f32,
    pub texture: String,
}
impl Default for AffordanceConfig {
    fn default() -> Self {
        Self {
            size_frac: 0.3,
            offset_frac: 0.55,
            texture: "waterdrop.png".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RainConfig {
    /// How long the effect stays on screen before growth is applied.
    pub visible_secs: f32,
    /// Lifetime of a single drop (top of band to ground line).
    pub fall_secs: f32,
    pub start_offset_frac: f32,
    pub top_divisor: f32,
    pub end_offset_frac: f32,
    pub drops_per_sec: f32,
    pub drop_size: (f32, f32),
    pub color: (f32, f32, f32, f32),
}
impl Default for RainConfig {
    fn default() -> Self {
        Self {
            visible_secs: 3.0,
            fall_secs: 1.2,
            start_offset_frac: 0.2,
            top_divisor: 1.3,
            end_offset_frac: 0.1,
            drops_per_sec: 90.0,
            drop_size: (2.0, 10.0),
            color: (0.55, 0.75, 1.0, 0.85),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LabelConfig {
    pub hold_secs: f32,
    pub fade_secs: f32,
    pub font_size: f32,
    /// Vertical offset above the tree centre, as a fraction of tree height.
    pub offset_frac: f32,
}
impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            hold_secs: 1.5,
            fade_secs: 0.5,
            font_size: 28.0,
            offset_frac: 0.65,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SaveConfig {
    pub path: String,
    pub key: String,
}
impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            path: "saves/garden.ron".into(),
            key: "tree_names".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    pub log_interval: f32,
}
impl Default for DebugConfig {
    fn default() -> Self {
        Self { log_interval: 5.0 }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub garden: GardenConfig,
    pub water_button: WaterButtonConfig,
    pub affordance: AffordanceConfig,
    pub rain: RainConfig,
    pub label: LabelConfig,
    pub save: SaveConfig,
    pub hide_affordances_after_watering: bool,
    pub debug: DebugConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
    /// Merge every readable file in order (later files override earlier keys)
    /// and deserialize the result. Returns (config, used paths, errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        let mut merged: Option<ron::Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<ron::Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            overlay_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.garden.trees.is_empty() {
            w.push("garden.trees is empty; nothing to water".into());
        }
        for (i, slot) in self.garden.trees.iter().enumerate() {
            let (x, y) = slot.pos;
            if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) {
                w.push(format!(
                    "garden.trees[{i}] ({}) position ({x}, {y}) outside the 0..1 scene range",
                    slot.name
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.garden.tree_size_frac) || self.garden.tree_size_frac == 0.0 {
            w.push(format!(
                "garden.tree_size_frac {} should be in (0, 1]",
                self.garden.tree_size_frac
            ));
        }
        if self.affordance.size_frac <= 0.0 {
            w.push("affordance.size_frac must be > 0".into());
        }
        if self.rain.visible_secs <= 0.0 {
            w.push("rain.visible_secs must be > 0".into());
        }
        if self.rain.fall_secs <= 0.0 {
            w.push("rain.fall_secs must be > 0".into());
        } else if self.rain.fall_secs > self.rain.visible_secs {
            w.push(format!(
                "rain.fall_secs {} longer than rain.visible_secs {}; drops vanish mid-fall",
                self.rain.fall_secs, self.rain.visible_secs
            ));
        }
        if self.rain.top_divisor <= 0.0 {
            w.push("rain.top_divisor must be > 0".into());
        }
        if self.rain.start_offset_frac + self.rain.end_offset_frac >= 1.0 {
            w.push("rain start/end offsets leave no fall distance".into());
        }
        if self.label.hold_secs < 0.0 || self.label.fade_secs < 0.0 {
            w.push("label hold/fade durations must be >= 0".into());
        }
        if self.save.key.trim().is_empty() {
            w.push("save.key is empty".into());
        }
        if self.save.path.trim().is_empty() {
            w.push("save.path is empty; progress will not persist".into());
        }
        w
    }
}

/// Lay `overlay` over `base`. Maps merge key by key; anything else (lists such
/// as `garden.trees`, scalars) is replaced whole.
fn overlay_value(base: &mut ron::Value, overlay: ron::Value) {
    match (base, overlay) {
        (ron::Value::Map(base_map), ron::Value::Map(overlay_map)) => {
            for (key, value) in overlay_map.into_iter() {
                let mut pending = Some(value);
                if let Some((_, slot)) = base_map.iter_mut().find(|(k, _)| **k == key) {
                    if let Some(value) = pending.take() {
                        overlay_value(slot, value);
                    }
                }
                if let Some(value) = pending {
                    base_map.insert(key, value);
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_plant_eight_trees() {
        let cfg = GameConfig::default();
        let names: Vec<String> = cfg
            .garden
            .default_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(
            names,
            ["mango1", "magyi2", "magyi1", "magyi3", "mango3", "mango1", "magyi3", "magyi3"]
        );
        assert!(!cfg.hide_affordances_after_watering);
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    }

    #[test]
    fn partial_ron_fills_defaults() {
        let cfg: GameConfig = ron::from_str(
            r#"(rain: (visible_secs: 2.0), hide_affordances_after_watering: true)"#,
        )
        .unwrap();
        assert_eq!(cfg.rain.visible_secs, 2.0);
        assert_eq!(cfg.rain.fall_secs, 1.2);
        assert!(cfg.hide_affordances_after_watering);
        assert_eq!(cfg.garden.trees.len(), 8);
    }

    #[test]
    fn bad_tree_name_is_a_parse_error() {
        let res = ron::from_str::<GameConfig>(
            r#"(garden: (trees: [(name: "mango", pos: (0.5, 0.5))]))"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn validate_flags_inverted_rain_timing() {
        let mut cfg = GameConfig::default();
        cfg.rain.fall_secs = 5.0;
        assert!(cfg.validate().iter().any(|w| w.contains("fall_secs")));
    }
}
