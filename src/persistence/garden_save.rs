use bevy::prelude::*;

use crate::core::components::Tree;
use crate::core::config::GameConfig;
use crate::core::events::GardenChanged;
use crate::core::plugin::ensure_core;
use crate::core::system::system_order::GardenSet;
use crate::core::tree_name::TreeName;

use super::store::{FileSaveStore, GardenStore, MemorySaveStore, SaveStore};

/// Where the bootstrap names came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialNames {
    Persisted(Vec<TreeName>),
    /// Nothing saved yet.
    NoSave,
    /// A save exists but could not be used.
    Defaults { reason: String },
}

/// Read the save slot and accept it only if it holds exactly `defaults.len()`
/// well-formed names; otherwise fall back to `defaults`.
pub fn load_tree_names(store: &dyn SaveStore, key: &str, defaults: &[TreeName]) -> (Vec<TreeName>, InitialNames) {
    let fallback = |reason: String| (defaults.to_vec(), InitialNames::Defaults { reason });
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return (defaults.to_vec(), InitialNames::NoSave),
        Err(e) => return fallback(format!("save unreadable: {e:#}")),
    };
    if raw.len() != defaults.len() {
        return fallback(format!(
            "saved slot has {} names, expected {}",
            raw.len(),
            defaults.len()
        ));
    }
    let mut names = Vec::with_capacity(raw.len());
    for (i, s) in raw.iter().enumerate() {
        match s.parse::<TreeName>() {
            Ok(n) => names.push(n),
            Err(e) => return fallback(format!("saved name #{i} '{s}' invalid: {e}")),
        }
    }
    (names.clone(), InitialNames::Persisted(names))
}

/// Serialize names in slot order and overwrite the slot.
pub fn save_tree_names(store: &mut dyn SaveStore, key: &str, names: &[TreeName]) -> anyhow::Result<()> {
    let values: Vec<String> = names.iter().map(ToString::to_string).collect();
    store.set(key, &values)
}

pub struct PersistencePlugin;

impl Plugin for PersistencePlugin {
    fn build(&self, app: &mut App) {
        ensure_core(app);
        app.add_systems(PreStartup, init_garden_store)
            .add_systems(Update, save_garden.in_set(GardenSet::Persist));
    }
}

/// Open the configured file store unless something (a test, the CLI) already
/// inserted one.
fn init_garden_store(mut commands: Commands, cfg: Res<GameConfig>, existing: Option<Res<GardenStore>>) {
    if existing.is_some() {
        return;
    }
    let path = cfg.save.path.trim();
    if path.is_empty() {
        info!(target: "persistence", "no save path configured; progress kept in memory only");
        commands.insert_resource(GardenStore::new(MemorySaveStore::default()));
    } else {
        info!(target: "persistence", "save file: {path}");
        commands.insert_resource(GardenStore::new(FileSaveStore::new(path)));
    }
}

fn save_garden(
    mut ev_changed: EventReader<GardenChanged>,
    cfg: Res<GameConfig>,
    store: Option<ResMut<GardenStore>>,
    q_trees: Query<&Tree>,
) {
    // Several changes in one frame collapse into one write.
    if ev_changed.read().count() == 0 {
        return;
    }
    let Some(mut store) = store else {
        warn!(target: "persistence", "GardenStore missing; change not saved");
        return;
    };
    let mut trees: Vec<&Tree> = q_trees.iter().collect();
    trees.sort_by_key(|t| t.slot);
    let names: Vec<TreeName> = trees.into_iter().map(|t| t.name.clone()).collect();
    match save_tree_names(store.0.as_mut(), &cfg.save.key, &names) {
        Ok(()) => debug!(target: "persistence", "saved {} tree names", names.len()),
        Err(e) => warn!(target: "persistence", "saving garden failed: {e:#}"),
    }
}
