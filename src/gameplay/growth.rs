use bevy::prelude::*;

use crate::core::components::Tree;
use crate::core::config::GameConfig;
use crate::core::events::{GardenChanged, TreeWatered};
use crate::core::plugin::ensure_core;
use crate::core::system::system_order::GardenSet;
use crate::rendering::textures::texture;

/// One growth stage per completed watering, per tree.
pub struct GrowthPlugin;

impl Plugin for GrowthPlugin {
    fn build(&self, app: &mut App) {
        ensure_core(app);
        app.add_systems(Update, advance_growth.in_set(GardenSet::Growth));
    }
}

fn advance_growth(
    mut ev_watered: EventReader<TreeWatered>,
    cfg: Res<GameConfig>,
    asset_server: Option<Res<AssetServer>>,
    mut q_trees: Query<(&mut Tree, Option<&mut Sprite>)>,
    mut ev_changed: EventWriter<GardenChanged>,
) {
    for ev in ev_watered.read() {
        let Ok((mut tree, sprite)) = q_trees.get_mut(ev.tree) else {
            warn!(target: "growth", "watered entity {:?} is gone", ev.tree);
            continue;
        };
        let Some(next) = tree.name.advanced() else {
            debug!(target: "growth", "'{}' is at the last stage; skipping", tree.name);
            continue;
        };
        info!(target: "growth", "tree #{} '{}' -> '{}'", tree.slot, tree.name, next);
        if let Some(mut sprite) = sprite {
            sprite.image = texture(
                asset_server.as_deref(),
                &next.texture_path(&cfg.garden.textures_dir),
            );
        }
        tree.name = next;
        ev_changed.write(GardenChanged);
    }
}
