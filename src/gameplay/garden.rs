use bevy::prelude::*;

use crate::core::components::{Footprint, GardenBackground, Tree, WaterButton};
use crate::core::config::GameConfig;
use crate::core::layout::SceneLayout;
use crate::core::plugin::ensure_core;
use crate::interaction::picking::{StackLayer, TapTarget};
use crate::persistence::{load_tree_names, GardenStore, InitialNames};
use crate::rendering::textures::{sized_sprite, texture};

/// Builds the fixed scene: background, one tree per configured slot, and the
/// global water button.
pub struct GardenPlugin;

impl Plugin for GardenPlugin {
    fn build(&self, app: &mut App) {
        ensure_core(app);
        app.add_systems(Startup, spawn_garden);
    }
}

pub fn spawn_garden(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    layout: Option<Res<SceneLayout>>,
    store: Option<Res<GardenStore>>,
    asset_server: Option<Res<AssetServer>>,
) {
    let layout = layout.map(|l| *l).unwrap_or_else(|| SceneLayout::from_config(&cfg));
    let assets = asset_server.as_deref();

    commands.spawn((
        GardenBackground,
        sized_sprite(texture(assets, &cfg.garden.background), layout.size),
        Transform::from_xyz(0.0, 0.0, StackLayer::Background.z()),
        TapTarget::new(StackLayer::Background, layout.size),
        Name::new("Background"),
    ));

    let defaults = cfg.garden.default_names();
    let names = match store.as_deref() {
        Some(store) => {
            let (names, source) = load_tree_names(store.0.as_ref(), &cfg.save.key, &defaults);
            match source {
                InitialNames::Persisted(_) => {
                    info!(target: "garden", "restored {} trees from save", names.len())
                }
                InitialNames::NoSave => info!(target: "garden", "no save yet; planting default trees"),
                InitialNames::Defaults { reason } => {
                    warn!(target: "garden", "using default trees ({reason})")
                }
            }
            names
        }
        None => {
            warn!(target: "garden", "GardenStore missing; using default trees");
            defaults
        }
    };

    let side = layout.tree_side(&cfg);
    let size = Vec2::splat(side);
    for (slot, (slot_cfg, name)) in cfg.garden.trees.iter().zip(names).enumerate() {
        let pos = layout.normalized_to_world(Vec2::new(slot_cfg.pos.0, slot_cfg.pos.1));
        let image = texture(assets, &name.texture_path(&cfg.garden.textures_dir));
        debug!(target: "garden", "tree #{slot} '{name}' at {pos}");
        commands.spawn((
            Name::new(format!("Tree:{slot}")),
            Tree { slot, name },
            Footprint(size),
            sized_sprite(image, size),
            Transform::from_xyz(pos.x, pos.y, StackLayer::Tree.z()),
            TapTarget::new(StackLayer::Tree, size),
        ));
    }

    let (button_pos, button_size) = layout.water_button(&cfg);
    commands.spawn((
        WaterButton,
        sized_sprite(texture(assets, &cfg.water_button.texture), button_size),
        Transform::from_xyz(button_pos.x, button_pos.y, StackLayer::Button.z()),
        TapTarget::new(StackLayer::Button, button_size),
        Name::new("WaterButton"),
    ));
    info!(
        target: "garden",
        "garden ready: {} trees, scene {}x{}",
        cfg.garden.trees.len(),
        layout.size.x,
        layout.size.y
    );
}
