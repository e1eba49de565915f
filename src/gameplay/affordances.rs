use bevy::prelude::*;

use crate::core::components::{Footprint, Tree, WateringAffordance};
use crate::core::config::GameConfig;
use crate::core::events::ShowAffordances;
use crate::core::layout::SceneLayout;
use crate::core::phase::{transition, GardenPhase};
use crate::core::plugin::ensure_core;
use crate::core::system::system_order::GardenSet;
use crate::interaction::picking::{StackLayer, TapTarget};
use crate::rendering::textures::{sized_sprite, texture};

/// Per-tree watering buttons, (re)created whenever the water button is tapped.
pub struct AffordancePlugin;

impl Plugin for AffordancePlugin {
    fn build(&self, app: &mut App) {
        ensure_core(app);
        app.add_systems(Update, show_affordances.in_set(GardenSet::Act));
    }
}

fn show_affordances(
    mut commands: Commands,
    mut ev_show: EventReader<ShowAffordances>,
    cfg: Res<GameConfig>,
    layout: Option<Res<SceneLayout>>,
    asset_server: Option<Res<AssetServer>>,
    mut phase: ResMut<GardenPhase>,
    q_existing: Query<Entity, With<WateringAffordance>>,
    q_trees: Query<(Entity, &Tree, &Transform, &Footprint)>,
) {
    // Repeated taps in one frame produce the same single set.
    if ev_show.read().count() == 0 {
        return;
    }
    let removed = despawn_affordances(&mut commands, &q_existing);
    let layout = layout.map(|l| *l).unwrap_or_else(|| SceneLayout::from_config(&cfg));
    let image = texture(asset_server.as_deref(), &cfg.affordance.texture);

    let mut trees: Vec<_> = q_trees.iter().collect();
    trees.sort_by_key(|(_, t, _, _)| t.slot);
    for (tree_entity, tree, tf, footprint) in trees {
        let (pos, size) = layout.affordance(&cfg, tf.translation.truncate(), footprint.0);
        commands.spawn((
            WateringAffordance { tree: tree_entity },
            sized_sprite(image.clone(), size),
            Transform::from_xyz(pos.x, pos.y, StackLayer::Affordance.z()),
            TapTarget::new(StackLayer::Affordance, size),
            Name::new(format!("WaterDrop:{}", tree.name)),
        ));
    }
    debug!(target: "garden", "affordances shown (replaced {removed})");

    // Rain keeps running if the button is tapped mid-watering.
    if *phase == GardenPhase::Idle {
        transition(&mut phase, GardenPhase::Selecting);
    }
}

/// Despawn every affordance; returns how many there were.
pub fn despawn_affordances(
    commands: &mut Commands,
    q_existing: &Query<Entity, With<WateringAffordance>>,
) -> usize {
    let mut n = 0;
    for e in q_existing.iter() {
        commands.entity(e).despawn();
        n += 1;
    }
    n
}
