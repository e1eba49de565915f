use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::events::{
    GardenChanged, ShowAffordances, ShowTreeLabel, TapEvent, TreeWatered, WaterTree,
};
use crate::core::layout::SceneLayout;
use crate::core::phase::GardenPhase;
use crate::core::system::system_order::GardenSet;

/// Shared resources, events and set ordering. Every garden plugin pulls this
/// in, so any subset of them can be added to an `App` on its own.
pub struct GardenCorePlugin;

impl Plugin for GardenCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>()
            .init_resource::<GardenPhase>()
            .add_event::<TapEvent>()
            .add_event::<ShowAffordances>()
            .add_event::<WaterTree>()
            .add_event::<ShowTreeLabel>()
            .add_event::<TreeWatered>()
            .add_event::<GardenChanged>()
            .configure_sets(
                Update,
                (
                    GardenSet::Input,
                    GardenSet::Route,
                    GardenSet::Act,
                    GardenSet::Effects,
                    GardenSet::Growth,
                    GardenSet::Persist,
                )
                    .chain(),
            )
            .add_systems(PreStartup, init_scene_layout);
    }
}

pub(crate) fn ensure_core(app: &mut App) {
    if !app.is_plugin_added::<GardenCorePlugin>() {
        app.add_plugins(GardenCorePlugin);
    }
}

fn init_scene_layout(mut commands: Commands, cfg: Res<GameConfig>, existing: Option<Res<SceneLayout>>) {
    if existing.is_none() {
        commands.insert_resource(SceneLayout::from_config(&cfg));
    }
}
