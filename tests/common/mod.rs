#![allow(dead_code)]
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use orchard_rain::core::events::TapEvent;
use orchard_rain::persistence::{GardenStore, MemorySaveStore};
use orchard_rain::{GameConfig, GardenScenePlugin, Tree, WaterButton, WateringAffordance};

pub const STEP_SECS: f32 = 0.1;
pub const SAVE_KEY: &str = "tree_names";

/// Headless scene, not yet updated. With `store: None` the persistence plugin
/// opens whatever `cfg.save` points at.
pub fn scene_app(cfg: GameConfig, store: Option<MemorySaveStore>) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
        STEP_SECS,
    )));
    app.insert_resource(cfg);
    if let Some(store) = store {
        app.insert_resource(GardenStore::new(store));
    }
    app.add_plugins(GardenScenePlugin);
    app
}

pub fn headless_app(cfg: GameConfig, store: MemorySaveStore) -> App {
    let mut app = scene_app(cfg, Some(store));
    // First update runs Startup (bootstrap).
    app.update();
    app
}

pub fn default_app() -> App {
    headless_app(GameConfig::default(), MemorySaveStore::default())
}

/// Advance simulated time by at least `secs`.
pub fn run_for(app: &mut App, secs: f32) {
    let steps = (secs / STEP_SECS).ceil() as usize + 2;
    for _ in 0..steps {
        app.update();
    }
}

/// Trees in slot order.
pub fn trees(app: &mut App) -> Vec<(Entity, Tree)> {
    let world = app.world_mut();
    let mut out: Vec<(Entity, Tree)> = world
        .query::<(Entity, &Tree)>()
        .iter(world)
        .map(|(e, t)| (e, t.clone()))
        .collect();
    out.sort_by_key(|(_, t)| t.slot);
    out
}

pub fn tree_names(app: &mut App) -> Vec<String> {
    trees(app).iter().map(|(_, t)| t.name.to_string()).collect()
}

pub fn tap_at(app: &mut App, position: Vec2) {
    app.world_mut().send_event(TapEvent { position });
    app.update();
}

pub fn tap_entity(app: &mut App, entity: Entity) {
    let pos = app
        .world()
        .get::<Transform>(entity)
        .expect("tapped entity has a Transform")
        .translation
        .truncate();
    tap_at(app, pos);
}

pub fn tap_water_button(app: &mut App) {
    let world = app.world_mut();
    let button = world
        .query_filtered::<Entity, With<WaterButton>>()
        .single(world)
        .expect("exactly one water button");
    tap_entity(app, button);
}

pub fn affordances(app: &mut App) -> Vec<(Entity, WateringAffordance)> {
    let world = app.world_mut();
    world
        .query::<(Entity, &WateringAffordance)>()
        .iter(world)
        .map(|(e, a)| (e, *a))
        .collect()
}

/// Tap the affordance that waters the tree in `slot`.
pub fn tap_affordance_for_slot(app: &mut App, slot: usize) {
    let tree = trees(app)[slot].0;
    let aff = affordances(app)
        .into_iter()
        .find(|(_, a)| a.tree == tree)
        .map(|(e, _)| e)
        .expect("affordance for tree");
    tap_entity(app, aff);
}

pub fn saved_names(app: &App) -> Option<Vec<String>> {
    app.world()
        .resource::<GardenStore>()
        .get(SAVE_KEY)
        .expect("memory store never fails")
}
