use bevy::prelude::*;
use rand::Rng;

use crate::core::components::{Footprint, Tree, WateringAffordance};
use crate::core::config::{GameConfig, RainConfig};
use crate::core::events::{TreeWatered, WaterTree};
use crate::core::phase::{transition, GardenPhase};
use crate::core::plugin::ensure_core;
use crate::core::system::system_order::GardenSet;
use crate::gameplay::affordances::despawn_affordances;
use crate::interaction::picking::StackLayer;

/// Rain over one tree. The completion timer lives here, on the rain entity,
/// so despawning the entity is the cancellation.
#[derive(Component, Debug)]
pub struct RainEffect {
    pub tree: Entity,
    pub timer: Timer,
    pub geometry: RainGeometry,
    pub fall_secs: f32,
    spawn_accum: f32,
}

/// One falling drop, child of a `RainEffect`. Position is local to the band centre.
#[derive(Component, Debug)]
pub struct RainDrop {
    pub age: f32,
}

/// Emission band derived from the anchor tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainGeometry {
    /// World y where drops appear.
    pub top: f32,
    pub fall_distance: f32,
    pub speed: f32,
    pub band_width: f32,
    pub centre: Vec2,
}

/// Drops start a little below `y + h / top_divisor` and stop just short of
/// the tree's base; they travel `fall_distance` in exactly `fall_secs`.
pub fn rain_geometry(cfg: &RainConfig, tree_pos: Vec2, tree_size: Vec2) -> RainGeometry {
    let h = tree_size.y;
    let start_offset = h * cfg.start_offset_frac;
    let end_offset = h * cfg.end_offset_frac;
    let top = tree_pos.y + h / cfg.top_divisor.max(f32::EPSILON) - start_offset;
    let fall_distance = (h - start_offset - end_offset).max(0.0);
    let speed = fall_distance / cfg.fall_secs.max(f32::EPSILON);
    RainGeometry {
        top,
        fall_distance,
        speed,
        band_width: tree_size.x,
        centre: Vec2::new(tree_pos.x, top - fall_distance * 0.5),
    }
}

pub struct WateringPlugin;

impl Plugin for WateringPlugin {
    fn build(&self, app: &mut App) {
        ensure_core(app);
        app.add_systems(Update, start_watering.in_set(GardenSet::Act))
            .add_systems(
                Update,
                (complete_rain_effects, emit_rain_drops, fall_rain_drops)
                    .chain()
                    .in_set(GardenSet::Effects),
            );
    }
}

fn start_watering(
    mut commands: Commands,
    mut ev_water: EventReader<WaterTree>,
    cfg: Res<GameConfig>,
    mut phase: ResMut<GardenPhase>,
    q_trees: Query<(&Tree, &Transform, &Footprint)>,
) {
    for ev in ev_water.read() {
        let Ok((tree, tf, footprint)) = q_trees.get(ev.tree) else {
            warn!(target: "watering", "watering target {:?} is not a tree", ev.tree);
            continue;
        };
        if let GardenPhase::Watering { tree: old_tree, rain } = *phase {
            commands.entity(rain).despawn();
            info!(target: "watering", "rain over {:?} cancelled", old_tree);
        }
        let geometry = rain_geometry(&cfg.rain, tf.translation.truncate(), footprint.0);
        let rain = commands
            .spawn((
                RainEffect {
                    tree: ev.tree,
                    timer: Timer::from_seconds(cfg.rain.visible_secs.max(0.0), TimerMode::Once),
                    geometry,
                    fall_secs: cfg.rain.fall_secs,
                    spawn_accum: 0.0,
                },
                Transform::from_xyz(geometry.centre.x, geometry.centre.y, StackLayer::Rain.z()),
                // Drawn on top, but particles are not a tap surface.
                Visibility::Visible,
                Name::new(format!("Rain:{}", tree.name)),
            ))
            .id();
        info!(target: "watering", "rain started over '{}' ({:?})", tree.name, ev.tree);
        transition(&mut phase, GardenPhase::Watering { tree: ev.tree, rain });
    }
}

fn complete_rain_effects(
    mut commands: Commands,
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut phase: ResMut<GardenPhase>,
    mut q_rain: Query<(Entity, &mut RainEffect)>,
    q_affordances: Query<Entity, With<WateringAffordance>>,
    mut ev_watered: EventWriter<TreeWatered>,
) {
    for (entity, mut rain) in q_rain.iter_mut() {
        if !rain.timer.tick(time.delta()).finished() {
            continue;
        }
        commands.entity(entity).despawn();
        ev_watered.write(TreeWatered { tree: rain.tree });
        info!(target: "watering", "rain over {:?} finished", rain.tree);

        if phase.active_rain() != Some(entity) {
            continue;
        }
        if cfg.hide_affordances_after_watering {
            despawn_affordances(&mut commands, &q_affordances);
            transition(&mut phase, GardenPhase::Idle);
        } else {
            transition(&mut phase, GardenPhase::Selecting);
        }
    }
}

fn emit_rain_drops(
    mut commands: Commands,
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut q_rain: Query<(Entity, &mut RainEffect)>,
) {
    let rate = cfg.rain.drops_per_sec.max(0.0);
    if rate == 0.0 {
        return;
    }
    let (r, g, b, a) = cfg.rain.color;
    let color = Color::srgba(r, g, b, a);
    let drop_size = Vec2::new(cfg.rain.drop_size.0, cfg.rain.drop_size.1);
    let mut rng = rand::thread_rng();
    for (entity, mut rain) in q_rain.iter_mut() {
        if rain.timer.finished() {
            continue;
        }
        rain.spawn_accum += time.delta_secs() * rate;
        let half_w = rain.geometry.band_width * 0.5;
        let start_y = rain.geometry.fall_distance * 0.5;
        while rain.spawn_accum >= 1.0 {
            rain.spawn_accum -= 1.0;
            let x = if half_w > 0.0 { rng.gen_range(-half_w..=half_w) } else { 0.0 };
            commands.spawn((
                RainDrop { age: 0.0 },
                Sprite::from_color(color, drop_size),
                Transform::from_xyz(x, start_y, 0.0),
                ChildOf(entity),
            ));
        }
    }
}

fn fall_rain_drops(
    mut commands: Commands,
    time: Res<Time>,
    q_rain: Query<&RainEffect>,
    mut q_drops: Query<(Entity, &ChildOf, &mut RainDrop, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (entity, parent, mut drop, mut tf) in q_drops.iter_mut() {
        let Ok(rain) = q_rain.get(parent.parent()) else {
            continue;
        };
        drop.age += dt;
        if drop.age >= rain.fall_secs {
            commands.entity(entity).despawn();
            continue;
        }
        tf.translation.y -= rain.geometry.speed * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_matches_scene_layout_rules() {
        let cfg = RainConfig::default();
        let g = rain_geometry(&cfg, Vec2::new(100.0, 50.0), Vec2::splat(200.0));
        // start offset 40, end offset 20 -> fall 140
        assert!((g.fall_distance - 140.0).abs() < 1e-3);
        assert!((g.top - (50.0 + 200.0 / 1.3 - 40.0)).abs() < 1e-3);
        assert!((g.speed - 140.0 / 1.2).abs() < 1e-3);
        assert_eq!(g.band_width, 200.0);
        assert_eq!(g.centre.x, 100.0);
        assert!((g.centre.y - (g.top - 70.0)).abs() < 1e-3);
    }

    #[test]
    fn drop_reaches_ground_line_in_fall_time() {
        let cfg = RainConfig::default();
        let g = rain_geometry(&cfg, Vec2::ZERO, Vec2::splat(100.0));
        let travelled = g.speed * cfg.fall_secs;
        assert!((travelled - g.fall_distance).abs() < 1e-3);
        assert!(cfg.fall_secs < cfg.visible_secs);
    }
}
