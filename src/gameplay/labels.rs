use bevy::prelude::*;

use crate::core::components::{Footprint, Tree};
use crate::core::config::GameConfig;
use crate::core::events::ShowTreeLabel;
use crate::core::plugin::ensure_core;
use crate::core::system::system_order::GardenSet;
use crate::interaction::picking::{StackLayer, TapTarget};

/// Floating name tag shown when a tree is tapped: holds, fades, despawns.
#[derive(Component, Debug)]
pub struct TreeLabel {
    pub tree: Entity,
    pub hold: Timer,
    pub fade: Timer,
}

pub struct TreeLabelPlugin;

impl Plugin for TreeLabelPlugin {
    fn build(&self, app: &mut App) {
        ensure_core(app);
        app.add_systems(Update, spawn_tree_labels.in_set(GardenSet::Act))
            .add_systems(Update, fade_tree_labels.in_set(GardenSet::Effects));
    }
}

fn spawn_tree_labels(
    mut commands: Commands,
    mut ev_label: EventReader<ShowTreeLabel>,
    cfg: Res<GameConfig>,
    q_trees: Query<(&Tree, &Transform, &Footprint)>,
    q_labels: Query<(Entity, &TreeLabel)>,
) {
    for ev in ev_label.read() {
        let Ok((tree, tf, footprint)) = q_trees.get(ev.tree) else {
            continue;
        };
        // One tag per tree; a re-tap restarts it.
        for (e, label) in q_labels.iter() {
            if label.tree == ev.tree {
                commands.entity(e).despawn();
            }
        }
        let text = tree.name.to_string();
        let font_size = cfg.label.font_size;
        let extent = Vec2::new(
            text.chars().count() as f32 * font_size * 0.6,
            font_size * 1.2,
        );
        let pos = tf.translation.truncate() + Vec2::Y * footprint.y * cfg.label.offset_frac;
        commands.spawn((
            TreeLabel {
                tree: ev.tree,
                hold: Timer::from_seconds(cfg.label.hold_secs.max(0.0), TimerMode::Once),
                fade: Timer::from_seconds(cfg.label.fade_secs.max(0.0), TimerMode::Once),
            },
            Text2d::new(text),
            TextFont {
                font_size,
                ..default()
            },
            TextColor(Color::WHITE),
            Transform::from_xyz(pos.x, pos.y, StackLayer::Label.z()),
            TapTarget::new(StackLayer::Label, extent),
            Name::new(format!("Label:{}", tree.name)),
        ));
    }
}

fn fade_tree_labels(
    mut commands: Commands,
    time: Res<Time>,
    mut q_labels: Query<(Entity, &mut TreeLabel, &mut TextColor)>,
) {
    for (entity, mut label, mut color) in q_labels.iter_mut() {
        if !label.hold.tick(time.delta()).finished() {
            continue;
        }
        let fade = &mut label.fade;
        fade.tick(time.delta());
        if fade.finished() {
            commands.entity(entity).despawn();
            continue;
        }
        let remaining = 1.0 - fade.fraction();
        color.0.set_alpha(remaining);
    }
}
