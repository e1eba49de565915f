use bevy::prelude::*;

use crate::core::events::TapEvent;
use crate::core::plugin::ensure_core;
use crate::core::system::system_order::GardenSet;

/// Turns mouse presses and touch starts into world-space `TapEvent`s.
pub struct PointerTapPlugin;

impl Plugin for PointerTapPlugin {
    fn build(&self, app: &mut App) {
        ensure_core(app);
        app.add_systems(Update, emit_pointer_taps.in_set(GardenSet::Input));
    }
}

fn cursor_world_pos(camera_q: &Query<(&Camera, &GlobalTransform)>, screen_pos: Vec2) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?;
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

fn emit_pointer_taps(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut ev_tap: EventWriter<TapEvent>,
) {
    if let Some(touches) = touches.as_deref() {
        for touch in touches.iter_just_pressed() {
            if let Some(position) = cursor_world_pos(&camera_q, touch.position()) {
                ev_tap.write(TapEvent { position });
            }
        }
    }
    let clicked = buttons
        .as_deref()
        .is_some_and(|b| b.just_pressed(MouseButton::Left));
    if !clicked {
        return;
    }
    let Ok(window) = windows_q.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    if let Some(position) = cursor_world_pos(&camera_q, cursor) {
        ev_tap.write(TapEvent { position });
    }
}
