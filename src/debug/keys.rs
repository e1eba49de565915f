#[cfg(feature = "debug")]
use super::state::DebugState;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub fn debug_key_input_system(keys: Option<Res<ButtonInput<KeyCode>>>, mut state: ResMut<DebugState>) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(KeyCode::F1) {
        state.overlay_visible = !state.overlay_visible;
        info!(target: "debug", "overlay {}", if state.overlay_visible { "on" } else { "off" });
    }
    if keys.just_pressed(KeyCode::F2) {
        state.snapshot_requested = true;
    }
}
