//! Debug module: feature gated overlay & periodic garden logging.
//! Built only when compiled with `--features debug` (on by default).

#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
pub mod logging;
#[cfg(feature = "debug")]
mod overlay;
#[cfg(feature = "debug")]
mod state;

#[cfg(feature = "debug")]
pub use state::DebugState;

use bevy::prelude::*;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    #[cfg(feature = "debug")]
    fn build(&self, app: &mut App) {
        use keys::debug_key_input_system;
        use logging::debug_logging_system;
        use overlay::{debug_overlay_spawn, debug_overlay_update};

        app.init_resource::<DebugState>()
            .add_systems(Startup, debug_overlay_spawn)
            .add_systems(
                Update,
                (debug_key_input_system, debug_logging_system, debug_overlay_update).chain(),
            );
    }

    #[cfg(not(feature = "debug"))]
    fn build(&self, _app: &mut App) {}
}
