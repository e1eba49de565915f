#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use super::state::DebugState;
#[cfg(feature = "debug")]
use crate::core::components::Tree;
#[cfg(feature = "debug")]
use crate::core::config::GameConfig;
#[cfg(feature = "debug")]
use crate::core::phase::GardenPhase;

/// "mango1 magyi2 ..." in slot order.
#[cfg(feature = "debug")]
pub fn garden_summary<'a>(trees: impl Iterator<Item = &'a Tree>) -> String {
    let mut sorted: Vec<&Tree> = trees.collect();
    sorted.sort_by_key(|t| t.slot);
    sorted
        .iter()
        .map(|t| t.name.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(feature = "debug")]
pub fn debug_logging_system(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    phase: Res<GardenPhase>,
    mut state: ResMut<DebugState>,
    q_trees: Query<&Tree>,
) {
    state.frame_counter += 1;
    state.time_accum += time.delta_secs();
    let interval = cfg.debug.log_interval;
    let due = interval > 0.0 && state.time_accum >= interval;
    if !due && !state.snapshot_requested {
        return;
    }
    state.time_accum = 0.0;
    state.snapshot_requested = false;
    info!(
        target: "debug",
        "GARDEN frame={} t={:.1}s phase={} trees=[{}]",
        state.frame_counter,
        time.elapsed_secs(),
        phase.label(),
        garden_summary(q_trees.iter())
    );
}
