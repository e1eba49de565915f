#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
#[derive(Resource, Debug)]
pub struct DebugState {
    pub overlay_visible: bool,
    pub time_accum: f32,
    pub frame_counter: u64,
    /// Set by F2 to force a snapshot log on the next frame.
    pub snapshot_requested: bool,
}

#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self {
            overlay_visible: false,
            time_accum: 0.0,
            frame_counter: 0,
            snapshot_requested: false,
        }
    }
}
