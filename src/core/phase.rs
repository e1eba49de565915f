use bevy::prelude::*;

/// Tap-router state. The watering variant owns the in-flight effect so a
/// cancel or completion always refers to one specific (tree, rain) pair.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GardenPhase {
    /// No watering buttons shown.
    #[default]
    Idle,
    /// Watering buttons shown, no rain.
    Selecting,
    /// Rain entity `rain` is falling on `tree`.
    Watering { tree: Entity, rain: Entity },
}

impl GardenPhase {
    pub fn active_rain(&self) -> Option<Entity> {
        match self {
            GardenPhase::Watering { rain, .. } => Some(*rain),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GardenPhase::Idle => "Idle",
            GardenPhase::Selecting => "Selecting",
            GardenPhase::Watering { .. } => "Watering",
        }
    }
}

/// Replace the phase, logging the transition when it actually changes.
pub fn transition(phase: &mut GardenPhase, next: GardenPhase) {
    if *phase != next {
        info!(target: "router", "phase {:?} -> {:?}", phase, next);
        *phase = next;
    }
}
