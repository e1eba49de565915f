use bevy::prelude::*;

/// A completed tap/click in world coordinates.
#[derive(Event, Debug, Clone, Copy)]
pub struct TapEvent {
    pub position: Vec2,
}

/// The global water button was tapped.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ShowAffordances;

/// An affordance was tapped: start rain over `tree`.
#[derive(Event, Debug, Clone, Copy)]
pub struct WaterTree {
    pub tree: Entity,
}

/// A tree itself was tapped.
#[derive(Event, Debug, Clone, Copy)]
pub struct ShowTreeLabel {
    pub tree: Entity,
}

/// A rain effect ran to completion over `tree`.
#[derive(Event, Debug, Clone, Copy)]
pub struct TreeWatered {
    pub tree: Entity,
}

/// Tree names changed; the save slot should be rewritten.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct GardenChanged;
