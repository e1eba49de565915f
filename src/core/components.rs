use bevy::prelude::*;

use crate::core::tree_name::TreeName;

/// A tree in the garden. `slot` is its fixed index in the save list.
#[derive(Component, Debug, Clone)]
pub struct Tree {
    pub slot: usize,
    pub name: TreeName,
}

/// Square footprint of a scene element in world units (width, height).
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone, PartialEq)]
pub struct Footprint(pub Vec2);

/// The always-visible global water button.
#[derive(Component)]
pub struct WaterButton;

#[derive(Component)]
pub struct GardenBackground;

/// Per-tree watering button. Carries the tree it waters so routing never
/// depends on spawn order.
#[derive(Component, Debug, Copy, Clone)]
pub struct WateringAffordance {
    pub tree: Entity,
}
