// This file is part of Orchard Rain.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::plugin::GardenCorePlugin;
use crate::debug::DebugPlugin;
use crate::gameplay::{AffordancePlugin, GardenPlugin, GrowthPlugin, TreeLabelPlugin, WateringPlugin};
use crate::interaction::pointer::PointerTapPlugin;
use crate::interaction::router::TapRouterPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::persistence::PersistencePlugin;
use crate::rendering::camera::CameraPlugin;

/// Everything the garden scene needs on top of `DefaultPlugins`.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(GardenCorePlugin).add_plugins((
            CameraPlugin,
            PersistencePlugin,
            GardenPlugin,
            PointerTapPlugin,
            TapRouterPlugin,
            AffordancePlugin,
            WateringPlugin,
            GrowthPlugin,
            TreeLabelPlugin,
            DebugPlugin,
            ConfigHotReloadPlugin,
            AutoClosePlugin,
        ));
    }
}

/// The scene logic without camera, pointer input, or session plugins; what
/// headless tests drive by sending `TapEvent`s directly.
pub struct GardenScenePlugin;

impl Plugin for GardenScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(GardenCorePlugin).add_plugins((
            PersistencePlugin,
            GardenPlugin,
            TapRouterPlugin,
            AffordancePlugin,
            WateringPlugin,
            GrowthPlugin,
            TreeLabelPlugin,
        ));
    }
}
