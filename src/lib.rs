pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod persistence;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::{GamePlugin, GardenScenePlugin};
pub use crate::core::components::{Footprint, Tree, WaterButton, WateringAffordance};
pub use crate::core::config::{config::GameConfig, config::WindowConfig};
pub use crate::core::phase::GardenPhase;
pub use crate::core::tree_name::{TreeName, TreeNameError};
