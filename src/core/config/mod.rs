pub mod config;

pub use config::{
    AffordanceConfig, DebugConfig, GameConfig, GardenConfig, LabelConfig, RainConfig,
    SaveConfig, TreeSlotConfig, WaterButtonConfig, WindowConfig,
};
