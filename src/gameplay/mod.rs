pub mod affordances;
pub mod garden;
pub mod growth;
pub mod labels;
pub mod watering;

pub use affordances::AffordancePlugin;
pub use garden::GardenPlugin;
pub use growth::GrowthPlugin;
pub use labels::{TreeLabel, TreeLabelPlugin};
pub use watering::{RainDrop, RainEffect, WateringPlugin};
