//! Save slot for the garden: one ordered list of tree names.
pub mod garden_save;
pub mod store;

pub use garden_save::{load_tree_names, save_tree_names, InitialNames, PersistencePlugin};
pub use store::{FileSaveStore, GardenStore, MemorySaveStore, SaveStore};
