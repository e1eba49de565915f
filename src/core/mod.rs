pub mod components;
pub mod config;
pub mod events;
pub mod layout;
pub mod phase;
pub mod plugin;
pub mod system;
pub mod tree_name;
