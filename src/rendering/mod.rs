pub mod camera;
pub mod textures;
