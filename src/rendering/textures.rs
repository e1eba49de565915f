use bevy::prelude::*;

/// Load an image through the asset server when one exists. Headless apps
/// (tests, `MinimalPlugins`) get a default handle; a missing file is the
/// asset server's problem, never ours.
pub fn texture(asset_server: Option<&AssetServer>, path: &str) -> Handle<Image> {
    match asset_server {
        Some(server) => server.load(path.to_string()),
        None => Handle::default(),
    }
}

/// Sprite of an exact world size.
pub fn sized_sprite(image: Handle<Image>, size: Vec2) -> Sprite {
    Sprite {
        image,
        custom_size: Some(size),
        ..default()
    }
}
