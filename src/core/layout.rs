//! Scene geometry. Layout values are authored in "scene space": origin at the
//! bottom-left corner, y up, units of pixels. Bevy's 2D world has its origin
//! at the screen centre, so everything goes through `SceneLayout`.
use bevy::prelude::*;

use crate::core::config::GameConfig;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SceneLayout {
    pub size: Vec2,
}

impl SceneLayout {
    pub fn new(width: f32, height: f32) -> Self {
        Self { size: Vec2::new(width, height) }
    }

    pub fn from_config(cfg: &GameConfig) -> Self {
        Self::new(cfg.window.width, cfg.window.height)
    }

    /// Scene-space point to world space.
    pub fn to_world(&self, scene: Vec2) -> Vec2 {
        scene - self.size * 0.5
    }

    /// Normalized (0..1) position to world space.
    pub fn normalized_to_world(&self, frac: Vec2) -> Vec2 {
        self.to_world(frac * self.size)
    }

    pub fn tree_side(&self, cfg: &GameConfig) -> f32 {
        self.size.x * cfg.garden.tree_size_frac
    }

    /// Water button (world centre, size) pinned to the top-right corner.
    pub fn water_button(&self, cfg: &GameConfig) -> (Vec2, Vec2) {
        let b = &cfg.water_button;
        let size = Vec2::new(self.size.x * b.width_frac, self.size.x * b.height_frac);
        let scene = Vec2::new(
            self.size.x - size.x / 2.0 - b.margin,
            self.size.y - size.y / 1.5 - b.margin,
        );
        (self.to_world(scene), size)
    }

    /// Affordance (world centre, size) for a tree at `tree_pos` with footprint `tree_size`.
    pub fn affordance(&self, cfg: &GameConfig, tree_pos: Vec2, tree_size: Vec2) -> (Vec2, Vec2) {
        let a = &cfg.affordance;
        (
            Vec2::new(tree_pos.x, tree_pos.y + tree_size.y * a.offset_frac),
            tree_size * a.size_frac,
        )
    }
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_corners_map_to_world_edges() {
        let l = SceneLayout::new(1000.0, 500.0);
        assert_eq!(l.normalized_to_world(Vec2::ZERO), Vec2::new(-500.0, -250.0));
        assert_eq!(l.normalized_to_world(Vec2::ONE), Vec2::new(500.0, 250.0));
        assert_eq!(l.normalized_to_world(Vec2::splat(0.5)), Vec2::ZERO);
    }

    #[test]
    fn water_button_sits_in_top_right() {
        let cfg = GameConfig::default();
        let l = SceneLayout::new(1000.0, 500.0);
        let (pos, size) = l.water_button(&cfg);
        assert!((size.x - 90.0).abs() < 1e-3);
        assert!((size.y - 70.0).abs() < 1e-3);
        // scene x = 1000 - 45 - 10 = 945 -> world 445
        assert!((pos.x - 445.0).abs() < 1e-3);
        // scene y = 500 - 70/1.5 - 10 -> world 250 - 46.67 - 10
        assert!((pos.y - (250.0 - 70.0 / 1.5 - 10.0)).abs() < 1e-3);
    }

    #[test]
    fn affordance_is_above_tree_and_smaller() {
        let cfg = GameConfig::default();
        let l = SceneLayout::new(1000.0, 500.0);
        let (pos, size) = l.affordance(&cfg, Vec2::new(10.0, 20.0), Vec2::splat(200.0));
        assert_eq!(pos, Vec2::new(10.0, 130.0));
        assert_eq!(size, Vec2::splat(60.0));
    }
}
