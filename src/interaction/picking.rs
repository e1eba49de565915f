use bevy::prelude::*;

/// Stacking order, lowest first. Only the topmost target under a tap is
/// considered; `Rain` is a draw layer only and never carries a `TapTarget`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Reflect)]
pub enum StackLayer {
    Background,
    Button,
    Tree,
    Affordance,
    Label,
    Rain,
}

impl StackLayer {
    /// Render depth matching the stacking order.
    pub fn z(self) -> f32 {
        match self {
            StackLayer::Background => -1.0,
            StackLayer::Button => 1.0,
            StackLayer::Tree => 2.0,
            StackLayer::Affordance => 3.0,
            StackLayer::Label => 4.0,
            StackLayer::Rain => 5.0,
        }
    }
}

/// Axis-aligned tap area centred on the entity's translation.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct TapTarget {
    pub layer: StackLayer,
    pub half_extents: Vec2,
}

impl TapTarget {
    pub fn new(layer: StackLayer, size: Vec2) -> Self {
        Self { layer, half_extents: size * 0.5 }
    }

    pub fn contains(&self, centre: Vec2, point: Vec2) -> bool {
        let d = (point - centre).abs();
        d.x <= self.half_extents.x && d.y <= self.half_extents.y
    }
}

/// Topmost target containing `point`: highest layer, then highest z, then the
/// most recently spawned entity.
pub fn pick_topmost<'a, I>(point: Vec2, candidates: I) -> Option<(Entity, StackLayer)>
where
    I: IntoIterator<Item = (Entity, &'a Transform, &'a TapTarget)>,
{
    let mut best: Option<(Entity, StackLayer, f32)> = None;
    for (entity, tf, target) in candidates {
        if !target.contains(tf.translation.truncate(), point) {
            continue;
        }
        let z = tf.translation.z;
        let replace = match best {
            None => true,
            Some((be, bl, bz)) => (target.layer, z, entity.index()) > (bl, bz, be.index()),
        };
        if replace {
            best = Some((entity, target.layer, z));
        }
    }
    best.map(|(e, l, _)| (e, l))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn(world: &mut World, pos: Vec2, z: f32, layer: StackLayer, size: f32) -> Entity {
        world
            .spawn((
                Transform::from_xyz(pos.x, pos.y, z),
                TapTarget::new(layer, Vec2::splat(size)),
            ))
            .id()
    }

    fn pick(world: &mut World, p: Vec2) -> Option<(Entity, StackLayer)> {
        let mut q = world.query::<(Entity, &Transform, &TapTarget)>();
        pick_topmost(p, q.iter(world))
    }

    #[test]
    fn misses_outside_all_targets() {
        let mut world = World::new();
        spawn(&mut world, Vec2::ZERO, 0.0, StackLayer::Tree, 10.0);
        assert!(pick(&mut world, Vec2::new(20.0, 0.0)).is_none());
    }

    #[test]
    fn higher_layer_wins_over_z() {
        let mut world = World::new();
        let _bg = spawn(&mut world, Vec2::ZERO, 50.0, StackLayer::Background, 1000.0);
        let tree = spawn(&mut world, Vec2::ZERO, 2.0, StackLayer::Tree, 100.0);
        let aff = spawn(&mut world, Vec2::new(0.0, 40.0), 3.0, StackLayer::Affordance, 30.0);
        assert_eq!(pick(&mut world, Vec2::ZERO), Some((tree, StackLayer::Tree)));
        assert_eq!(pick(&mut world, Vec2::new(0.0, 45.0)), Some((aff, StackLayer::Affordance)));
    }

    #[test]
    fn same_layer_prefers_higher_z_then_newer() {
        let mut world = World::new();
        let high = spawn(&mut world, Vec2::ZERO, 5.0, StackLayer::Tree, 100.0);
        let _low = spawn(&mut world, Vec2::ZERO, 1.0, StackLayer::Tree, 100.0);
        assert_eq!(pick(&mut world, Vec2::ZERO).map(|p| p.0), Some(high));

        let mut world = World::new();
        let _a = spawn(&mut world, Vec2::ZERO, 2.0, StackLayer::Tree, 100.0);
        let b = spawn(&mut world, Vec2::ZERO, 2.0, StackLayer::Tree, 100.0);
        assert_eq!(pick(&mut world, Vec2::ZERO).map(|p| p.0), Some(b));
    }

    #[test]
    fn rain_is_topmost() {
        assert!(StackLayer::Rain > StackLayer::Label);
        assert!(StackLayer::Label > StackLayer::Affordance);
        assert!(StackLayer::Affordance > StackLayer::Tree);
        assert!(StackLayer::Tree > StackLayer::Button);
        assert!(StackLayer::Button > StackLayer::Background);
        assert!(StackLayer::Rain.z() > StackLayer::Background.z());
    }
}
