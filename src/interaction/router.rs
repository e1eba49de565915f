use bevy::prelude::*;

use crate::core::components::{Tree, WaterButton, WateringAffordance};
use crate::core::events::{ShowAffordances, ShowTreeLabel, TapEvent, WaterTree};
use crate::core::plugin::ensure_core;
use crate::core::system::system_order::GardenSet;

use super::picking::{pick_topmost, StackLayer, TapTarget};

/// Resolves each tap to its topmost target and emits the matching garden
/// action. Phase changes happen in the systems consuming those actions.
pub struct TapRouterPlugin;

impl Plugin for TapRouterPlugin {
    fn build(&self, app: &mut App) {
        ensure_core(app);
        app.register_type::<TapTarget>()
            .register_type::<StackLayer>()
            .add_systems(Update, route_taps.in_set(GardenSet::Route));
    }
}

fn route_taps(
    mut ev_tap: EventReader<TapEvent>,
    q_targets: Query<(Entity, &Transform, &TapTarget)>,
    q_affordances: Query<&WateringAffordance>,
    q_trees: Query<&Tree>,
    q_button: Query<(), With<WaterButton>>,
    mut ev_show: EventWriter<ShowAffordances>,
    mut ev_water: EventWriter<WaterTree>,
    mut ev_label: EventWriter<ShowTreeLabel>,
) {
    for tap in ev_tap.read() {
        let Some((entity, layer)) = pick_topmost(tap.position, q_targets.iter()) else {
            continue;
        };
        match layer {
            StackLayer::Button if q_button.contains(entity) => {
                debug!(target: "router", "water button tapped");
                ev_show.write(ShowAffordances);
            }
            StackLayer::Affordance => {
                if let Ok(aff) = q_affordances.get(entity) {
                    debug!(target: "router", "affordance {:?} tapped -> tree {:?}", entity, aff.tree);
                    ev_water.write(WaterTree { tree: aff.tree });
                }
            }
            StackLayer::Tree => {
                if let Ok(tree) = q_trees.get(entity) {
                    debug!(target: "router", "tree '{}' tapped", tree.name);
                    ev_label.write(ShowTreeLabel { tree: entity });
                }
            }
            // Labels and the background swallow the tap.
            other => trace!(target: "router", "tap absorbed by {:?}", other),
        }
    }
}
