#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use super::logging::garden_summary;
#[cfg(feature = "debug")]
use super::state::DebugState;
#[cfg(feature = "debug")]
use crate::core::components::{Tree, WateringAffordance};
#[cfg(feature = "debug")]
use crate::core::phase::GardenPhase;

#[cfg(feature = "debug")]
#[derive(Component)]
pub(crate) struct DebugOverlayText;

#[cfg(feature = "debug")]
pub fn debug_overlay_spawn(mut commands: Commands) {
    commands.spawn((
        Text::new(String::new()),
        TextFont {
            font_size: 14.0,
            ..Default::default()
        },
        TextColor(Color::WHITE),
        bevy::ui::Node {
            position_type: bevy::ui::PositionType::Absolute,
            top: Val::Px(4.0),
            left: Val::Px(6.0),
            ..Default::default()
        },
        Visibility::Hidden,
        DebugOverlayText,
    ));
}

#[cfg(feature = "debug")]
pub fn debug_overlay_update(
    state: Res<DebugState>,
    phase: Res<GardenPhase>,
    q_trees: Query<&Tree>,
    q_affordances: Query<(), With<WateringAffordance>>,
    mut q_text: Query<(&mut Text, &mut Visibility), With<DebugOverlayText>>,
) {
    let Ok((mut text, mut vis)) = q_text.single_mut() else {
        return;
    };
    vis.set_if_neq(if state.overlay_visible {
        Visibility::Visible
    } else {
        Visibility::Hidden
    });
    if !state.overlay_visible {
        return;
    }
    let s = format!(
        "phase: {}\naffordances: {}\ntrees: {}\n[F1] overlay  [F2] log snapshot",
        phase.label(),
        q_affordances.iter().count(),
        garden_summary(q_trees.iter())
    );
    if text.as_str() != s {
        *text = Text::new(s);
    }
}
