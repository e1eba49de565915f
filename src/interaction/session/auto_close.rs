use crate::core::config::GameConfig;
use bevy::prelude::*;

#[derive(Resource, Deref, DerefMut)]
struct AutoCloseTimer(Timer);

/// Exits after `window.autoClose` seconds (smoke runs); disabled at 0.
pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_autoclose)
            .add_systems(Update, check_autoclose);
    }
}

fn setup_autoclose(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(target: "session", "AutoClose: will exit after {secs} seconds");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_autoclose(
    time: Res<Time>,
    timer: Option<ResMut<AutoCloseTimer>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(mut t) = timer else {
        return;
    };
    if t.tick(time.delta()).just_finished() {
        info!(target: "session", "AutoClose: timer finished, requesting app exit");
        ev_exit.write(AppExit::Success);
    }
}
