use bevy::prelude::*;
use std::{collections::HashMap, path::PathBuf, time::SystemTime};

use crate::core::config::GameConfig;

/// Files polled for changes, in layering order.
#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    pub interval_secs: f32,
}
impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: vec![
                PathBuf::from("assets/config/game.ron"),
                PathBuf::from("assets/config/game.local.ron"),
            ],
            interval_secs: 0.5,
        }
    }
}

#[derive(Resource, Debug)]
struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    timer: Timer,
}
impl Default for ConfigReloadState {
    fn default() -> Self {
        Self {
            last_mod: HashMap::new(),
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
        }
    }
}

/// Re-reads the layered config when any file changes. The scene layout is
/// fixed at bootstrap; affordance, rain, label and the hide flag apply
/// immediately.
pub struct ConfigHotReloadPlugin;
impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.init_resource::<ConfigReloadSettings>()
                .init_resource::<ConfigReloadState>()
                .add_systems(Startup, prime_modification_times)
                .add_systems(Update, poll_and_reload_config);
        }
    }
}

fn modified(path: &PathBuf) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Record current mtimes so the first poll does not reload what main already loaded.
fn prime_modification_times(settings: Res<ConfigReloadSettings>, mut state: ResMut<ConfigReloadState>) {
    for path in &settings.paths {
        if let Some(t) = modified(path) {
            state.last_mod.insert(path.clone(), t);
        }
    }
}

fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg_res: ResMut<GameConfig>,
    mut windows: Query<&mut Window>,
) {
    let interval = settings.interval_secs.max(0.05);
    if (state.timer.duration().as_secs_f32() - interval).abs() > f32::EPSILON {
        state.timer.set_duration(std::time::Duration::from_secs_f32(interval));
    }
    if !state.timer.tick(time.delta()).finished() {
        return;
    }
    let mut dirty = false;
    for path in &settings.paths {
        let Some(mod_time) = modified(path) else {
            continue;
        };
        let entry = state.last_mod.entry(path.clone()).or_insert(SystemTime::UNIX_EPOCH);
        if mod_time > *entry {
            *entry = mod_time;
            dirty = true;
        }
    }
    if !dirty {
        return;
    }
    let (new_cfg, _used, errors) = GameConfig::load_layered(settings.paths.iter());
    // A half-saved file must not reset the running config to defaults.
    let broken: Vec<&String> = errors.iter().filter(|e| !e.contains("read error")).collect();
    if !broken.is_empty() {
        for e in broken {
            warn!(target: "config", "hot-reload skipped: {e}");
        }
        return;
    }
    if *cfg_res == new_cfg {
        return;
    }
    if new_cfg.garden != cfg_res.garden || new_cfg.water_button != cfg_res.water_button {
        info!(target: "config", "tree and button layout changes take effect on next launch");
    }
    for w in new_cfg.validate() {
        warn!(target: "config", "{w}");
    }
    if let Ok(mut window) = windows.single_mut() {
        if window.title != new_cfg.window.title {
            window.title = new_cfg.window.title.clone();
        }
    }
    info!(target: "config", "config hot-reload applied");
    *cfg_res = new_cfg;
}
