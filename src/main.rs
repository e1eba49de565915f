use anyhow::{Context, Result};
use bevy::prelude::*;
use clap::Parser;

use orchard_rain::app::cli::Cli;
use orchard_rain::interaction::session::config_hot_reload::ConfigReloadSettings;
use orchard_rain::{GameConfig, GamePlugin};

/// Messages gathered before logging is up; replayed once the app starts.
#[derive(Resource, Default)]
struct ConfigLoadReport {
    used: Vec<String>,
    errors: Vec<String>,
    warnings: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = cli.config_paths();
    let (mut cfg, used, errors) = GameConfig::load_layered(paths.iter());
    if let Some(save) = &cli.save {
        cfg.save.path = save.display().to_string();
    }
    if cli.reset_save {
        reset_save(&cfg.save.path)?;
    }
    let warnings = cfg.validate();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: cfg.window.title.clone(),
                        resolution: (cfg.window.width, cfg.window.height).into(),
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn,bevy_render=warn".to_string(),
                    ..default()
                }),
        )
        .insert_resource(ClearColor(Color::srgb(0.45, 0.7, 0.4)))
        .insert_resource(cfg)
        .insert_resource(ConfigReloadSettings {
            paths,
            ..default()
        })
        .insert_resource(ConfigLoadReport {
            used,
            errors,
            warnings,
        })
        .add_plugins(GamePlugin)
        .add_systems(Startup, log_config_report)
        .run();
    Ok(())
}

fn reset_save(path: &str) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("remove save file {path}")),
    }
}

fn log_config_report(report: Res<ConfigLoadReport>) {
    if report.used.is_empty() {
        info!(target: "config", "no config files found; using built-in defaults");
    } else {
        info!(target: "config", "config layers: {}", report.used.join(", "));
    }
    for e in &report.errors {
        // Missing optional layers are expected.
        if e.contains("read error") {
            debug!(target: "config", "{e}");
        } else {
            warn!(target: "config", "{e}");
        }
    }
    for w in &report.warnings {
        warn!(target: "config", "{w}");
    }
}
