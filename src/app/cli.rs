use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["assets/config/game.ron", "assets/config/game.local.ron"];

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "orchard_rain", about = "Water the garden, watch it grow")]
pub struct Cli {
    /// Extra RON config layered over assets/config/game.ron (repeatable).
    #[arg(long = "config", value_name = "PATH")]
    pub configs: Vec<PathBuf>,
    /// Save file path (overrides `save.path`).
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,
    /// Delete the save file before starting.
    #[arg(long)]
    pub reset_save: bool,
}

impl Cli {
    /// Config files in layering order.
    pub fn config_paths(&self) -> Vec<PathBuf> {
        DEFAULT_CONFIG_PATHS
            .iter()
            .map(PathBuf::from)
            .chain(self.configs.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_configs_and_flags() {
        let cli = Cli::parse_from([
            "orchard_rain",
            "--config",
            "a.ron",
            "--config",
            "b.ron",
            "--save",
            "/tmp/s.ron",
            "--reset-save",
        ]);
        assert_eq!(cli.configs.len(), 2);
        assert!(cli.reset_save);
        let paths = cli.config_paths();
        assert_eq!(paths.len(), 4);
        assert_eq!(paths[3], PathBuf::from("b.ron"));
    }

    #[test]
    fn defaults_without_args() {
        let cli = Cli::parse_from(["orchard_rain"]);
        assert!(cli.save.is_none());
        assert!(!cli.reset_save);
        assert_eq!(cli.config_paths().len(), 2);
    }
}
