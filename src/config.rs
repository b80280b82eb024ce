/*
 * Configuration Module
 *
 * Startup configuration. Values are layered: built-in defaults, then an
 * optional TOML file, then command-line flags.
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::params::FieldParams;
use crate::typing::DEFAULT_SPEED;

pub const DEFAULT_HEADLINE: &str = "AI & Machine Learning Engineer";
pub const DEFAULT_PREFS_FILE: &str = "neural-field-prefs.json";

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "neural-field", version, about = "Animated neural-network portfolio background")]
pub struct Cli {
    /// TOML file with default settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of nodes in the background field
    #[arg(short, long)]
    pub nodes: Option<usize>,

    /// Distance below which two nodes are connected
    #[arg(short = 'd', long)]
    pub max_distance: Option<f32>,

    /// Text typed by the headline
    #[arg(long)]
    pub headline: Option<String>,

    /// Delay between typed characters in milliseconds
    #[arg(long)]
    pub typing_speed_ms: Option<u64>,

    /// Where the theme preference is stored
    #[arg(long)]
    pub prefs: Option<PathBuf>,

    /// Keep stepping the field while the window is hidden
    #[arg(long)]
    pub animate_when_hidden: bool,

    /// Show frame statistics
    #[arg(long)]
    pub debug: bool,
}

/// On-disk form; every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub field: FieldSection,
    pub headline: Option<String>,
    pub typing_speed_ms: Option<u64>,
    pub prefs: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FieldSection {
    pub nodes: Option<usize>,
    pub max_distance: Option<f32>,
    pub speed: Option<f32>,
    pub visible_opacity: Option<f32>,
    pub animate_when_hidden: Option<bool>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(toml::from_str(&content)?)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub field: FieldParams,
    pub headline: String,
    pub typing_speed: Duration,
    pub prefs_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            field: FieldParams::default(),
            headline: DEFAULT_HEADLINE.to_owned(),
            typing_speed: DEFAULT_SPEED,
            prefs_path: PathBuf::from(DEFAULT_PREFS_FILE),
        }
    }
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                debug!(path = %path.display(), "loading config file");
                ConfigFile::load(path)?
            }
            None => ConfigFile::default(),
        };
        Self::resolve(file, cli)
    }

    pub fn resolve(file: ConfigFile, cli: &Cli) -> Result<Self> {
        let mut config = Self::default();

        // File layer
        let section = file.field;
        if let Some(nodes) = section.nodes {
            config.field.node_count = nodes;
        }
        if let Some(distance) = section.max_distance {
            config.field.max_distance = distance;
        }
        if let Some(speed) = section.speed {
            config.field.speed = speed;
        }
        if let Some(opacity) = section.visible_opacity {
            config.field.visible_opacity = opacity;
        }
        if let Some(animate) = section.animate_when_hidden {
            config.field.animate_when_hidden = animate;
        }
        if let Some(headline) = file.headline {
            config.headline = headline;
        }
        if let Some(ms) = file.typing_speed_ms {
            config.typing_speed = Duration::from_millis(ms);
        }
        if let Some(prefs) = file.prefs {
            config.prefs_path = prefs;
        }

        // CLI layer
        if let Some(nodes) = cli.nodes {
            config.field.node_count = nodes;
        }
        if let Some(distance) = cli.max_distance {
            config.field.max_distance = distance;
        }
        if let Some(headline) = &cli.headline {
            config.headline = headline.clone();
        }
        if let Some(ms) = cli.typing_speed_ms {
            config.typing_speed = Duration::from_millis(ms);
        }
        if let Some(prefs) = &cli.prefs {
            config.prefs_path = prefs.clone();
        }
        if cli.animate_when_hidden {
            config.field.animate_when_hidden = true;
        }
        if cli.debug {
            config.field.show_debug = true;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.field.validate()?;
        if self.typing_speed.is_zero() {
            return Err(Error::invalid("typing_speed_ms", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_file_or_flags() {
        let config = AppConfig::resolve(ConfigFile::default(), &Cli::default()).unwrap();
        assert_eq!(config.field.node_count, 50);
        assert_eq!(config.field.max_distance, 150.0);
        assert_eq!(config.headline, DEFAULT_HEADLINE);
        assert_eq!(config.typing_speed, Duration::from_millis(150));
    }

    #[test]
    fn cli_overrides_file() {
        let file = ConfigFile {
            field: FieldSection { nodes: Some(80), max_distance: Some(120.0), ..FieldSection::default() },
            headline: Some("From file".into()),
            ..ConfigFile::default()
        };
        let cli = Cli { nodes: Some(20), ..Cli::default() };
        let config = AppConfig::resolve(file, &cli).unwrap();
        assert_eq!(config.field.node_count, 20);
        assert_eq!(config.field.max_distance, 120.0);
        assert_eq!(config.headline, "From file");
    }

    #[test]
    fn loads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "headline = \"Hi\"\ntyping_speed_ms = 90\n\n[field]\nnodes = 12\nanimate_when_hidden = true\n"
        )
        .unwrap();

        let cli = Cli { config: Some(file.path().to_path_buf()), ..Cli::default() };
        let config = AppConfig::from_cli(&cli).unwrap();
        assert_eq!(config.field.node_count, 12);
        assert!(config.field.animate_when_hidden);
        assert_eq!(config.typing_speed, Duration::from_millis(90));
        assert_eq!(config.headline, "Hi");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[field]\nparticles = 3").unwrap();
        assert!(matches!(ConfigFile::load(file.path()), Err(Error::Toml(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let cli = Cli { config: Some(PathBuf::from("/definitely/not/here.toml")), ..Cli::default() };
        assert!(matches!(AppConfig::from_cli(&cli), Err(Error::Io { .. })));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let cli = Cli { max_distance: Some(-3.0), ..Cli::default() };
        assert!(AppConfig::resolve(ConfigFile::default(), &cli).is_err());
        let cli = Cli { typing_speed_ms: Some(0), ..Cli::default() };
        assert!(AppConfig::resolve(ConfigFile::default(), &cli).is_err());
        let cli = Cli { nodes: Some(5000), ..Cli::default() };
        assert!(matches!(
            AppConfig::resolve(ConfigFile::default(), &cli),
            Err(Error::InvalidConfig { field: "node_count", .. })
        ));
        let cli = Cli { max_distance: Some(5.0), ..Cli::default() };
        assert!(AppConfig::resolve(ConfigFile::default(), &cli).is_err());
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["neural-field", "--nodes", "30", "-d", "90", "--animate-when-hidden"]);
        assert_eq!(cli.nodes, Some(30));
        assert_eq!(cli.max_distance, Some(90.0));
        assert!(cli.animate_when_hidden);
    }
}
