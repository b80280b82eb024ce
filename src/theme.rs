/*
 * Theme Module
 *
 * Dark/light theme switching and the key-value store that remembers the
 * choice. The accent color of the active Palette is the one color token the
 * particle field reads every frame.
 */

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use nannou::color::{rgb, Rgb};
use nannou_egui::egui;
use tracing::{debug, info};

use crate::error::{Error, Result};

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: rgb(10, 10, 10),
                text: rgb(240, 240, 245),
                muted: rgb(150, 150, 160),
                accent: rgb(0, 210, 255),
            },
            Theme::Light => Palette {
                background: rgb(248, 250, 252),
                text: rgb(26, 26, 32),
                muted: rgb(100, 100, 112),
                accent: rgb(58, 123, 213),
            },
        }
    }

    pub fn egui_visuals(self) -> egui::Visuals {
        match self {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(Error::invalid("theme", format!("unknown theme {:?}", other))),
        }
    }
}

/// Colors for one theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Rgb<u8>,
    pub text: Rgb<u8>,
    pub muted: Rgb<u8>,
    pub accent: Rgb<u8>,
}

/// Minimal string key-value persistence.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// A JSON object of strings on disk. A missing file reads as empty; every
/// `set` rewrites the whole file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), entries = values.len(), "opened preference store");
        Ok(Self { path, values })
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let content = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, content).map_err(|e| Error::io(&self.path, e))
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        self.flush()
    }
}

pub struct ThemeManager {
    current: Theme,
    store: Box<dyn PreferenceStore>,
}

impl ThemeManager {
    // Unknown or missing stored values fall back to dark
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let current = store
            .get(THEME_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
        info!(theme = %current, "theme loaded");
        Self { current, store }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn palette(&self) -> Palette {
        self.current.palette()
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    /// Flip the theme and persist it. The switch takes effect even when the
    /// store fails to save.
    pub fn toggle(&mut self) -> Result<Theme> {
        self.current = self.current.toggled();
        info!(theme = %self.current, "theme toggled");
        self.store.set(THEME_KEY, self.current.as_str())?;
        Ok(self.current)
    }
}
