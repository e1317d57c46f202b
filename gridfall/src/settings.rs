use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::DEFAULT_TICK_INTERVAL;
use crate::render::DEFAULT_CELL_SIZE;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DriverSettings {
    #[serde(default = "default_version")]
    pub version: u32,
    /// Cell edge length in pixels.
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
    /// Simulation cadence; the gate fires once strictly more than this has
    /// elapsed since the previous tick.
    #[serde(default = "default_tick_interval", with = "crate::serde_duration")]
    pub tick_interval: Duration,
    #[serde(default = "default_vsync")]
    pub vsync: bool,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            cell_size: default_cell_size(),
            tick_interval: default_tick_interval(),
            vsync: default_vsync(),
        }
    }
}

impl DriverSettings {
    pub fn sanitized(mut self) -> Self {
        self.version = default_version();
        self.cell_size = self.cell_size.clamp(1, 128);
        if self.tick_interval < Duration::from_millis(1) {
            self.tick_interval = Duration::from_millis(1);
        }
        self
    }
}

fn default_version() -> u32 {
    1
}

fn default_cell_size() -> u32 {
    DEFAULT_CELL_SIZE
}

fn default_tick_interval() -> Duration {
    DEFAULT_TICK_INTERVAL
}

fn default_vsync() -> bool {
    true
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn from_env() -> Self {
        if let Some(explicit) = std::env::var_os("GRIDFALL_SETTINGS_PATH") {
            return Self {
                path: PathBuf::from(explicit),
            };
        }

        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| {
                    let mut p = PathBuf::from(home);
                    p.push(".config");
                    p
                })
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let mut path = base;
        path.push("gridfall");
        path.push("settings.json");
        Self { path }
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Missing or unreadable files fall back to defaults; whatever loads is
    /// sanitized before use.
    pub fn load(&self) -> DriverSettings {
        let Ok(bytes) = fs::read(&self.path) else {
            return DriverSettings::default();
        };
        serde_json::from_slice::<DriverSettings>(&bytes)
            .map(DriverSettings::sanitized)
            .unwrap_or_else(|_| DriverSettings::default())
    }

    pub fn save(&self, settings: &DriverSettings) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, text)
    }
}
