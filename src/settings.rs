//! Typed view over the parsed configuration table.
//!
//! Every field is optional in the file; defaults are filled in here, in one
//! deserialization pass, instead of scattering `get`-with-default lookups
//! through the callers. Sections the server only forwards to subsystems
//! (`whisper`, `proxy`, `azure`, `siliconflow`) stay as raw tables.

use serde::Deserialize;
use toml::Table;

use crate::error::ConfigError;

/// Top-level settings with their documented defaults applied.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_level: String,
    pub listen_host: String,
    pub listen_port: u16,
    pub project_name: String,
    /// HTML snippet shown in the web UI footer.
    pub project_description: String,
    pub project_version: String,
    pub app: AppSection,
    pub ui: UiSection,
    pub whisper: Table,
    pub proxy: Table,
    pub azure: Table,
    pub siliconflow: Table,
}

/// `[app]` — paths to external media tools, empty when not configured.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppSection {
    pub imagemagick_path: String,
    pub ffmpeg_path: String,
}

/// `[ui]` — web UI toggles. `hide_log` defaults to off.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub hide_log: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "DEBUG".into(),
            listen_host: "0.0.0.0".into(),
            listen_port: 8080,
            project_name: "Reelsmith".into(),
            project_description:
                "<a href='https://github.com/reelsmith/reelsmith'>https://github.com/reelsmith/reelsmith</a>"
                    .into(),
            project_version: "0.3.1".into(),
            app: AppSection::default(),
            ui: UiSection::default(),
            whisper: Table::new(),
            proxy: Table::new(),
            azure: Table::new(),
            siliconflow: Table::new(),
        }
    }
}

impl Settings {
    /// Walk the parsed table once and produce the typed view. Keys outside
    /// the schema are ignored here; they remain available on the raw table.
    pub fn from_table(table: &Table) -> Result<Self, ConfigError> {
        toml::Value::Table(table.clone())
            .try_into()
            .map_err(ConfigError::Invalid)
    }
}
