//! Seeding and loading of the configuration file.
//!
//! # Seeding
//!
//! The root directory is created if missing. When no `config.toml` exists,
//! the file is seeded exactly once per missing-file detection, from the first
//! source available:
//!
//! 1. `config.example.toml` next to it — copied byte-for-byte, so an operator
//!    can ship a site template alongside the application.
//! 2. The compiled-in [`DEFAULT_CONFIG`] template.
//!
//! An existing file is never touched.
//!
//! # Loading
//!
//! The file is read and parsed as TOML on every call — nothing caches or
//! re-reads behind the caller's back. If the primary parse fails (most often
//! a UTF-8 byte-order mark written by a Windows editor, which the parser does
//! not strip), a second parse runs on the BOM-stripped text. Failure of that
//! fallback propagates the parse error.

use std::path::Path;

use toml::Table;

use crate::error::ConfigError;
use crate::paths::ConfigPaths;

/// Template written on first run when no example file is present.
pub const DEFAULT_CONFIG: &str = r#"# Reelsmith config
log_level = "DEBUG"
listen_host = "0.0.0.0"
listen_port = 8080
project_name = "Reelsmith"
project_description = "<a href='https://github.com/reelsmith/reelsmith'>https://github.com/reelsmith/reelsmith</a>"
project_version = "0.3.1"

[app]
imagemagick_path = ""
ffmpeg_path = ""

[ui]
hide_log = false
"#;

/// Make sure `config.toml` exists, seeding it from the example file or the
/// built-in template. Creates the root directory if needed.
pub fn ensure_config_file(paths: &ConfigPaths) -> Result<(), ConfigError> {
    std::fs::create_dir_all(&paths.root).map_err(|e| ConfigError::io(&paths.root, e))?;

    if paths.config_file.is_file() {
        return Ok(());
    }

    if paths.example_file.is_file() {
        std::fs::copy(&paths.example_file, &paths.config_file)
            .map_err(|e| ConfigError::io(&paths.config_file, e))?;
        log::info!(
            "copied {} to {}",
            paths.example_file.display(),
            paths.config_file.display()
        );
    } else {
        std::fs::write(&paths.config_file, DEFAULT_CONFIG)
            .map_err(|e| ConfigError::io(&paths.config_file, e))?;
        log::info!("created default {}", paths.config_file.display());
    }
    Ok(())
}

/// Load the configuration, seeding the file first if it is missing.
///
/// Returns the raw parsed table; see [`Settings`](crate::Settings) for the
/// typed view.
pub fn load_config(paths: &ConfigPaths) -> Result<Table, ConfigError> {
    ensure_config_file(paths)?;

    let content = std::fs::read_to_string(&paths.config_file)
        .map_err(|e| ConfigError::io(&paths.config_file, e))?;

    let table = parse_config(&content, &paths.config_file)?;
    log::info!("loaded config from {}", paths.config_file.display());
    Ok(table)
}

/// Parse TOML text, falling back to a BOM-stripped re-parse on failure.
fn parse_config(content: &str, path: &Path) -> Result<Table, ConfigError> {
    match toml::from_str(content) {
        Ok(table) => Ok(table),
        Err(primary) => {
            log::warn!(
                "parsing {} failed ({primary}), retrying with BOM stripped",
                path.display()
            );
            let stripped = content.trim_start_matches('\u{feff}');
            toml::from_str(stripped).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
