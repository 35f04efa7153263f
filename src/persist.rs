//! Writing configuration back to disk.
//!
//! Saves are wholesale: the table is serialized and the file replaced in
//! full. There is no merging with on-disk content and no backup of the
//! previous version — last writer wins.

use toml::Table;

use crate::error::ConfigError;
use crate::paths::ConfigPaths;

/// Serialize `table` and overwrite `config.toml` at the resolved path.
pub fn save_config(paths: &ConfigPaths, table: &Table) -> Result<(), ConfigError> {
    let content = toml::to_string(table)?;
    std::fs::write(&paths.config_file, content)
        .map_err(|e| ConfigError::io(&paths.config_file, e))?;
    log::info!("saved config to {}", paths.config_file.display());
    Ok(())
}
