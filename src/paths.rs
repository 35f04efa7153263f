//! Resolution of the configuration root directory and the file paths under it.
//!
//! The root comes from the `REELSMITH_ROOT` environment variable, falling back
//! to a fixed install path so containers work with zero configuration. Both
//! the live config file and the example template are fixed filenames directly
//! under that root.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable that overrides the configuration root directory.
pub const ROOT_ENV: &str = "REELSMITH_ROOT";

/// Root directory used when [`ROOT_ENV`] is unset.
pub const DEFAULT_ROOT: &str = "/Reelsmith";

/// File name of the live configuration, under the root.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// File name of the example template, under the root. Consulted only when the
/// live file is missing.
pub const EXAMPLE_FILE_NAME: &str = "config.example.toml";

/// Resolved locations of the configuration files.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigPaths {
    pub root: PathBuf,
    pub config_file: PathBuf,
    pub example_file: PathBuf,
}

impl ConfigPaths {
    /// Resolve paths from the process environment ([`ROOT_ENV`] or the
    /// compiled-in default).
    pub fn from_env() -> Self {
        Self::at_root(resolve_root(std::env::var_os(ROOT_ENV)))
    }

    /// Resolve paths under an explicit root directory. Useful for tests and
    /// for callers that manage their own layout.
    pub fn at_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let config_file = root.join(CONFIG_FILE_NAME);
        let example_file = root.join(EXAMPLE_FILE_NAME);
        Self {
            root,
            config_file,
            example_file,
        }
    }
}

/// Pure half of [`ConfigPaths::from_env`]: map an optional env var value to
/// the root directory. An empty value counts as unset.
fn resolve_root(var: Option<OsString>) -> PathBuf {
    match var {
        Some(v) if !v.is_empty() => PathBuf::from(v),
        _ => PathBuf::from(DEFAULT_ROOT),
    }
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::from_env()
    }
}
