//! The process-wide configuration context.
//!
//! A [`ConfigContext`] bundles everything the rest of the application reads
//! at startup: the resolved paths, the raw table, the typed [`Settings`] view,
//! and the host name. It is built once at startup and handed to consumers by
//! reference; nothing in this crate holds global state, so tests can build as
//! many contexts as they like against separate roots.
//!
//! Pointing the external media tools at configured binaries mutates the
//! process environment, so it is a separate step ([`apply_tool_env`]) the
//! caller opts into after loading, not a side effect of the load itself.
//!
//! [`apply_tool_env`]: ConfigContext::apply_tool_env

use std::path::Path;

use toml::Table;

use crate::error::ConfigError;
use crate::file::load_config;
use crate::paths::ConfigPaths;
use crate::persist::save_config;
use crate::settings::{AppSection, Settings};

/// Environment variable the ImageMagick bindings use to locate the binary.
pub const IMAGEMAGICK_ENV: &str = "IMAGEMAGICK_BINARY";

/// Environment variable the imageio ffmpeg bindings use to locate the binary.
pub const FFMPEG_ENV: &str = "IMAGEIO_FFMPEG_EXE";

/// Configuration state for one application instance.
#[derive(Debug, Clone)]
pub struct ConfigContext {
    pub paths: ConfigPaths,
    /// The parsed file as-is, including sections outside the typed schema.
    pub table: Table,
    pub settings: Settings,
    /// Host name reported by the OS at load time.
    pub hostname: String,
    /// Dev-server auto-reload; always off in this build.
    pub reload_debug: bool,
}

impl ConfigContext {
    /// Build the context with the root resolved from the environment.
    pub fn init() -> Result<Self, ConfigError> {
        Self::load_from(ConfigPaths::from_env())
    }

    /// Build the context against an explicit set of paths.
    pub fn load_from(paths: ConfigPaths) -> Result<Self, ConfigError> {
        let table = load_config(&paths)?;
        let settings = Settings::from_table(&table)?;
        let hostname = hostname::get()
            .map(|h| h.to_string_lossy().into_owned())
            .unwrap_or_default();

        log::info!("{} v{}", settings.project_name, settings.project_version);

        Ok(Self {
            paths,
            table,
            settings,
            hostname,
            reload_debug: false,
        })
    }

    /// Re-read the file and recompute the typed view. The context never does
    /// this on its own.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        self.table = load_config(&self.paths)?;
        self.settings = Settings::from_table(&self.table)?;
        Ok(())
    }

    /// Persist the current raw table back to `config.toml`.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(&self.paths, &self.table)
    }

    /// Export the configured tool paths to the environment variables the
    /// third-party media libraries probe. Only values that point at an
    /// existing regular file are exported.
    pub fn apply_tool_env(&self) {
        for (var, value) in tool_env_assignments(&self.settings.app, |p| p.is_file()) {
            log::info!("setting {var}={value}");
            // Safety: called from single-threaded startup, before any worker
            // threads exist (see the concurrency notes in the crate docs).
            unsafe { std::env::set_var(var, value) };
        }
    }
}

/// Decide which tool variables would be exported, given a probe for "is this
/// an existing regular file". Pure so tests never mutate the environment.
fn tool_env_assignments<'a>(
    app: &'a AppSection,
    is_file: impl Fn(&Path) -> bool,
) -> Vec<(&'static str, &'a str)> {
    let mut out = Vec::new();
    for (var, path) in [
        (IMAGEMAGICK_ENV, app.imagemagick_path.as_str()),
        (FFMPEG_ENV, app.ffmpeg_path.as_str()),
    ] {
        if !path.is_empty() && is_file(Path::new(path)) {
            out.push((var, path));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn init_against_empty_root_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let ctx = ConfigContext::load_from(ConfigPaths::at_root(dir.path())).unwrap();

        assert_eq!(ctx.settings.listen_port, 8080);
        assert!(!ctx.settings.ui.hide_log);
        assert!(!ctx.reload_debug);
    }

    #[test]
    fn context_reflects_file_content() {
        let dir = TempDir::new().unwrap();
        let paths = ConfigPaths::at_root(dir.path());
        fs::write(
            &paths.config_file,
            "project_name = \"Test Site\"\nlisten_port = 9000\n",
        )
        .unwrap();

        let ctx = ConfigContext::load_from(paths).unwrap();
        assert_eq!(ctx.settings.project_name, "Test Site");
        assert_eq!(ctx.settings.listen_port, 9000);
    }

    #[test]
    fn reload_picks_up_external_edits() {
        let dir = TempDir::new().unwrap();
        let paths = ConfigPaths::at_root(dir.path());
        let mut ctx = ConfigContext::load_from(paths.clone()).unwrap();
        assert_eq!(ctx.settings.listen_port, 8080);

        fs::write(&paths.config_file, "listen_port = 8081\n").unwrap();
        ctx.reload().unwrap();
        assert_eq!(ctx.settings.listen_port, 8081);
    }

    #[test]
    fn save_round_trips_through_the_context() {
        let dir = TempDir::new().unwrap();
        let mut ctx = ConfigContext::load_from(ConfigPaths::at_root(dir.path())).unwrap();

        ctx.table
            .insert("log_level".into(), toml::Value::String("INFO".into()));
        ctx.save().unwrap();

        ctx.reload().unwrap();
        assert_eq!(ctx.settings.log_level, "INFO");
    }

    #[test]
    fn tool_env_skips_empty_paths() {
        let app = AppSection::default();
        let assignments = tool_env_assignments(&app, |_| true);
        assert!(assignments.is_empty());
    }

    #[test]
    fn tool_env_skips_paths_that_are_not_files() {
        let app = AppSection {
            imagemagick_path: "/nonexistent/convert".into(),
            ffmpeg_path: "/nonexistent/ffmpeg".into(),
        };
        let assignments = tool_env_assignments(&app, |_| false);
        assert!(assignments.is_empty());
    }

    #[test]
    fn tool_env_exports_existing_binaries() {
        let app = AppSection {
            imagemagick_path: "/opt/im/convert".into(),
            ffmpeg_path: "/opt/ffmpeg/ffmpeg".into(),
        };
        let assignments = tool_env_assignments(&app, |_| true);
        assert_eq!(
            assignments,
            vec![
                (IMAGEMAGICK_ENV, "/opt/im/convert"),
                (FFMPEG_ENV, "/opt/ffmpeg/ffmpeg"),
            ]
        );
    }

    #[test]
    fn tool_env_probes_the_real_filesystem() {
        let dir = TempDir::new().unwrap();
        let ffmpeg = dir.path().join("ffmpeg");
        fs::write(&ffmpeg, "#!/bin/sh\n").unwrap();

        let app = AppSection {
            imagemagick_path: dir.path().join("missing").display().to_string(),
            ffmpeg_path: ffmpeg.display().to_string(),
        };
        let assignments = tool_env_assignments(&app, |p| p.is_file());
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].0, FFMPEG_ENV);
    }
}
