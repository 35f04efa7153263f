//! Configuration bootstrap for the Reelsmith video generation server.
//!
//! The server reads one TOML file, `<root>/config.toml`, where `<root>` comes
//! from the `REELSMITH_ROOT` environment variable (default `/Reelsmith`).
//! This crate finds that file, creates it when missing, parses it, and hands
//! the rest of the application a typed view of the result.
//!
//! ```ignore
//! let ctx = ConfigContext::init()?;
//! ctx.apply_tool_env();
//! serve(ctx.settings.listen_host.clone(), ctx.settings.listen_port);
//! ```
//!
//! # First run
//!
//! When `config.toml` does not exist, loading seeds it — from
//! `config.example.toml` in the same directory if an operator shipped one
//! (copied byte-for-byte), otherwise from the compiled-in
//! [`DEFAULT_CONFIG`] template. The file is created at most once; an
//! existing file is never rewritten by a load.
//!
//! # Sparse files, typed view
//!
//! Every key in the file is optional. [`Settings`] applies the documented
//! defaults in a single deserialization pass over the parsed table, so
//! consumers read `settings.listen_port` instead of chaining lookups with
//! fallback values. Sections the server merely forwards to its subsystems
//! (`whisper`, `proxy`, `azure`, `siliconflow`) are kept as raw tables, and
//! the full parsed table stays available on the context for anything outside
//! the schema.
//!
//! # Design: explicit context, explicit side effects
//!
//! There is no global configuration state. [`ConfigContext`] is constructed
//! once at startup and passed by reference; tests build throwaway contexts
//! against temp directories via [`ConfigPaths::at_root`]. Likewise, exporting
//! the configured ImageMagick/ffmpeg paths to the environment variables the
//! media libraries probe is a separate call
//! ([`apply_tool_env`](ConfigContext::apply_tool_env)), not a hidden side
//! effect of loading.
//!
//! # Concurrency
//!
//! Everything here is synchronous, single-threaded filesystem work, intended
//! to run before the server spawns workers. Saves replace the file wholesale
//! with no locking: two processes writing concurrently resolve as last
//! writer wins. The context never re-reads the file on its own; call
//! [`reload`](ConfigContext::reload) if you want fresh content.
//!
//! # Cleanup helper
//!
//! [`remove_path`] deletes a file, symlink, or directory tree, tolerating
//! the transient `EBUSY`-family errors that show up when a container volume
//! or an antivirus scanner briefly holds an entry open. It retries a bounded
//! number of times and otherwise propagates the error.
//!
//! # Errors and logging
//!
//! All fallible operations return [`ConfigError`]. A file that fails to
//! parse even after the BOM-stripping fallback is fatal to startup — the
//! error carries the path and the underlying TOML diagnostic. Progress is
//! reported through the [`log`] facade; the embedding binary chooses the
//! logger implementation.

pub mod error;
pub mod paths;

mod context;
mod file;
mod persist;
mod remove;
mod settings;

pub use context::{ConfigContext, FFMPEG_ENV, IMAGEMAGICK_ENV};
pub use error::ConfigError;
pub use file::{DEFAULT_CONFIG, ensure_config_file, load_config};
pub use paths::ConfigPaths;
pub use persist::save_config;
pub use remove::{RetryPolicy, remove_path, remove_path_with};
pub use settings::{AppSection, Settings, UiSection};
