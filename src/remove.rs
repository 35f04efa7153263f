//! Best-effort removal of filesystem entries with bounded retries.
//!
//! A single attempt classifies the entry and picks the matching syscall:
//! symlinks are unlinked without following, regular files are removed,
//! directories are removed recursively. Attempts that fail with a transient
//! busy condition (`EBUSY`, `ETXTBSY`, `EROFS`) are retried after a fixed
//! delay, re-classifying from scratch each time — the entry's type can change
//! between attempts (e.g. a file replaced by a directory while we slept).
//!
//! The retry loop is separated from the attempt itself so tests can inject
//! synthetic failures and count attempts without touching the filesystem.

use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// How often and how patiently to retry a failing removal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first.
    pub attempts: u32,
    /// Sleep between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_millis(500),
        }
    }
}

/// Remove whatever sits at `path`, retrying transient failures with the
/// default [`RetryPolicy`].
///
/// A path that does not exist (and is not a dangling symlink) is a successful
/// no-op.
pub fn remove_path(path: &Path) -> Result<(), ConfigError> {
    remove_path_with(path, RetryPolicy::default())
}

/// Like [`remove_path`] with an explicit retry policy.
pub fn remove_path_with(path: &Path, policy: RetryPolicy) -> Result<(), ConfigError> {
    remove_with(path, policy, remove_once)
}

/// Retry loop around a single-attempt removal function.
///
/// Retries only errors whose OS code indicates a transient busy condition,
/// and only while attempts remain. The attempt function runs from the top on
/// every retry, so classification is repeated rather than cached.
fn remove_with(
    path: &Path,
    policy: RetryPolicy,
    mut attempt: impl FnMut(&Path) -> std::io::Result<()>,
) -> Result<(), ConfigError> {
    let attempts = policy.attempts.max(1);
    for n in 1..=attempts {
        match attempt(path) {
            Ok(()) => return Ok(()),
            Err(e) if n < attempts && is_transient(&e) => {
                log::debug!(
                    "removal of {} busy (attempt {n}/{attempts}), retrying: {e}",
                    path.display()
                );
                std::thread::sleep(policy.delay);
            }
            Err(e) => return Err(ConfigError::io(path, e)),
        }
    }
    unreachable!("retry loop returns on the final attempt");
}

/// One classification-and-delete pass.
fn remove_once(path: &Path) -> std::io::Result<()> {
    // symlink_metadata reports the link itself, so a dangling symlink is
    // still found and removed.
    let meta = match std::fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    let ft = meta.file_type();
    if ft.is_symlink() || ft.is_file() {
        return std::fs::remove_file(path);
    }
    if ft.is_dir() {
        return std::fs::remove_dir_all(path);
    }
    // Sockets, FIFOs, devices: a plain unlink is the right call.
    std::fs::remove_file(path)
}

/// EBUSY, ETXTBSY and EROFS are expected to clear shortly.
fn is_transient(e: &std::io::Error) -> bool {
    matches!(e.raw_os_error(), Some(16) | Some(26) | Some(30))
}
