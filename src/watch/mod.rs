//! Change gate: decides whether a watch-mode rebuild touched the fragments.
//!
//! The gate is stateless. The host hands over the full set of changed paths
//! on every rebuild and the gate answers with a single boolean.

use log::debug;
use std::path::{Path, PathBuf};

pub mod path_utils;

use path_utils::resolve;

/// Returns `true` when `path` is `directory` itself or lies underneath it,
/// i.e. when `path` made relative to `directory` does not start with `..`.
///
/// Both paths are resolved against `base` first.
pub fn is_within(path: &Path, directory: &Path, base: &Path) -> bool {
    resolve(base, path).starts_with(resolve(base, directory))
}

/// Decides whether the watched directory changed, resolving relative paths
/// against the current working directory.
///
/// An empty change set means the host has no history yet (first run), which
/// always requires a rebuild.
///
/// # Examples
///
/// ```
/// use fragcat::watch::should_rebuild;
/// use std::path::{Path, PathBuf};
///
/// let watched = Path::new("/proj/src/custom/components");
///
/// assert!(should_rebuild(&[], watched));
/// assert!(should_rebuild(&[PathBuf::from("/proj/src/custom/components/a.js")], watched));
/// assert!(!should_rebuild(&[PathBuf::from("/proj/src/app.js")], watched));
/// ```
pub fn should_rebuild(changed: &[PathBuf], watched: &Path) -> bool {
    let base = std::env::current_dir().unwrap_or_default();
    should_rebuild_from(changed, watched, &base)
}

/// Same as [`should_rebuild`] with an explicit resolution base.
pub fn should_rebuild_from(changed: &[PathBuf], watched: &Path, base: &Path) -> bool {
    if changed.is_empty() {
        debug!("No change history yet, rebuilding");
        return true;
    }

    match changed.iter().find(|path| is_within(path, watched, base)) {
        Some(path) => {
            debug!(
                "Change to '{}' is inside '{}', rebuilding",
                path.display(),
                watched.display()
            );
            true
        }
        None => {
            debug!(
                "{} change(s), none inside '{}'",
                changed.len(),
                watched.display()
            );
            false
        }
    }
}
