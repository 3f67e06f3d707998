//! Registers fragment paths with the host's incremental-build tracker.
//!
//! The generated file is the only thing the host sees in its module graph, so
//! the fragment directory and the fragment files have to be handed over
//! explicitly for the host watcher to pick up edits to them.

use crate::watch::path_utils::resolve;
use log::debug;
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

/// A host-owned collection that paths can be added to.
///
/// Adding a path that is already present must be a no-op.
pub trait DependencySink {
    fn add(&mut self, path: PathBuf);
}

impl DependencySink for HashSet<PathBuf> {
    fn add(&mut self, path: PathBuf) {
        self.insert(path);
    }
}

impl DependencySink for BTreeSet<PathBuf> {
    fn add(&mut self, path: PathBuf) {
        self.insert(path);
    }
}

impl DependencySink for Vec<PathBuf> {
    fn add(&mut self, path: PathBuf) {
        if !self.contains(&path) {
            self.push(path);
        }
    }
}

/// Adds `watched` to `context_deps` and every file to `file_deps`, all
/// resolved against `context`.
///
/// # Examples
///
/// ```
/// use fragcat::deps::register_dependencies;
/// use std::collections::BTreeSet;
/// use std::path::{Path, PathBuf};
///
/// let mut context_deps = BTreeSet::new();
/// let mut file_deps = BTreeSet::new();
/// register_dependencies(
///     &[PathBuf::from("x.js"), PathBuf::from("y.js")],
///     Path::new("components/"),
///     Path::new("/proj"),
///     &mut context_deps,
///     &mut file_deps,
/// );
///
/// assert!(context_deps.contains(Path::new("/proj/components")));
/// assert!(file_deps.contains(Path::new("/proj/x.js")));
/// assert!(file_deps.contains(Path::new("/proj/y.js")));
/// ```
pub fn register_dependencies(
    files: &[PathBuf],
    watched: &Path,
    context: &Path,
    context_deps: &mut dyn DependencySink,
    file_deps: &mut dyn DependencySink,
) {
    context_deps.add(resolve(context, watched));
    for file in files {
        file_deps.add(resolve(context, file));
    }
    debug!(
        "Registered '{}' and {} fragment file(s) as dependencies",
        watched.display(),
        files.len()
    );
}
