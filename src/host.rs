//! Contracts the host bundler fulfils for the plugin.
//!
//! The host owns its watcher and its dependency graph; the plugin only reads
//! the changed paths and appends to the dependency collections.

use crate::deps::DependencySink;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Lifecycle hooks the plugin attaches handlers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// One-shot build.
    Run,
    /// Each incremental rebuild in watch mode.
    WatchRun,
    /// After every compile in watch mode.
    AfterCompile,
}

/// Enumerates the paths the host watcher saw change since the last build.
pub trait ChangedFiles {
    fn changed_files(&self) -> Vec<PathBuf>;
}

/// A watcher's modification-time table; its keys are the changed paths.
impl ChangedFiles for HashMap<PathBuf, SystemTime> {
    fn changed_files(&self) -> Vec<PathBuf> {
        self.keys().cloned().collect()
    }
}

/// A plain list of changed paths.
impl ChangedFiles for [PathBuf] {
    fn changed_files(&self) -> Vec<PathBuf> {
        self.to_vec()
    }
}

impl ChangedFiles for Vec<PathBuf> {
    fn changed_files(&self) -> Vec<PathBuf> {
        self.clone()
    }
}

/// The host's view of one finished compile.
pub trait Compilation {
    /// Root directory relative paths are resolved against.
    fn context(&self) -> &Path;
    /// Both dependency collections at once: directories whose contents the
    /// host should watch, then individual files it should watch.
    fn dependency_sinks(&mut self) -> (&mut dyn DependencySink, &mut dyn DependencySink);

    fn context_dependencies(&mut self) -> &mut dyn DependencySink {
        self.dependency_sinks().0
    }

    fn file_dependencies(&mut self) -> &mut dyn DependencySink {
        self.dependency_sinks().1
    }
}

/// In-memory [`Compilation`] that records what was registered.
#[derive(Debug, Clone, Default)]
pub struct RecordingCompilation {
    pub context: PathBuf,
    pub context_dependencies: BTreeSet<PathBuf>,
    pub file_dependencies: BTreeSet<PathBuf>,
}

impl RecordingCompilation {
    pub fn new(context: impl Into<PathBuf>) -> Self {
        Self {
            context: context.into(),
            ..Default::default()
        }
    }
}

impl Compilation for RecordingCompilation {
    fn context(&self) -> &Path {
        &self.context
    }

    fn dependency_sinks(&mut self) -> (&mut dyn DependencySink, &mut dyn DependencySink) {
        (&mut self.context_dependencies, &mut self.file_dependencies)
    }
}
