//! Defines the plugin's `Options` record and the build mode.
//!
//! Options are constructed once, either programmatically through
//! [`OptionsBuilder`] or from a user-supplied JSON object, and are never
//! mutated afterwards.

use crate::constants::{
    BUILD_MODE_ENV_VAR, DEFAULT_FILES_DIRECTORY, DEFAULT_TARGET_FILE, PRODUCTION_MODE,
};
use std::path::{Path, PathBuf};

pub use builder::OptionsBuilder;
pub use parsing::UserOptions;
mod builder;
mod parsing;

/// Where the fragments live and where the generated file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    files_directory: PathBuf,
    target_file: PathBuf,
}

impl Options {
    /// Creates options from explicit paths.
    pub fn new(files_directory: impl Into<PathBuf>, target_file: impl Into<PathBuf>) -> Self {
        Self {
            files_directory: files_directory.into(),
            target_file: target_file.into(),
        }
    }

    /// Overrides the defaults key-by-key with whatever the user supplied.
    pub fn merged(user: UserOptions) -> Self {
        let defaults = Self::default();
        Self {
            files_directory: user.files_directory.unwrap_or(defaults.files_directory),
            target_file: user.target_file.unwrap_or(defaults.target_file),
        }
    }

    /// Directory holding the fragment files.
    pub fn files_directory(&self) -> &Path {
        &self.files_directory
    }

    /// Path of the generated file.
    pub fn target_file(&self) -> &Path {
        &self.target_file
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new(DEFAULT_FILES_DIRECTORY, DEFAULT_TARGET_FILE)
    }
}

/// Selects how the plugin hooks into the host's build lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    /// One-shot build: concatenate on every run, no change gating.
    Production,
    /// Incremental rebuilds: gate on changed paths and register dependencies.
    #[default]
    Watch,
}

impl BuildMode {
    /// Maps a host mode indicator to a build mode.
    ///
    /// Only the exact value `"production"` selects [`BuildMode::Production`];
    /// anything else, including an absent value, selects [`BuildMode::Watch`].
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(PRODUCTION_MODE) => BuildMode::Production,
            _ => BuildMode::Watch,
        }
    }

    /// Reads `NODE_ENV` once. Call this at setup, not from inside a build.
    pub fn from_env() -> Self {
        let value = std::env::var(BUILD_MODE_ENV_VAR).ok();
        Self::from_env_value(value.as_deref())
    }

    pub fn is_production(self) -> bool {
        self == BuildMode::Production
    }
}
