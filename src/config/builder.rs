// src/config/builder.rs

use super::{Options, UserOptions};
use std::path::PathBuf;

/// A builder for [`Options`].
///
/// Unset fields fall back to the defaults when [`build`](OptionsBuilder::build)
/// is called.
///
/// # Examples
///
/// ```
/// use fragcat::config::OptionsBuilder;
/// use std::path::Path;
///
/// let options = OptionsBuilder::new()
///     .files_directory("fragments/")
///     .build();
///
/// assert_eq!(options.files_directory(), Path::new("fragments/"));
/// assert_eq!(options.target_file(), Path::new("./src/custom/index.js"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct OptionsBuilder {
    files_directory: Option<PathBuf>,
    target_file: Option<PathBuf>,
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory holding the fragment files.
    pub fn files_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.files_directory = Some(path.into());
        self
    }

    /// Sets the path of the generated file.
    pub fn target_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.target_file = Some(path.into());
        self
    }

    pub fn build(self) -> Options {
        Options::merged(UserOptions {
            files_directory: self.files_directory,
            target_file: self.target_file,
        })
    }
}
