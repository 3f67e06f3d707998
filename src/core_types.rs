//! Defines core data structures passed between the pipeline stages.

use std::path::PathBuf;

/// Ordered fragment paths, each already joined to the fragment directory.
///
/// Produced fresh on every concatenation pass and replaces the previous list.
pub type FileList = Vec<PathBuf>;

/// A fragment's path together with its raw bytes, ready to be rendered.
///
/// # Examples
///
/// ```
/// use fragcat::core_types::FileBlock;
/// use std::path::PathBuf;
///
/// let block = FileBlock {
///     path: PathBuf::from("components/a.js"),
///     content: b"1;".to_vec(),
/// };
///
/// assert_eq!(block.content.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileBlock {
    /// Path as it appears in the provenance line.
    pub path: PathBuf,
    /// Raw file content, passed through untouched.
    pub content: Vec<u8>,
}

/// Lifecycle states of the plugin in watch mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PluginState {
    #[default]
    Idle,
    /// Consulting the change gate.
    Checking,
    /// Snapshotting and concatenating fragments.
    Concatenating,
    /// Handing watched paths to the host.
    Registering,
}
