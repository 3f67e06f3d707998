//! The `fragcat` prelude for convenient library usage.
//!
//! # Example
//!
//! ```
//! use fragcat::prelude::*;
//!
//! let options = OptionsBuilder::new().target_file("dist/custom.js").build();
//! let plugin = ConcatPlugin::new(options, BuildMode::from_env_value(Some("production")));
//! assert_eq!(plugin.hooks(), &[Hook::Run]);
//! ```

pub use crate::config::{BuildMode, Options, OptionsBuilder};
pub use crate::core_types::{FileBlock, FileList, PluginState};
pub use crate::deps::{register_dependencies, DependencySink};
pub use crate::discovery::{list_files, list_files_ordered, FileOrder};
pub use crate::errors::{Error, Result};
pub use crate::host::{ChangedFiles, Compilation, Hook, RecordingCompilation};
pub use crate::output::{concatenate, concatenate_with_backdate};
pub use crate::plugin::ConcatPlugin;
pub use crate::watch::{should_rebuild, should_rebuild_from};
