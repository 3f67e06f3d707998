//! `fragcat` is a build plugin that concatenates a directory of hand-edited
//! source fragments into one generated file and keeps a host bundler's watch
//! set up to date.
//!
//! The pipeline has four parts:
//! 1.  **Snapshot** ([`discovery`]): list the fragment directory.
//! 2.  **Concatenate** ([`output`]): read fragments concurrently, write the
//!     banner and one block per fragment, then back-date the generated file so
//!     the host watcher does not mistake the write for a user edit.
//! 3.  **Gate** ([`watch`]): in watch mode, skip the pass when none of the
//!     changed paths lies inside the fragment directory.
//! 4.  **Register** ([`deps`]): hand the fragment directory and files to the
//!     host as dependencies after every compile.
//!
//! [`ConcatPlugin`] ties these together behind the three hook handlers a host
//! calls: [`run`](ConcatPlugin::run), [`watch_run`](ConcatPlugin::watch_run)
//! and [`after_compile`](ConcatPlugin::after_compile).
//!
//! # Example: Watch Mode
//!
//! ```
//! use fragcat::host::RecordingCompilation;
//! use fragcat::{BuildMode, ConcatPlugin, OptionsBuilder};
//! use std::path::PathBuf;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. A project with one fragment.
//! let project = tempfile::tempdir()?;
//! let fragments = project.path().join("components");
//! std::fs::create_dir(&fragments)?;
//! std::fs::write(fragments.join("button.js"), "export const Button = 1;")?;
//!
//! // 2. Configure the plugin for watch mode.
//! let options = OptionsBuilder::new()
//!     .files_directory(&fragments)
//!     .target_file(project.path().join("index.js"))
//!     .build();
//! let plugin = ConcatPlugin::new(options, BuildMode::Watch);
//!
//! // 3. First rebuild: no change history yet, so the pass always runs.
//! assert!(plugin.watch_run(&Vec::<PathBuf>::new()).await?);
//!
//! // 4. A change elsewhere in the project is ignored.
//! let unrelated = vec![project.path().join("app.js")];
//! assert!(!plugin.watch_run(&unrelated).await?);
//!
//! // 5. After the compile, the host learns what to watch.
//! let mut compilation = RecordingCompilation::new(project.path());
//! plugin.after_compile(&mut compilation);
//! assert!(compilation.file_dependencies.contains(&fragments.join("button.js")));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod core_types;
pub mod deps;
pub mod discovery;
pub mod errors;
pub mod host;
pub mod logging;
pub mod output;
pub mod plugin;
pub mod prelude;
pub mod watch;

// Re-export key public types for easier use as a library
pub use config::{BuildMode, Options, OptionsBuilder};
pub use core_types::{FileBlock, FileList, PluginState};
pub use deps::{register_dependencies, DependencySink};
pub use discovery::{list_files, FileOrder};
pub use errors::{Error, Result};
pub use host::{ChangedFiles, Compilation, Hook};
pub use output::concatenate;
pub use plugin::ConcatPlugin;
pub use watch::should_rebuild;
