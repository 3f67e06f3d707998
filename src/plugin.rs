//! The plugin object the host attaches to its build lifecycle.
//!
//! In production mode only [`ConcatPlugin::run`] does anything. In watch mode
//! every rebuild goes through the change gate first, and every finished
//! compile re-registers the fragment paths with the host.
//!
//! Concatenation passes are serialised: a rebuild that arrives while a pass
//! is in flight waits for it to finish and then runs its own pass against
//! the directory's current contents.

use crate::config::{BuildMode, Options};
use crate::constants::BACKDATE_OFFSET;
use crate::core_types::{FileList, PluginState};
use crate::deps::register_dependencies;
use crate::discovery::{list_files_ordered, FileOrder};
use crate::errors::Result;
use crate::host::{ChangedFiles, Compilation, Hook};
use crate::output::concatenate_with_backdate;
use crate::watch::should_rebuild;
use log::{debug, warn};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Concatenates a directory of fragments into one generated file.
///
/// # Examples
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use fragcat::{BuildMode, ConcatPlugin, OptionsBuilder};
///
/// let dir = tempfile::tempdir()?;
/// let fragments = dir.path().join("components");
/// std::fs::create_dir(&fragments)?;
/// std::fs::write(fragments.join("a.js"), "1;")?;
///
/// let options = OptionsBuilder::new()
///     .files_directory(&fragments)
///     .target_file(dir.path().join("index.js"))
///     .build();
/// let plugin = ConcatPlugin::new(options, BuildMode::Production);
///
/// plugin.run().await?;
/// assert_eq!(plugin.files(), vec![fragments.join("a.js")]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConcatPlugin {
    options: Options,
    mode: BuildMode,
    order: FileOrder,
    backdate: Duration,
    files: Mutex<FileList>,
    state: Mutex<PluginState>,
    pass_lock: tokio::sync::Mutex<()>,
}

impl ConcatPlugin {
    pub fn new(options: Options, mode: BuildMode) -> Self {
        Self {
            options,
            mode,
            order: FileOrder::default(),
            backdate: BACKDATE_OFFSET,
            files: Mutex::new(FileList::new()),
            state: Mutex::new(PluginState::Idle),
            pass_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Sets the order fragments are concatenated in. Defaults to listing order.
    pub fn with_order(mut self, order: FileOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets how far in the past the generated file's timestamps are placed.
    pub fn with_backdate(mut self, offset: Duration) -> Self {
        self.backdate = offset;
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    /// The hooks this plugin attaches to for its build mode.
    pub fn hooks(&self) -> &'static [Hook] {
        match self.mode {
            BuildMode::Production => &[Hook::Run],
            BuildMode::Watch => &[Hook::WatchRun, Hook::AfterCompile],
        }
    }

    /// The fragment list recorded by the last successful pass.
    pub fn files(&self) -> FileList {
        lock(&self.files).clone()
    }

    pub fn state(&self) -> PluginState {
        *lock(&self.state)
    }

    /// One-shot build handler. Always concatenates.
    pub async fn run(&self) -> Result<()> {
        let _pass = self.pass_lock.lock().await;
        self.handle_files().await
    }

    /// Watch-mode rebuild handler.
    ///
    /// Returns `Ok(true)` when a concatenation pass ran and `Ok(false)` when
    /// none of the changed paths lies inside the fragment directory. A call
    /// made while another pass is in flight waits for that pass first.
    pub async fn watch_run<C>(&self, changes: &C) -> Result<bool>
    where
        C: ChangedFiles + ?Sized,
    {
        let changed = changes.changed_files();
        let _pass = self.pass_lock.lock().await;

        self.transition(PluginState::Checking);
        if !should_rebuild(&changed, self.options.files_directory()) {
            self.transition(PluginState::Idle);
            return Ok(false);
        }

        self.handle_files().await.map(|()| true)
    }

    /// Post-compile handler: hands the fragment directory and the last known
    /// fragment files to the host. Does nothing in production mode.
    ///
    /// The state only moves through `Registering` when no pass is in flight.
    pub fn after_compile(&self, compilation: &mut dyn Compilation) {
        if self.mode.is_production() {
            debug!("Production build, skipping dependency registration");
            return;
        }

        let idle = self.pass_lock.try_lock().ok();
        if idle.is_some() {
            self.transition(PluginState::Registering);
        }

        let files = self.files();
        let context = compilation.context().to_path_buf();
        let (context_deps, file_deps) = compilation.dependency_sinks();
        register_dependencies(
            &files,
            self.options.files_directory(),
            &context,
            context_deps,
            file_deps,
        );

        if idle.is_some() {
            self.transition(PluginState::Idle);
        }
    }

    /// Runs one pass. Callers hold `pass_lock`.
    async fn handle_files(&self) -> Result<()> {
        self.transition(PluginState::Concatenating);
        let result = self.concatenate_pass().await;
        self.transition(PluginState::Idle);

        if let Err(e) = &result {
            warn!("Concatenation pass failed: {}", e);
        }
        result
    }

    async fn concatenate_pass(&self) -> Result<()> {
        let files = list_files_ordered(self.options.files_directory(), self.order).await?;
        concatenate_with_backdate(&files, self.options.target_file(), self.backdate).await?;
        *lock(&self.files) = files;
        Ok(())
    }

    fn transition(&self, next: PluginState) {
        let mut state = lock(&self.state);
        debug!("Plugin state: {:?} -> {:?}", *state, next);
        *state = next;
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
