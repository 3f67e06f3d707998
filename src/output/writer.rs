// src/output/writer.rs

//! Writes the generated file and moves its timestamps into the past.

use crate::errors::{write_error, Error, Result};
use filetime::FileTime;
use log::debug;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tokio::fs;

/// Overwrites `target` with `content`.
///
/// # Errors
/// Returns [`Error::Write`] if the file cannot be created or written, e.g.
/// when its parent directory is missing. A failed write may leave a
/// truncated file behind; no rename-into-place is attempted.
pub async fn write_target(target: &Path, content: &[u8]) -> Result<()> {
    fs::write(target, content)
        .await
        .map_err(|e| write_error(e, target))?;
    debug!("Wrote {} bytes to '{}'", content.len(), target.display());
    Ok(())
}

/// Sets the access and modification time of `target` to `offset` before now.
///
/// # Errors
/// Returns [`Error::Timestamp`] if the times cannot be changed.
pub async fn backdate(target: &Path, offset: Duration) -> Result<()> {
    let then = SystemTime::now()
        .checked_sub(offset)
        .unwrap_or(SystemTime::UNIX_EPOCH);
    let time = FileTime::from_system_time(then);
    let path: PathBuf = target.to_path_buf();

    tokio::task::spawn_blocking(move || {
        filetime::set_file_times(&path, time, time)
            .map_err(|source| Error::Timestamp { path, source })
    })
    .await??;

    debug!(
        "Back-dated '{}' by {}s",
        target.display(),
        offset.as_secs()
    );
    Ok(())
}
