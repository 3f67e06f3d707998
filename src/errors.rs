//! Defines the crate's error type.
//!
//! Every variant that stems from filesystem access carries the path that
//! caused it, so the host can surface a useful message when it aborts the
//! build.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while snapshotting, concatenating or writing fragments.
#[derive(Error, Debug)]
pub enum Error {
    /// The fragment directory is missing or could not be listed.
    #[error("Failed to read directory '{}': {source}", .path.display())]
    DirectoryRead {
        /// The directory that could not be listed.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: io::Error,
    },

    /// A single fragment file could not be read. Aborts the whole pass.
    #[error("Failed to read fragment file '{}': {source}", .path.display())]
    Read {
        /// The fragment that failed.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The generated file could not be written.
    #[error("Failed to write target file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The generated file was written, but its timestamps could not be moved back.
    #[error("Failed to set timestamps on '{}': {source}", .path.display())]
    Timestamp {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// User options were not a valid JSON object.
    #[error("Invalid options: {0}")]
    Options(#[from] serde_json::Error),

    /// A blocking filesystem task panicked or was cancelled by the runtime.
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The path associated with this error, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::DirectoryRead { path, .. }
            | Error::Read { path, .. }
            | Error::Write { path, .. }
            | Error::Timestamp { path, .. } => Some(path.as_path()),
            Error::Options(_) | Error::Task(_) => None,
        }
    }
}

pub(crate) fn directory_read_error<P: AsRef<Path>>(source: io::Error, path: P) -> Error {
    Error::DirectoryRead {
        path: path.as_ref().to_path_buf(),
        source,
    }
}

pub(crate) fn read_error<P: AsRef<Path>>(source: io::Error, path: P) -> Error {
    Error::Read {
        path: path.as_ref().to_path_buf(),
        source,
    }
}

pub(crate) fn write_error<P: AsRef<Path>>(source: io::Error, path: P) -> Error {
    Error::Write {
        path: path.as_ref().to_path_buf(),
        source,
    }
}
