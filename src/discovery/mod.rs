//! Snapshots the fragment directory into a [`FileList`].
//!
//! Listing is non-recursive: every immediate entry of the directory becomes
//! part of the list, joined to the directory path. Sub-directories are not
//! filtered out; trying to read one later fails the pass with a read error.

use crate::core_types::FileList;
use crate::errors::{directory_read_error, Result};
use log::debug;
use std::path::Path;
use tokio::fs;

/// Order in which listed fragments are concatenated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileOrder {
    /// Whatever order the operating system returns. Platform dependent.
    #[default]
    Listing,
    /// Sorted by file name, for reproducible output across machines.
    Lexicographic,
}

/// Lists the immediate entries of `directory` in listing order.
///
/// # Errors
/// Returns [`Error::DirectoryRead`](crate::errors::Error::DirectoryRead) when
/// the directory does not exist or cannot be read.
///
/// # Examples
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use fragcat::discovery::list_files;
///
/// let dir = tempfile::tempdir()?;
/// std::fs::write(dir.path().join("a.js"), "1;")?;
///
/// let files = list_files(dir.path()).await?;
/// assert_eq!(files, vec![dir.path().join("a.js")]);
/// # Ok(())
/// # }
/// ```
pub async fn list_files(directory: &Path) -> Result<FileList> {
    list_files_ordered(directory, FileOrder::Listing).await
}

/// Lists the immediate entries of `directory` in the requested order.
pub async fn list_files_ordered(directory: &Path, order: FileOrder) -> Result<FileList> {
    let mut entries = fs::read_dir(directory)
        .await
        .map_err(|e| directory_read_error(e, directory))?;

    let mut files = FileList::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| directory_read_error(e, directory))?
    {
        files.push(directory.join(entry.file_name()));
    }

    if order == FileOrder::Lexicographic {
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }

    debug!(
        "Listed {} fragment(s) in '{}'",
        files.len(),
        directory.display()
    );
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::collections::HashSet;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_list_files_joins_directory() -> anyhow::Result<()> {
        let dir = tempdir()?;
        std::fs::write(dir.path().join("a.js"), "1;")?;
        std::fs::write(dir.path().join("b.js"), "2;")?;

        let files = list_files(dir.path()).await?;
        let found: HashSet<PathBuf> = files.into_iter().collect();
        let expected: HashSet<PathBuf> =
            [dir.path().join("a.js"), dir.path().join("b.js")].into();
        assert_eq!(found, expected);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_files_is_not_recursive() -> anyhow::Result<()> {
        let dir = tempdir()?;
        std::fs::create_dir(dir.path().join("nested"))?;
        std::fs::write(dir.path().join("nested").join("deep.js"), "deep")?;

        let files = list_files(dir.path()).await?;
        // The sub-directory itself is listed, its contents are not.
        assert_eq!(files, vec![dir.path().join("nested")]);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_files_empty_directory() -> anyhow::Result<()> {
        let dir = tempdir()?;
        assert!(list_files(dir.path()).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_list_files_missing_directory() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let missing = dir.path().join("does-not-exist");

        let result = list_files(&missing).await;
        match result {
            Err(Error::DirectoryRead { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected DirectoryRead error, got {:?}", other),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_lexicographic_order() -> anyhow::Result<()> {
        let dir = tempdir()?;
        for name in ["c.js", "a.js", "b.js"] {
            std::fs::write(dir.path().join(name), name)?;
        }

        let files = list_files_ordered(dir.path(), FileOrder::Lexicographic).await?;
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["a.js", "b.js", "c.js"]);
        Ok(())
    }
}
