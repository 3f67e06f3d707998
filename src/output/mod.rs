//! Concatenates fragment files into the generated artifact.
//!
//! A pass reads every fragment concurrently, renders the banner and one block
//! per fragment in list order, writes the target and finally back-dates it.
//! Nothing is written unless every read succeeded.

use crate::constants::{BACKDATE_OFFSET, BLOCK_SEPARATOR};
use crate::core_types::FileBlock;
use crate::errors::{read_error, write_error, Error, Result};
use futures::future::try_join_all;
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod file_block;
pub mod header;
pub mod writer;

pub use writer::{backdate, write_target};

/// Reads every file in `files` concurrently, keeping the input order.
///
/// # Errors
/// Fails with [`Error::Read`](crate::errors::Error::Read) naming the first
/// fragment that could not be read.
pub async fn read_blocks(files: &[PathBuf]) -> Result<Vec<FileBlock>> {
    try_join_all(files.iter().map(|path| async move {
        debug!("Reading fragment: {}", path.display());
        let content = tokio::fs::read(path)
            .await
            .map_err(|e| read_error(e, path))?;
        Ok::<_, Error>(FileBlock {
            path: path.clone(),
            content,
        })
    }))
    .await
}

/// Renders the banner followed by the blocks, separated by a single newline.
pub fn render(blocks: &[FileBlock], writer: &mut dyn Write) -> std::io::Result<()> {
    header::write_global_header(writer)?;
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            writer.write_all(BLOCK_SEPARATOR)?;
        }
        file_block::write_file_block(writer, block)?;
    }
    writer.flush()
}

/// Renders the artifact into memory.
pub fn render_to_vec(blocks: &[FileBlock]) -> std::io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    render(blocks, &mut buffer)?;
    Ok(buffer)
}

/// Concatenates `files` into `target` using the default back-dating offset.
///
/// # Examples
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use fragcat::output::concatenate;
///
/// let dir = tempfile::tempdir()?;
/// let fragment = dir.path().join("a.js");
/// std::fs::write(&fragment, "1;")?;
/// let target = dir.path().join("index.js");
///
/// concatenate(&[fragment.clone()], &target).await?;
///
/// let generated = std::fs::read_to_string(&target)?;
/// assert!(generated.ends_with(&format!("// Content of file {}\n1;", fragment.display())));
/// # Ok(())
/// # }
/// ```
pub async fn concatenate(files: &[PathBuf], target: &Path) -> Result<()> {
    concatenate_with_backdate(files, target, BACKDATE_OFFSET).await
}

/// Concatenates `files` into `target`, then sets its timestamps `offset` in the past.
///
/// # Errors
/// - [`Error::Read`](crate::errors::Error::Read) if any fragment cannot be read;
///   the target is left untouched.
/// - [`Error::Write`](crate::errors::Error::Write) if the target cannot be written.
/// - [`Error::Timestamp`](crate::errors::Error::Timestamp) if back-dating fails.
pub async fn concatenate_with_backdate(
    files: &[PathBuf],
    target: &Path,
    offset: Duration,
) -> Result<()> {
    let blocks = read_blocks(files).await?;
    let content = render_to_vec(&blocks).map_err(|e| write_error(e, target))?;

    write_target(target, &content).await?;
    backdate(target, offset).await?;

    info!(
        "Concatenated {} fragment(s) into '{}'",
        blocks.len(),
        target.display()
    );
    Ok(())
}
