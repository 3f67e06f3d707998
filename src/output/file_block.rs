use crate::constants::FILE_BLOCK_PREFIX;
use crate::core_types::FileBlock;
use std::io::{self, Write};

/// Writes one fragment: the provenance line followed by the raw content.
///
/// No trailing newline is added; blocks are separated by the caller.
pub fn write_file_block(writer: &mut dyn Write, block: &FileBlock) -> io::Result<()> {
    writeln!(writer, "{}{}", FILE_BLOCK_PREFIX, block.path.display())?;
    writer.write_all(&block.content)
}
