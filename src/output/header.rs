// src/output/header.rs

use crate::constants;
use std::io::{self, Write};

/// Writes the "do not edit" banner that opens every generated file.
pub(crate) fn write_global_header(writer: &mut dyn Write) -> io::Result<()> {
    writer.write_all(constants::GENERATED_FILE_BANNER.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_write_global_header_output() -> anyhow::Result<()> {
        let mut writer = Cursor::new(Vec::new());
        write_global_header(&mut writer)?;
        let output = String::from_utf8(writer.into_inner())?;

        assert_eq!(output, constants::GENERATED_FILE_BANNER);
        // Seven comment lines and a blank line before the first block.
        assert_eq!(output.lines().count(), 8);
        assert!(output.starts_with("/****"));
        assert!(output.ends_with("*/\n\n"));
        assert!(output.contains("AUTOMATICALLY GENERATED"));
        Ok(())
    }
}
