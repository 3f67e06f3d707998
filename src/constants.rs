// src/constants.rs

use std::time::Duration;

/// Default directory holding the hand-edited fragment files.
pub const DEFAULT_FILES_DIRECTORY: &str = "./src/custom/components/";

/// Default path of the generated file.
pub const DEFAULT_TARGET_FILE: &str = "./src/custom/index.js";

/// Banner written at the top of every generated file.
pub const GENERATED_FILE_BANNER: &str = "\
/*******************************************************************************
 *******************************************************************************
 ************* THIS FILE IS AUTOMATICALLY GENERATED AT BUILD TIME **************
 ************* PLEASE DO NOT MODIFY OR YOU WILL LOOSE YOUR CHANGES *************
 ************* -> Change files individually in the ./custom folder *************
 *******************************************************************************
 *******************************************************************************/

";

/// Prefix of the provenance line written before each fragment's content.
pub const FILE_BLOCK_PREFIX: &str = "// Content of file ";

/// Separator placed between consecutive fragment blocks.
pub const BLOCK_SEPARATOR: &[u8] = b"\n";

/// How far in the past the generated file's timestamps are set after a write.
///
/// The host watcher treats very recent modification times as fresh external
/// edits; without this the plugin's own write would trigger another rebuild.
pub const BACKDATE_OFFSET: Duration = Duration::from_secs(11);

/// Environment variable conventionally carrying the build mode.
pub const BUILD_MODE_ENV_VAR: &str = "NODE_ENV";

/// Value of [`BUILD_MODE_ENV_VAR`] that selects a one-shot production build.
pub const PRODUCTION_MODE: &str = "production";
