// src/config/parsing.rs

use super::Options;
use crate::errors::Result;
use serde::Deserialize;
use std::path::PathBuf;

/// Options exactly as the user supplied them. Unknown keys are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserOptions {
    pub files_directory: Option<PathBuf>,
    pub target_file: Option<PathBuf>,
}

impl Options {
    /// Parses a JSON object such as `{"filesDirectory": "fragments/"}` and
    /// merges it over the defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let user: UserOptions = serde_json::from_str(json)?;
        Ok(Self::merged(user))
    }

    /// Same as [`Options::from_json_str`] for an already parsed value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let user: UserOptions = serde_json::from_value(value)?;
        Ok(Self::merged(user))
    }
}
