// src/watch/path_utils.rs

//! Lexical path helpers for the change gate and the dependency registrar.

use std::path::{Component, Path, PathBuf};

/// Resolves `path` against `base` and normalises it without touching the
/// filesystem.
///
/// `.` components are dropped and `..` pops the previous normal component.
/// A `..` that would climb above the root of an absolute path is discarded;
/// on a relative path it is kept.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    normalize(&base.join(path))
}

/// Normalises `.` and `..` components lexically.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().map(|c| c.as_os_str()).collect()
}
