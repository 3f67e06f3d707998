// tests/common.rs

use fragcat::{BuildMode, ConcatPlugin, Options};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// A throwaway project: `<root>/components/` holds fragments, the generated
/// file goes to `<root>/index.js`.
#[allow(dead_code)] // Not every integration test uses every helper.
pub struct Project {
    pub dir: TempDir,
}

#[allow(dead_code)]
impl Project {
    pub fn new() -> std::io::Result<Self> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("components"))?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn fragments(&self) -> PathBuf {
        self.root().join("components")
    }

    pub fn target(&self) -> PathBuf {
        self.root().join("index.js")
    }

    pub fn add_fragment(&self, name: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.fragments().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn options(&self) -> Options {
        Options::new(self.fragments(), self.target())
    }

    pub fn plugin(&self, mode: BuildMode) -> ConcatPlugin {
        ConcatPlugin::new(self.options(), mode)
    }

    pub fn generated(&self) -> std::io::Result<String> {
        fs::read_to_string(self.target())
    }
}
