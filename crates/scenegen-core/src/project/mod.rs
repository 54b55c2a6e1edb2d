//! Project detection

use std::path::{Path, PathBuf};

use crate::config::consts::CONFIG_FILE;
use crate::config::Config;
use crate::error::Result;

/// A directory containing scenegen.toml
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    /// Load the project rooted at `root`
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config = Config::from_file(root.join(CONFIG_FILE))?;
        Ok(Self { root, config })
    }

    /// Find project root by searching for scenegen.toml in `start` and its
    /// parents
    ///
    /// Returns `Ok(None)` when no ancestor holds a config file.
    pub fn find_root(start: &Path) -> Result<Option<Self>> {
        for dir in start.ancestors() {
            if dir.join(CONFIG_FILE).is_file() {
                log::debug!("found {} in {}", CONFIG_FILE, dir.display());
                return Self::load(dir).map(Some);
            }
        }
        Ok(None)
    }

    /// User template root
    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(&self.config.templates.dir)
    }
}
