//! Per-directory configuration stored in `.twitterverse/config.json`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory holding Twitterverse settings.
pub const CONFIG_DIR: &str = ".twitterverse";

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub version: String,

    /// Data file used when `run` is given no `--data`. Relative paths are
    /// resolved against the directory holding `.twitterverse`.
    #[serde(default)]
    pub data: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            data: None,
        }
    }
}

impl Config {
    pub fn path(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Loads the config under `root`, or `None` if there isn't one.
    pub fn load(root: &Path) -> io::Result<Option<Self>> {
        let path = Self::path(root);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)?;
        let config = serde_json::from_str(&text)?;
        Ok(Some(config))
    }

    pub fn save(&self, root: &Path) -> io::Result<()> {
        fs::create_dir_all(root.join(CONFIG_DIR))?;
        fs::write(Self::path(root), serde_json::to_string_pretty(self)?)
    }

    /// The configured data file, resolved against `root`.
    pub fn data_path(&self, root: &Path) -> Option<PathBuf> {
        self.data.as_ref().map(|data| root.join(data))
    }
}
