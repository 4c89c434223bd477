//! Snapshot configuration: where the raw record sets live on disk.
//!
//! ```toml
//! data_dir = "data/na"
//!
//! [files]
//! monsters = "monsters.json"
//! evolutions = "evolutions.json"
//! ```
//!
//! Every key is optional; missing file names fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PadError, Result};

/// Configuration for loading a [`crate::Pad`] from a local snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    /// Directory the data files are resolved against.
    pub data_dir: PathBuf,
    pub files: DataFiles,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            files: DataFiles::default(),
        }
    }
}

/// File names of each record set, relative to `data_dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFiles {
    pub monsters: String,
    pub evolutions: String,
    pub active_skills: String,
    pub leader_skills: String,
    pub awakenings: String,
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            monsters: "monsters.json".to_string(),
            evolutions: "evolutions.json".to_string(),
            active_skills: "active_skills.json".to_string(),
            leader_skills: "leader_skills.json".to_string(),
            awakenings: "awakenings.json".to_string(),
        }
    }
}

impl PadConfig {
    /// Create a configuration with default file names under `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Parse a config from TOML text. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file. A relative `data_dir` is resolved against
    /// the directory containing the file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content)?;
        if config.data_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.data_dir = parent.join(&config.data_dir);
            }
        }
        Ok(config)
    }

    pub fn monsters_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.monsters)
    }

    pub fn evolutions_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.evolutions)
    }

    pub fn active_skills_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.active_skills)
    }

    pub fn leader_skills_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.leader_skills)
    }

    pub fn awakenings_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.awakenings)
    }
}
