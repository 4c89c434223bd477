//! Reads a local JSON snapshot of every record set into a [`RawDataset`].

use serde::de::DeserializeOwned;
use std::path::Path;

use monster_rules::RawDataset;

use crate::config::PadConfig;
use crate::error::{PadError, Result};

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| PadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse one JSON record set file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_file(path)?;
    let value = serde_json::from_str(&content).map_err(|source| PadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Loaded {}", path.display());
    Ok(value)
}

/// Load every record set named by `config`.
pub fn load_dataset(config: &PadConfig) -> Result<RawDataset> {
    Ok(RawDataset {
        monsters: load_json(&config.monsters_path())?,
        evolutions: load_json(&config.evolutions_path())?,
        active_skills: load_json(&config.active_skills_path())?,
        leader_skills: load_json(&config.leader_skills_path())?,
        awakenings: load_json(&config.awakenings_path())?,
    })
}
