//! Error types raised by repositories, the lookup facade, and the loader.

use std::path::PathBuf;

use monster_rules::RulesError;
use thiserror::Error;

/// Errors surfaced by the lookup facade.
#[derive(Debug, Error)]
pub enum PadError {
    /// A single-result lookup matched nothing.
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    /// A single-result lookup matched more than one record.
    #[error("integrity violation: {count} {kind} records share key {key}")]
    Integrity {
        kind: &'static str,
        key: String,
        count: usize,
    },

    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl PadError {
    /// A single-result lookup matched nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// A single-result lookup matched several records.
    pub fn is_integrity(&self) -> bool {
        matches!(self, Self::Integrity { .. })
    }

    /// Data referenced a code missing from a fixed table.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Rules(RulesError::UnknownCode { .. }))
    }

    /// An operation was called outside its valid domain, such as an out-of-range level.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Rules(RulesError::Precondition(_)))
    }
}

pub type Result<T> = std::result::Result<T, PadError>;
