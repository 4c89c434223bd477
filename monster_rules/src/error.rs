//! Errors raised while shaping raw records into entities and evaluating curves.

use thiserror::Error;

/// Errors surfaced by the rules crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RulesError {
    /// A code is not present in its fixed table.
    #[error("unknown {table} code: {code}")]
    UnknownCode { table: &'static str, code: String },

    /// A formula was evaluated outside of its domain.
    #[error("precondition violated: {0}")]
    Precondition(String),

    #[error("malformed record: {0}")]
    MalformedRecord(String),
}

impl RulesError {
    pub(crate) fn unknown_code(table: &'static str, code: impl ToString) -> Self {
        Self::UnknownCode {
            table,
            code: code.to_string(),
        }
    }
}

pub type RulesResult<T> = std::result::Result<T, RulesError>;
