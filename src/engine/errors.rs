use thiserror::Error;
use tracing::{debug, error};

use crate::engine::types::ColumnKind;

/// Errors surfaced by table construction and the table operators.
///
/// None of these are transient: an operator either fully succeeds or fails
/// without touching any existing table.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unsupported column kind: {0}")]
    UnsupportedKind(String),

    #[error("Operation not implemented for {kind} column '{field}'")]
    NotImplemented { field: String, kind: ColumnKind },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Bitset length mismatch: {left} words vs {right} words")]
    LengthMismatch { left: usize, right: usize },

    #[error("Column '{field}' has {actual} values, table has {expected} rows")]
    ColumnLength {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl EngineError {
    pub fn log_error(&self) {
        match self {
            EngineError::UnsupportedKind(kind) => {
                error!("Unsupported column kind: {}", kind);
                debug!("Schema kind '{}' has no construction rule", kind);
            }
            EngineError::NotImplemented { field, kind } => {
                error!("Operation not implemented on column '{}'", field);
                debug!("Column '{}' of kind {} has no precomputed support", field, kind);
            }
            EngineError::UnknownField(field) => {
                error!("Unknown field: {}", field);
                debug!("Field '{}' is absent from the column map", field);
            }
            EngineError::LengthMismatch { left, right } => {
                error!("Bitset length mismatch");
                debug!("Intersected bitsets of {} and {} words", left, right);
            }
            EngineError::ColumnLength {
                field,
                expected,
                actual,
            } => {
                error!("Column length mismatch on '{}'", field);
                debug!("Expected {} values, got {}", expected, actual);
            }
            EngineError::Config(e) => {
                error!("Configuration error: {}", e);
                debug!("Configuration error details: {:?}", e);
            }
        }
    }
}
