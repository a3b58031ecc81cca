use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuditError>;

/// Operational failures that stop a run before any report can be produced.
///
/// Rule violations found in the audited files are not errors of this kind;
/// they are collected as [`crate::results::ValidationError`] values.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
