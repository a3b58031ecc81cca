pub mod args;
pub mod config;
pub mod document;
pub mod error;
pub mod parsers;
pub mod report;
pub mod results;
pub mod runner;
pub mod utils;
pub mod validators;

// Re-export commonly used types for convenience
pub use config::AuditConfig;
pub use document::Document;
pub use error::{AuditError, Result};
pub use results::{FileReport, RunReport, ValidationError, ValidatorKind, Warning};
