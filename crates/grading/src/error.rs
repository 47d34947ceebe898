use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GradingError {
    /// A line did not split into exactly three comma-separated fields.
    #[error("line {line}: expected 3 fields, found {found}")]
    MissingField { line: usize, found: usize },

    /// The id or score field is not an integer.
    #[error("line {line}: {field} must be an integer, got {value:?}")]
    Format {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
