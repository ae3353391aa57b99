use std::path::PathBuf;
use thiserror::Error;

pub type ModIdResult<T> = Result<T, ModIdError>;

#[derive(Error, Debug)]
pub enum ModIdError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Parse error in cell {cell}: {message}")]
    Parse { cell: String, message: String },

    #[error("No group name for row {row}: the first populated row must name its group")]
    MissingGroup { row: u32 },

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Validation failed: {0} error(s) found")]
    Validation(usize),
}
