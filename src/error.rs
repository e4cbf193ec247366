use std::path::PathBuf;
use thiserror::Error;

pub type InspectResult<T> = Result<T, InspectError>;

#[derive(Error, Debug)]
pub enum InspectError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Not a valid spreadsheet: {} ({reason})", .path.display())]
    CorruptFile { path: PathBuf, reason: String },

    #[error("Worksheet not found: {0}")]
    SheetNotFound(String),

    #[error("Cell ({row}, {column}) is outside the worksheet bounds {rows}x{columns}")]
    CellOutOfBounds {
        row: u32,
        column: u32,
        rows: u32,
        columns: u32,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl InspectError {
    /// Short label used in the CLI error line
    pub fn kind(&self) -> &'static str {
        match self {
            InspectError::FileNotFound(_) => "file-not-found",
            InspectError::CorruptFile { .. } => "corrupt-file",
            InspectError::SheetNotFound(_) => "sheet-not-found",
            InspectError::CellOutOfBounds { .. } => "out-of-bounds",
            InspectError::Config(_) => "config",
            InspectError::Io(_) => "io",
            InspectError::Yaml(_) => "yaml",
            InspectError::Json(_) => "json",
        }
    }
}
