use battlesheet_render_core::RenderError;
use battlesheet_source::SourceError;
use battlesheet_types::GameSystem;
use std::path::PathBuf;
use thiserror::Error;

/// A comprehensive error type for building battlesheet documents.
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Loading records failed: {0}")]
    Source(#[from] SourceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration in {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("Record {index} does not use the {system} schema")]
    SchemaMismatch { system: GameSystem, index: usize },

    #[error("No {0} records could be loaded")]
    NoRecords(GameSystem),
}
