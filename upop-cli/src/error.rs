use std::io;

use upop_core::ParseActionError;

/// Errors that end a `upop` run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid action: {0}")]
    Parse(#[from] ParseActionError),

    #[error("failed to write json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
