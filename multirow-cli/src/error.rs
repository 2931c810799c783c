//! CLI error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the command line tool.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid document {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to initialize logging: {0}")]
    Logging(String),
    #[error(transparent)]
    Widget(#[from] multirow_lib::WidgetError),
    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}
