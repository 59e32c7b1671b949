//! Error types for wr-io.

use thiserror::Error;

use wr_core::CoreError;
use wr_graph::GraphError;

/// Errors raised while reading route files or writing tables.
#[derive(Debug, Error)]
pub enum RouteIoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    #[error("line {line}: {source}")]
    InvalidWeight { line: u64, source: CoreError },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Alias for `Result<T, RouteIoError>`.
pub type RouteIoResult<T> = Result<T, RouteIoError>;
