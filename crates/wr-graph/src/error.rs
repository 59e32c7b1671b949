//! Graph-subsystem error type.

use thiserror::Error;

use wr_core::CoreError;

/// Errors produced by `wr-graph`.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("unknown city {0:?}")]
    UnknownCity(String),

    #[error("graph has no cities")]
    EmptyGraph,

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type GraphResult<T> = Result<T, GraphError>;
