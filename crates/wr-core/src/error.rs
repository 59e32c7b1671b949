//! Core error type.
//!
//! Higher crates wrap `CoreError` as one variant of their own enums via
//! `#[from]`.

use thiserror::Error;

use crate::{Cost, Weather};

/// Errors produced by `wr-core` value constructors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("unknown weather code {0} (expected 0..=3)")]
    UnknownWeatherCode(u8),

    #[error("temperature {0} cannot be mapped to a weather condition")]
    InvalidTemperature(f64),

    #[error("invalid {weather} cost {cost}: costs must be non-negative")]
    InvalidWeight { weather: Weather, cost: Cost },
}

/// Shorthand result type for `wr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
