//! Error types for photoelectric-core.

use thiserror::Error;

/// Result type alias for photoelectric operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for photoelectric operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Frequency domain with `max <= min` or a non-finite bound.
    #[error("invalid frequency domain: max ({max:e} Hz) must exceed min ({min:e} Hz)")]
    InvalidDomain { min: f64, max: f64 },

    /// Frequency outside the selectable range.
    #[error("frequency {frequency:e} Hz outside selectable range [{min:e}, {max:e}] Hz")]
    FrequencyOutOfRange { frequency: f64, min: f64, max: f64 },

    /// Physical constant that cannot be used by the model.
    #[error("invalid physical constant {name}: {value:e}")]
    InvalidConstant { name: &'static str, value: f64 },

    /// Selector step that is not a positive finite number.
    #[error("invalid selector step: {0:e} Hz")]
    InvalidStep(f64),
}
