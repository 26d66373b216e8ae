// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the disparity viewer

use thiserror::Error;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Colour mapping failed
    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
    /// Filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON input (config files, source listings)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

/// Reasons a disparity frame could not be turned into a colour image.
///
/// None of these are fatal: the display keeps whatever it showed before.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MappingError {
    /// The frame carries no usable disparity range.
    ///
    /// Raised for the `min == max == 0.0` "nothing computed yet" sentinel and
    /// for any range that yields a non-finite or non-positive scale.
    #[error("Degenerate disparity range [{min}, {max}]")]
    DegenerateRange { min: f32, max: f32 },
    /// Samples are not single-channel 32-bit floats
    #[error("Unsupported pixel encoding: {0}")]
    UnsupportedEncoding(String),
    /// Row stride cannot hold a full row of samples
    #[error("Row stride {stride} is smaller than {required} bytes")]
    InvalidStride { stride: usize, required: usize },
    /// Sample buffer ends before the last row
    #[error("Sample buffer holds {actual} bytes, {required} required")]
    BufferTooSmall { actual: usize, required: usize },
}

impl MappingError {
    /// Whether this is the expected "no data yet" case that callers skip silently
    pub fn is_degenerate(&self) -> bool {
        matches!(self, MappingError::DegenerateRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_error_wraps_into_app_error() {
        let err: AppError = MappingError::UnsupportedEncoding("mono8".into()).into();
        assert!(matches!(err, AppError::Mapping(_)));
        assert_eq!(
            err.to_string(),
            "Mapping error: Unsupported pixel encoding: mono8"
        );
    }

    #[test]
    fn test_degenerate_is_flagged() {
        let err = MappingError::DegenerateRange { min: 0.0, max: 0.0 };
        assert!(err.is_degenerate());
        assert!(!MappingError::UnsupportedEncoding("16UC1".into()).is_degenerate());
    }
}
