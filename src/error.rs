use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Failures raised by drawing surfaces and primitive validation.
///
/// Data gaps (missing arrays, NaN values, short series) are never reported
/// through this type; they shrink what gets drawn instead.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("drawing backend failure: {0}")]
    Backend(String),
}
