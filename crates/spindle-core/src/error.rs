//! Error types for the spindle engine

use thiserror::Error;

/// Core spindle errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WheelError {
    #[error("wheel needs at least one segment")]
    EmptyWheel,

    #[error("friction factor must be in (0, 1): {0}")]
    InvalidFriction(f64),

    #[error("cruise speed must be positive: {0}")]
    InvalidCruiseSpeed(f64),

    #[error("stop threshold must be positive: {0}")]
    InvalidStopThreshold(f64),

    #[error("landing anchor must be in [0, 1): {0}")]
    InvalidLandingAnchor(f64),

    #[error("resolution bias must be non-negative: {0}")]
    InvalidResolutionBias(f64),
}

/// Result type for spindle operations
pub type WheelResult<T> = Result<T, WheelError>;
