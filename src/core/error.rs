// Copyright @yucwang 2026

use crate::math::constants::Float;

/// Invalid construction parameters. Raised eagerly so a bad sensor or
/// material never reaches a capture.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("direction must be a finite, non-zero vector")]
    DegenerateDirection,
    #[error("{axis} resolution must be at least 1")]
    ZeroResolution { axis: &'static str },
    #[error("{axis} angular extent must be positive and finite, got {value} degrees")]
    InvalidExtent { axis: &'static str, value: Float },
    #[error("divergence must be non-negative and finite, got {0} degrees")]
    InvalidDivergence(Float),
    #[error("{name} must lie in [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: Float },
    #[error("{name} must be non-negative and finite, got {value}")]
    Negative { name: &'static str, value: Float },
}

#[derive(thiserror::Error, Debug)]
pub enum CaptureError {
    #[error("capture of `{0}` was cancelled")]
    Cancelled(String),
    #[error("capture of `{0}` lost a worker before all ray blocks were measured")]
    Incomplete(String),
}

/// Ensures `value` lies in the closed unit interval.
pub fn check_unit_range(name: &'static str, value: Float) -> Result<Float, ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfUnitRange { name, value })
    }
}

pub fn check_non_negative(name: &'static str, value: Float) -> Result<Float, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Negative { name, value })
    }
}
