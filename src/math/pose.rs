// Copyright @yucwang 2026

use crate::core::error::ConfigError;
use crate::math::constants::{Float, Vector3f, EPSILON};

/// Where a sensor sits and which way it looks. The direction is always unit
/// length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    position: Vector3f,
    direction: Vector3f,
}

impl Pose {
    pub fn new(position: Vector3f, direction: Vector3f) -> Result<Self, ConfigError> {
        let norm = direction.norm();
        if !norm.is_finite() || norm <= EPSILON {
            return Err(ConfigError::DegenerateDirection);
        }
        Ok(Self { position, direction: direction / norm })
    }

    pub fn position(&self) -> Vector3f {
        self.position
    }

    pub fn direction(&self) -> Vector3f {
        self.direction
    }

    /// Azimuth of the pointing direction, measured from -z toward -x.
    pub fn azimuth(&self) -> Float {
        (-self.direction.x).atan2(-self.direction.z)
    }

    pub fn elevation(&self) -> Float {
        self.direction.y.clamp(-1.0, 1.0).asin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_normalizes_direction() {
        let pose = Pose::new(Vector3f::zeros(), Vector3f::new(3.0, 0.0, -4.0)).unwrap();
        assert!((pose.direction().norm() - 1.0).abs() < 1e-12);
        assert!((pose.direction().x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_pose_rejects_zero_direction() {
        assert_eq!(Pose::new(Vector3f::zeros(), Vector3f::zeros()),
                   Err(ConfigError::DegenerateDirection));
        assert!(Pose::new(Vector3f::zeros(), Vector3f::new(Float::NAN, 0.0, 1.0)).is_err());
    }

    #[test]
    fn test_forward_pose_has_zero_angles() {
        let pose = Pose::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0)).unwrap();
        assert!(pose.azimuth().abs() < 1e-12);
        assert!(pose.elevation().abs() < 1e-12);
    }
}
