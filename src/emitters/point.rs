// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector3f, EPSILON};

/// Isotropic light used by camera measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vector3f,
}

impl Default for PointLight {
    fn default() -> Self {
        Self { position: Vector3f::new(0.0, 8.0, 0.0) }
    }
}

impl PointLight {
    pub fn new(position: Vector3f) -> Self {
        Self { position }
    }

    /// Unit direction from the light toward `p` and the distance travelled,
    /// or `None` when `p` sits on the light.
    pub fn direction_to(&self, p: Vector3f) -> Option<(Vector3f, Float)> {
        let offset = p - self.position;
        let dist = offset.norm();
        if dist <= EPSILON {
            None
        } else {
            Some((offset / dist, dist))
        }
    }
}
