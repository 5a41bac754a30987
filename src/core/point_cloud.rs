// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector3f};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub signal: Float,
    pub position: Vector3f,
}

/// Ordered log of range returns. Insertion order follows ray order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<DataPoint>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { points: Vec::with_capacity(capacity) }
    }

    pub fn log_data_point(&mut self, signal: Float, position: Vector3f) {
        self.points.push(DataPoint { signal, position });
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(min, max)` signal, `None` for an empty cloud.
    pub fn signal_range(&self) -> Option<(Float, Float)> {
        self.points.iter().fold(None, |range, p| match range {
            None => Some((p.signal, p.signal)),
            Some((lo, hi)) => Some((lo.min(p.signal), hi.max(p.signal))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_and_range() {
        let mut cloud = PointCloud::new();
        assert!(cloud.signal_range().is_none());

        cloud.log_data_point(0.4, Vector3f::new(1.0, 0.0, 0.0));
        cloud.log_data_point(0.1, Vector3f::new(2.0, 0.0, 0.0));
        cloud.log_data_point(0.9, Vector3f::new(3.0, 0.0, 0.0));
        assert_eq!(cloud.len(), 3);
        assert_eq!(cloud.points()[1].position.x, 2.0);
        assert_eq!(cloud.signal_range(), Some((0.1, 0.9)));
    }
}
