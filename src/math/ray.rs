// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f, FLOAT_MAX, RAY_MIN_T};

/// A half-line with a unit direction. Rays are immutable once built; the
/// valid segment `[min_t, max_t]` bounds which hits an intersection query
/// may report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray3f {
    origin: Vector3f,
    dir: Vector3f,
    min_t: Float,
    max_t: Float,
}

impl Ray3f {
    pub fn new(o: Vector3f, d: Vector3f,
               min_t: Option<Float>, max_t: Option<Float>) -> Self {
        Self { origin: o, dir: d.normalize(),
               min_t: min_t.unwrap_or(RAY_MIN_T),
               max_t: max_t.unwrap_or(FLOAT_MAX) }
    }

    /// Builds a ray from a direction that is already unit length, e.g. one
    /// assembled from the sines and cosines of two angles.
    pub fn from_unit(o: Vector3f, d: Vector3f) -> Self {
        Self { origin: o, dir: d, min_t: RAY_MIN_T, max_t: FLOAT_MAX }
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn dir(&self) -> Vector3f {
        self.dir
    }

    pub fn min_t(&self) -> Float {
        self.min_t
    }

    pub fn max_t(&self) -> Float {
        self.max_t
    }

    pub fn at(&self, t: Float) -> Vector3f {
        self.origin + self.dir * t
    }

    pub fn test_segment(&self, t: Float) -> bool {
        t >= self.min_t && t <= self.max_t
    }
}
