// Copyright @yucwang 2023

use crate::core::computation_node::ComputationNode;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;

/// Geometric part of a hit; the scene attaches the material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeHit {
    pub p: Vector3f,
    pub normal: Vector3f,
    pub t: Float,
}

pub trait Shape: ComputationNode + Send + Sync {
    fn ray_intersection(&self, ray: &Ray3f) -> Option<ShapeHit>;
    fn surface_area(&self) -> Float;
}
