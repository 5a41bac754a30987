/* Copyright 2020 @Yuchen Wong */

use nalgebra::Vector3;

pub type Float = f64;
pub type Vector3f = Vector3<Float>;

pub const EPSILON: Float = 1e-9;
pub const FLOAT_MAX: Float = Float::MAX;

// Rays start slightly off their origin so a sensor never hits its own mount.
pub const RAY_MIN_T: Float = 1e-6;

#[inline]
pub fn deg_to_rad(deg: Float) -> Float {
    deg * std::f64::consts::PI / 180.0
}
