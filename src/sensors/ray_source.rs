// Copyright @yucwang 2026

use crate::core::error::ConfigError;
use crate::math::constants::{deg_to_rad, Float, Vector3f};
use crate::math::pose::Pose;
use crate::math::ray::Ray3f;

/// Rectangular angular field of view and its sampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    horizontal_extent: Float,
    vertical_extent: Float,
    horizontal_resolution: usize,
    vertical_resolution: usize,
}

impl FieldSpec {
    /// Extents in degrees. Extents wider than a full turn horizontally or a
    /// half turn vertically are accepted but produce overlapping rays.
    pub fn new(horizontal_deg: Float, vertical_deg: Float,
               horizontal_resolution: usize, vertical_resolution: usize) -> Result<Self, ConfigError> {
        check_extent("horizontal", horizontal_deg)?;
        check_extent("vertical", vertical_deg)?;
        if horizontal_resolution == 0 {
            return Err(ConfigError::ZeroResolution { axis: "horizontal" });
        }
        if vertical_resolution == 0 {
            return Err(ConfigError::ZeroResolution { axis: "vertical" });
        }
        if horizontal_deg > 360.0 || vertical_deg > 180.0 {
            log::warn!("field of view {}x{} degrees wraps around, rays will overlap",
                       horizontal_deg, vertical_deg);
        }

        Ok(Self {
            horizontal_extent: deg_to_rad(horizontal_deg),
            vertical_extent: deg_to_rad(vertical_deg),
            horizontal_resolution,
            vertical_resolution,
        })
    }

    /// Horizontal extent in radians.
    pub fn horizontal_extent(&self) -> Float {
        self.horizontal_extent
    }

    pub fn vertical_extent(&self) -> Float {
        self.vertical_extent
    }

    pub fn horizontal_resolution(&self) -> usize {
        self.horizontal_resolution
    }

    pub fn vertical_resolution(&self) -> usize {
        self.vertical_resolution
    }

    pub fn sample_count(&self) -> usize {
        self.horizontal_resolution * self.vertical_resolution
    }

    pub fn azimuths(&self) -> Vec<Float> {
        linspace_centered(self.horizontal_extent, self.horizontal_resolution)
    }

    pub fn elevations(&self) -> Vec<Float> {
        linspace_centered(self.vertical_extent, self.vertical_resolution)
    }
}

fn check_extent(axis: &'static str, value: Float) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidExtent { axis, value })
    }
}

/// `n` evenly spaced samples over `[-extent / 2, extent / 2]`, both ends
/// included. A single sample sits at the center.
fn linspace_centered(extent: Float, n: usize) -> Vec<Float> {
    if n == 1 {
        return vec![0.0];
    }
    let step = extent / (n - 1) as Float;
    (0..n).map(|i| -0.5 * extent + step * i as Float).collect()
}

/// Unit direction for a pair of angles. Zero azimuth and elevation look
/// down `-z`; positive azimuth turns toward `-x`, positive elevation toward
/// `+y`.
pub fn direction_at(azimuth: Float, elevation: Float) -> Vector3f {
    let (sin_az, cos_az) = azimuth.sin_cos();
    let (sin_el, cos_el) = elevation.sin_cos();
    Vector3f::new(-sin_az * cos_el, sin_el, -cos_az * cos_el)
}

/// The fixed, ordered bundle of rays a sensor fires. Built once from a pose
/// and a field of view; moving the sensor means building a new source.
#[derive(Debug, Clone, PartialEq)]
pub struct RaySource {
    pose: Pose,
    field: FieldSpec,
    divergence: Float,
    rays: Vec<Ray3f>,
}

impl RaySource {
    /// `divergence_deg` of zero fires one ray per grid cell; anything larger
    /// fans each cell out into a 3x3 bundle offset by that angle.
    pub fn new(pose: Pose, field: FieldSpec, divergence_deg: Float) -> Result<Self, ConfigError> {
        if !divergence_deg.is_finite() || divergence_deg < 0.0 {
            return Err(ConfigError::InvalidDivergence(divergence_deg));
        }
        let divergence = deg_to_rad(divergence_deg);
        let rays = generate(&pose, &field, divergence);
        Ok(Self { pose, field, divergence, rays })
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn field(&self) -> &FieldSpec {
        &self.field
    }

    /// Divergence in radians.
    pub fn divergence(&self) -> Float {
        self.divergence
    }

    pub fn rays_per_sample(&self) -> usize {
        if self.divergence > 0.0 { 9 } else { 1 }
    }

    pub fn rays(&self) -> &[Ray3f] {
        &self.rays
    }

    pub fn len(&self) -> usize {
        self.rays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }

    /// Same field of view and divergence from another pose.
    pub fn reposed(&self, pose: Pose) -> Self {
        let rays = generate(&pose, &self.field, self.divergence);
        Self { pose, field: self.field, divergence: self.divergence, rays }
    }
}

fn generate(pose: &Pose, field: &FieldSpec, divergence: Float) -> Vec<Ray3f> {
    let azimuth_offset = pose.azimuth();
    let elevation_offset = pose.elevation();
    let origin = pose.position();

    let spread: &[Float] = if divergence > 0.0 { &[-divergence, 0.0, divergence] } else { &[0.0] };
    let mut rays = Vec::with_capacity(field.sample_count() * spread.len() * spread.len());

    let azimuths = field.azimuths();
    for elevation in field.elevations() {
        for &azimuth in &azimuths {
            for &d_az in spread {
                for &d_el in spread {
                    let dir = direction_at(azimuth + d_az + azimuth_offset,
                                           elevation + d_el + elevation_offset);
                    rays.push(Ray3f::from_unit(origin, dir));
                }
            }
        }
    }

    rays
}
