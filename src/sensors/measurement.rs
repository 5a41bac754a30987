// Copyright @yucwang 2026

use crate::core::error::{check_non_negative, ConfigError};
use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::gaussian;
use crate::emitters::point::PointLight;
use crate::materials::colors;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use rand::Rng;

/// Radiometric model of a range sensor's return.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSignalModel {
    attenuation: Float,
    noise: Float,
}

impl Default for RangeSignalModel {
    fn default() -> Self {
        Self { attenuation: 1.0 / 40.0, noise: 0.001 }
    }
}

impl RangeSignalModel {
    /// `attenuation` is the exponential extinction per unit distance,
    /// `noise` the relative standard deviation of the range jitter. The
    /// intensity jitter is five times larger.
    pub fn new(attenuation: Float, noise: Float) -> Result<Self, ConfigError> {
        Ok(Self {
            attenuation: check_non_negative("attenuation", attenuation)?,
            noise: check_non_negative("noise", noise)?,
        })
    }

    pub fn attenuation(&self) -> Float {
        self.attenuation
    }

    pub fn noise(&self) -> Float {
        self.noise
    }

    /// Noise-free intensity returned from `distance`.
    pub fn expected_intensity(&self, distance: Float) -> Float {
        (-self.attenuation * distance).exp()
    }

    /// Attenuated intensity with multiplicative Gaussian jitter.
    pub fn intensity_at<R: Rng + ?Sized>(&self, distance: Float, rng: &mut R) -> Float {
        let intensity = self.expected_intensity(distance);
        intensity + gaussian(rng, 5.0 * self.noise) * intensity
    }

    /// Displacement along the ray; the jitter grows with distance.
    pub fn range_offset_at<R: Rng + ?Sized>(&self, distance: Float, rng: &mut R) -> Float {
        gaussian(rng, self.noise) * distance
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSample {
    pub signal: Float,
    pub position: Vector3f,
}

/// Measures one LiDAR return. The hit itself is left untouched; the
/// range-jittered position comes back in the sample. Surfaces without a
/// material act as total reflectors.
pub fn measure_range_signal<R: Rng + ?Sized>(model: &RangeSignalModel,
                                             ray: &Ray3f,
                                             hit: &SurfaceIntersection,
                                             rng: &mut R) -> RangeSample {
    let distance = hit.t();
    let position = hit.p() + ray.dir() * model.range_offset_at(distance, rng);
    let intensity = model.intensity_at(distance, rng);

    let reflectance = match hit.material() {
        Some(material) => material.retro_reflection_at(&ray.dir(), &hit.normal()),
        None => 1.0,
    };

    RangeSample { signal: intensity * reflectance, position }
}

/// Color seen along `ray` when `hit` is lit by `light`, with inverse-distance
/// falloff from the light.
pub fn measure_pixel(ray: &Ray3f, hit: &SurfaceIntersection, light: &PointLight) -> RGBSpectrum {
    let (light_dir, distance) = match light.direction_to(hit.p()) {
        Some(d) => d,
        None => return RGBSpectrum::black(),
    };
    let attenuation = 1.0 / distance;

    match hit.material() {
        Some(material) => {
            let reflectance = material.reflection_at(&ray.dir(), &light_dir, &hit.normal());
            material.color() * (reflectance * attenuation)
        }
        None => colors::WHITE * attenuation,
    }
}
