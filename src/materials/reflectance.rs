// Copyright @yucwang 2023

use crate::core::error::{check_non_negative, check_unit_range, ConfigError};
use crate::materials::colors;
use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::RGBSpectrum;

/// The closed set of reflectance models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    /// Blinn-Phong style diffuse + specular lobe.
    Diffuse,
    /// Retro-reflective sheeting, returns `R cos^0.5`.
    ReflectiveFilm,
    /// Retro-reflective road paint, returns `R cos^0.8`.
    ReflectivePaint,
}

impl MaterialKind {
    /// Exponent on the incidence cosine for retro-reflective kinds.
    pub fn retro_exponent(&self) -> Option<Float> {
        match self {
            MaterialKind::Diffuse => None,
            MaterialKind::ReflectiveFilm => Some(0.5),
            MaterialKind::ReflectivePaint => Some(0.8),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialParams {
    pub reflectance: Float,
    /// Share of the diffuse lobe; the specular lobe gets the rest.
    pub roughness: Float,
    pub specular_exponent: Float,
    pub ambient: Float,
    pub color: RGBSpectrum,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            reflectance: 0.30,
            roughness: 0.7,
            specular_exponent: 50.0,
            ambient: 0.0,
            color: colors::WHITE,
        }
    }
}

/// An immutable surface material, shared between every object that uses it.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    kind: MaterialKind,
    reflectance: Float,
    kd: Float,
    ks: Float,
    specular_exponent: Float,
    ambient: Float,
    color: RGBSpectrum,
}

impl Material {
    pub fn new(kind: MaterialKind, params: MaterialParams) -> Result<Self, ConfigError> {
        let reflectance = check_unit_range("reflectance", params.reflectance)?;
        let roughness = check_unit_range("roughness", params.roughness)?;
        let ambient = check_unit_range("ambient", params.ambient)?;
        let specular_exponent = check_non_negative("specular exponent", params.specular_exponent)?;

        Ok(Self {
            kind,
            reflectance,
            kd: roughness,
            ks: 1.0 - roughness,
            specular_exponent,
            ambient,
            color: params.color,
        })
    }

    /// Built-in presets whose parameters are known to be in range.
    pub(super) fn preset(kind: MaterialKind, reflectance: Float, roughness: Float, color: RGBSpectrum) -> Self {
        debug_assert!((0.0..=1.0).contains(&reflectance) && (0.0..=1.0).contains(&roughness));
        let defaults = MaterialParams::default();
        Self {
            kind,
            reflectance,
            kd: roughness,
            ks: 1.0 - roughness,
            specular_exponent: defaults.specular_exponent,
            ambient: defaults.ambient,
            color,
        }
    }

    pub fn diffuse(reflectance: Float, roughness: Float) -> Result<Self, ConfigError> {
        Self::new(MaterialKind::Diffuse, MaterialParams { reflectance, roughness, ..Default::default() })
    }

    pub fn reflective_film(reflectance: Float) -> Result<Self, ConfigError> {
        Self::new(MaterialKind::ReflectiveFilm, MaterialParams { reflectance, ..Default::default() })
    }

    pub fn reflective_paint(reflectance: Float) -> Result<Self, ConfigError> {
        Self::new(MaterialKind::ReflectivePaint, MaterialParams { reflectance, ..Default::default() })
    }

    pub fn with_color(mut self, color: RGBSpectrum) -> Self {
        self.color = color;
        self
    }

    pub fn kind(&self) -> MaterialKind {
        self.kind
    }

    pub fn reflectance(&self) -> Float {
        self.reflectance
    }

    pub fn color(&self) -> RGBSpectrum {
        self.color
    }

    /// Reflectance seen from `view` for light arriving along `light`. Both
    /// directions point toward the surface. Light arriving at or behind the
    /// horizon reflects nothing.
    pub fn reflection_at(&self, view: &Vector3f, light: &Vector3f, normal: &Vector3f) -> Float {
        let cos_incidence = -normal.dot(light);
        if !(cos_incidence > 0.0) {
            return 0.0;
        }

        let mirror = self.reflected(light, normal);
        let specular_base = (-mirror.dot(view)).max(0.0);
        let diffuse = self.kd * cos_incidence;
        let specular = self.ks * specular_base.powf(self.specular_exponent);
        self.reflectance * (diffuse + specular) + self.ambient
    }

    /// Reflectance back toward a co-located source and detector, as seen by a
    /// LiDAR.
    pub fn retro_reflection_at(&self, light: &Vector3f, normal: &Vector3f) -> Float {
        match self.kind.retro_exponent() {
            None => self.reflection_at(light, light, normal),
            Some(p) => {
                let cos_incidence = -normal.dot(light);
                if !(cos_incidence > 0.0) {
                    return 0.0;
                }
                self.reflectance * cos_incidence.powf(p)
            }
        }
    }

    fn reflected(&self, light: &Vector3f, normal: &Vector3f) -> Vector3f {
        match self.kind {
            MaterialKind::Diffuse => light - normal * 2.0 * light.dot(normal),
            // Retro-reflectors send light back where it came from.
            MaterialKind::ReflectiveFilm | MaterialKind::ReflectivePaint => -light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tilted(angle_deg: Float) -> Vector3f {
        let a = angle_deg.to_radians();
        Vector3f::new(a.sin(), 0.0, -a.cos())
    }

    #[test]
    fn test_parameters_are_validated() {
        assert!(Material::diffuse(1.2, 0.5).is_err());
        assert!(Material::diffuse(0.5, -0.1).is_err());
        assert_eq!(Material::diffuse(0.5, 1.5),
                   Err(ConfigError::OutOfUnitRange { name: "roughness", value: 1.5 }));
        let params = MaterialParams { specular_exponent: -1.0, ..Default::default() };
        assert!(Material::new(MaterialKind::Diffuse, params).is_err());
        assert!(Material::reflective_film(0.58).is_ok());
    }

    #[test]
    fn test_normal_incidence_returns_reflectance() {
        let normal = Vector3f::new(0.0, 0.0, 1.0);
        let light = Vector3f::new(0.0, 0.0, -1.0);
        let m = Material::diffuse(0.25, 0.7).unwrap();
        assert_relative_eq!(m.retro_reflection_at(&light, &normal), 0.25, epsilon = 1e-12);

        let film = Material::reflective_film(0.58).unwrap();
        assert_relative_eq!(film.retro_reflection_at(&light, &normal), 0.58, epsilon = 1e-12);
    }

    #[test]
    fn test_retro_matches_general_model_for_diffuse() {
        let normal = Vector3f::new(0.0, 0.0, 1.0);
        let m = Material::diffuse(0.5, 0.5).unwrap();
        for angle in [0.0, 10.0, 35.0, 60.0, 85.0] {
            let light = tilted(angle);
            assert_relative_eq!(m.retro_reflection_at(&light, &normal),
                                m.reflection_at(&light, &light, &normal),
                                epsilon = 1e-12);
        }
    }

    #[test]
    fn test_retro_kinds_follow_cosine_power() {
        let normal = Vector3f::new(0.0, 0.0, 1.0);
        let light = tilted(60.0);
        let film = Material::reflective_film(0.58).unwrap();
        let paint = Material::reflective_paint(0.4).unwrap();
        assert_relative_eq!(film.retro_reflection_at(&light, &normal), 0.58 * 0.5f64.powf(0.5), epsilon = 1e-12);
        assert_relative_eq!(paint.retro_reflection_at(&light, &normal), 0.4 * 0.5f64.powf(0.8), epsilon = 1e-12);
    }

    #[test]
    fn test_reflectance_is_non_negative() {
        let normal = Vector3f::new(0.0, 0.0, 1.0);
        let materials = [
            Material::diffuse(0.3, 0.7).unwrap(),
            Material::diffuse(1.0, 0.0).unwrap(),
            Material::reflective_film(0.58).unwrap(),
            Material::reflective_paint(0.4).unwrap(),
        ];
        for m in &materials {
            for light_angle in [0.0, 20.0, 45.0, 70.0, 89.0] {
                for view_angle in [-80.0, -30.0, 0.0, 30.0, 80.0] {
                    let r = m.reflection_at(&tilted(view_angle), &tilted(light_angle), &normal);
                    assert!(r >= 0.0 && r.is_finite());
                }
            }
        }
    }

    #[test]
    fn test_grazing_and_back_facing_light_is_clamped() {
        let normal = Vector3f::new(0.0, 0.0, 1.0);
        let m = Material::diffuse(0.5, 0.2).unwrap();
        let grazing = Vector3f::new(1.0, 0.0, 0.0);
        let behind = Vector3f::new(0.0, 0.0, 1.0);
        assert_eq!(m.reflection_at(&grazing, &grazing, &normal), 0.0);
        assert_eq!(m.retro_reflection_at(&behind, &normal), 0.0);
        let paint = Material::reflective_paint(0.4).unwrap();
        assert_eq!(paint.retro_reflection_at(&behind, &normal), 0.0);
    }

    #[test]
    fn test_specular_lobe_peaks_at_mirror_direction() {
        let normal = Vector3f::new(0.0, 0.0, 1.0);
        let m = Material::diffuse(0.5, 0.2).unwrap();
        let light = tilted(30.0);
        // The mirror of `light` leaves the surface toward +x, +z; a viewer
        // looking back along it sees the incoming direction (-x, -z).
        let mirror_view = Vector3f::new(-light.x, light.y, light.z);
        let off_view = tilted(0.0);
        assert!(m.reflection_at(&mirror_view, &light, &normal) > m.reflection_at(&off_view, &light, &normal));
    }
}
