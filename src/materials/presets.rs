// Copyright @yucwang 2026

//! Measured or hand-tuned materials for common road-scene surfaces. All
//! parameters are in range, so construction cannot fail.

use crate::materials::colors;
use crate::materials::reflectance::{Material, MaterialKind};

use MaterialKind::{Diffuse, ReflectiveFilm, ReflectivePaint};

pub fn concrete() -> Material {
    Material::preset(Diffuse, 0.25, 0.7, colors::GRAY)
}

pub fn stainless_steel() -> Material {
    Material::preset(Diffuse, 0.5, 0.5, colors::SILVER)
}

pub fn plywood() -> Material {
    Material::preset(Diffuse, 0.35, 0.9, colors::WOOD)
}

pub fn chrome() -> Material {
    Material::preset(Diffuse, 0.7, 0.1, colors::CHROME)
}

/// Retro-reflective sign sheeting (R = 0.58).
pub fn reflective_film() -> Material {
    Material::preset(ReflectiveFilm, 0.58, 0.7, colors::SAFETY_YELLOW)
}

pub fn reflective_paint() -> Material {
    Material::preset(ReflectivePaint, 0.4, 0.7, colors::WHITE)
}
