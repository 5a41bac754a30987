// Copyright @yucwang 2023

pub mod colors;
pub mod presets;
mod reflectance;

pub use reflectance::{Material, MaterialKind, MaterialParams};
