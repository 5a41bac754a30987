// Copyright @yucwang 2026

pub mod cube;
pub mod rectangle;
pub mod sphere;
