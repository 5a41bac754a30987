// Copyright @yucwang 2026

pub mod camera;
pub mod housing;
pub mod lidar;
pub mod measurement;
pub mod ray_source;
