// Copyright @yucwang 2021

pub mod computation_node;
pub mod error;
pub mod interaction;
pub mod point_cloud;
pub mod rng;
pub mod sensor;
pub mod scene;
pub mod shape;
pub mod sweep;
