// Copyright @yucwang 2021

pub mod core;
pub mod emitters;
pub mod io;
pub mod materials;
pub mod math;
pub mod scenes;
pub mod sensors;
pub mod shapes;
pub mod suite;
