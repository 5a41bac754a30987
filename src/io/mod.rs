// Copyright @yucwang 2026

pub mod suite_loader;
