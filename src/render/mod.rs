//! Draw batches and rasterization.

pub mod backend;
pub mod cpu;
pub mod scene;
