//! Core application primitives (engines)

pub mod engine;

pub use engine::*;
