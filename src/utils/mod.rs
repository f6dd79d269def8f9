//! # Utilities Module
//!
//! Shared geometry helpers for collisions and footprints.

pub mod geometry;

pub use geometry::*;
