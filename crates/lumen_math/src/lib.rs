//! Lumen math types.
//!
//! Geometry runs in double precision on top of glam's `DVec3`.

mod aabb;
mod color;
mod interval;
mod ray;
mod vector;

pub use aabb::Aabb;
pub use color::Color;
pub use interval::Interval;
pub use ray::Ray;
pub use vector::{reflect, Normalized};

// Re-export glam for convenience
pub use glam;

/// The vector type used throughout Lumen.
pub type Vec3 = glam::DVec3;
