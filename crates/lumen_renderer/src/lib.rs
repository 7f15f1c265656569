//! Lumen Renderer - CPU ray tracing with Phong shading.
//!
//! Primary rays come from a pinhole camera, each hit is shaded with a
//! Blinn-Phong model summed over all unoccluded lights, and reflective
//! surfaces recurse along the mirror direction up to a fixed depth.
//!
//! The intersection engine (triangles, spheres, BVH) lives behind the
//! `SceneQuery` trait from `lumen_core`, so the shading code only ever
//! asks for closest hits, any hits and materials.

mod bvh;
mod camera;
mod hittable;
mod output;
mod renderer;
mod shading;
mod sphere;
mod triangle;
mod world;

pub use bvh::BvhNode;
pub use camera::{ray_direction, Camera};
pub use hittable::Hittable;
pub use output::{write_ppm, OutputError, OutputResult};
pub use renderer::{render, render_pixel, ImageBuffer, RenderConfig};
pub use shading::{shade, MAX_DEPTH};
pub use sphere::Sphere;
pub use triangle::Triangle;
pub use world::World;

/// Re-export common types from lumen_math and lumen_core
pub use lumen_core::{GeometryId, HitRecord, Light, Material, Scene, SceneQuery, RAY_EPSILON};
pub use lumen_math::{Color, Interval, Ray, Vec3};
