//! Closed-form lighting at a single point on a triangle.
//!
//! These calculators do not trace rays. They evaluate irradiance and
//! Phong brightness directly from the light and surface geometry, which
//! makes them useful as independent oracles for the shading engine.
//!
//! A point on the triangle `[P0, P1, P2]` is addressed with local
//! coordinates `(x, y)` measured in world units along the unit edge
//! directions `P0→P1` and `P0→P2`.

use std::f64::consts::PI;

use lumen_math::{Color, Normalized, Vec3};

use crate::Material;

/// A light with a position and an emission axis.
///
/// Unlike [`crate::Light`], its output falls off with the inverse square of
/// distance and with the cosine to its axis.
#[derive(Clone, Debug, PartialEq)]
pub struct RadiantLight {
    pub position: Vec3,
    /// Emission axis
    pub direction: Vec3,
    pub intensity: Color,
}

/// World-space point at local coordinates `(x, y)` on the triangle.
pub fn surface_point(triangle: &[Vec3; 3], x: f64, y: f64) -> Vec3 {
    let [p0, p1, p2] = *triangle;
    let edge1 = (p1 - p0).normalized();
    let edge2 = (p2 - p0).normalized();
    p0 + edge1 * x + edge2 * y
}

/// Unit normal `(P2 - P0) × (P1 - P0)`.
pub fn triangle_normal(triangle: &[Vec3; 3]) -> Vec3 {
    let [p0, p1, p2] = *triangle;
    (p2 - p0).cross(p1 - p0).normalized()
}

/// True if `point` and `reference` lie strictly on the same side of the
/// plane through `plane_point` with normal `normal`.
pub fn same_side(point: Vec3, plane_point: Vec3, normal: Vec3, reference: Vec3) -> bool {
    let d_point = (point - plane_point).dot(normal);
    let d_ref = (reference - plane_point).dot(normal);
    d_point * d_ref > 0.0
}

/// Irradiance at `(x, y)` on the triangle from a light of intensity `i0`
/// at `light_position` with emission axis `axis`.
///
/// `E = I0 · cos θ · cos α / R²`, where θ is the angle between the axis and
/// the light-to-point vector and α the incidence angle on the surface. The
/// incidence term uses the absolute cosine, so either face is lit.
pub fn illuminance(
    i0: Color,
    axis: Vec3,
    light_position: Vec3,
    triangle: &[Vec3; 3],
    x: f64,
    y: f64,
) -> Color {
    let pt = surface_point(triangle, x, y);
    let n = triangle_normal(triangle);

    let s = pt - light_position;
    let dist = s.length();
    let r2 = dist * dist;

    let cos_alpha = (s.dot(n) / dist).abs();
    let cos_theta = s.dot(axis) / dist;

    i0 * (cos_theta * cos_alpha / r2)
}

/// Irradiance from one light as used by [`brightness`].
///
/// `n` must already face the viewer. Zero when the light is on the other
/// side of the surface from the viewer; both cosine terms are clamped to be
/// non-negative.
fn irradiance(light: &RadiantLight, pt: Vec3, n: Vec3, view_dir: Vec3) -> Color {
    if !same_side(light.position, pt, n, pt + view_dir) {
        return Color::BLACK;
    }

    let s = pt - light.position;
    let r2 = s.length_squared();
    let s = s.normalized();

    let cos_alpha = (-s).dot(n).max(0.0);
    let cos_theta = s.dot(light.direction.normalized()).max(0.0);

    light.intensity * (cos_theta * cos_alpha / r2)
}

/// Phong brightness at `(x, y)` on the triangle seen from `view_dir`.
///
/// The surface normal is flipped to face `view_dir`. Each light contributes
/// `E ⊙ color · (kd + ks · max(0, h·N)^n) / π`, with `h` the half vector
/// between the view and light directions.
pub fn brightness(
    lights: &[RadiantLight],
    triangle: &[Vec3; 3],
    x: f64,
    y: f64,
    view_dir: Vec3,
    material: &Material,
) -> Color {
    let pt = surface_point(triangle, x, y);
    let mut n = triangle_normal(triangle);
    if view_dir.dot(n) < 0.0 {
        n = -n;
    }

    lights
        .iter()
        .map(|light| {
            let e = irradiance(light, pt, n, view_dir);
            let to_light = (light.position - pt).normalized();
            let h = (view_dir + to_light).normalized();

            let specular = material.specular * h.dot(n).max(0.0).powf(material.exponent);
            e * material.color * ((material.diffuse + specular) / PI)
        })
        .sum()
}
