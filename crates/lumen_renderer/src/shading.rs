//! Blinn-Phong shading with mirror reflection.
//!
//! `shade` evaluates one surface hit: every unoccluded light adds a diffuse
//! and a specular term, and reflective materials trace one more ray along the
//! mirror direction and add what it sees, weighted by the reflectivity.
//!
//! `view_dir` always points from the surface toward the viewer. For a camera
//! hit that is the negated primary ray direction; for a reflection it is the
//! negated reflected direction.

use lumen_core::{HitRecord, Light, Material, SceneQuery, RAY_EPSILON};
use lumen_math::{reflect, Color, Normalized, Ray, Vec3};

/// Default bound on reflection recursion.
///
/// Stops facing mirrors from recursing forever. A hit shaded at this depth is
/// black.
pub const MAX_DEPTH: u32 = 50;

/// Radiance leaving `hit` toward the viewer.
///
/// Returns black once `depth` reaches `max_depth`. Misses along the
/// reflection ray add nothing. The result is unclamped.
pub fn shade<S: SceneQuery + ?Sized>(
    scene: &S,
    lights: &[Light],
    hit: &HitRecord,
    view_dir: Vec3,
    depth: u32,
    max_depth: u32,
) -> Color {
    if depth >= max_depth {
        return Color::BLACK;
    }

    let material = scene.material_of(hit.geometry);
    let normal = hit.normal.normalized();

    let mut color: Color = lights
        .iter()
        .filter(|light| !light.is_occluded(hit.point, scene))
        .map(|light| direct_light(material, light, hit.point, normal, view_dir))
        .sum();

    if material.is_reflective() {
        let incident = -view_dir;
        let reflected_dir = reflect(incident, normal).normalized();
        let reflected_ray = Ray::from_near(hit.point, reflected_dir, RAY_EPSILON);

        if let Some(next) = scene.closest_hit(&reflected_ray) {
            let reflected = shade(scene, lights, &next, -reflected_dir, depth + 1, max_depth);
            color += reflected * material.reflectivity;
        }
    }

    color
}

/// Diffuse plus specular contribution of a single unoccluded light.
fn direct_light(
    material: &Material,
    light: &Light,
    point: Vec3,
    normal: Vec3,
    view_dir: Vec3,
) -> Color {
    let to_light = light.direction_to(point);
    let half = (view_dir + to_light).normalized();

    let n_dot_l = normal.dot(to_light).max(0.0);
    let h_dot_n = half.dot(normal).max(0.0);

    let diffuse = material.color * (material.diffuse * n_dot_l);
    let specular = material.specular_color * (material.specular * h_dot_n.powf(material.exponent));

    (diffuse + specular) * light.intensity() * light.attenuation(point)
}
