//! Light sources.
//!
//! Lights form a closed set of variants. Every variant answers the same three
//! questions for a receiving point: which way is the light, how much is its
//! intensity scaled, and is it blocked. Adding a kind of light means adding a
//! variant and extending the matches below.

use lumen_math::{Color, Interval, Normalized, Ray, Vec3};
use serde::{Deserialize, Serialize};

use crate::query::{SceneQuery, RAY_EPSILON};

/// A light source. Built during scene setup, never mutated while rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Light {
    /// Emits uniformly from a single position.
    Point { position: Vec3, intensity: Color },
    /// Parallel rays travelling along `direction`, like sunlight.
    Directional { direction: Vec3, intensity: Color },
}

impl Light {
    /// Create a point light.
    pub fn point(position: Vec3, intensity: Color) -> Self {
        Light::Point {
            position,
            intensity,
        }
    }

    /// Create a directional light. `direction` is the way the light travels
    /// and is stored normalized.
    pub fn directional(direction: Vec3, intensity: Color) -> Self {
        Light::Directional {
            direction: direction.normalized(),
            intensity,
        }
    }

    /// Emitted intensity.
    pub fn intensity(&self) -> Color {
        match self {
            Light::Point { intensity, .. } | Light::Directional { intensity, .. } => *intensity,
        }
    }

    /// Unit vector from `point` toward the light.
    pub fn direction_to(&self, point: Vec3) -> Vec3 {
        match self {
            Light::Point { position, .. } => (*position - point).normalized(),
            Light::Directional { direction, .. } => (-*direction).normalized(),
        }
    }

    /// Multiplier applied to the intensity at `point`.
    ///
    /// Always 1: there is no built-in distance falloff. Scenes that want one
    /// bake it into the intensity.
    pub fn attenuation(&self, _point: Vec3) -> f64 {
        match self {
            Light::Point { .. } | Light::Directional { .. } => 1.0,
        }
    }

    /// Segment from `point` toward the light used for the shadow test.
    pub fn shadow_ray(&self, point: Vec3) -> Ray {
        let direction = self.direction_to(point);
        let tfar = match self {
            Light::Point { position, .. } => (*position - point).length() - RAY_EPSILON,
            Light::Directional { .. } => f64::INFINITY,
        };
        Ray::new(point, direction, Interval::new(RAY_EPSILON, tfar))
    }

    /// True if any geometry blocks the light as seen from `point`.
    pub fn is_occluded<S: SceneQuery + ?Sized>(&self, point: Vec3, scene: &S) -> bool {
        scene.any_hit(&self.shadow_ray(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeometryId, HitRecord, Material};

    const EPSILON: f64 = 1e-12;

    /// Scene that reports a blocker everywhere in a fixed t-range.
    struct Blocker {
        at: f64,
        material: Material,
    }

    impl SceneQuery for Blocker {
        fn closest_hit(&self, _ray: &Ray) -> Option<HitRecord> {
            None
        }

        fn any_hit(&self, ray: &Ray) -> bool {
            ray.t.contains(self.at)
        }

        fn material_of(&self, _geometry: GeometryId) -> &Material {
            &self.material
        }
    }

    fn blocker(at: f64) -> Blocker {
        Blocker {
            at,
            material: Material::default(),
        }
    }

    #[test]
    fn test_point_light_direction() {
        let light = Light::point(Vec3::new(0.0, 10.0, 0.0), Color::splat(1.0));
        let l = light.direction_to(Vec3::new(0.0, 2.0, 0.0));
        assert!((l - Vec3::Y).length() < EPSILON);
    }

    #[test]
    fn test_directional_light_points_against_travel() {
        let light = Light::directional(Vec3::new(-1.0, -1.0, -1.0), Color::splat(200.0));
        let l = light.direction_to(Vec3::new(5.0, 0.0, -3.0));

        let expected = Vec3::splat(1.0 / 3f64.sqrt());
        assert!((l - expected).length() < EPSILON);

        // Same answer at every point
        assert_eq!(l, light.direction_to(Vec3::ZERO));
    }

    #[test]
    fn test_attenuation_is_one() {
        let p = Light::point(Vec3::new(0.0, 100.0, 0.0), Color::WHITE);
        let d = Light::directional(Vec3::Y, Color::WHITE);
        assert_eq!(p.attenuation(Vec3::ZERO), 1.0);
        assert_eq!(p.attenuation(Vec3::new(1e6, 0.0, 0.0)), 1.0);
        assert_eq!(d.attenuation(Vec3::ZERO), 1.0);
    }

    #[test]
    fn test_point_shadow_ray_stops_before_light() {
        let light = Light::point(Vec3::new(0.0, 5.0, 0.0), Color::WHITE);
        let ray = light.shadow_ray(Vec3::ZERO);

        assert_eq!(ray.t.min, RAY_EPSILON);
        assert!((ray.t.max - (5.0 - RAY_EPSILON)).abs() < EPSILON);

        // Blocker between point and light
        assert!(light.is_occluded(Vec3::ZERO, &blocker(2.5)));
        // Blocker behind the light does not count
        assert!(!light.is_occluded(Vec3::ZERO, &blocker(7.0)));
        // Nor does the surface the shadow ray starts on
        assert!(!light.is_occluded(Vec3::ZERO, &blocker(0.0)));
    }

    #[test]
    fn test_directional_shadow_ray_is_unbounded() {
        let light = Light::directional(-Vec3::Y, Color::WHITE);
        let ray = light.shadow_ray(Vec3::ZERO);

        assert_eq!(ray.t.max, f64::INFINITY);
        assert_eq!(ray.direction, Vec3::Y);
        assert!(light.is_occluded(Vec3::ZERO, &blocker(1e9)));
    }

    #[test]
    fn test_light_json() {
        let json = r#"[
            { "type": "point", "position": [1, 3, 3], "intensity": [200, 200, 200] },
            { "type": "directional", "direction": [0, -2, 0], "intensity": [1, 1, 1] }
        ]"#;
        let lights: Vec<Light> = serde_json::from_str(json).unwrap();

        assert_eq!(lights[0], Light::point(Vec3::new(1.0, 3.0, 3.0), Color::splat(200.0)));
        assert_eq!(lights[1].intensity(), Color::WHITE);
        assert_eq!(lights[1].direction_to(Vec3::ZERO), Vec3::Y);
    }
}
