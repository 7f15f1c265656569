//! Phong surface description.

use lumen_math::Color;
use serde::{Deserialize, Serialize};

/// Blinn-Phong material with an optional mirror term.
///
/// Read-only during rendering. Looked up through the owning geometry's handle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Diffuse color
    pub color: Color,

    /// Diffuse reflection coefficient
    pub diffuse: f64,

    /// Specular reflection coefficient
    pub specular: f64,

    /// Specular exponent (shininess)
    pub exponent: f64,

    /// Specular highlight color
    #[serde(default = "white")]
    pub specular_color: Color,

    /// Mirror reflection weight (0 = none, 1 = perfect mirror)
    #[serde(default)]
    pub reflectivity: f64,
}

fn white() -> Color {
    Color::WHITE
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::splat(0.5), // Grey default
            diffuse: 1.0,
            specular: 0.0,
            exponent: 1.0,
            specular_color: Color::WHITE,
            reflectivity: 0.0,
        }
    }
}

impl Material {
    /// Create a non-reflective material with a white highlight.
    pub fn new(color: Color, diffuse: f64, specular: f64, exponent: f64) -> Self {
        Self {
            color,
            diffuse,
            specular,
            exponent,
            ..Default::default()
        }
    }

    /// Set the specular highlight color.
    pub fn with_specular_color(mut self, specular_color: Color) -> Self {
        self.specular_color = specular_color;
        self
    }

    /// Set the mirror reflection weight.
    pub fn with_reflectivity(mut self, reflectivity: f64) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// A perfect mirror with no direct lighting response.
    pub fn mirror() -> Self {
        Self::new(Color::BLACK, 0.0, 0.0, 1.0).with_reflectivity(1.0)
    }

    /// True if shading should spawn a reflection ray.
    pub fn is_reflective(&self) -> bool {
        self.reflectivity > 0.0
    }
}
