//! Whitespace-separated input files for the point calculators.
//!
//! Illuminance input:
//!
//! ```text
//! I0.r I0.g I0.b   axis.x axis.y axis.z   light.x light.y light.z
//! P0 (3)  P1 (3)  P2 (3)   x y
//! ```
//!
//! Brightness input:
//!
//! ```text
//! count
//! count × [ position (3)  direction (3)  intensity (3) ]
//! P0 (3)  P1 (3)  P2 (3)
//! color (3)  kd  ks  exponent
//! x y  view (3)
//! ```

use std::str::SplitWhitespace;

use lumen_math::{Color, Vec3};
use thiserror::Error;

use crate::illumination::{brightness, illuminance, RadiantLight};
use crate::Material;

/// Errors that can occur while reading calculator input.
#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("Missing value: {what}")]
    MissingValue { what: String },

    #[error("Invalid number '{token}' for {what}")]
    InvalidNumber { what: String, token: String },

    #[error("Invalid number of light sources: {0}")]
    InvalidLightCount(String),
}

/// Result type for input parsing.
pub type InputResult<T> = Result<T, InputError>;

/// Pulls numbers off a whitespace-separated stream, naming each one for errors.
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            inner: source.split_whitespace(),
        }
    }

    fn number(&mut self, what: &str) -> InputResult<f64> {
        let token = self.inner.next().ok_or_else(|| InputError::MissingValue {
            what: what.to_string(),
        })?;
        token.parse().map_err(|_| InputError::InvalidNumber {
            what: what.to_string(),
            token: token.to_string(),
        })
    }

    fn triple(&mut self, what: &str) -> InputResult<[f64; 3]> {
        Ok([
            self.number(what)?,
            self.number(what)?,
            self.number(what)?,
        ])
    }

    fn vec3(&mut self, what: &str) -> InputResult<Vec3> {
        self.triple(what).map(Vec3::from_array)
    }

    fn color(&mut self, what: &str) -> InputResult<Color> {
        self.triple(what).map(Color::from)
    }

    fn count(&mut self) -> InputResult<usize> {
        let token = self
            .inner
            .next()
            .ok_or_else(|| InputError::InvalidLightCount("missing".to_string()))?;
        match token.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(InputError::InvalidLightCount(token.to_string())),
        }
    }

    fn triangle(&mut self) -> InputResult<[Vec3; 3]> {
        Ok([
            self.vec3("triangle vertex P0")?,
            self.vec3("triangle vertex P1")?,
            self.vec3("triangle vertex P2")?,
        ])
    }
}

/// Parameters for [`illuminance`].
#[derive(Clone, Debug, PartialEq)]
pub struct IlluminanceInput {
    pub intensity: Color,
    pub axis: Vec3,
    pub light_position: Vec3,
    pub triangle: [Vec3; 3],
    pub x: f64,
    pub y: f64,
}

impl IlluminanceInput {
    pub fn parse(source: &str) -> InputResult<Self> {
        let mut t = Tokens::new(source);
        Ok(Self {
            intensity: t.color("light intensity")?,
            axis: t.vec3("light axis direction")?,
            light_position: t.vec3("light position")?,
            triangle: t.triangle()?,
            x: t.number("local coordinate x")?,
            y: t.number("local coordinate y")?,
        })
    }

    pub fn evaluate(&self) -> Color {
        illuminance(
            self.intensity,
            self.axis,
            self.light_position,
            &self.triangle,
            self.x,
            self.y,
        )
    }
}

/// Parameters for [`brightness`].
#[derive(Clone, Debug, PartialEq)]
pub struct BrightnessInput {
    pub lights: Vec<RadiantLight>,
    pub triangle: [Vec3; 3],
    pub material: Material,
    pub x: f64,
    pub y: f64,
    pub view_dir: Vec3,
}

impl BrightnessInput {
    pub fn parse(source: &str) -> InputResult<Self> {
        let mut t = Tokens::new(source);

        let count = t.count()?;
        let mut lights = Vec::with_capacity(count);
        for i in 1..=count {
            lights.push(RadiantLight {
                position: t.vec3(&format!("position of light #{i}"))?,
                direction: t.vec3(&format!("direction of light #{i}"))?,
                intensity: t.color(&format!("intensity of light #{i}"))?,
            });
        }

        let triangle = t.triangle()?;

        let color = t.color("material color")?;
        let diffuse = t.number("diffuse coefficient")?;
        let specular = t.number("specular coefficient")?;
        let exponent = t.number("specular exponent")?;

        Ok(Self {
            lights,
            triangle,
            material: Material::new(color, diffuse, specular, exponent),
            x: t.number("local coordinate x")?,
            y: t.number("local coordinate y")?,
            view_dir: t.vec3("view direction")?,
        })
    }

    pub fn evaluate(&self) -> Color {
        brightness(
            &self.lights,
            &self.triangle,
            self.x,
            self.y,
            self.view_dir,
            &self.material,
        )
    }
}
