//! Render driver.
//!
//! Casts one primary ray per pixel, shades whatever it hits and writes the
//! unclamped result into a row-major buffer. Rows are rendered in parallel
//! with rayon; no pixel reads another pixel's result.

use std::time::Instant;

use lumen_core::{CameraSettings, Light, SceneQuery};
use lumen_math::Color;
use rayon::prelude::*;

use crate::{shade, Camera, MAX_DEPTH};

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Maximum reflection depth
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            max_depth: MAX_DEPTH,
        }
    }
}

/// Compute the color of a single pixel.
///
/// Pixels whose primary ray misses every object are black.
pub fn render_pixel<S: SceneQuery + ?Sized>(
    camera: &Camera,
    scene: &S,
    lights: &[Light],
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    let ray = camera.primary_ray(x, y);

    match scene.closest_hit(&ray) {
        Some(hit) => shade(scene, lights, &hit, -ray.direction, 0, config.max_depth),
        None => Color::BLACK,
    }
}

/// Row-major buffer of unclamped pixel colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to clamped 8-bit RGB bytes, three per pixel.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color.to_rgb8());
        }
        bytes
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Render the scene seen from `camera` to an image buffer.
///
/// Resolution and reflection depth come from `config`.
pub fn render<S: SceneQuery + ?Sized>(
    camera: &CameraSettings,
    scene: &S,
    lights: &[Light],
    config: &RenderConfig,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(config.width, config.height);
    if image.pixels.is_empty() {
        log::warn!("Nothing to render at {}x{}", config.width, config.height);
        return image;
    }

    let camera = Camera::new(camera.clone()).with_resolution(config.width, config.height);

    log::info!(
        "Rendering {}x{} with {} lights, max depth {}",
        config.width,
        config.height,
        lights.len(),
        config.max_depth
    );
    let start = Instant::now();

    image
        .pixels
        .par_chunks_mut(config.width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(&camera, scene, lights, x as u32, y as u32, config);
            }
        });

    log::info!("Render finished in {:.2?}", start.elapsed());

    image
}
