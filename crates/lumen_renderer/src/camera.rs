//! Camera for primary ray generation.

use lumen_core::{CameraSettings, RAY_EPSILON};
use lumen_math::{Normalized, Ray, Vec3};

/// Direction of the primary ray through the center of pixel `(i, j)`.
///
/// The virtual screen sits `settings.distance` in front of the eye and is
/// centered on the view axis. Row 0 is the top of the screen. `up` must not be
/// parallel to the view direction.
pub fn ray_direction(i: u32, j: u32, width: u32, height: u32, settings: &CameraSettings) -> Vec3 {
    let view = (settings.center - settings.eye).normalized();
    let right = view.cross(settings.up).normalized();
    let true_up = right.cross(view).normalized();

    let screen_center = settings.eye + view * settings.distance;

    let u = (i as f64 + 0.5) / width as f64 * settings.screen_width - settings.screen_width / 2.0;
    let v = -(j as f64 + 0.5) / height as f64 * settings.screen_height + settings.screen_height / 2.0;

    let screen_point = screen_center + right * u + true_up * v;
    let direction = (screen_point - settings.eye).normalized();

    if i == 0 && j == 0 {
        log::trace!("Primary ray for pixel (0,0): direction {:?}", direction);
    }

    direction
}

/// Pinhole camera bound to an output resolution.
#[derive(Clone, Debug)]
pub struct Camera {
    pub settings: CameraSettings,
    pub image_width: u32,
    pub image_height: u32,
}

impl Camera {
    /// Create a camera with the default 800x800 resolution.
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            settings,
            image_width: 800,
            image_height: 800,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Primary ray from the eye through pixel `(i, j)`.
    pub fn primary_ray(&self, i: u32, j: u32) -> Ray {
        let direction = ray_direction(i, j, self.image_width, self.image_height, &self.settings);
        Ray::from_near(self.settings.eye, direction, RAY_EPSILON)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}
