use crate::{Interval, Vec3};

/// A ray segment: origin, direction and the valid parametric range `t`.
///
/// The direction is assumed normalized by whoever builds the ray, so `t`
/// measures distance along the ray.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub t: Interval,
}

impl Ray {
    /// Create a new ray valid over `t`.
    pub fn new(origin: Vec3, direction: Vec3, t: Interval) -> Self {
        Self {
            origin,
            direction,
            t,
        }
    }

    /// A ray valid from `tnear` to infinity.
    pub fn from_near(origin: Vec3, direction: Vec3, tnear: f64) -> Self {
        Self::new(origin, direction, Interval::from_min(tnear))
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Same ray with the far bound pulled in to `tmax`.
    #[inline]
    pub fn clipped(&self, tmax: f64) -> Ray {
        Ray {
            t: self.t.with_max(tmax),
            ..*self
        }
    }
}
