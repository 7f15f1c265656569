//! Vector helpers that glam does not provide with the semantics we need.

use crate::Vec3;

/// Normalization that never divides by zero.
///
/// A vector whose length is exactly zero is returned unchanged instead of
/// turning into NaN. Callers must tolerate a non-unit result for that input.
pub trait Normalized {
    fn normalized(self) -> Self;
}

impl Normalized for Vec3 {
    #[inline]
    fn normalized(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            self
        } else {
            self / len
        }
    }
}

/// Mirror `v` about the normal `n`.
///
/// `n` is expected to be unit length. Returns `v - 2 (n·v) n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * n.dot(v) * n
}
