use num_traits::Float;

use crate::{clamp, lerp};

/// Method forms of the free functions, for chaining on the value itself
///
/// ```
/// use lerp_remap::FloatExt;
///
/// assert_eq!(1.5_f32.lerp(0.0, 100.0).clamped(0.0, 100.0), 100.0);
/// ```
pub trait FloatExt: Float {
    /// Interpolates from `min` to `max` by the progress value `self`
    #[must_use]
    fn lerp(self, min: Self, max: Self) -> Self;

    /// Progress of `self` between `min` and `max`
    #[must_use]
    fn inv_lerp(self, min: Self, max: Self) -> Self;

    /// Rescales `self` from `[from_min, from_max]` to `[to_min, to_max]`
    #[must_use]
    fn remap(self, from_min: Self, from_max: Self, to_min: Self, to_max: Self) -> Self;

    /// Restricts `self` to the closed range between `min` and `max`
    #[must_use]
    fn clamped(self, min: Self, max: Self) -> Self;
}

impl<F: Float> FloatExt for F {
    #[inline]
    fn lerp(self, min: Self, max: Self) -> Self {
        lerp::lerp(self, min, max)
    }

    #[inline]
    fn inv_lerp(self, min: Self, max: Self) -> Self {
        lerp::inv_lerp(self, min, max)
    }

    #[inline]
    fn remap(self, from_min: Self, from_max: Self, to_min: Self, to_max: Self) -> Self {
        lerp::remap(self, from_min, from_max, to_min, to_max)
    }

    #[inline]
    fn clamped(self, min: Self, max: Self) -> Self {
        clamp::clamped(self, min, max)
    }
}
