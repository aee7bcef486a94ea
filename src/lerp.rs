use num_traits::Float;

use crate::DegenerateRangeError;

/// Interpolates from `min` to `max` by the progress value `t`
///
/// `t` is not clamped: `0` returns `min` exactly, `1` returns `max` exactly,
/// and anything outside `[0, 1]` extrapolates along the same line.
#[inline]
pub fn lerp<F: Float>(t: F, min: F, max: F) -> F {
    (F::one() - t) * min + max * t
}

/// Recovers the progress value at which [`lerp`] over `[min, max]` reaches
/// `value`
///
/// Values outside the range come back as progress outside `[0, 1]`. A
/// zero-width range divides by zero and yields an infinity, or NaN when
/// `value` sits on the collapsed bound; see [`checked_inv_lerp`] to get that
/// reported as an error instead.
#[inline]
pub fn inv_lerp<F: Float>(value: F, min: F, max: F) -> F {
    (value - min) / (max - min)
}

/// Rescales `value` from `[from_min, from_max]` to `[to_min, to_max]`
///
/// Equivalent to [`inv_lerp`] on the source range followed by [`lerp`] on the
/// destination range, so out-of-range values extrapolate rather than saturate.
#[inline]
pub fn remap<F: Float>(value: F, from_min: F, from_max: F, to_min: F, to_max: F) -> F {
    lerp(inv_lerp(value, from_min, from_max), to_min, to_max)
}

/// [`inv_lerp`], except a zero-width range is an error rather than a
/// division by zero
pub fn checked_inv_lerp<F: Float>(value: F, min: F, max: F) -> Result<F, DegenerateRangeError> {
    if min == max {
        Err(DegenerateRangeError)
    } else {
        Ok(inv_lerp(value, min, max))
    }
}

/// [`remap`], except a zero-width source range is an error rather than a
/// division by zero
pub fn checked_remap<F: Float>(
    value: F,
    from_min: F,
    from_max: F,
    to_min: F,
    to_max: F,
) -> Result<F, DegenerateRangeError> {
    let t = checked_inv_lerp(value, from_min, from_max)?;
    Ok(lerp(t, to_min, to_max))
}
