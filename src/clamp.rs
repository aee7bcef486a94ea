use num_traits::Float;

/// Restricts `value` to the closed range between `min` and `max`
///
/// The bounds may be given in either order: an inverted pair clamps to
/// `[max, min]` instead of being rejected.
#[inline]
pub fn clamped<F: Float>(value: F, min: F, max: F) -> F {
    let lo = min.min(max);
    let hi = min.max(max);
    value.min(hi).max(lo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lerp::lerp;

    #[test]
    fn test_clamped() {
        assert_eq!(clamped(1.0, 0.0, 10.0), 1.0);
        assert_eq!(clamped(1.0, 5.0, 10.0), 5.0);
        assert_eq!(clamped(15.0, 0.0, 10.0), 10.0);
        assert_eq!(clamped(-5.0, 0.0, 10.0), 0.0);

        // Both bounds equal collapses everything onto them.
        assert_eq!(clamped(5.0, 3.0, 3.0), 3.0);
    }

    #[test]
    fn test_clamped_inverted_range() {
        assert_eq!(clamped(1.0, 4.0, 0.0), 1.0);
        assert_eq!(clamped(-1.0, 4.0, 0.0), 0.0);
        assert_eq!(clamped(5.0, 4.0, 0.0), 4.0);
        assert_eq!(clamped(1.0, -5.0, 0.0), 0.0);
    }

    #[test]
    fn test_clamped_catches_extrapolation() {
        assert_eq!(clamped(lerp(1.5, 0.0, 10.0), 0.0, 10.0), 10.0);
        assert_eq!(clamped(lerp(1.5, 10.0, 0.0), 10.0, 0.0), 0.0);
    }

    #[test]
    fn test_clamped_is_idempotent() {
        for &value in &[-7.5_f64, -1.0, 0.0, 2.5, 4.0, 9.9, 1e12] {
            let once = clamped(value, 2.5, 4.0);
            assert_eq!(clamped(once, 2.5, 4.0), once);

            let inverted = clamped(value, 4.0, 2.5);
            assert_eq!(clamped(inverted, 4.0, 2.5), inverted);
        }
    }
}
