//! Linear interpolation and friends over any floating-point type
//!
//! Four pure functions: [`lerp`] maps a progress value onto a range,
//! [`inv_lerp`] recovers the progress of a value within a range, [`remap`]
//! converts a value between two ranges, and [`clamped`] restricts a value
//! to a range whose bounds may be given in either order. [`FloatExt`]
//! exposes the same four as methods.
//!
//! ```
//! use lerp_remap::{clamped, inv_lerp, lerp, remap};
//!
//! assert_eq!(lerp(0.5_f32, 0.0, 10.0), 5.0);
//! assert_eq!(inv_lerp(15.0_f32, 0.0, 10.0), 1.5);
//! assert_eq!(remap(30.0_f32, 0.0, 100.0, 0.0, 1.0), 0.3);
//! assert_eq!(clamped(1.0_f32, -5.0, 0.0), 0.0);
//! ```

use thiserror::Error;

mod clamp;
mod ext;
mod lerp;

pub use clamp::clamped;
pub use ext::FloatExt;
pub use lerp::{checked_inv_lerp, checked_remap, inv_lerp, lerp, remap};

/// Returned by the checked variants when the source range has zero width,
/// which would make the inverse interpolation divide by zero.
#[derive(Error, Debug)]
#[error("source range has zero width (min == max)")]
pub struct DegenerateRangeError;
