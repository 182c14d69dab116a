/// Upper bound on the number of body evaluations of any loop.
pub const MAX_ITERATIONS: usize = 10;

/// Promotes an integer to a real number.
///
/// Magnitudes beyond `2^53` round to the nearest representable `f64`, as
/// any floating-point quotient would.
///
/// ## Example
/// ```
/// use bounded_calc::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Turns a requested iteration count into the count actually executed.
///
/// Negative requests run zero times and every request is capped at
/// [`MAX_ITERATIONS`].
///
/// ## Example
/// ```
/// use bounded_calc::util::num::clamp_iterations;
///
/// assert_eq!(clamp_iterations(5), 5);
/// assert_eq!(clamp_iterations(20), 10);
/// assert_eq!(clamp_iterations(0), 0);
/// assert_eq!(clamp_iterations(-3), 0);
/// ```
#[must_use]
pub fn clamp_iterations(requested: i64) -> usize {
    usize::try_from(requested).map_or(0, |n| n.min(MAX_ITERATIONS))
}
