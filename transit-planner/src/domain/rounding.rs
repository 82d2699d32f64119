//! Decimal rounding for reported times, distances and fares.

/// Round `value` to `places` decimal places, halves away from zero.
///
/// # Examples
///
/// ```
/// use transit_planner::domain::round_to;
///
/// assert_eq!(round_to(12.345, 1), 12.3);
/// assert_eq!(round_to(7.005, 2), 7.01);
/// assert_eq!(round_to(3.0, 2), 3.0);
/// ```
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    // Nudge by a relative epsilon so that 7.005 (stored as 7.00499..) rounds up.
    let scaled = value * factor;
    (scaled + scaled.signum() * scaled.abs() * f64::EPSILON * 4.0).round() / factor
}
