//! Saturating linear scaling onto a 0-100 axis.

use super::bounds::MetricBounds;
use crate::error::Result;

/// Scale `value` against `[lower, upper]` and clamp to `[0, 100]`.
///
/// A zero-width or inverted range is a configuration error and is reported
/// rather than producing NaN or a decreasing scale.
///
/// # Examples
///
/// ```rust
/// use player_compare::stats::normalize;
///
/// assert_eq!(normalize(40.0, 0.0, 80.0).unwrap(), 50.0);
/// assert_eq!(normalize(200.0, 0.0, 80.0).unwrap(), 100.0);
/// assert!(normalize(1.0, 3.0, 3.0).is_err());
/// ```
pub fn normalize(value: f64, lower: f64, upper: f64) -> Result<f64> {
    let bounds = MetricBounds::new(lower, upper)?;
    Ok(scale(value, bounds))
}

/// Infallible form for bounds that were validated on construction.
pub fn scale(value: f64, bounds: MetricBounds) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    let scaled = (value - bounds.lower()) / bounds.width() * 100.0;
    scaled.clamp(0.0, 100.0)
}
