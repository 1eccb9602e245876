/// Rounds `value` to `digits` decimal places, halves away from zero.
///
/// ```
/// use cable_core::round;
///
/// assert_eq!(round(1234.56, 1), 1234.6);
/// assert_eq!(round(-0.25, 1), -0.3);
/// ```
#[must_use]
pub fn round(value: f64, digits: u32) -> f64 {
    let Ok(exp) = i32::try_from(digits) else {
        return value;
    };
    let scale = 10_f64.powi(exp);
    if !scale.is_finite() {
        return value;
    }

    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Formats `value` with a fixed number of decimal places.
///
/// The value is rounded with [`round`] first, so halves round away from
/// zero rather than following the formatter's ties-to-even behavior.
#[must_use]
pub fn format_fixed(value: f64, digits: u32) -> String {
    let precision = usize::try_from(digits).unwrap_or(usize::MAX);
    format!("{:.*}", precision, round(value, digits))
}
