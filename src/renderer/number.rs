//! Numeric formatting for path data tokens
//!
//! Output is always a plain ASCII decimal: no exponent, no locale
//! separators, no trailing zero padding.

/// Beyond this magnitude every f64 is already an integer
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Format a coordinate with an optional number of fractional digits
///
/// Without a precision the shortest representation that round-trips is
/// used. With precision `p` the value is rounded half away from zero to
/// `p` fractional digits and trailing zeros are dropped.
pub fn format_number(value: f64, precision: Option<u32>) -> String {
    let value = match precision {
        Some(p) => round_to(value, p),
        None => value,
    };
    // `-0` carries no information in path data
    let value = if value == 0.0 { 0.0 } else { value };
    // f64's Display is shortest round-trip and never uses an exponent
    format!("{}", value)
}

fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(i32::MAX as u32) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
        return value;
    }
    scaled.round() / factor
}

/// Format an `x,y` coordinate pair
pub fn format_pair(x: f64, y: f64, precision: Option<u32>) -> String {
    format!(
        "{},{}",
        format_number(x, precision),
        format_number(y, precision)
    )
}
