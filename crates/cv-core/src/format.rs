//! Display formatting for rendered cycle values.
//!
//! The calculator's tables use two numeric formats: fixed-point with a set
//! number of fraction digits, and exponential notation with a signed
//! exponent (`6.2428e-5`, `1.23e+2`). Rust's `{:e}` omits the `+` on
//! non-negative exponents, so `exponential` normalizes it.

/// Fixed-point rendering with `digits` fraction digits.
pub fn fixed(v: f64, digits: usize) -> String {
    format!("{v:.digits$}")
}

/// Exponential rendering with `digits` fraction digits in the mantissa and
/// an always-signed exponent.
pub fn exponential(v: f64, digits: usize) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let raw = format!("{v:.digits$e}");
    match raw.rfind('e') {
        Some(idx) if !raw[idx + 1..].starts_with('-') => {
            format!("{}e+{}", &raw[..idx], &raw[idx + 1..])
        }
        _ => raw,
    }
}
