use std::fmt;

/// Number of significant digits shown for every finite result.
pub const SIGNIFICANT_DIGITS: usize = 10;
/// Nonzero magnitudes below this are shown in scientific notation.
pub const SMALL_MAGNITUDE: f64 = 1e-10;
/// Magnitudes at or above this are shown in scientific notation.
pub const LARGE_MAGNITUDE: f64 = 1e10;

/// Shown in place of NaN.
pub const INVALID_MARKER: &str = "Error: invalid input";
/// Shown in place of positive infinity.
pub const INFINITY_MARKER: &str = "Infinity";
/// Shown in place of negative infinity.
pub const NEG_INFINITY_MARKER: &str = "-Infinity";

/// Renders a value in its canonical display form.
///
/// Magnitudes in `[1e-10, 1e10)` use general notation with ten significant
/// digits and no trailing zeros (the same as C's `%.10g`, which itself falls
/// back to an exponent below `1e-4`). Anything outside that range is written
/// as `d.ddddddddde±XX`. NaN and the infinities are replaced by marker
/// strings.
///
/// # Example
/// ```
/// use reckon::engine::format::format_result;
///
/// assert_eq!(format_result(14.0), "14");
/// assert_eq!(format_result(1.0 / 3.0), "0.3333333333");
/// assert_eq!(format_result(0.00001), "1e-05");
/// assert_eq!(format_result(12345678901.0), "1.234567890e+10");
/// assert_eq!(format_result(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    Formatted(value).to_string()
}

/// `Display` adapter applying the same rules as [`format_result`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Formatted(pub f64);

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;

        if value.is_nan() {
            return f.write_str(INVALID_MARKER);
        }
        if value.is_infinite() {
            return f.write_str(if value.is_sign_positive() {
                                   INFINITY_MARKER
                               } else {
                                   NEG_INFINITY_MARKER
                               });
        }
        if value == 0.0 {
            return f.write_str("0");
        }

        let magnitude = value.abs();
        if !(SMALL_MAGNITUDE..LARGE_MAGNITUDE).contains(&magnitude) {
            return f.write_str(&scientific(value, false));
        }

        f.write_str(&general(value))
    }
}

/// `%.10g`: fixed notation while the rounded decimal exponent lies in
/// `[-4, 10)`, exponent notation otherwise, trailing zeros removed either way.
fn general(value: f64) -> String {
    let exponent = decimal_exponent(value);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        return scientific(value, true);
    }

    #[allow(clippy::cast_sign_loss)]
    let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
    strip_trailing_zeros(&format!("{value:.decimals$}")).to_string()
}

/// Writes `value` with ten significant digits and a C-style exponent of at
/// least two digits.
fn scientific(value: f64, strip: bool) -> String {
    let formatted = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return formatted;
    };

    let mantissa = if strip { strip_trailing_zeros(mantissa) } else { mantissa };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

/// Returns the base-10 exponent of `value` after rounding it to ten
/// significant digits, so `9999999999.7` reports 10 rather than 9.
fn decimal_exponent(value: f64) -> i32 {
    let formatted = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    formatted.split_once('e')
             .and_then(|(_, exponent)| exponent.parse().ok())
             .unwrap_or(0)
}

fn strip_trailing_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
