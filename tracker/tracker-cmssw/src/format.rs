//! Numeric attribute formatting.
//!
//! DDL attributes carry numbers as text with an embedded unit, e.g.
//! `"28.09*g/mole"`. Values are written in general notation with a fixed
//! number of significant digits: fixed-point unless the decimal exponent is
//! below -4 or at least the digit count, trailing zeros removed.

/// Significant digits for element weights and densities.
pub const ELEMENT_DIGITS: usize = 6;
/// Significant digits for composite densities, box dimensions and translations.
pub const LENGTH_DIGITS: usize = 3;
/// Significant digits for tube radii and half-lengths.
pub const RADIUS_DIGITS: usize = 4;
/// Significant digits for rotation angles.
pub const ANGLE_DIGITS: usize = 6;

/// Format `value` with `digits` significant digits in general notation.
#[must_use]
pub fn format_sig(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let precision = digits as i32;
    if exponent < -4 || exponent >= precision {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        #[allow(clippy::cast_sign_loss)]
        let decimals = (precision - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Format `value` as `<number>*<unit>` with `digits` significant digits.
#[must_use]
pub fn with_unit(value: f64, digits: usize, unit: &str) -> String {
    format!("{}*{unit}", format_sig(value, digits))
}

/// Shortest decimal text that reads back as `value`.
///
/// Full-precision stream output would write 17 significant digits instead
/// (`0.95` as `0.94999999999999996`); both parse to the same double.
#[must_use]
pub fn format_exact(value: f64) -> String {
    format!("{value}")
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
