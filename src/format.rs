//! Canonical, locale-independent numeric formatting.
//!
//! This module owns the textual form of numbers: which digits to print and
//! when to switch to exponent notation. [`to_text`](crate::to_text) delegates
//! every [`Value::Number`](crate::Value::Number) to [`number`] instead of
//! carrying its own formatting policy, so number rendering stays consistent
//! across the whole value system.
//!
//! ## Notation
//!
//! Fixed notation is used while the decimal exponent lies in `[-3, 5)`;
//! outside that window the output switches to exponent notation with an
//! explicit sign on the exponent:
//!
//! ```rust
//! use valtext::format;
//!
//! assert_eq!(format::number(4.2), "4.2");
//! assert_eq!(format::number(0.001), "0.001");
//! assert_eq!(format::number(0.0001), "1e-4");
//! assert_eq!(format::number(123456.0), "1.23456e+5");
//! ```
//!
//! Digits are always the shortest sequence that round-trips to the same
//! `f64`, so the output is deterministic and independent of any locale.

/// Fixed notation applies while the decimal exponent is at least this value.
const LOWER_EXP: i32 = -3;

/// Fixed notation applies while the decimal exponent is below this value.
const UPPER_EXP: i32 = 5;

/// Formats a number as its canonical text.
///
/// Special values render as `"NaN"`, `"Infinity"` and `"-Infinity"`; both
/// zeroes render as `"0"`. Everything else follows the auto notation rule
/// described at the module level.
///
/// # Examples
///
/// ```rust
/// use valtext::format;
///
/// assert_eq!(format::number(4.2), "4.2");
/// assert_eq!(format::number(-3.25), "-3.25");
/// assert_eq!(format::number(0.0), "0");
/// assert_eq!(format::number(f64::NAN), "NaN");
/// assert_eq!(format::number(f64::INFINITY), "Infinity");
/// assert_eq!(format::number(2e21), "2e+21");
/// ```
#[must_use]
pub fn number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let (mantissa, exponent) = split_exponent(value);
    if (LOWER_EXP..UPPER_EXP).contains(&exponent) {
        // Rust's Display for f64 is fixed-notation shortest round-trip.
        format!("{}", value)
    } else if exponent < 0 {
        format!("{}e{}", mantissa, exponent)
    } else {
        format!("{}e+{}", mantissa, exponent)
    }
}

/// Splits a finite non-zero number into its shortest round-trip mantissa and
/// decimal exponent.
fn split_exponent(value: f64) -> (String, i32) {
    let sci = format!("{:e}", value);
    // LowerExp output always contains exactly one 'e'.
    match sci.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent = exponent.parse::<i32>().unwrap_or(0);
            (mantissa.to_string(), exponent)
        }
        None => (sci, 0),
    }
}
