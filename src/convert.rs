//! The conversion dispatcher: turn any [`Value`] into its textual form.
//!
//! One rule per kind, selected by an exhaustive `match`. Scalars convert to
//! a single text value; containers convert element-wise through
//! [`Value::deep_map`], which rebuilds arrays and matrices of identical
//! shape. The rule table:
//!
//! | Input kind | Rule | Result |
//! |---|---|---|
//! | absent (`to_text_opt(None)`) | constant | empty text |
//! | number | [`format::number`](crate::format::number) | canonical text |
//! | null | constant | `"null"` |
//! | boolean | stringify | `"true"` / `"false"` |
//! | text | identity | the input unchanged |
//! | array / matrix | structural recursion | same-shape container of text |
//! | anything else | generic stringification | the value's `Display` form |
//!
//! The last arm covers kinds the surrounding numeric system supplies beyond
//! the closed set (big integers, dates). It is unreachable for the five
//! enumerated scalar kinds and the containers; the `match` structure
//! guarantees that.
//!
//! ## Examples
//!
//! ```rust
//! use valtext::{to_text, value, Value};
//!
//! assert_eq!(to_text(&Value::from(4.2)), Value::from("4.2"));
//! assert_eq!(to_text(&Value::Null), Value::from("null"));
//! assert_eq!(to_text(&value!([true, false])), value!(["true", "false"]));
//! ```

use crate::{TextOptions, Value};

/// Converts a value to its textual form.
///
/// Scalar inputs return a [`Value::Str`]; container inputs return a
/// container of the same shape whose leaves are all text. The operation is
/// a pure function of its input: nothing is mutated, no I/O happens, and
/// recursion depth equals the nesting depth of the input (containers are
/// owned values, so cycles cannot be constructed).
///
/// Converting text is the identity, so the operation is idempotent:
/// `to_text(&to_text(v)) == to_text(v)` for every `v`.
///
/// # Examples
///
/// ```rust
/// use valtext::{to_text, value, Value};
///
/// assert_eq!(to_text(&Value::from(true)), Value::from("true"));
/// assert_eq!(to_text(&Value::from("already")), Value::from("already"));
/// assert_eq!(
///     to_text(&value!([[1, 2], [3, 4]])),
///     value!([["1", "2"], ["3", "4"]])
/// );
/// ```
#[must_use]
pub fn to_text(value: &Value) -> Value {
    to_text_with_options(value, TextOptions::default())
}

/// Converts an optional value to its textual form.
///
/// This is the zero-or-one argument surface of the operation: `None` stands
/// for a call with no argument and returns the empty text.
///
/// # Examples
///
/// ```rust
/// use valtext::{to_text_opt, Value};
///
/// assert_eq!(to_text_opt(None), Value::from(""));
/// assert_eq!(to_text_opt(Some(&Value::Null)), Value::from("null"));
/// ```
#[must_use]
pub fn to_text_opt(value: Option<&Value>) -> Value {
    match value {
        Some(v) => to_text(v),
        None => Value::Str(String::new()),
    }
}

/// Converts a value to its textual form with custom rules.
///
/// See [`TextOptions`] for the two pluggable rules: the numeric formatter
/// and the fallback for kinds outside the closed set. The dispatch itself
/// and the structural recursion are not configurable.
///
/// # Examples
///
/// ```rust
/// use valtext::{to_text_with_options, value, TextOptions, Value};
///
/// let options = TextOptions::new().with_number_format(|n| format!("{:.2}", n));
/// assert_eq!(
///     to_text_with_options(&value!([1, 2]), options),
///     value!(["1.00", "2.00"])
/// );
/// ```
#[must_use]
pub fn to_text_with_options(value: &Value, options: TextOptions) -> Value {
    match value {
        Value::Number(n) => Value::Str(options.number_text(*n)),
        Value::Null => Value::Str("null".to_string()),
        Value::Bool(b) => Value::Str(b.to_string()),
        Value::Str(s) => Value::Str(s.clone()),
        Value::Array(_) | Value::Matrix(_) => {
            value.deep_map(|leaf| to_text_with_options(leaf, options))
        }
        other => Value::Str(options.fallback_text(other)),
    }
}

/// LaTeX templates for rendering calls to this operation, keyed by argument
/// count. Consumed by the formula typesetter; pure lookup data.
const TEX_TEMPLATES: [(usize, &str); 2] = [
    (0, r#"\mathtt{""}"#),
    (1, r"\mathrm{string}\left(${args[0]}\right)"),
];

/// Returns the typesetting template for a call with the given argument
/// count, or `None` for unsupported arities.
///
/// # Examples
///
/// ```rust
/// use valtext::tex_template;
///
/// assert_eq!(tex_template(0), Some(r#"\mathtt{""}"#));
/// assert!(tex_template(1).is_some());
/// assert_eq!(tex_template(2), None);
/// ```
#[must_use]
pub fn tex_template(arity: usize) -> Option<&'static str> {
    TEX_TEMPLATES
        .iter()
        .find(|(count, _)| *count == arity)
        .map(|(_, template)| *template)
}
