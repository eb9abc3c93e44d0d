//! Configuration options for the conversion operation.
//!
//! [`TextOptions`] lets callers swap the two collaborator rules of
//! [`to_text`](crate::to_text) without touching the dispatch itself:
//!
//! - the **numeric formatter**, defaulting to [`format::number`](crate::format::number)
//! - the **fallback rule** for kinds outside the closed set (big integers,
//!   dates), defaulting to the value's `Display` form
//!
//! ## Examples
//!
//! ```rust
//! use valtext::{to_text_with_options, TextOptions, Value};
//!
//! // Render numbers with a fixed number of decimals
//! let options = TextOptions::new().with_number_format(|n| format!("{:.2}", n));
//! let text = to_text_with_options(&Value::from(4.2), options);
//! assert_eq!(text, Value::Str("4.20".to_string()));
//! ```

use crate::format;
use crate::Value;

/// Configuration options for [`to_text`](crate::to_text).
///
/// Both hooks are plain function pointers so options stay `Copy` and cheap
/// to thread through the recursion.
///
/// # Examples
///
/// ```rust
/// use valtext::{TextOptions, Value};
///
/// // Defaults: canonical numeric formatting, Display fallback
/// let options = TextOptions::new();
/// assert_eq!(options.number_text(4.2), "4.2");
///
/// // Custom fallback for domain-specific kinds
/// let options = TextOptions::new().with_fallback(|v| format!("<{}>", v.kind()));
/// assert_eq!(options.fallback_text(&Value::Null), "<null>");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TextOptions {
    pub number_format: Option<fn(f64) -> String>,
    pub fallback: Option<fn(&Value) -> String>,
}

impl TextOptions {
    /// Creates default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtext::TextOptions;
    ///
    /// let options = TextOptions::new();
    /// assert!(options.number_format.is_none());
    /// assert!(options.fallback.is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom numeric formatter.
    ///
    /// The formatter must be deterministic and locale-independent; it fully
    /// owns rounding and exponent policy for number inputs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtext::TextOptions;
    ///
    /// let options = TextOptions::new().with_number_format(|n| format!("{:.1}", n));
    /// assert_eq!(options.number_text(4.25), "4.2");
    /// ```
    #[must_use]
    pub fn with_number_format(mut self, format: fn(f64) -> String) -> Self {
        self.number_format = Some(format);
        self
    }

    /// Sets a custom fallback rule for kinds outside the closed set.
    ///
    /// The rule receives the whole value and must return non-empty text,
    /// deterministic for a given input. It is never invoked for null,
    /// boolean, number, text or container inputs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtext::TextOptions;
    ///
    /// let options = TextOptions::new().with_fallback(|v| v.kind().to_string());
    /// ```
    #[must_use]
    pub fn with_fallback(mut self, fallback: fn(&Value) -> String) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Formats a number with the configured formatter.
    #[must_use]
    pub fn number_text(&self, value: f64) -> String {
        match self.number_format {
            Some(f) => f(value),
            None => format::number(value),
        }
    }

    /// Stringifies a value with the configured fallback rule.
    #[must_use]
    pub fn fallback_text(&self, value: &Value) -> String {
        match self.fallback {
            Some(f) => f(value),
            None => value.to_string(),
        }
    }
}
