//! # valtext
//!
//! Element-wise conversion of dynamic numeric values to their textual form.
//!
//! ## What does it do?
//!
//! One operation, [`to_text`]: take any [`Value`] of the surrounding numeric
//! system — null, boolean, number, text, or a nested container — and return
//! its display text. Containers convert element-wise and keep their exact
//! shape; only the leaves change kind, from anything to text.
//!
//! ## Key Features
//!
//! - **Total by construction**: dispatch is an exhaustive `match` over a
//!   closed value enum, so every kind has exactly one rule and no "unknown
//!   kind" failure exists at run time
//! - **Shape-preserving**: arrays and matrices come back with identical
//!   dimensions and lengths at every nesting level
//! - **Canonical numbers**: numeric text comes from one deterministic,
//!   locale-independent formatter ([`format::number`])
//! - **Pluggable edges**: the numeric formatter and the fallback rule for
//!   domain-specific kinds are swappable via [`TextOptions`]
//! - **No Unsafe Code**: written entirely in safe Rust with zero unsafe blocks
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! valtext = "0.1"
//! ```
//!
//! ### Converting scalars
//!
//! ```rust
//! use valtext::{to_text, to_text_opt, Value};
//!
//! assert_eq!(to_text(&Value::from(4.2)), Value::from("4.2"));
//! assert_eq!(to_text(&Value::Null), Value::from("null"));
//! assert_eq!(to_text(&Value::from(true)), Value::from("true"));
//! assert_eq!(to_text(&Value::from("already")), Value::from("already"));
//!
//! // The zero-argument form returns empty text
//! assert_eq!(to_text_opt(None), Value::from(""));
//! ```
//!
//! ### Converting containers
//!
//! ```rust
//! use valtext::{to_text, value};
//!
//! assert_eq!(to_text(&value!([true, false])), value!(["true", "false"]));
//! assert_eq!(
//!     to_text(&value!([[1, 2], [3, 4]])),
//!     value!([["1", "2"], ["3", "4"]])
//! );
//! ```
//!
//! ### Matrices
//!
//! ```rust
//! use valtext::{to_text, Matrix, Value};
//!
//! let m = Matrix::from_rows(vec![
//!     vec![Value::from(1), Value::from(2)],
//!     vec![Value::from(3), Value::from(4)],
//! ]).unwrap();
//!
//! let text = to_text(&Value::Matrix(m));
//! assert_eq!(text.as_matrix().unwrap().get(&[1, 0]), Some(&Value::from("3")));
//! ```
//!
//! ### Custom rules
//!
//! ```rust
//! use valtext::{to_text_with_options, TextOptions, Value};
//!
//! let options = TextOptions::new().with_number_format(|n| format!("{:.2}", n));
//! let text = to_text_with_options(&Value::from(4.2), options);
//! assert_eq!(text, Value::from("4.20"));
//! ```
//!
//! ## Guarantees
//!
//! - The operation never mutates its input and performs no I/O
//! - Recursion depth equals the nesting depth of the input; containers are
//!   owned values, so cyclic inputs cannot be constructed
//! - Converting text is the identity, making the operation idempotent
//! - The fallback rule is only ever reached for kinds outside the closed
//!   set (big integers, dates); its default output is the value's `Display`
//!   form, non-empty and deterministic
//!
//! ## What it is not
//!
//! This is not a serialization facility. There is no inverse (text → value)
//! operation, no escaping or quoting for reversibility, and no guarantee
//! that the output parses back into the input.
//!
//! ## Safety and concurrency
//!
//! All operations are pure functions of their arguments: shared references
//! in, owned values out, no global or mutable shared state. Calls may run
//! concurrently from any number of threads without synchronization.

pub mod convert;
pub mod error;
pub mod format;
pub mod macros;
pub mod matrix;
pub mod options;
pub mod value;

pub use convert::{tex_template, to_text, to_text_opt, to_text_with_options};
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use options::TextOptions;
pub use value::Value;
