//! # fieldval
//!
//! Field-level validation with translatable, parameterized error messages.
//!
//! The crate is two small components composed linearly: **rules** produce
//! structured, language-agnostic [`ValidationError`](foundation::ValidationError)
//! records, a [`Validator`](foundation::Validator) aggregates them, and an
//! optional [`Translator`](translate::Translator) renders each record into a
//! human-readable string from a template registry keyed by message key.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldval::prelude::*;
//!
//! struct User {
//!     name: String,
//!     email: String,
//!     age: i64,
//! }
//!
//! impl Validatable for User {
//!     fn validations(&self) -> Evaluations {
//!         vec![
//!             required("Name", self.name.as_str()),
//!             min_length("Name", &self.name, 2),
//!             email("Email", &self.email),
//!             between("Age", self.age, 18, 100),
//!         ]
//!     }
//! }
//!
//! let user = User {
//!     name: "J".into(),
//!     email: "not-an-email".into(),
//!     age: 17,
//! };
//!
//! let errors = Validator::new().validate(&user).unwrap_err();
//! assert_eq!(errors.len(), 3);
//!
//! let translator = Translator::new();
//! for error in &errors {
//!     println!("{}", translator.translate(error));
//! }
//! ```
//!
//! ## Translation
//!
//! Translation is strictly best-effort: an unknown message key or a template
//! referencing a parameter the error does not carry degrades to the raw
//! message key. [`Translator::translate`](translate::Translator::translate)
//! is total — it always returns a string and never fails.
//!
//! ```rust
//! use fieldval::prelude::*;
//!
//! let translator = Translator::with_messages([
//!     (keys::REQUIRED, "The {{Field}} field is required"),
//! ]).unwrap();
//!
//! let error = required("Name", "").unwrap();
//! assert_eq!(translator.translate(&error), "The Name field is required");
//! ```

// ValidationError is the fundamental value every rule returns — boxing it
// would add indirection to every evaluation for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod foundation;
pub mod prelude;
pub mod rules;
pub mod translate;
