//! Prelude module for convenient imports.
//!
//! A single `use fieldval::prelude::*;` brings in the capability trait, the
//! validator, every built-in rule, the translator, and the message-key and
//! parameter-name constants.
//!
//! # Examples
//!
//! ```rust
//! use fieldval::prelude::*;
//!
//! struct Login {
//!     email: String,
//! }
//!
//! impl Validatable for Login {
//!     fn validations(&self) -> Evaluations {
//!         vec![
//!             required("Email", self.email.as_str()),
//!             email("Email", &self.email),
//!         ]
//!     }
//! }
//! ```

// ============================================================================
// FOUNDATION: values, errors, capability, vocabulary
// ============================================================================

pub use crate::foundation::{
    Evaluations, Params, Validatable, ValidationError, ValidationErrors, Validator, Value, keys,
    params,
};

// ============================================================================
// RULES: all built-in rule functions
// ============================================================================

pub use crate::rules::{
    between, date_greater_than, date_less_than, email, max_length, min_length, required,
};

// ============================================================================
// TRANSLATION
// ============================================================================

pub use crate::translate::{DEFAULT_MESSAGES, Template, TemplateError, Translator, TranslatorError};
