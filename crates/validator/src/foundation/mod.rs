//! Core validation types
//!
//! The fundamental building blocks of the crate:
//!
//! - **Values**: [`Value`], the closed set of kinds rules understand
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//! - **Capability**: [`Validatable`], [`Validator`]
//! - **Vocabulary**: [`keys`], [`params`]
//!
//! The design keeps rule outcomes as data: a rule evaluation is an
//! `Option<ValidationError>`, an entity's validations are an ordered
//! `Vec` of those, and the validator only filters and collects. Nothing
//! here knows about translation; the
//! [`Translator`](crate::translate::Translator) consumes these records
//! read-only.

pub mod error;
pub mod keys;
pub mod params;
pub mod traits;
pub mod value;

pub use error::{Params, ValidationError, ValidationErrors};
pub use traits::{Evaluations, Validatable, Validator};
pub use value::Value;
