//! Translation of validation errors into human-readable strings.
//!
//! A [`Translator`] owns an immutable registry mapping message keys to
//! parsed [`Template`]s. Construction is fail-fast on malformed templates;
//! translation is total, degrading to the raw message key on any lookup or
//! rendering miss. Translation is independent of the
//! [`Validator`](crate::foundation::Validator) and is only invoked when a
//! caller wants rendered text.

mod messages;
mod template;
mod translator;

pub use messages::DEFAULT_MESSAGES;
pub use template::{Template, TemplateError};
pub use translator::{Translator, TranslatorError};
