//! The translator: message keys plus parameters in, rendered strings out.

use std::collections::HashMap;

use thiserror::Error;

use crate::foundation::ValidationError;

use super::messages::DEFAULT_MESSAGES;
use super::template::{Template, TemplateError};

// ============================================================================
// TRANSLATOR ERROR
// ============================================================================

/// A message mapping supplied at construction contained a malformed
/// template.
///
/// This is the one fatal path in the crate: misconfiguration is rejected at
/// startup rather than surfacing as a silent fallback at translation time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed message template for key `{key}`")]
pub struct TranslatorError {
    /// The message key whose template failed to parse.
    pub key: String,
    /// What was wrong with the template.
    #[source]
    pub source: TemplateError,
}

// ============================================================================
// TRANSLATOR
// ============================================================================

/// Renders [`ValidationError`]s into human-readable strings.
///
/// The registry is fixed at construction and never mutated, so a
/// constructed translator is safe to share read-only across threads.
///
/// [`translate`](Translator::translate) is total: an unknown message key or
/// a template whose referenced parameter is missing degrades to returning
/// the raw message key, never an error.
///
/// # Examples
///
/// ```rust
/// use fieldval::prelude::*;
///
/// let translator = Translator::new();
/// let error = ValidationError::new("name", keys::MIN_LENGTH)
///     .with_param(params::FIELD, "Name")
///     .with_param(params::MIN, 3_i64)
///     .with_param(params::VALUE, "J");
///
/// assert_eq!(translator.translate(&error), "Name en az 3 karakter olmalıdır");
/// ```
#[derive(Debug, Clone)]
pub struct Translator {
    templates: HashMap<String, Template>,
}

impl Translator {
    /// Creates a translator with the built-in default messages
    /// ([`DEFAULT_MESSAGES`], Turkish).
    #[must_use]
    pub fn new() -> Self {
        match Self::with_messages(DEFAULT_MESSAGES) {
            Ok(translator) => translator,
            // The default set is a static constant covered by tests; if it
            // ever failed to parse, an empty registry degrades every
            // translation to the raw message key instead of panicking.
            Err(_) => Self {
                templates: HashMap::new(),
            },
        }
    }

    /// Creates a translator from a custom message mapping.
    ///
    /// Accepts any iterator of `(message key, template source)` pairs; a
    /// partial mapping is fine, untranslated keys simply fall back to
    /// themselves. Every template is parsed here, and the first malformed
    /// one fails construction.
    pub fn with_messages<I, K, V>(messages: I) -> Result<Self, TranslatorError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut templates = HashMap::new();
        for (key, source) in messages {
            let key = key.into();
            let template =
                Template::parse(source.as_ref()).map_err(|source| TranslatorError {
                    key: key.clone(),
                    source,
                })?;
            templates.insert(key, template);
        }
        Ok(Self { templates })
    }

    /// Renders a validation error into a human-readable string.
    ///
    /// Falls back to the raw message key when the key has no template or
    /// the template references a parameter the error does not carry.
    #[must_use]
    pub fn translate(&self, error: &ValidationError) -> String {
        match self.templates.get(error.message_key.as_ref()) {
            Some(template) => template
                .render(&error.params)
                .unwrap_or_else(|| error.message_key.to_string()),
            None => error.message_key.to_string(),
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
