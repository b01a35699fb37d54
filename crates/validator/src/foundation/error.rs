//! Structured validation error records.
//!
//! A [`ValidationError`] is the data-shaped outcome of one failed rule:
//! field name, a stable message key, a small parameter mapping for the
//! template renderer, and the raw offending value. It is created at the
//! moment a violation is detected and never mutated afterwards.
//!
//! String fields use `Cow<'static, str>` for zero allocation in the common
//! case of static field names and message keys.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use super::value::Value;

/// Ordered message parameters, keyed by the names in
/// [`params`](crate::foundation::params).
///
/// The vocabulary is tiny (at most Field, Min, Max, Value), so the pairs
/// live inline on the stack.
pub type Params = SmallVec<[(Cow<'static, str>, Value); 4]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single detected rule violation.
///
/// # Examples
///
/// ```rust
/// use fieldval::foundation::{ValidationError, Value, keys, params};
///
/// let error = ValidationError::new("Age", keys::BETWEEN)
///     .with_param(params::FIELD, "Age")
///     .with_param(params::MIN, 18_i64)
///     .with_param(params::MAX, 100_i64)
///     .with_current_value(17_i64);
///
/// assert_eq!(error.message_key, "validation.between");
/// assert_eq!(error.param(params::MIN), Some(&Value::Int(18)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Identifier of the checked field (caller-supplied).
    pub field: Cow<'static, str>,

    /// Stable machine-readable identifier of the violation kind.
    ///
    /// Doubles as the translation lookup key and the fallback rendered text.
    pub message_key: Cow<'static, str>,

    /// Parameters consumed by the template renderer.
    pub params: Params,

    /// The raw offending value, retained for programmatic inspection
    /// (distinct from the stringified `Value` template parameter).
    pub current_value: Value,
}

impl ValidationError {
    /// Creates a new validation error with a field name and message key.
    pub fn new(
        field: impl Into<Cow<'static, str>>,
        message_key: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            field: field.into(),
            message_key: message_key.into(),
            params: Params::new(),
            current_value: Value::Absent,
        }
    }

    /// Adds a message parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Value>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Sets the raw offending value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_current_value(mut self, value: impl Into<Value>) -> Self {
        self.current_value = value.into();
        self
    }

    /// Looks up a message parameter by name.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v)
    }

    /// Converts the error to a `serde_json::Value` for structured output.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect();

        json!({
            "field": self.field,
            "message_key": self.message_key,
            "params": params,
            "current_value": self.current_value,
        })
    }
}

/// Renders the message key. Human-readable prose is the
/// [`Translator`](crate::translate::Translator)'s job.
impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message_key)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of validation errors from one validation pass.
///
/// Order is the evaluation order of the rules that produced the errors.
/// The collection is never exposed empty: absence of errors is `Ok(())`
/// from [`Validator::validate`](super::traits::Validator::validate).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends an error, preserving insertion order.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns the number of collected errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no errors were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the collected errors in evaluation order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates over the collected errors.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Converts to a `Result`: `Ok(ok_value)` when empty, `Err(self)`
    /// otherwise.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(ok_value) } else { Err(self) }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Concatenates the message keys, semicolon-and-space separated, in
/// collection order. Diagnostic, not end-user-facing.
impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(&error.message_key)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
