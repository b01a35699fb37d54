//! The Required rule: a value must not be the zero value for its kind.

use std::borrow::Cow;

use crate::foundation::{ValidationError, Value, keys, params};

// ============================================================================
// REQUIRED
// ============================================================================

/// Checks that a value is not the zero value for its kind.
///
/// Zero values per kind: empty string, integer `0`, `false`, the zero date,
/// and absence (`None`). Kinds outside that vocabulary (floats) are never
/// considered zero, so the rule fails open for them.
///
/// # Examples
///
/// ```rust
/// use fieldval::rules::required;
///
/// assert!(required("Name", "").is_some());
/// assert!(required("Name", "John").is_none());
/// assert!(required("Age", 0_i64).is_some());
/// assert!(required("Age", 25_i64).is_none());
/// assert!(required("Nickname", Option::<&str>::None).is_some());
/// ```
pub fn required(
    field: impl Into<Cow<'static, str>>,
    value: impl Into<Value>,
) -> Option<ValidationError> {
    let value = value.into();
    if !value.is_zero() {
        return None;
    }
    let field = field.into();
    Some(
        ValidationError::new(field.clone(), keys::REQUIRED)
            .with_param(params::FIELD, field)
            .with_param(params::VALUE, value.clone())
            .with_current_value(value),
    )
}

// ============================================================================
// TESTS
// ============================================================================
