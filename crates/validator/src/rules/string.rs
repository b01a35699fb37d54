//! String rules: email shape and length bounds.
//!
//! Length is measured in Unicode scalar values (chars), not bytes.

use std::borrow::Cow;

use crate::foundation::{ValidationError, keys, params};

// ============================================================================
// EMAIL
// ============================================================================

/// Checks that a string looks like an email address.
///
/// Intentionally shallow: the value must contain both an `@` and a `.`.
/// This is a documented limitation of the rule set, not RFC 5322 parsing.
///
/// # Examples
///
/// ```rust
/// use fieldval::rules::email;
///
/// assert!(email("Email", "test@example.com").is_none());
/// assert!(email("Email", "test.com").is_some());
/// assert!(email("Email", "test@").is_some());
/// ```
pub fn email(field: impl Into<Cow<'static, str>>, value: &str) -> Option<ValidationError> {
    if value.contains('@') && value.contains('.') {
        return None;
    }
    let field = field.into();
    Some(
        ValidationError::new(field.clone(), keys::EMAIL)
            .with_param(params::FIELD, field)
            .with_param(params::VALUE, value)
            .with_current_value(value),
    )
}

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Checks that a string is at least `min` characters long.
///
/// # Examples
///
/// ```rust
/// use fieldval::rules::min_length;
///
/// assert!(min_length("Name", "John", 2).is_none());
/// assert!(min_length("Name", "J", 2).is_some());
/// ```
pub fn min_length(
    field: impl Into<Cow<'static, str>>,
    value: &str,
    min: usize,
) -> Option<ValidationError> {
    if value.chars().count() >= min {
        return None;
    }
    let field = field.into();
    Some(
        ValidationError::new(field.clone(), keys::MIN_LENGTH)
            .with_param(params::FIELD, field)
            .with_param(params::MIN, min as i64)
            .with_param(params::VALUE, value)
            .with_current_value(value),
    )
}

// ============================================================================
// MAX LENGTH
// ============================================================================

/// Checks that a string is at most `max` characters long.
///
/// # Examples
///
/// ```rust
/// use fieldval::rules::max_length;
///
/// assert!(max_length("Title", "short", 100).is_none());
/// assert!(max_length("Title", "toolong", 3).is_some());
/// ```
pub fn max_length(
    field: impl Into<Cow<'static, str>>,
    value: &str,
    max: usize,
) -> Option<ValidationError> {
    if value.chars().count() <= max {
        return None;
    }
    let field = field.into();
    Some(
        ValidationError::new(field.clone(), keys::MAX_LENGTH)
            .with_param(params::FIELD, field)
            .with_param(params::MAX, max as i64)
            .with_param(params::VALUE, value)
            .with_current_value(value),
    )
}

// ============================================================================
// TESTS
// ============================================================================
