//! Date rules: strict ordering against a bound.

use std::borrow::Cow;

use chrono::{DateTime, Utc};

use crate::foundation::{ValidationError, keys, params};

// ============================================================================
// DATE GREATER THAN
// ============================================================================

/// Checks that a date is not strictly before `min`.
///
/// A value equal to `min` passes.
///
/// # Examples
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use fieldval::rules::date_greater_than;
///
/// let now = Utc::now();
/// assert!(date_greater_than("FoundAt", now, now).is_none());
/// assert!(date_greater_than("FoundAt", now - Duration::days(1), now).is_some());
/// ```
pub fn date_greater_than(
    field: impl Into<Cow<'static, str>>,
    value: DateTime<Utc>,
    min: DateTime<Utc>,
) -> Option<ValidationError> {
    if value >= min {
        return None;
    }
    let field = field.into();
    Some(
        ValidationError::new(field.clone(), keys::DATE_GREATER_THAN)
            .with_param(params::FIELD, field)
            .with_param(params::MIN, min)
            .with_param(params::VALUE, value)
            .with_current_value(value),
    )
}

// ============================================================================
// DATE LESS THAN
// ============================================================================

/// Checks that a date is not strictly after `max`.
///
/// A value equal to `max` passes.
///
/// # Examples
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use fieldval::rules::date_less_than;
///
/// let now = Utc::now();
/// assert!(date_less_than("FoundAt", now, now).is_none());
/// assert!(date_less_than("FoundAt", now + Duration::days(1), now).is_some());
/// ```
pub fn date_less_than(
    field: impl Into<Cow<'static, str>>,
    value: DateTime<Utc>,
    max: DateTime<Utc>,
) -> Option<ValidationError> {
    if value <= max {
        return None;
    }
    let field = field.into();
    Some(
        ValidationError::new(field.clone(), keys::DATE_LESS_THAN)
            .with_param(params::FIELD, field)
            .with_param(params::MAX, max)
            .with_param(params::VALUE, value)
            .with_current_value(value),
    )
}

// ============================================================================
// TESTS
// ============================================================================
