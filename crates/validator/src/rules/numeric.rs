//! Numeric rules: closed-range membership.

use std::borrow::Cow;

use crate::foundation::{ValidationError, keys, params};

// ============================================================================
// BETWEEN
// ============================================================================

/// Checks that an integer lies within the closed range `[min, max]`.
///
/// Both bounds are valid values.
///
/// # Examples
///
/// ```rust
/// use fieldval::rules::between;
///
/// assert!(between("Age", 18, 18, 100).is_none());
/// assert!(between("Age", 100, 18, 100).is_none());
/// assert!(between("Age", 17, 18, 100).is_some());
/// assert!(between("Age", 101, 18, 100).is_some());
/// ```
pub fn between(
    field: impl Into<Cow<'static, str>>,
    value: i64,
    min: i64,
    max: i64,
) -> Option<ValidationError> {
    if value >= min && value <= max {
        return None;
    }
    let field = field.into();
    Some(
        ValidationError::new(field.clone(), keys::BETWEEN)
            .with_param(params::FIELD, field)
            .with_param(params::MIN, min)
            .with_param(params::MAX, max)
            .with_param(params::VALUE, value)
            .with_current_value(value),
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Value;

    #[test]
    fn inside_range_passes() {
        assert!(between("age", 25, 18, 100).is_none());
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert!(between("age", 18, 18, 100).is_none());
        assert!(between("age", 100, 18, 100).is_none());
    }

    #[test]
    fn outside_range_fails() {
        assert!(between("age", 17, 18, 100).is_some());
        assert!(between("age", 101, 18, 100).is_some());
    }

    #[test]
    fn negative_values() {
        assert!(between("offset", -5, -10, 10).is_none());
        assert!(between("offset", -11, -10, 10).is_some());
    }

    #[test]
    fn params_carry_both_bounds() {
        let error = between("age", 17, 18, 100).unwrap();
        assert_eq!(error.message_key, keys::BETWEEN);
        assert_eq!(error.param(params::MIN), Some(&Value::Int(18)));
        assert_eq!(error.param(params::MAX), Some(&Value::Int(100)));
        assert_eq!(error.param(params::VALUE), Some(&Value::Int(17)));
        assert_eq!(error.current_value, Value::Int(17));
    }
}
