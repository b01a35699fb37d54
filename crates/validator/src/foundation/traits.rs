//! The `Validatable` capability and the aggregating `Validator`.
//!
//! Any entity participates in validation by exposing exactly one operation:
//! "produce my rule evaluations", an ordered sequence of optional
//! [`ValidationError`]s. Rule composition stays data, not control flow.

use super::error::{ValidationError, ValidationErrors};

// ============================================================================
// VALIDATABLE
// ============================================================================

/// One validation pass worth of rule evaluations, in evaluation order.
///
/// `None` entries are rules that found no violation.
pub type Evaluations = Vec<Option<ValidationError>>;

/// Capability trait for entities that can be validated.
///
/// This is the sole extension point for adding validation logic to a new
/// entity type.
///
/// # Examples
///
/// ```rust
/// use fieldval::prelude::*;
///
/// struct Business {
///     title: String,
///     description: String,
/// }
///
/// impl Validatable for Business {
///     fn validations(&self) -> Evaluations {
///         vec![
///             required("Title", self.title.as_str()),
///             min_length("Title", &self.title, 3),
///             max_length("Title", &self.title, 100),
///             min_length("Description", &self.description, 10),
///         ]
///     }
/// }
/// ```
pub trait Validatable {
    /// Returns the rule evaluations this entity wants checked, in order.
    fn validations(&self) -> Evaluations;
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Aggregates a batch of rule evaluations for one entity into a single
/// outcome.
///
/// The validator holds no state: each [`validate`](Validator::validate) call
/// uses a local accumulator, so one instance is freely shared across passes
/// and threads.
///
/// # Examples
///
/// ```rust
/// use fieldval::prelude::*;
///
/// struct Nothing;
///
/// impl Validatable for Nothing {
///     fn validations(&self) -> Evaluations {
///         Vec::new()
///     }
/// }
///
/// assert!(Validator::new().validate(&Nothing).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Runs the entity's evaluations and aggregates the violations.
    ///
    /// Returns `Ok(())` when every evaluation passed (or the entity supplied
    /// none), `Err` with the violations in evaluation order otherwise.
    ///
    /// Evaluations that are `None`, or that carry an empty message key, are
    /// treated as non-violating and skipped.
    pub fn validate<T: Validatable>(&self, entity: &T) -> Result<(), ValidationErrors> {
        let evaluations = entity.validations();
        if evaluations.is_empty() {
            return Ok(());
        }

        let mut errors = ValidationErrors::new();
        for evaluation in evaluations {
            match evaluation {
                Some(error) if !error.message_key.is_empty() => errors.push(error),
                _ => {}
            }
        }

        errors.into_result(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::keys;

    struct NoRules;

    impl Validatable for NoRules {
        fn validations(&self) -> Evaluations {
            Vec::new()
        }
    }

    struct AllPassing;

    impl Validatable for AllPassing {
        fn validations(&self) -> Evaluations {
            vec![None, None, None]
        }
    }

    struct TwoFailing;

    impl Validatable for TwoFailing {
        fn validations(&self) -> Evaluations {
            vec![
                Some(ValidationError::new("Name", keys::REQUIRED)),
                None,
                Some(ValidationError::new("Email", keys::EMAIL)),
            ]
        }
    }

    struct EmptyKey;

    impl Validatable for EmptyKey {
        fn validations(&self) -> Evaluations {
            vec![Some(ValidationError::new("Name", ""))]
        }
    }

    #[test]
    fn empty_evaluations_pass() {
        assert!(Validator::new().validate(&NoRules).is_ok());
    }

    #[test]
    fn all_passing_evaluations_pass() {
        assert!(Validator::new().validate(&AllPassing).is_ok());
    }

    #[test]
    fn failing_evaluations_are_collected_in_order() {
        let errors = Validator::new().validate(&TwoFailing).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.errors()[0].field, "Name");
        assert_eq!(errors.errors()[1].field, "Email");
    }

    #[test]
    fn empty_message_key_is_filtered() {
        assert!(Validator::new().validate(&EmptyKey).is_ok());
    }

    #[test]
    fn repeated_calls_do_not_accumulate() {
        let validator = Validator::new();
        let first = validator.validate(&TwoFailing).unwrap_err();
        assert_eq!(first.len(), 2);

        // A passing entity on the same instance reports nothing stale.
        assert!(validator.validate(&AllPassing).is_ok());

        let second = validator.validate(&TwoFailing).unwrap_err();
        assert_eq!(second.len(), 2);
    }
}
