//! Message-key constants for the built-in rules.
//!
//! Message keys are stable, machine-readable identifiers of violation kinds.
//! They double as translation lookup keys and as the fallback rendered text
//! when no template matches, so they must stay free-standing strings
//! independent of any particular template registry.

/// A required field carried its zero value.
pub const REQUIRED: &str = "validation.required";

/// A string did not look like an email address.
pub const EMAIL: &str = "validation.email";

/// A string was shorter than the minimum length.
pub const MIN_LENGTH: &str = "validation.min_length";

/// A string was longer than the maximum length.
pub const MAX_LENGTH: &str = "validation.max_length";

/// An integer fell outside a closed range.
pub const BETWEEN: &str = "validation.between";

/// A date was strictly before the required minimum.
pub const DATE_GREATER_THAN: &str = "validation.date_greater_than";

/// A date was strictly after the required maximum.
pub const DATE_LESS_THAN: &str = "validation.date_less_than";
