//! Parameter-name constants referenced by message templates.
//!
//! This is the whole placeholder vocabulary: templates substitute
//! `{{Field}}`, `{{Min}}`, `{{Max}}`, and `{{Value}}`. Placeholder names
//! must match the parameter keys attached to each
//! [`ValidationError`](super::ValidationError) exactly.

/// The checked field's identifier.
pub const FIELD: &str = "Field";

/// The lower bound of a rule, where one exists.
pub const MIN: &str = "Min";

/// The upper bound of a rule, where one exists.
pub const MAX: &str = "Max";

/// The stringified offending value.
pub const VALUE: &str = "Value";
