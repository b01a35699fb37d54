//! Loosely-typed values for rule inputs and message parameters.
//!
//! Rules accept values of several runtime kinds (the Required rule most of
//! all). Instead of reflection or `dyn Any`, the supported kinds are an
//! explicit sum type: anything the rule set does not understand simply is
//! not representable, and the one deliberately permissive case (`Float`)
//! is spelled out below.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, Serializer};

// ============================================================================
// VALUE
// ============================================================================

/// A loosely-typed value attached to a validation error.
///
/// Used both as the raw offending value (`current_value`) and as message
/// parameters consumed by the template renderer.
///
/// # Examples
///
/// ```rust
/// use fieldval::foundation::Value;
///
/// let v: Value = "hello".into();
/// assert!(!v.is_zero());
///
/// let v: Value = 0_i64.into();
/// assert!(v.is_zero());
///
/// let v: Value = Option::<i64>::None.into();
/// assert!(v.is_zero());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string value.
    Str(String),
    /// A signed integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
    /// A date-time value (UTC).
    Date(DateTime<Utc>),
    /// An absent value (`None`, nil, missing).
    Absent,
}

impl Value {
    /// Returns true if this value is the zero value for its kind.
    ///
    /// Zero values: empty string, integer `0`, `false`, the zero date
    /// (`DateTime::<Utc>::UNIX_EPOCH`, chrono's `Default`), and [`Absent`].
    ///
    /// `Float` is never zero: the Required rule does not understand
    /// floating-point emptiness, so it fails open rather than flagging a
    /// violation for a kind outside its vocabulary.
    ///
    /// [`Absent`]: Value::Absent
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Str(s) => s.is_empty(),
            Value::Int(n) => *n == 0,
            Value::Bool(b) => !b,
            Value::Date(d) => *d == DateTime::<Utc>::UNIX_EPOCH,
            Value::Absent => true,
            Value::Float(_) => false,
        }
    }

    /// Renders this value for template substitution.
    ///
    /// Returns `None` for [`Absent`](Value::Absent), which the translator
    /// treats as a rendering failure (it falls back to the raw message key).
    /// Dates render as RFC 3339.
    #[must_use]
    pub fn template_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Str(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Int(n) => Some(Cow::Owned(n.to_string())),
            Value::Float(x) => Some(Cow::Owned(x.to_string())),
            Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Value::Date(d) => Some(Cow::Owned(d.to_rfc3339_opts(SecondsFormat::Secs, true))),
            Value::Absent => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.template_text() {
            Some(text) => f.write_str(&text),
            None => f.write_str("<absent>"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Str(s) => serializer.serialize_str(s),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Date(d) => {
                serializer.serialize_str(&d.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
            Value::Absent => serializer.serialize_none(),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Cow<'static, str>> for Value {
    fn from(value: Cow<'static, str>) -> Self {
        Value::Str(value.into_owned())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::Absent,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
