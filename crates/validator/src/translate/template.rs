//! Parsed message templates with named placeholders.
//!
//! Templates use `{{Name}}` placeholder syntax, where `Name` is one of the
//! parameter names in [`params`](crate::foundation::params). Parsing is
//! fail-fast: a malformed template is a configuration error and is rejected
//! at translator construction, never discovered at translation time.

use thiserror::Error;

use crate::foundation::Params;

// ============================================================================
// TEMPLATE ERROR
// ============================================================================

/// A malformed template source string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A `{{` with no matching `}}`.
    #[error("unclosed placeholder opened at byte {0}")]
    UnclosedPlaceholder(usize),

    /// A `{{}}` (or whitespace-only) placeholder.
    #[error("empty placeholder at byte {0}")]
    EmptyPlaceholder(usize),
}

// ============================================================================
// TEMPLATE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A message template parsed into a renderable form.
///
/// # Examples
///
/// ```rust
/// use fieldval::translate::Template;
///
/// assert!(Template::parse("{{Field}} is required").is_ok());
/// assert!(Template::parse("{{Field plain text").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parses a template source string.
    ///
    /// Single braces and stray `}}` are literal text; only an opened-but-
    /// unclosed or empty `{{…}}` placeholder is an error.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(open) = rest.find("{{") {
            literal.push_str(&rest[..open]);
            let after = &rest[open + 2..];
            let Some(close) = after.find("}}") else {
                return Err(TemplateError::UnclosedPlaceholder(offset + open));
            };
            let name = after[..close].trim();
            if name.is_empty() {
                return Err(TemplateError::EmptyPlaceholder(offset + open));
            }
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Placeholder(name.to_owned()));

            let consumed = open + 2 + close + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Renders the template against a parameter mapping.
    ///
    /// Returns `None` when a referenced parameter is missing from the
    /// mapping or cannot be stringified; the caller decides the fallback.
    #[must_use]
    pub fn render(&self, params: &Params) -> Option<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let (_, value) = params.iter().find(|(k, _)| k.as_ref() == name)?;
                    out.push_str(&value.template_text()?);
                }
            }
        }
        Some(out)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Value, params};
    use smallvec::smallvec;

    fn field_params() -> Params {
        smallvec![
            (params::FIELD.into(), Value::Str("Name".into())),
            (params::MIN.into(), Value::Int(3)),
        ]
    }

    #[test]
    fn literal_only() {
        let template = Template::parse("plain text").unwrap();
        assert_eq!(template.render(&Params::new()).as_deref(), Some("plain text"));
    }

    #[test]
    fn single_placeholder() {
        let template = Template::parse("{{Field}} is required").unwrap();
        assert_eq!(
            template.render(&field_params()).as_deref(),
            Some("Name is required")
        );
    }

    #[test]
    fn multiple_placeholders() {
        let template = Template::parse("{{Field}} needs {{Min}} chars").unwrap();
        assert_eq!(
            template.render(&field_params()).as_deref(),
            Some("Name needs 3 chars")
        );
    }

    #[test]
    fn adjacent_placeholders() {
        let template = Template::parse("{{Field}}{{Min}}").unwrap();
        assert_eq!(template.render(&field_params()).as_deref(), Some("Name3"));
    }

    #[test]
    fn whitespace_inside_placeholder_is_trimmed() {
        let template = Template::parse("{{ Field }}").unwrap();
        assert_eq!(template.render(&field_params()).as_deref(), Some("Name"));
    }

    #[test]
    fn missing_param_fails_render() {
        let template = Template::parse("{{Max}}").unwrap();
        assert_eq!(template.render(&field_params()), None);
    }

    #[test]
    fn absent_param_fails_render() {
        let template = Template::parse("{{Value}}").unwrap();
        let params: Params = smallvec![(params::VALUE.into(), Value::Absent)];
        assert_eq!(template.render(&params), None);
    }

    #[test]
    fn unclosed_placeholder_is_rejected() {
        assert_eq!(
            Template::parse("oops {{Field"),
            Err(TemplateError::UnclosedPlaceholder(5))
        );
    }

    #[test]
    fn empty_placeholder_is_rejected() {
        assert_eq!(
            Template::parse("{{}}"),
            Err(TemplateError::EmptyPlaceholder(0))
        );
        assert_eq!(
            Template::parse("{{  }}"),
            Err(TemplateError::EmptyPlaceholder(0))
        );
    }

    #[test]
    fn single_braces_are_literal() {
        let template = Template::parse("a { b } c }} d").unwrap();
        assert_eq!(
            template.render(&Params::new()).as_deref(),
            Some("a { b } c }} d")
        );
    }

    #[test]
    fn empty_source() {
        let template = Template::parse("").unwrap();
        assert_eq!(template.render(&Params::new()).as_deref(), Some(""));
    }
}
