//! Simple placeholder substitution renderer.
//!
//! Placeholders are `{{ Key }}` or `{{ Key.Sub }}`, whitespace inside the
//! braces optional and a leading `.` accepted (`{{ .Key }}`). Keys are looked
//! up in the data object; nested keys walk into child objects.

use serde_json::Value;
use thiserror::Error;
use tracing::{instrument, trace};

use stackplan_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    error::StackplanResult,
};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Why a placeholder could not be substituted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaceholderError {
    #[error("unterminated placeholder at byte {offset}")]
    Unterminated { offset: usize },

    #[error("empty placeholder at byte {offset}")]
    Empty { offset: usize },

    #[error("unknown key '{key}'")]
    UnknownKey { key: String },

    #[error("key '{key}' is not a scalar value")]
    NotScalar { key: String },
}

/// Simple renderer using basic placeholder substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }

    /// Substitute every placeholder in `template` from `data`.
    pub fn substitute(template: &str, data: &Value) -> Result<String, PlaceholderError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            let inner_start = start + OPEN.len();
            let len = rest[inner_start..]
                .find(CLOSE)
                .ok_or(PlaceholderError::Unterminated {
                    offset: offset + start,
                })?;

            let key = rest[inner_start..inner_start + len].trim();
            let key = key.strip_prefix('.').unwrap_or(key);
            if key.is_empty() {
                return Err(PlaceholderError::Empty {
                    offset: offset + start,
                });
            }
            out.push_str(&lookup(data, key)?);

            let consumed = inner_start + len + CLOSE.len();
            offset += consumed;
            rest = &rest[consumed..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip(self, template, data))]
    fn render(&self, name: &str, template: &str, data: &Value) -> StackplanResult<String> {
        let rendered = Self::substitute(template, data).map_err(|e| {
            ApplicationError::RenderingFailed {
                template: name.to_string(),
                reason: e.to_string(),
            }
        })?;
        trace!(bytes = rendered.len(), "Template rendered");
        Ok(rendered)
    }
}

fn lookup(data: &Value, key: &str) -> Result<String, PlaceholderError> {
    let unknown = || PlaceholderError::UnknownKey {
        key: key.to_string(),
    };
    let value = key
        .split('.')
        .try_fold(data, |node, part| node.get(part))
        .ok_or_else(unknown)?;

    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(PlaceholderError::NotScalar {
            key: key.to_string(),
        }),
    }
}
