// Parameter validation shared by connector actions

use crate::error::{ActionError, Result};
use serde_json::Value;

/// Validation capability handed to actions.
pub trait ParameterValidator: Send + Sync {
    /// Check `raw` against `allowed` and return the canonical option.
    fn validate_dropdown(&self, raw: &str, field: &str, allowed: &[&str]) -> Result<String>;

    /// Coerce a boolean-like value to 0 or 1.
    fn validate_flag(&self, raw: &Value, field: &str) -> Result<u8>;
}

/// Default validator: case-insensitive dropdowns, lenient boolean flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl ParameterValidator for Validator {
    fn validate_dropdown(&self, raw: &str, field: &str, allowed: &[&str]) -> Result<String> {
        let candidate = raw.trim();
        allowed
            .iter()
            .find(|option| option.eq_ignore_ascii_case(candidate))
            .map(|option| option.to_string())
            .ok_or_else(|| ActionError::InvalidParameter {
                field: field.to_string(),
                allowed: allowed.join(", "),
            })
    }

    fn validate_flag(&self, raw: &Value, field: &str) -> Result<u8> {
        let flag = match raw {
            Value::Bool(b) => Some(u8::from(*b)),
            Value::Number(n) => match n.as_u64() {
                Some(0) => Some(0),
                Some(1) => Some(1),
                _ => None,
            },
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "0" | "false" => Some(0),
                "1" | "true" => Some(1),
                _ => None,
            },
            _ => None,
        };

        flag.ok_or_else(|| ActionError::MalformedParameter {
            field: field.to_string(),
            value: match raw {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        })
    }
}
