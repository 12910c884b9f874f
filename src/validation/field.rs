use serde_json::{Map, Value};

use super::errors::{FieldErrorCode, ValidationErrors};

/// Require the payload to be a JSON object
pub fn object_body(input: &Value) -> Result<&Map<String, Value>, ValidationErrors> {
    input.as_object().ok_or_else(|| {
        ValidationErrors::single(
            "body",
            FieldErrorCode::InvalidType,
            format!("Request body must be a JSON object, got {}", json_type_name(input)),
        )
    })
}

/// Rules for one string field of a JSON object
///
/// Values are trimmed before any length check and lengths are counted in
/// characters. `null` is treated as absent. An optional field that is
/// empty after trimming is normalized to absent.
#[derive(Debug, Clone)]
pub struct StringField {
    name: &'static str,
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    validator: Option<fn(&str) -> Result<(), String>>,
}

impl StringField {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            min_length: None,
            max_length: None,
            validator: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Extra format check run after the length rules pass
    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    /// Read the field from `object`, recording any failure in `errors`
    ///
    /// Returns the normalized value, or `None` when the field is absent or
    /// was rejected.
    pub fn extract(&self, object: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<String> {
        let raw = match object.get(self.name) {
            None | Some(Value::Null) => {
                if self.required {
                    errors.push(self.name, FieldErrorCode::Required, format!("{} is required", self.name));
                }
                return None;
            }
            Some(Value::String(raw)) => raw,
            Some(other) => {
                errors.push(
                    self.name,
                    FieldErrorCode::InvalidType,
                    format!("{} must be a string, got {}", self.name, json_type_name(other)),
                );
                return None;
            }
        };

        let value = raw.trim();
        if value.is_empty() && !self.required {
            return None;
        }

        match self.check(value) {
            Ok(()) => Some(value.to_string()),
            Err((code, message)) => {
                errors.push(self.name, code, message);
                None
            }
        }
    }

    fn check(&self, value: &str) -> Result<(), (FieldErrorCode, String)> {
        let length = value.chars().count();

        if let Some(min_len) = self.min_length {
            if length < min_len {
                return Err((
                    FieldErrorCode::TooShort,
                    format!("{} must be at least {} characters long", self.name, min_len),
                ));
            }
        }

        if let Some(max_len) = self.max_length {
            if length > max_len {
                return Err((
                    FieldErrorCode::TooLong,
                    format!("{} must be at most {} characters long", self.name, max_len),
                ));
            }
        }

        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| (FieldErrorCode::InvalidFormat, reason))?;
        }

        Ok(())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
