//! Declarative input validation for resource payloads
//!
//! A [`Validator`] turns an arbitrary JSON value into a typed, normalized
//! record or a [`ValidationErrors`] listing every offending field.

mod errors;
mod field;

pub use errors::{FieldError, FieldErrorCode, ValidationErrors};
pub use field::{object_body, StringField};

use serde_json::Value;

/// Shape check for one resource's input
///
/// Implementations must be free of side effects.
pub trait Validator: Send + Sync {
    type Output: Send;

    fn validate(&self, input: &Value) -> Result<Self::Output, ValidationErrors>;
}
