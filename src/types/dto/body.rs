use std::borrow::Cow;
use std::marker::PhantomData;

use poem_openapi::registry::{MetaSchemaRef, Registry};
use poem_openapi::types::{ParseFromJSON, ParseResult, Type};
use serde_json::Value;

/// Request body documented as `S` but parsed as raw JSON
///
/// The OpenAPI document advertises the schema of `S`, while any JSON value
/// is accepted here so the resource validator can report every field error
/// in the standard validation body.
pub struct DocumentedBody<S> {
    value: Value,
    _schema: PhantomData<fn() -> S>,
}

impl<S> DocumentedBody<S> {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            _schema: PhantomData,
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl<S: Type> Type for DocumentedBody<S> {
    const IS_REQUIRED: bool = true;

    type RawValueType = Value;

    type RawElementValueType = Value;

    fn name() -> Cow<'static, str> {
        S::name()
    }

    fn schema_ref() -> MetaSchemaRef {
        S::schema_ref()
    }

    fn register(registry: &mut Registry) {
        S::register(registry);
    }

    fn as_raw_value(&self) -> Option<&Self::RawValueType> {
        Some(&self.value)
    }

    fn raw_element_iter<'a>(
        &'a self,
    ) -> Box<dyn Iterator<Item = &'a Self::RawElementValueType> + 'a> {
        Box::new(self.as_raw_value().into_iter())
    }
}

impl<S: Type> ParseFromJSON for DocumentedBody<S> {
    fn parse_from_json(value: Option<Value>) -> ParseResult<Self> {
        Ok(Self::new(value.unwrap_or(Value::Null)))
    }
}
