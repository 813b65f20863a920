//! Request body schemas for the sample endpoints.
//!
//! An [`ObjectSchema`] lists the fields a body may carry and the JSON type each must
//! have. Every listed field is optional; unknown fields, wrong types, `null`s and empty
//! strings are rejected with a message naming the offending field.
//!
//! ```rust
//! use docserve::sample::schema::CREATE_SAMPLE_SCHEMA;
//! use serde_json::json;
//!
//! assert!(CREATE_SAMPLE_SCHEMA.validate(&json!({ "sampleNumber": 1 })).is_ok());
//!
//! let err = CREATE_SAMPLE_SCHEMA
//!     .validate(&json!({ "sampleNumber": "not-a-number" }))
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "\"sampleNumber\" must be a number");
//! ```

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// The JSON type a schema field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Boolean,
    Number,
    String,
}

impl FieldKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::Number => value.is_number(),
            FieldKind::String => value.is_string(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldKind::Boolean => "boolean",
            FieldKind::Number => "number",
            FieldKind::String => "string",
        })
    }
}

/// Errors produced when a request body does not satisfy its schema.
///
/// The display form is the message returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The body is not a JSON object.
    #[error("\"value\" must be of type object")]
    NotAnObject,
    /// The body carries a field the schema does not list.
    #[error("\"{0}\" is not allowed")]
    UnknownField(String),
    /// A field holds a value of the wrong JSON type.
    #[error("\"{field}\" must be a {expected}")]
    TypeMismatch {
        field: String,
        expected: FieldKind,
    },
    /// A string field is empty.
    #[error("\"{0}\" is not allowed to be empty")]
    EmptyString(String),
    /// The body could not be read as JSON at all.
    #[error("{0}")]
    Malformed(String),
}

/// A flat object schema with optional, typed fields.
#[derive(Debug, Clone, Copy)]
pub struct ObjectSchema {
    fields: &'static [(&'static str, FieldKind)],
}

impl ObjectSchema {
    pub const fn new(fields: &'static [(&'static str, FieldKind)]) -> Self {
        Self { fields }
    }

    fn kind_of(&self, name: &str) -> Option<FieldKind> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, kind)| *kind)
    }

    /// Checks `value` against the schema, reporting the first violation found.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let object = value.as_object().ok_or(ValidationError::NotAnObject)?;

        for (name, field_value) in object {
            let expected = self
                .kind_of(name)
                .ok_or_else(|| ValidationError::UnknownField(name.clone()))?;

            if !expected.matches(field_value) {
                return Err(ValidationError::TypeMismatch {
                    field: name.clone(),
                    expected,
                });
            }

            if field_value.as_str() == Some("") {
                return Err(ValidationError::EmptyString(name.clone()));
            }
        }

        Ok(())
    }

    /// Validates `value` and then deserializes it into `T`.
    pub fn parse<T: DeserializeOwned>(&self, value: Value) -> Result<T, ValidationError> {
        self.validate(&value)?;

        serde_json::from_value(value).map_err(|e| ValidationError::Malformed(e.to_string()))
    }
}

const SAMPLE_FIELDS: &[(&str, FieldKind)] = &[
    ("sampleBoolean", FieldKind::Boolean),
    ("sampleNumber", FieldKind::Number),
    ("sampleString", FieldKind::String),
];

/// Body schema for `POST /samples`.
pub const CREATE_SAMPLE_SCHEMA: ObjectSchema = ObjectSchema::new(SAMPLE_FIELDS);

/// Body schema for `PUT /samples/:id`.
pub const UPDATE_SAMPLE_SCHEMA: ObjectSchema = ObjectSchema::new(SAMPLE_FIELDS);
