//! Typed validation errors
//!
//! Validation failure is a normal control-flow outcome: every validator
//! reports errors as return values, never by panicking. All three error
//! categories (structural, field, link) share the single [`ValidationError`]
//! type so callers and the HTTP layer handle them uniformly.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use crate::core::message::MessageFormatter;

/// The kind of a field or link validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The key was never supplied by the caller
    NotDefined,
    /// The value was explicitly null on a mandatory field
    IsNull,
    /// The value has the wrong shape for its declared semantic type
    WrongType,
    /// String shorter than the declared minimum length
    TooShort,
    /// String longer than the declared maximum length
    TooLong,
    /// Number below the declared minimum
    TooSmall,
    /// Number above the declared maximum
    TooLarge,
    /// Pattern or composite rule failure (email format, password strength)
    Malformed,
    /// Date/datetime field whose value does not parse as a date
    NotADate,
}

impl ErrorKind {
    /// Stable snake_case key, used by message formatters and error payloads
    pub fn key(&self) -> &'static str {
        match self {
            ErrorKind::NotDefined => "not_defined",
            ErrorKind::IsNull => "is_null",
            ErrorKind::WrongType => "wrong_type",
            ErrorKind::TooShort => "too_short",
            ErrorKind::TooLong => "too_long",
            ErrorKind::TooSmall => "too_small",
            ErrorKind::TooLarge => "too_large",
            ErrorKind::Malformed => "malformed",
            ErrorKind::NotADate => "not_a_date",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A single field or link validation failure: the `{kind, field, params}`
/// descriptor produced by every validator in this crate
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub field: String,
    pub params: Map<String, Value>,
}

impl FieldError {
    /// Create a descriptor with no extra parameters
    pub fn new(kind: ErrorKind, field: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            params: Map::new(),
        }
    }

    /// Attach an extra parameter (bound values, failing rule names, ...)
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// Parameters including the field name, as handed to formatters
    pub fn full_params(&self) -> Map<String, Value> {
        let mut params = self.params.clone();
        params.insert("field".to_string(), Value::String(self.field.clone()));
        params
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.key(), Value::Object(self.full_params()))
    }
}

/// Why a candidate failed the structural precondition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralReason {
    /// Candidate was JSON null
    Null,
    /// Candidate was some non-object value
    NotAnObject,
}

/// Validation failure returned by field, link and object validators
///
/// Structural errors are always plain English and bypass the injected
/// formatter; field and link errors are rendered through it via
/// [`ValidationError::render`].
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Candidate is not a usable object at all
    Structural {
        entity: &'static str,
        reason: StructuralReason,
    },

    /// A scalar field failed its check
    Field(FieldError),

    /// A foreign-key field failed its check
    Link(FieldError),
}

impl ValidationError {
    /// Render a human-readable message through the given formatter
    ///
    /// Structural errors are exempt and always render as fixed English.
    pub fn render(&self, formatter: &dyn MessageFormatter) -> String {
        match self {
            ValidationError::Structural { .. } => self.to_string(),
            ValidationError::Field(err) | ValidationError::Link(err) => {
                formatter.format(err.kind, &err.full_params())
            }
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ValidationError::Structural { .. } => StatusCode::BAD_REQUEST,
            ValidationError::Field(_) | ValidationError::Link(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::Structural { .. } => "INVALID_OBJECT",
            ValidationError::Field(_) => "INVALID_FIELD",
            ValidationError::Link(_) => "INVALID_LINK",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Structural { entity, reason } => match reason {
                StructuralReason::Null => write!(f, "Object {} is null", entity),
                StructuralReason::NotAnObject => {
                    write!(f, "Object {} is not an object", entity)
                }
            },
            ValidationError::Field(err) | ValidationError::Link(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}
