//! Axum extractor for validated entity payloads
//!
//! The route layer consumes the object validator through `Validated<T>`:
//! the request body is parsed as JSON, validated against the entity schema
//! (full check on POST, id check on PUT/PATCH) and handed to the handler
//! already normalized.

use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value, json};

use crate::core::schema::{EntitySchema, ValidationOptions};

/// Trait linking an entity marker type to its schema
///
/// Implemented by the marker types in [`crate::entities`].
pub trait Validatable {
    /// Get the declarative schema for this entity
    fn schema() -> &'static EntitySchema;
}

/// Axum extractor that validates entity payloads before they reach handlers
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_user(
///     payload: Validated<User>,
/// ) -> Json<Value> {
///     // payload is already validated, with defaults filled in
///     Json(Value::Object(payload.into_inner()))
/// }
/// ```
pub struct Validated<T>(Map<String, Value>, std::marker::PhantomData<T>);

impl<T> Validated<T> {
    /// Wrap an already-normalized payload
    pub fn new(payload: Map<String, Value>) -> Self {
        Self(payload, std::marker::PhantomData)
    }

    /// Get the normalized payload
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl<T> std::ops::Deref for Validated<T> {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: Validatable + Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let method = req.method().clone();

        let Json(payload): Json<Value> = match Json::from_request(req, state).await {
            Ok(json) => json,
            Err(e) => {
                return Err((
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "Invalid JSON",
                        "details": e.to_string()
                    })),
                )
                    .into_response());
            }
        };

        // POST creates a full object; PUT/PATCH edit an existing one
        let opts = match method.as_str() {
            "POST" => ValidationOptions::create(),
            "PUT" | "PATCH" => ValidationOptions::update(),
            _ => ValidationOptions::partial(),
        };

        match T::schema().validate(&payload, opts) {
            Ok(normalized) => Ok(Validated::new(normalized)),
            Err(err) => Err(err.into_response()),
        }
    }
}
