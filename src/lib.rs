//! # Upkeep
//!
//! Declarative entity validation and row/object conversion for a
//! maintenance-management REST API.
//!
//! ## Features
//!
//! - **Schema-Driven Validation**: one generic object validator consumes a
//!   per-entity declaration of fields, links, bounds and defaults
//! - **Three Absence States**: a missing key, an explicit null and a
//!   malformed value are distinct, reported with distinct error kinds
//! - **Normalizing Validation**: defaults are filled into a returned copy,
//!   the caller's candidate is never mutated
//! - **Pluggable Messages**: errors are structured descriptors rendered
//!   through an injected formatter (i18n stays outside the crate)
//! - **Row Conversion**: storage snake_case/`fk_` columns and 0/1 booleans
//!   map to camelCase application objects, with secret redaction
//! - **Axum Integration**: the `Validated<T>` extractor validates request
//!   bodies before they reach handlers
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use upkeep::entities::user;
//! use upkeep::core::ValidationOptions;
//!
//! let candidate = json!({
//!     "email": "jane@example.com",
//!     "password": "Aa1!aaaa",
//!     "firstname": "Jane",
//!     "lastname": "Doe"
//! });
//!
//! let normalized = user::schema()
//!     .validate(&candidate, ValidationOptions::partial())
//!     .expect("valid user");
//! assert_eq!(normalized.get("active"), Some(&json!(true)));
//! ```

pub mod core;
pub mod entities;

/// Re-exports of commonly used types and traits
pub mod prelude {
    pub use crate::core::{
        convert::{Coercion, ColumnSpec, RowMapping},
        error::{ErrorKind, FieldError, StructuralReason, ValidationError},
        extract::{Validatable, Validated},
        field::{FieldDef, FieldKind},
        link::LinkDef,
        message::{JsonFormatter, MessageFormatter},
        schema::{EntitySchema, ValidationOptions},
    };

    pub use crate::entities::{Company, Offer, Subscription, Token, Unit, User};

    // === External dependencies ===
    pub use serde_json::{Map, Value, json};
}
