//! Core validation and conversion primitives

pub mod convert;
pub mod error;
pub mod extract;
pub mod field;
pub mod link;
pub mod message;
pub mod schema;

pub use convert::{Coercion, ColumnSpec, RowMapping};
pub use error::{ErrorKind, ErrorResponse, FieldError, StructuralReason, ValidationError};
pub use extract::{Validatable, Validated};
pub use field::{FieldDef, FieldKind};
pub use link::LinkDef;
pub use message::{JsonFormatter, MessageFormatter};
pub use schema::{EntitySchema, ValidationOptions};
