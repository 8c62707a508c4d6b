//! Token entity: session tokens issued at login

use std::sync::OnceLock;

use crate::core::convert::{ColumnSpec, RowMapping};
use crate::core::extract::Validatable;
use crate::core::field::FieldDef;
use crate::core::link::LinkDef;
use crate::core::schema::EntitySchema;

/// Marker type for the `Validated<Token>` extractor
pub struct Token;

impl Validatable for Token {
    fn schema() -> &'static EntitySchema {
        schema()
    }
}

pub fn schema() -> &'static EntitySchema {
    static SCHEMA: OnceLock<EntitySchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        EntitySchema::new(
            "token",
            vec![
                FieldDef::string("value").mandatory().length(10, 255),
                FieldDef::datetime("expirationDate").mandatory(),
            ],
            vec![LinkDef::mandatory("userId", "user")],
        )
    })
}

pub fn mapping() -> &'static RowMapping {
    static MAPPING: OnceLock<RowMapping> = OnceLock::new();
    MAPPING.get_or_init(|| {
        RowMapping::new(
            "token",
            vec![
                ColumnSpec::new("value", "value"),
                ColumnSpec::new("expirationDate", "expiration_date"),
                ColumnSpec::new("userId", "fk_user"),
            ],
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{ErrorKind, ValidationError};
    use crate::core::schema::ValidationOptions;
    use serde_json::json;

    #[test]
    fn test_full_token_passes() {
        let candidate = json!({
            "value": "c184ef2a9c804b2e",
            "expirationDate": "2024-06-01T00:00:00Z",
            "userId": 4
        });
        assert!(
            schema()
                .validate(&candidate, ValidationOptions::create())
                .is_ok()
        );
    }

    #[test]
    fn test_expiration_must_be_a_datetime() {
        let err = schema()
            .validate(
                &json!({"expirationDate": "2024-06-01"}),
                ValidationOptions::partial(),
            )
            .expect_err("plain date");
        match err {
            ValidationError::Field(e) => assert_eq!(e.kind, ErrorKind::NotADate),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
