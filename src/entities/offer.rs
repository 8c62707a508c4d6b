//! Offer entity: commercial plans a company can subscribe to

use serde_json::json;
use std::sync::OnceLock;

use crate::core::convert::{ColumnSpec, RowMapping};
use crate::core::extract::Validatable;
use crate::core::field::FieldDef;
use crate::core::schema::EntitySchema;

/// Marker type for the `Validated<Offer>` extractor
pub struct Offer;

impl Validatable for Offer {
    fn schema() -> &'static EntitySchema {
        schema()
    }
}

pub fn schema() -> &'static EntitySchema {
    static SCHEMA: OnceLock<EntitySchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        EntitySchema::new(
            "offer",
            vec![
                FieldDef::string("name").mandatory().length(1, 100),
                FieldDef::text("description").max_length(1000),
                FieldDef::price("price").mandatory().range(0.0, 100_000.0),
                FieldDef::integer("maxUnits").mandatory().range(1.0, 10_000.0),
                FieldDef::boolean("active").default_value(json!(true)),
            ],
            vec![],
        )
    })
}

pub fn mapping() -> &'static RowMapping {
    static MAPPING: OnceLock<RowMapping> = OnceLock::new();
    MAPPING.get_or_init(|| {
        RowMapping::new(
            "offer",
            vec![
                ColumnSpec::new("name", "name"),
                ColumnSpec::new("description", "description"),
                ColumnSpec::new("price", "price"),
                ColumnSpec::new("maxUnits", "max_units"),
                ColumnSpec::bool01("active", "active"),
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
    fn test_negative_price_too_small() {
        let err = schema()
            .validate(&json!({"price": -1}), ValidationOptions::partial())
            .expect_err("negative price");
        match err {
            ValidationError::Field(e) => {
                assert_eq!(e.kind, ErrorKind::TooSmall);
                assert_eq!(e.field, "price");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_price_accepts_numeric_string() {
        let result = schema().validate(&json!({"price": "49.90"}), ValidationOptions::partial());
        assert!(result.is_ok());
    }
}
