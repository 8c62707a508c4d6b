//! Unit entity: a maintained site belonging to a company

use serde_json::json;
use std::sync::OnceLock;

use crate::core::convert::{ColumnSpec, RowMapping};
use crate::core::extract::Validatable;
use crate::core::field::FieldDef;
use crate::core::link::LinkDef;
use crate::core::schema::EntitySchema;

/// Marker type for the `Validated<Unit>` extractor
pub struct Unit;

impl Validatable for Unit {
    fn schema() -> &'static EntitySchema {
        schema()
    }
}

pub fn schema() -> &'static EntitySchema {
    static SCHEMA: OnceLock<EntitySchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        EntitySchema::new(
            "unit",
            vec![
                FieldDef::string("name").mandatory().length(1, 100),
                FieldDef::text("description").max_length(1000),
                FieldDef::text("address").max_length(255).default_value(json!("")),
                FieldDef::string("zipCode").max_length(10).default_value(json!("")),
                FieldDef::string("city").max_length(100).default_value(json!("")),
                FieldDef::string("country").max_length(100).default_value(json!("")),
                FieldDef::boolean("locked").default_value(json!(false)),
            ],
            vec![
                LinkDef::mandatory("companyId", "company"),
                LinkDef::optional("managerId", "user"),
            ],
        )
    })
}

pub fn mapping() -> &'static RowMapping {
    static MAPPING: OnceLock<RowMapping> = OnceLock::new();
    MAPPING.get_or_init(|| {
        RowMapping::new(
            "unit",
            vec![
                ColumnSpec::new("name", "name"),
                ColumnSpec::new("description", "description"),
                ColumnSpec::new("address", "address"),
                ColumnSpec::new("zipCode", "zip_code"),
                ColumnSpec::new("city", "city"),
                ColumnSpec::new("country", "country"),
                ColumnSpec::bool01("locked", "locked"),
                ColumnSpec::new("companyId", "fk_company"),
                ColumnSpec::new("managerId", "fk_manager"),
            ],
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::ValidationOptions;
    use serde_json::json;

    #[test]
    fn test_locked_defaults_to_false() {
        let normalized = schema()
            .validate(&json!({"name": "Depot 12"}), ValidationOptions::partial())
            .expect("valid candidate");
        assert_eq!(normalized.get("locked"), Some(&json!(false)));
    }

    #[test]
    fn test_full_check_requires_company_but_not_manager() {
        let candidate = json!({
            "name": "Depot 12",
            "description": null,
            "companyId": 3
        });
        assert!(
            schema()
                .validate(&candidate, ValidationOptions::create())
                .is_ok()
        );
    }
}
