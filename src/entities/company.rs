//! Company entity: client organizations holding subscriptions

use serde_json::json;
use std::sync::OnceLock;

use crate::core::convert::{ColumnSpec, RowMapping};
use crate::core::extract::Validatable;
use crate::core::field::FieldDef;
use crate::core::link::LinkDef;
use crate::core::schema::EntitySchema;

/// Marker type for the `Validated<Company>` extractor
pub struct Company;

impl Validatable for Company {
    fn schema() -> &'static EntitySchema {
        schema()
    }
}

pub fn schema() -> &'static EntitySchema {
    static SCHEMA: OnceLock<EntitySchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        EntitySchema::new(
            "company",
            vec![
                FieldDef::string("name").mandatory().length(1, 100),
                FieldDef::text("address").max_length(255).default_value(json!("")),
                FieldDef::string("zipCode").max_length(10).default_value(json!("")),
                FieldDef::string("city").max_length(100).default_value(json!("")),
                FieldDef::string("country").max_length(100).default_value(json!("")),
                FieldDef::image("logo").max_length(255),
            ],
            vec![LinkDef::optional("managerId", "user")],
        )
    })
}

pub fn mapping() -> &'static RowMapping {
    static MAPPING: OnceLock<RowMapping> = OnceLock::new();
    MAPPING.get_or_init(|| {
        RowMapping::new(
            "company",
            vec![
                ColumnSpec::new("name", "name"),
                ColumnSpec::new("address", "address"),
                ColumnSpec::new("zipCode", "zip_code"),
                ColumnSpec::new("city", "city"),
                ColumnSpec::new("country", "country"),
                ColumnSpec::new("logo", "logo"),
                ColumnSpec::new("managerId", "fk_manager"),
            ],
        )
    })
}
