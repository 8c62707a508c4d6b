//! Subscription entity: a company subscribed to an offer over a period

use serde_json::json;
use std::sync::OnceLock;

use crate::core::convert::{ColumnSpec, RowMapping};
use crate::core::extract::Validatable;
use crate::core::field::FieldDef;
use crate::core::link::LinkDef;
use crate::core::schema::EntitySchema;

/// Marker type for the `Validated<Subscription>` extractor
pub struct Subscription;

impl Validatable for Subscription {
    fn schema() -> &'static EntitySchema {
        schema()
    }
}

pub fn schema() -> &'static EntitySchema {
    static SCHEMA: OnceLock<EntitySchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        EntitySchema::new(
            "subscription",
            vec![
                FieldDef::date("startDate").mandatory(),
                FieldDef::date("endDate"),
                FieldDef::boolean("active").default_value(json!(true)),
            ],
            vec![
                LinkDef::mandatory("companyId", "company"),
                LinkDef::mandatory("offerId", "offer"),
            ],
        )
    })
}

pub fn mapping() -> &'static RowMapping {
    static MAPPING: OnceLock<RowMapping> = OnceLock::new();
    MAPPING.get_or_init(|| {
        RowMapping::new(
            "subscription",
            vec![
                ColumnSpec::new("startDate", "start_date"),
                ColumnSpec::new("endDate", "end_date"),
                ColumnSpec::bool01("active", "active"),
                ColumnSpec::new("companyId", "fk_company"),
                ColumnSpec::new("offerId", "fk_offer"),
            ],
        )
    })
}
