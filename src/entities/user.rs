//! User entity: account holders of the maintenance application
//!
//! The password column is a secret: it never leaves the conversion layer
//! unless the caller explicitly asks for the unfiltered row (login path).

use serde_json::json;
use std::sync::OnceLock;

use crate::core::convert::{ColumnSpec, RowMapping};
use crate::core::extract::Validatable;
use crate::core::field::FieldDef;
use crate::core::link::LinkDef;
use crate::core::schema::EntitySchema;

/// Marker type for the `Validated<User>` extractor
pub struct User;

impl Validatable for User {
    fn schema() -> &'static EntitySchema {
        schema()
    }
}

/// Declarative schema for the user entity
///
/// `email` is the first mandatory field without a default, so an empty
/// candidate under a full check fails there before anything else.
pub fn schema() -> &'static EntitySchema {
    static SCHEMA: OnceLock<EntitySchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        EntitySchema::new(
            "user",
            vec![
                FieldDef::email("email").mandatory().length(3, 100),
                FieldDef::password("password").mandatory().length(8, 100),
                FieldDef::string("firstname").mandatory().length(1, 50),
                FieldDef::string("lastname").mandatory().length(1, 50),
                FieldDef::string("phone").max_length(20).default_value(json!("")),
                FieldDef::boolean("active").default_value(json!(true)),
                FieldDef::boolean("administrator").default_value(json!(false)),
                FieldDef::boolean("accountLocked").default_value(json!(false)),
                FieldDef::integer("stockRole")
                    .range(0.0, 2.0)
                    .default_value(json!(0)),
                FieldDef::integer("parkRole")
                    .range(0.0, 2.0)
                    .default_value(json!(0)),
                FieldDef::integer("validationCode")
                    .range(0.0, 99999.0)
                    .default_value(json!(10000)),
            ],
            vec![LinkDef::optional("companyId", "company")],
        )
    })
}

/// Row mapping for the `user` table
pub fn mapping() -> &'static RowMapping {
    static MAPPING: OnceLock<RowMapping> = OnceLock::new();
    MAPPING.get_or_init(|| {
        RowMapping::new(
            "user",
            vec![
                ColumnSpec::new("email", "email"),
                ColumnSpec::new("password", "password").secret(),
                ColumnSpec::new("firstname", "firstname"),
                ColumnSpec::new("lastname", "lastname"),
                ColumnSpec::new("phone", "phone"),
                ColumnSpec::bool01("active", "active"),
                ColumnSpec::bool01("administrator", "administrator"),
                ColumnSpec::bool01("accountLocked", "account_locked"),
                ColumnSpec::new("stockRole", "stock_role"),
                ColumnSpec::new("parkRole", "park_role"),
                ColumnSpec::new("validationCode", "validation_code"),
                ColumnSpec::new("companyId", "fk_company"),
            ],
        )
    })
}
