//! Link declarations and foreign-key validation
//!
//! A [`LinkDef`] declares one foreign-key-shaped property: the identifier of
//! another entity, either always required or nullable per the relationship.

use serde_json::Value;

use crate::core::error::{ErrorKind, FieldError};
use crate::core::field::coerce_number;

/// Declaration of one foreign-key field (e.g. `companyId` -> company)
#[derive(Debug, Clone)]
pub struct LinkDef {
    /// Application-side field name, e.g. `managerId`
    pub name: &'static str,
    /// Target entity name, e.g. `user`
    pub target: &'static str,
    pub mandatory: bool,
}

impl LinkDef {
    pub fn mandatory(name: &'static str, target: &'static str) -> Self {
        Self {
            name,
            target,
            mandatory: true,
        }
    }

    pub fn optional(name: &'static str, target: &'static str) -> Self {
        Self {
            name,
            target,
            mandatory: false,
        }
    }

    /// Validate one candidate foreign-key value
    ///
    /// Same absence semantics as scalar fields: a missing key is an error,
    /// null passes only when the relationship is optional. Present values
    /// must be numeric-coercible identifiers.
    pub fn check(&self, value: Option<&Value>) -> Result<(), FieldError> {
        let Some(value) = value else {
            return Err(
                FieldError::new(ErrorKind::NotDefined, self.name).with("target", self.target)
            );
        };

        if value.is_null() {
            if self.mandatory {
                return Err(
                    FieldError::new(ErrorKind::IsNull, self.name).with("target", self.target)
                );
            }
            return Ok(());
        }

        if coerce_number(value).is_some() {
            Ok(())
        } else {
            Err(FieldError::new(ErrorKind::WrongType, self.name)
                .with("target", self.target)
                .with("expected", "number"))
        }
    }
}
