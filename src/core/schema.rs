//! Entity schemas and the object validator
//!
//! An [`EntitySchema`] is the declarative description of one entity: its
//! scalar fields and its foreign-key links, in validation order. The object
//! validator walks the declaration, fills in defaults, and stops at the
//! first failing check.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::core::error::{StructuralReason, ValidationError};
use crate::core::field::FieldDef;
use crate::core::link::LinkDef;

/// Validation mode flags
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationOptions {
    /// Validate every declared field even when absent (full-object creation)
    pub full_check: bool,
    /// Validate the `id` field first (edit of an existing record)
    pub check_id: bool,
}

impl ValidationOptions {
    /// Partial mode: only supplied fields are checked
    pub const fn partial() -> Self {
        Self {
            full_check: false,
            check_id: false,
        }
    }

    /// Creation mode: every field must pass, storage assigns the id
    pub const fn create() -> Self {
        Self {
            full_check: true,
            check_id: false,
        }
    }

    /// Update mode: only supplied fields are checked, id is required
    pub const fn update() -> Self {
        Self {
            full_check: false,
            check_id: true,
        }
    }
}

/// Declarative schema for one entity type
///
/// Declaration order is validation order; the first failing check wins.
#[derive(Debug, Clone)]
pub struct EntitySchema {
    /// Entity name used in structural error messages, e.g. `user`
    pub name: &'static str,
    pub fields: Vec<FieldDef>,
    pub links: Vec<LinkDef>,
}

impl EntitySchema {
    pub fn new(name: &'static str, fields: Vec<FieldDef>, links: Vec<LinkDef>) -> Self {
        Self {
            name,
            fields,
            links,
        }
    }

    /// Validate a candidate object and return its normalized copy
    ///
    /// The candidate itself is never mutated: defaults for absent fields are
    /// filled into the returned copy. Checks run in declaration order and
    /// short-circuit on the first error.
    ///
    /// Fields are checked when supplied, or unconditionally under
    /// `full_check`. Links are checked when supplied; mandatory links are
    /// additionally checked under `full_check`.
    pub fn validate(
        &self,
        candidate: &Value,
        opts: ValidationOptions,
    ) -> Result<Map<String, Value>, ValidationError> {
        let Some(object) = candidate.as_object() else {
            let reason = if candidate.is_null() {
                StructuralReason::Null
            } else {
                StructuralReason::NotAnObject
            };
            debug!(entity = self.name, ?reason, "candidate is not an object");
            return Err(ValidationError::Structural {
                entity: self.name,
                reason,
            });
        };

        let mut normalized = object.clone();
        match self.run_checks(&mut normalized, opts) {
            Ok(()) => {
                trace!(entity = self.name, "validation passed");
                Ok(normalized)
            }
            Err(err) => {
                debug!(entity = self.name, error = %err, "validation failed");
                Err(err)
            }
        }
    }

    fn run_checks(
        &self,
        normalized: &mut Map<String, Value>,
        opts: ValidationOptions,
    ) -> Result<(), ValidationError> {
        if opts.check_id {
            let id = FieldDef::integer("id").mandatory();
            id.check(normalized.get("id"))
                .map_err(ValidationError::Field)?;
        }

        for field in &self.fields {
            if !normalized.contains_key(field.name) {
                if let Some(default) = &field.default {
                    normalized.insert(field.name.to_string(), default.clone());
                }
            }
            let value = normalized.get(field.name);
            if value.is_some() || opts.full_check {
                field.check(value).map_err(ValidationError::Field)?;
            }
        }

        for link in &self.links {
            let value = normalized.get(link.name);
            if value.is_some() || (opts.full_check && link.mandatory) {
                link.check(value).map_err(ValidationError::Link)?;
            }
        }

        Ok(())
    }
}
