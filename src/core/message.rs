//! Message formatting seam
//!
//! Error messages are localized outside this crate. Validators produce
//! structured descriptors and callers inject a [`MessageFormatter`] to turn
//! them into human-readable text; there is no hidden global fallback, the
//! formatter is always an explicit argument.

use serde_json::{Map, Value};

use crate::core::error::ErrorKind;

/// Turns an error kind plus its parameters into a display string
///
/// The host application typically backs this with its i18n catalog.
pub trait MessageFormatter {
    /// Format one error descriptor
    fn format(&self, kind: ErrorKind, params: &Map<String, Value>) -> String;
}

/// Plain formatter that serializes the kind key and the parameter map
///
/// This is what callers get when they have no i18n layer to plug in.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl MessageFormatter for JsonFormatter {
    fn format(&self, kind: ErrorKind, params: &Map<String, Value>) -> String {
        format!("{} {}", kind.key(), Value::Object(params.clone()))
    }
}
