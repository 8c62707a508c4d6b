//! Field declarations and per-field validation
//!
//! A [`FieldDef`] declares one scalar property of an entity: its semantic
//! type, mandatoriness, bounds and optional default. Checks run in a fixed
//! order: undefined, null, type, minimum, maximum, then type-specific
//! pattern rules (email format, password strength).

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

use crate::core::error::{ErrorKind, FieldError};

/// Semantic type of a scalar entity field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Short string, length-bounded
    String,
    /// Long free-form string
    Text,
    /// String with a permissive `local@domain.tld` pattern check
    Email,
    /// String with composite strength rules
    Password,
    Boolean,
    Integer,
    /// Monetary amount, range-bounded
    Price,
    /// Calendar date, `YYYY-MM-DD`
    Date,
    /// RFC 3339 timestamp
    DateTime,
    /// Stored image reference (path or URL)
    Image,
}

/// Declaration of one entity field
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
    pub mandatory: bool,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Value inserted by the object validator when the field is absent
    pub default: Option<Value>,
}

impl FieldDef {
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            mandatory: false,
            min_len: None,
            max_len: None,
            min: None,
            max: None,
            default: None,
        }
    }

    pub fn string(name: &'static str) -> Self {
        Self::new(name, FieldKind::String)
    }

    pub fn text(name: &'static str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn email(name: &'static str) -> Self {
        Self::new(name, FieldKind::Email)
    }

    pub fn password(name: &'static str) -> Self {
        Self::new(name, FieldKind::Password)
    }

    pub fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    pub fn integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    pub fn price(name: &'static str) -> Self {
        Self::new(name, FieldKind::Price)
    }

    pub fn date(name: &'static str) -> Self {
        Self::new(name, FieldKind::Date)
    }

    pub fn datetime(name: &'static str) -> Self {
        Self::new(name, FieldKind::DateTime)
    }

    pub fn image(name: &'static str) -> Self {
        Self::new(name, FieldKind::Image)
    }

    /// Mark the field as mandatory: null is rejected
    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    /// Declare both length bounds
    pub fn length(mut self, min: usize, max: usize) -> Self {
        self.min_len = Some(min);
        self.max_len = Some(max);
        self
    }

    /// Declare only a maximum length
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_len = Some(max);
        self
    }

    /// Declare both numeric bounds
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Declare the value the object validator inserts when the field is absent
    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Validate one candidate value for this field
    ///
    /// `None` means the key was never supplied, which is an error even for
    /// optional fields: callers must pass the key, possibly set to null.
    /// Null passes for optional fields without any further type checks.
    pub fn check(&self, value: Option<&Value>) -> Result<(), FieldError> {
        let Some(value) = value else {
            return Err(FieldError::new(ErrorKind::NotDefined, self.name));
        };

        if value.is_null() {
            if self.mandatory {
                return Err(FieldError::new(ErrorKind::IsNull, self.name));
            }
            return Ok(());
        }

        match self.kind {
            FieldKind::String | FieldKind::Text | FieldKind::Image => self.check_string(value),
            FieldKind::Email => {
                self.check_string(value)?;
                self.check_email_pattern(value)
            }
            FieldKind::Password => {
                self.check_string(value)?;
                self.check_password_strength(value)
            }
            FieldKind::Boolean => self.check_boolean(value),
            FieldKind::Integer | FieldKind::Price => self.check_number(value),
            FieldKind::Date => self.check_date(value),
            FieldKind::DateTime => self.check_datetime(value),
        }
    }

    fn check_string(&self, value: &Value) -> Result<(), FieldError> {
        let Some(s) = value.as_str() else {
            return Err(
                FieldError::new(ErrorKind::WrongType, self.name).with("expected", "string")
            );
        };

        // Bounds count characters, not UTF-8 bytes
        let length = s.chars().count();
        if let Some(min) = self.min_len {
            if length < min {
                return Err(FieldError::new(ErrorKind::TooShort, self.name)
                    .with("min", min)
                    .with("length", length));
            }
        }
        if let Some(max) = self.max_len {
            if length > max {
                return Err(FieldError::new(ErrorKind::TooLong, self.name)
                    .with("max", max)
                    .with("length", length));
            }
        }
        Ok(())
    }

    fn check_email_pattern(&self, value: &Value) -> Result<(), FieldError> {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX
            .get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email regex is valid"));

        // check_string already established this is a string
        let s = value.as_str().unwrap_or_default();
        if regex.is_match(s) {
            Ok(())
        } else {
            Err(FieldError::new(ErrorKind::Malformed, self.name).with("expected", "email"))
        }
    }

    fn check_password_strength(&self, value: &Value) -> Result<(), FieldError> {
        let s = value.as_str().unwrap_or_default();

        // Rules are evaluated in fixed order; the first failure is reported
        let rules: [(&str, fn(char) -> bool); 4] = [
            ("lowercase", |c| c.is_ascii_lowercase()),
            ("uppercase", |c| c.is_ascii_uppercase()),
            ("digit", |c| c.is_ascii_digit()),
            ("special", |c| !c.is_ascii_alphanumeric()),
        ];
        for (rule, predicate) in rules {
            if !s.chars().any(predicate) {
                return Err(FieldError::new(ErrorKind::Malformed, self.name).with("rule", rule));
            }
        }
        Ok(())
    }

    fn check_boolean(&self, value: &Value) -> Result<(), FieldError> {
        if value.is_boolean() {
            Ok(())
        } else {
            Err(FieldError::new(ErrorKind::WrongType, self.name).with("expected", "boolean"))
        }
    }

    fn check_number(&self, value: &Value) -> Result<(), FieldError> {
        let Some(number) = coerce_number(value) else {
            return Err(
                FieldError::new(ErrorKind::WrongType, self.name).with("expected", "number")
            );
        };

        if let Some(min) = self.min {
            if number < min {
                return Err(FieldError::new(ErrorKind::TooSmall, self.name)
                    .with("min", min)
                    .with("value", number));
            }
        }
        if let Some(max) = self.max {
            if number > max {
                return Err(FieldError::new(ErrorKind::TooLarge, self.name)
                    .with("max", max)
                    .with("value", number));
            }
        }
        Ok(())
    }

    fn check_date(&self, value: &Value) -> Result<(), FieldError> {
        let parsed = value
            .as_str()
            .and_then(|s| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
        if parsed.is_some() {
            Ok(())
        } else {
            Err(FieldError::new(ErrorKind::NotADate, self.name).with("expected", "date"))
        }
    }

    fn check_datetime(&self, value: &Value) -> Result<(), FieldError> {
        let parsed = value
            .as_str()
            .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok());
        if parsed.is_some() {
            Ok(())
        } else {
            Err(FieldError::new(ErrorKind::NotADate, self.name).with("expected", "datetime"))
        }
    }
}

/// Numeric-coercion semantics: JSON numbers pass through, and strings that
/// parse as a number are accepted too (numeric strings are valid input).
/// Shared with the link validator so identifiers coerce the same way.
pub(crate) fn coerce_number(value: &Value) -> Option<f64> {
    if let Some(n) = value.as_f64() {
        return Some(n);
    }
    value.as_str().and_then(|s| s.trim().parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kind_of(result: Result<(), FieldError>) -> ErrorKind {
        result.expect_err("expected a field error").kind
    }

    // === absence states ===

    #[test]
    fn test_undefined_is_error_for_mandatory_field() {
        let field = FieldDef::string("name").mandatory();
        assert_eq!(kind_of(field.check(None)), ErrorKind::NotDefined);
    }

    #[test]
    fn test_undefined_is_error_for_optional_field_too() {
        let field = FieldDef::string("phone");
        assert_eq!(kind_of(field.check(None)), ErrorKind::NotDefined);
    }

    #[test]
    fn test_null_is_error_for_mandatory_field() {
        let field = FieldDef::string("name").mandatory();
        assert_eq!(kind_of(field.check(Some(&json!(null)))), ErrorKind::IsNull);
    }

    #[test]
    fn test_null_passes_for_optional_field() {
        let field = FieldDef::string("phone").length(5, 20);
        // null short-circuits before any type or bound check
        assert!(field.check(Some(&json!(null))).is_ok());
    }

    // === string bounds ===

    #[test]
    fn test_string_wrong_type() {
        let field = FieldDef::string("name").mandatory();
        assert_eq!(kind_of(field.check(Some(&json!(42)))), ErrorKind::WrongType);
    }

    #[test]
    fn test_string_too_short() {
        let field = FieldDef::string("name").length(3, 10);
        let err = field.check(Some(&json!("ab"))).expect_err("too short");
        assert_eq!(err.kind, ErrorKind::TooShort);
        assert_eq!(err.params.get("min"), Some(&json!(3)));
        assert_eq!(err.params.get("length"), Some(&json!(2)));
    }

    #[test]
    fn test_string_too_long() {
        let field = FieldDef::string("name").length(1, 5);
        assert_eq!(
            kind_of(field.check(Some(&json!("abcdef")))),
            ErrorKind::TooLong
        );
    }

    #[test]
    fn test_string_boundary_lengths_pass() {
        let field = FieldDef::string("name").length(3, 5);
        assert!(field.check(Some(&json!("abc"))).is_ok());
        assert!(field.check(Some(&json!("abcde"))).is_ok());
    }

    #[test]
    fn test_string_bounds_count_characters_not_bytes() {
        let field = FieldDef::string("name").length(1, 5);
        // five accented characters, ten UTF-8 bytes
        assert!(field.check(Some(&json!("ééééé"))).is_ok());

        let err = field.check(Some(&json!("éééééé"))).expect_err("six chars");
        assert_eq!(err.kind, ErrorKind::TooLong);
        assert_eq!(err.params.get("length"), Some(&json!(6)));
    }

    #[test]
    fn test_string_without_bounds_accepts_any_length() {
        let field = FieldDef::text("description");
        assert!(field.check(Some(&json!(""))).is_ok());
        assert!(field.check(Some(&json!("x".repeat(10_000)))).is_ok());
    }

    // === email ===

    #[test]
    fn test_email_minimal_valid() {
        let field = FieldDef::email("email").mandatory().length(3, 100);
        assert!(field.check(Some(&json!("a@b.c"))).is_ok());
    }

    #[test]
    fn test_email_malformed_after_bounds() {
        let field = FieldDef::email("email").mandatory().length(3, 100);
        assert_eq!(
            kind_of(field.check(Some(&json!("abcd")))),
            ErrorKind::Malformed
        );
    }

    #[test]
    fn test_email_too_short_reported_before_pattern() {
        let field = FieldDef::email("email").mandatory().length(3, 100);
        assert_eq!(
            kind_of(field.check(Some(&json!("ab")))),
            ErrorKind::TooShort
        );
    }

    #[test]
    fn test_email_rejects_spaces() {
        let field = FieldDef::email("email").mandatory().length(3, 100);
        assert_eq!(
            kind_of(field.check(Some(&json!("a b@c.d")))),
            ErrorKind::Malformed
        );
    }

    // === password ===

    #[test]
    fn test_password_all_classes_pass() {
        let field = FieldDef::password("password").mandatory().length(8, 100);
        assert!(field.check(Some(&json!("Aa1!aaaa"))).is_ok());
    }

    #[test]
    fn test_password_missing_lowercase_reported_first() {
        let field = FieldDef::password("password").mandatory().length(8, 100);
        let err = field
            .check(Some(&json!("AAAA1111!")))
            .expect_err("no lowercase");
        assert_eq!(err.kind, ErrorKind::Malformed);
        assert_eq!(err.params.get("rule"), Some(&json!("lowercase")));
    }

    #[test]
    fn test_password_missing_uppercase() {
        let field = FieldDef::password("password").mandatory().length(8, 100);
        let err = field
            .check(Some(&json!("aaaa1111!")))
            .expect_err("no uppercase");
        assert_eq!(err.params.get("rule"), Some(&json!("uppercase")));
    }

    #[test]
    fn test_password_missing_digit() {
        let field = FieldDef::password("password").mandatory().length(8, 100);
        let err = field
            .check(Some(&json!("aaaaAAAA!")))
            .expect_err("no digit");
        assert_eq!(err.params.get("rule"), Some(&json!("digit")));
    }

    #[test]
    fn test_password_missing_special() {
        let field = FieldDef::password("password").mandatory().length(8, 100);
        let err = field
            .check(Some(&json!("aaaaAAAA1")))
            .expect_err("no special");
        assert_eq!(err.params.get("rule"), Some(&json!("special")));
    }

    #[test]
    fn test_password_length_checked_before_strength() {
        let field = FieldDef::password("password").mandatory().length(8, 100);
        assert_eq!(
            kind_of(field.check(Some(&json!("Aa1!")))),
            ErrorKind::TooShort
        );
    }

    // === boolean ===

    #[test]
    fn test_boolean_accepts_bools_only() {
        let field = FieldDef::boolean("active");
        assert!(field.check(Some(&json!(true))).is_ok());
        assert!(field.check(Some(&json!(false))).is_ok());
        assert_eq!(kind_of(field.check(Some(&json!(1)))), ErrorKind::WrongType);
        assert_eq!(
            kind_of(field.check(Some(&json!("true")))),
            ErrorKind::WrongType
        );
    }

    // === numbers ===

    #[test]
    fn test_integer_accepts_numeric_strings() {
        let field = FieldDef::integer("stockRole").range(0.0, 2.0);
        assert!(field.check(Some(&json!(1))).is_ok());
        assert!(field.check(Some(&json!("2"))).is_ok());
    }

    #[test]
    fn test_integer_rejects_non_numeric() {
        let field = FieldDef::integer("stockRole");
        assert_eq!(
            kind_of(field.check(Some(&json!("abc")))),
            ErrorKind::WrongType
        );
        assert_eq!(
            kind_of(field.check(Some(&json!(true)))),
            ErrorKind::WrongType
        );
    }

    #[test]
    fn test_number_range_bounds() {
        let field = FieldDef::price("price").range(0.0, 100.0);
        assert!(field.check(Some(&json!(0))).is_ok());
        assert!(field.check(Some(&json!(100))).is_ok());
        assert_eq!(
            kind_of(field.check(Some(&json!(-1)))),
            ErrorKind::TooSmall
        );
        assert_eq!(
            kind_of(field.check(Some(&json!(100.5)))),
            ErrorKind::TooLarge
        );
    }

    #[test]
    fn test_number_without_bounds() {
        let field = FieldDef::integer("count");
        assert!(field.check(Some(&json!(-999_999))).is_ok());
    }

    // === dates ===

    #[test]
    fn test_date_valid() {
        let field = FieldDef::date("startDate").mandatory();
        assert!(field.check(Some(&json!("2024-01-15"))).is_ok());
    }

    #[test]
    fn test_date_invalid_is_not_a_date() {
        let field = FieldDef::date("startDate").mandatory();
        assert_eq!(
            kind_of(field.check(Some(&json!("15/01/2024")))),
            ErrorKind::NotADate
        );
        assert_eq!(
            kind_of(field.check(Some(&json!(12345)))),
            ErrorKind::NotADate
        );
    }

    #[test]
    fn test_datetime_valid_rfc3339() {
        let field = FieldDef::datetime("expirationDate").mandatory();
        assert!(
            field
                .check(Some(&json!("2024-01-15T10:30:00Z")))
                .is_ok()
        );
    }

    #[test]
    fn test_datetime_plain_date_rejected() {
        let field = FieldDef::datetime("expirationDate").mandatory();
        assert_eq!(
            kind_of(field.check(Some(&json!("2024-01-15")))),
            ErrorKind::NotADate
        );
    }

    // === image ===

    #[test]
    fn test_image_is_a_bounded_string() {
        let field = FieldDef::image("logo").max_length(10);
        assert!(field.check(Some(&json!("logo.png"))).is_ok());
        assert_eq!(
            kind_of(field.check(Some(&json!("a-very-long-path.png")))),
            ErrorKind::TooLong
        );
    }
}
