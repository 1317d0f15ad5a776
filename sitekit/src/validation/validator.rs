//! Validator builder for fluent validation API.

use std::sync::LazyLock;

use regex::Regex;

use super::result::{FieldError, ValidationResult};
use super::validatable::Validatable;

/// A check and the message reported when it fails.
struct Rule {
    check: Box<dyn Fn(&str) -> bool>,
    message: String,
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// `local@domain.tld`: no whitespace, exactly one `@`, and a `.` somewhere
/// after it with text on both sides.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Internal representation of a field being validated.
struct FieldEntry {
    name: String,
    element_id: Option<String>,
    value: Option<String>,
    rules: Vec<Rule>,
}

impl FieldEntry {
    /// First failing rule's message. An absent field fails its first rule.
    fn first_error(&self) -> Option<String> {
        let failed = match &self.value {
            Some(value) => self.rules.iter().find(|rule| !(rule.check)(value)),
            None => self.rules.first(),
        };
        failed.map(|rule| rule.message.clone())
    }
}

/// Builder for validating multiple form fields.
///
/// # Example
///
/// ```ignore
/// let result = Validator::new()
///     .field(&name, "name")
///         .required("Name is required")
///     .field(&email, "email")
///         .required("Email is required")
///         .email("Invalid email format")
///     .validate();
///
/// if result.is_valid() {
///     // Submit form
/// }
/// ```
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field to validate. The value is read now.
    pub fn field<W: Validatable + ?Sized>(
        self,
        widget: &W,
        name: impl Into<String>,
    ) -> FieldBuilder {
        FieldBuilder {
            validator: self,
            entry: FieldEntry {
                name: name.into(),
                element_id: widget.element_id(),
                value: widget.validation_value(),
                rules: Vec::new(),
            },
        }
    }

    /// Run all validations.
    pub fn validate(self) -> ValidationResult {
        let mut errors = Vec::new();

        for field in &self.fields {
            if let Some(message) = field.first_error() {
                log::debug!("[validation] {} invalid: {}", field.name, message);
                errors.push(FieldError {
                    field_name: field.name.clone(),
                    element_id: field.element_id.clone(),
                    message,
                });
            }
        }

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder {
    validator: Validator,
    entry: FieldEntry,
}

impl FieldBuilder {
    /// Add a custom validation rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        self.entry.rules.push(Rule {
            check: Box::new(f),
            message: msg.into(),
        });
        self
    }

    /// Require the field to be non-empty after trimming.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() <= max, msg)
    }

    /// Require the value to match a regex.
    pub fn pattern(self, re: Regex, msg: impl Into<String>) -> Self {
        self.rule(move |v| re.is_match(v), msg)
    }

    /// Require a valid email address.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v| {
                if v.is_empty() {
                    true // Empty is valid; use required() for non-empty
                } else {
                    is_valid_email(v)
                }
            },
            msg,
        )
    }

    /// Continue to the next field.
    pub fn field<W: Validatable + ?Sized>(
        self,
        widget: &W,
        name: impl Into<String>,
    ) -> FieldBuilder {
        self.finalize().field(widget, name)
    }

    /// Finalize and run all validations.
    pub fn validate(self) -> ValidationResult {
        self.finalize().validate()
    }

    /// Finalize this field and return the validator.
    fn finalize(self) -> Validator {
        let mut validator = self.validator;
        validator.fields.push(self.entry);
        validator
    }
}
