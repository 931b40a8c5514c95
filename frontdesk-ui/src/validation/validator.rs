//! Validator builder for the fluent validation API.

use super::result::{FieldError, ValidationResult};
use super::rules;

/// Builder for validating multiple form fields.
///
/// Each field keeps its first failing rule only, so the form shows one
/// message per control.
#[derive(Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    /// Creates a new validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to validate.
    pub fn field<'v>(self, name: impl Into<String>, value: &'v str) -> FieldBuilder<'v> {
        FieldBuilder {
            validator: self,
            name: name.into(),
            value,
            failed: false,
        }
    }

    /// Finishes validation.
    pub fn validate(self) -> ValidationResult {
        if self.errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(self.errors)
        }
    }
}

/// Rule chain for a single field.
pub struct FieldBuilder<'v> {
    validator: Validator,
    name: String,
    value: &'v str,
    failed: bool,
}

impl<'v> FieldBuilder<'v> {
    fn check(mut self, violated: bool, message: &str) -> Self {
        if !self.failed && violated {
            self.validator.errors.push(FieldError {
                field_name: self.name.clone(),
                message: message.to_string(),
            });
            self.failed = true;
        }
        self
    }

    /// The value must be non-empty once trimmed.
    pub fn required(self, message: &str) -> Self {
        let violated = rules::is_blank(self.value);
        self.check(violated, message)
    }

    /// The value must not contain whitespace.
    pub fn no_whitespace(self, message: &str) -> Self {
        let violated = rules::has_whitespace(self.value);
        self.check(violated, message)
    }

    /// The value must stay within the free-text character whitelist.
    pub fn text_characters(self, message: &str) -> Self {
        let violated = rules::has_forbidden_text_characters(self.value);
        self.check(violated, message)
    }

    /// The value must stay within the identifier character whitelist.
    pub fn id_characters(self, message: &str) -> Self {
        let violated = rules::has_forbidden_id_characters(self.value);
        self.check(violated, message)
    }

    /// The value must stay within the password character whitelist.
    pub fn password_characters(self, message: &str) -> Self {
        let violated = rules::has_forbidden_password_characters(self.value);
        self.check(violated, message)
    }

    /// The value must satisfy the password strength requirements.
    pub fn strong_password(self, message: &str) -> Self {
        let violated = !rules::is_strong_password(self.value);
        self.check(violated, message)
    }

    /// Moves on to the next field.
    pub fn field<'n>(self, name: impl Into<String>, value: &'n str) -> FieldBuilder<'n> {
        self.validator.field(name, value)
    }

    /// Finishes validation.
    pub fn validate(self) -> ValidationResult {
        self.validator.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        let result = Validator::new()
            .field("username", "reception")
            .required("required")
            .no_whitespace("no whitespace")
            .field("password", "Pa5s.word")
            .required("required")
            .strong_password("weak")
            .validate();

        assert!(result.is_valid());
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let result = Validator::new()
            .field("username", "   ")
            .required("required")
            .no_whitespace("no whitespace")
            .validate();

        let errors = result.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "required");
    }

    #[test]
    fn test_errors_collect_across_fields() {
        let result = Validator::new()
            .field("username", "two words")
            .no_whitespace("no whitespace")
            .field("password", "weak")
            .strong_password("weak password")
            .validate();

        assert!(result.is_invalid());
        assert_eq!(result.errors().len(), 2);
        assert!(result.error_for("username").is_some());
        assert_eq!(result.error_for("password").unwrap().message, "weak password");
    }
}
