//! Per-field validation state shared by the contact and inquiry forms.

use crate::utils::{is_valid_email, is_valid_phone};
use thiserror::Error;

/// Which format rule applies on top of the required check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

/// Static description of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldRule {
    pub const fn required(kind: FieldKind) -> Self {
        FieldRule {
            kind,
            required: true,
        }
    }

    pub const fn optional(kind: FieldKind) -> Self {
        FieldRule {
            kind,
            required: false,
        }
    }

    /// Check a raw value. Format rules only apply to non-blank input.
    pub fn check(&self, raw: &str) -> Result<(), FieldError> {
        let value = raw.trim();
        if value.is_empty() {
            return if self.required {
                Err(FieldError::Required)
            } else {
                Ok(())
            };
        }
        match self.kind {
            FieldKind::Text => Ok(()),
            FieldKind::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
            FieldKind::Phone if !is_valid_phone(value) => Err(FieldError::InvalidPhone),
            FieldKind::Email | FieldKind::Phone => Ok(()),
        }
    }
}

/// Live state of one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    /// Set once the field has been validated (blur or submit).
    pub touched: bool,
    pub error: Option<FieldError>,
}

impl FieldState {
    /// Keystroke. Re-validates only while the field is showing an error, so
    /// the message clears as soon as the input becomes acceptable.
    pub fn on_input(&mut self, rule: FieldRule, value: String) {
        self.value = value;
        if self.error.is_some() {
            self.error = rule.check(&self.value).err();
        }
    }

    pub fn on_blur(&mut self, rule: FieldRule) {
        self.validate(rule);
    }

    /// Validate now and report the result.
    pub fn validate(&mut self, rule: FieldRule) -> bool {
        self.touched = true;
        self.error = rule.check(&self.value).err();
        self.error.is_none()
    }

    /// `is-valid` / `is-invalid` styling once the user has left the field.
    pub fn css_state(&self) -> Option<&'static str> {
        match (self.touched, self.error) {
            (false, _) => None,
            (true, None) => Some("is-valid"),
            (true, Some(_)) => Some("is-invalid"),
        }
    }

    pub fn reset(&mut self) {
        *self = FieldState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL: FieldRule = FieldRule::required(FieldKind::Email);
    const PHONE: FieldRule = FieldRule::required(FieldKind::Phone);

    #[test]
    fn required_blank_is_rejected() {
        assert_eq!(
            FieldRule::required(FieldKind::Text).check("   "),
            Err(FieldError::Required)
        );
        assert_eq!(FieldRule::optional(FieldKind::Email).check(""), Ok(()));
    }

    #[test]
    fn format_rules() {
        assert_eq!(EMAIL.check("not-an-email"), Err(FieldError::InvalidEmail));
        assert_eq!(EMAIL.check(" a@b.com "), Ok(()));
        assert_eq!(PHONE.check("123"), Err(FieldError::InvalidPhone));
        assert_eq!(PHONE.check("+971 50 123 4567"), Ok(()));
    }

    #[test]
    fn typing_does_not_flag_untouched_field() {
        let mut field = FieldState::default();
        field.on_input(EMAIL, "a".into());
        assert_eq!(field.error, None);
        assert_eq!(field.css_state(), None);
    }

    #[test]
    fn blur_flags_then_typing_clears() {
        let mut field = FieldState::default();
        field.on_input(EMAIL, "a@b".into());
        field.on_blur(EMAIL);
        assert_eq!(field.error, Some(FieldError::InvalidEmail));
        assert_eq!(field.css_state(), Some("is-invalid"));

        field.on_input(EMAIL, "a@b.co".into());
        assert_eq!(field.error, None);
        assert_eq!(field.css_state(), Some("is-valid"));
    }

    #[test]
    fn error_messages() {
        assert_eq!(FieldError::Required.to_string(), "This field is required");
        assert_eq!(
            FieldError::InvalidPhone.to_string(),
            "Please enter a valid phone number"
        );
    }
}
