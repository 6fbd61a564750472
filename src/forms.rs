use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+$").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Password,
    Subject,
    Message,
    PreferredDate,
    PreferredTime,
    Topic,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "الاسم",
            Field::Email => "البريد الإلكتروني",
            Field::Phone => "رقم الهاتف",
            Field::Password => "كلمة المرور",
            Field::Subject => "الموضوع",
            Field::Message => "الرسالة",
            Field::PreferredDate => "التاريخ",
            Field::PreferredTime => "الوقت",
            Field::Topic => "موضوع الاستشارة",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} مطلوب")]
    Required(&'static str),
    #[error("بريد إلكتروني غير صحيح")]
    InvalidEmail,
    #[error("اختر قيمة من القائمة")]
    InvalidChoice,
    #[error("لا يمكن اختيار تاريخ في الماضي")]
    DateInPast,
    /// Set by the view when a submission is rejected after validation passed.
    #[error("{0}")]
    Rejected(String),
}

/// Validation result of a whole form, keyed by field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.entry(field).or_insert(error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, error) in other.0 {
            self.insert(field, error);
        }
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            log::debug!("Form rejected with {} field error(s)", self.len());
            Err(self)
        }
    }

    pub fn require(&mut self, field: Field, value: &str) {
        if value.trim().is_empty() {
            self.insert(field, FieldError::Required(field.label()));
        }
    }

    pub fn require_email(&mut self, field: Field, value: &str) {
        if value.trim().is_empty() {
            self.insert(field, FieldError::Required(field.label()));
        } else if !is_valid_email(value) {
            self.insert(field, FieldError::InvalidEmail);
        }
    }

    pub fn require_choice(&mut self, field: Field, value: &str, choices: &[&str]) {
        if value.is_empty() {
            self.insert(field, FieldError::Required(field.label()));
        } else if !choices.contains(&value) {
            self.insert(field, FieldError::InvalidChoice);
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_email(Field::Email, &self.email);
        errors.require(Field::Password, &self.password);
        errors.into_result()
    }
}

/// Sidebar contact message. Never reaches the shared store.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require(Field::Name, &self.name);
        errors.require_email(Field::Email, &self.email);
        errors.require(Field::Phone, &self.phone);
        errors.require(Field::Subject, &self.subject);
        errors.require(Field::Message, &self.message);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("ali@x"));
        assert!(!is_valid_email("ali.x.com"));
        assert!(!is_valid_email("ali @x.com"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn login_requires_both_fields() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(
            errors.get(Field::Email),
            Some(&FieldError::Required("البريد الإلكتروني"))
        );
        assert!(errors.get(Field::Password).is_some());
    }

    #[test]
    fn login_rejects_malformed_email() {
        let form = LoginForm {
            email: "not-an-email".to_string(),
            password: "pw".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::Email), Some(&FieldError::InvalidEmail));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn contact_form_flags_every_missing_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn contact_form_accepts_complete_input() {
        let form = ContactForm {
            name: "Ali".to_string(),
            email: "ali@x.com".to_string(),
            phone: "0500000000".to_string(),
            subject: "Cursos".to_string(),
            message: "Hola".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut errors = FieldErrors::new();
        errors.require(Field::Name, "   ");
        assert!(!errors.is_empty());
    }

    #[test]
    fn first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, FieldError::InvalidEmail);
        errors.insert(Field::Email, FieldError::Required("x"));
        assert_eq!(errors.get(Field::Email), Some(&FieldError::InvalidEmail));
    }

    #[test]
    fn required_message_names_the_field() {
        assert_eq!(
            FieldError::Required(Field::Phone.label()).to_string(),
            "رقم الهاتف مطلوب"
        );
    }
}
