//! Contact form: validation, submission state and the messaging hand-off.

pub mod form;
pub mod transmission;

pub use form::{ContactForm, Phase};
pub use transmission::Transmission;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email pattern"));

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

/// Inline validation messages, in the page's own voice.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum FieldError {
    #[error("Identity required")]
    NameMissing,
    #[error("Frequency channel required")]
    EmailMissing,
    #[error("Invalid frequency format")]
    EmailMalformed,
    #[error("Mission objective required")]
    SubjectMissing,
    #[error("Intel required")]
    MessageMissing,
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Fields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Fields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }
}

pub type Errors = BTreeMap<Field, FieldError>;

/// Checks a single field.
pub fn check(field: Field, value: &str) -> Option<FieldError> {
    let blank = value.trim().is_empty();
    match field {
        Field::Name if blank => Some(FieldError::NameMissing),
        Field::Email if blank => Some(FieldError::EmailMissing),
        Field::Email if !EMAIL.is_match(value) => Some(FieldError::EmailMalformed),
        Field::Subject if blank => Some(FieldError::SubjectMissing),
        Field::Message if blank => Some(FieldError::MessageMissing),
        _ => None,
    }
}

/// Every failing field with its message. Empty when the form may be sent.
pub fn validate(fields: &Fields) -> Errors {
    Field::ALL
        .into_iter()
        .filter_map(|field| check(field, fields.get(field)).map(|e| (field, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, subject: &str, message: &str) -> Fields {
        Fields {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate(&Fields::default());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&Field::Name], FieldError::NameMissing);
        assert_eq!(errors[&Field::Email], FieldError::EmailMissing);
        assert_eq!(errors[&Field::Subject], FieldError::SubjectMissing);
        assert_eq!(errors[&Field::Message], FieldError::MessageMissing);
    }

    #[test]
    fn malformed_email_is_the_only_error() {
        let errors = validate(&fields("Peter", "not-an-email", "x", "y"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::Email], FieldError::EmailMalformed);
        assert_eq!(errors[&Field::Email].to_string(), "Invalid frequency format");
    }

    #[test]
    fn complete_form_passes() {
        assert!(validate(&fields("Peter", "peter@example.com", "x", "y")).is_empty());
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let errors = validate(&fields("   ", "\t", "\n", " "));
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&Field::Email], FieldError::EmailMissing);
    }

    #[test]
    fn email_pattern_is_permissive() {
        assert_eq!(check(Field::Email, "a@b.c"), None);
        assert_eq!(check(Field::Email, "mj@for.you.agency"), None);
        // Unanchored: the pattern may match anywhere in the value.
        assert_eq!(check(Field::Email, "call me: mj@x.io"), None);
        assert_eq!(check(Field::Email, "mj@localhost"), Some(FieldError::EmailMalformed));
        assert_eq!(check(Field::Email, "@x.io"), Some(FieldError::EmailMalformed));
        assert_eq!(check(Field::Email, "mj@ x.io"), Some(FieldError::EmailMalformed));
    }

    #[test]
    fn messages_match_page_copy() {
        assert_eq!(FieldError::NameMissing.to_string(), "Identity required");
        assert_eq!(FieldError::EmailMissing.to_string(), "Frequency channel required");
        assert_eq!(FieldError::SubjectMissing.to_string(), "Mission objective required");
        assert_eq!(FieldError::MessageMissing.to_string(), "Intel required");
    }
}
