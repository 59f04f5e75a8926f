//! Per-field validation rules
//!
//! Each rule is a pure predicate over one field's raw value. `validate`
//! runs all of them and either builds the typed record or returns one
//! message per failing field.

use super::field::FieldName;
use super::form_state::RegistrationForm;
use super::record::{FormRecord, Gender, MilitaryStatus};
use crate::attachment::Attachment;
use crate::i18n::{error_message, Locale};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Optional `+98` or `0`, then `9`, then nine ASCII digits
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+98|0)?9[0-9]{9}$").expect("phone pattern compiles"));

/// WHATWG `input[type=email]` syntax; a dotless domain such as `a@b` is valid
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+",
        r"@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?",
        r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    ))
    .expect("email pattern compiles")
});

/// Which rule a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    InvalidPhone,
    InvalidEmail,
    InvalidChoice,
    /// Raised by the calendar when a picked date cannot be converted
    InvalidDate,
}

/// A failed rule with its display message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(locale: Locale, field: FieldName, kind: ErrorKind) -> Self {
        Self {
            kind,
            message: error_message(locale, field, kind).to_string(),
        }
    }
}

/// Field-scoped errors; at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldName, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: FieldName) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

/// A record that passed every rule, paired with its attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub record: FormRecord,
    pub attachment: Attachment,
}

fn required(value: &str) -> Result<(), ErrorKind> {
    if value.is_empty() {
        Err(ErrorKind::Required)
    } else {
        Ok(())
    }
}

pub fn check_full_name(value: &str) -> Result<(), ErrorKind> {
    required(value)
}

pub fn check_phone_number(value: &str) -> Result<(), ErrorKind> {
    required(value)?;
    if PHONE_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(ErrorKind::InvalidPhone)
    }
}

pub fn check_email(value: &str) -> Result<(), ErrorKind> {
    required(value)?;
    if EMAIL_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(ErrorKind::InvalidEmail)
    }
}

/// Only presence is checked; the calendar guarantees the format
pub fn check_birth_date(value: &str) -> Result<(), ErrorKind> {
    required(value)
}

pub fn check_gender(value: &str) -> Result<Gender, ErrorKind> {
    required(value)?;
    value.parse().map_err(|_| ErrorKind::InvalidChoice)
}

pub fn check_military_status(value: &str) -> Result<MilitaryStatus, ErrorKind> {
    required(value)?;
    value.parse().map_err(|_| ErrorKind::InvalidChoice)
}

pub fn check_attachment(attachment: Option<&Attachment>) -> Result<Attachment, ErrorKind> {
    attachment.cloned().ok_or(ErrorKind::Required)
}

/// Run every rule. Never short-circuits: all failing fields are reported.
pub fn validate(
    form: &RegistrationForm,
    attachment: Option<&Attachment>,
    locale: Locale,
) -> Result<Submission, FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut report = |field: FieldName, result: Result<(), ErrorKind>| {
        if let Err(kind) = result {
            errors.insert(field, FieldError::new(locale, field, kind));
        }
    };

    report(FieldName::FullName, check_full_name(form.full_name.as_text()));
    report(
        FieldName::PhoneNumber,
        check_phone_number(form.phone_number.as_text()),
    );
    report(FieldName::Email, check_email(form.email.as_text()));
    report(
        FieldName::BirthDate,
        check_birth_date(form.birth_date.as_text()),
    );

    let gender = check_gender(form.gender.as_text());
    report(FieldName::Gender, gender.map(|_| ()));
    let military_status = check_military_status(form.military_status.as_text());
    report(FieldName::MilitaryStatus, military_status.map(|_| ()));
    let attachment = check_attachment(attachment);
    report(FieldName::AttachedFile, attachment.as_ref().map(|_| ()).map_err(|kind| *kind));

    match (gender, military_status, attachment) {
        (Ok(gender), Ok(military_status), Ok(attachment)) if errors.is_empty() => Ok(Submission {
            record: FormRecord {
                full_name: form.full_name.as_text().to_string(),
                phone_number: form.phone_number.as_text().to_string(),
                email: form.email.as_text().to_string(),
                birth_date: form.birth_date.as_text().to_string(),
                gender,
                military_status,
            },
            attachment,
        }),
        _ => Err(errors),
    }
}
