//! Form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of the registration form's fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    PhoneNumber,
    Email,
    BirthDate,
    Gender,
    MilitaryStatus,
    AttachedFile,
}

impl FieldName {
    pub const ALL: [FieldName; 7] = [
        FieldName::FullName,
        FieldName::PhoneNumber,
        FieldName::Email,
        FieldName::BirthDate,
        FieldName::Gender,
        FieldName::MilitaryStatus,
        FieldName::AttachedFile,
    ];

    /// Identifier used on the wire and in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::PhoneNumber => "phoneNumber",
            Self::Email => "email",
            Self::BirthDate => "birthDate",
            Self::Gender => "gender",
            Self::MilitaryStatus => "militaryStatus",
            Self::AttachedFile => "attachedFile",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Select input; an empty string is the unselected placeholder
    Choice {
        options: &'static [&'static str],
        value: String,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: FieldName) -> Self {
        Self {
            name,
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new select field with no option chosen
    pub fn choice(name: FieldName, options: &'static [&'static str]) -> Self {
        Self {
            name,
            value: FieldValue::Choice {
                options,
                value: String::new(),
            },
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice { .. })
    }

    /// Get the raw stored value
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice { value, .. } => value,
        }
    }

    /// Replace the stored value. Select fields accept any string so that
    /// out-of-range values reach validation instead of being dropped here.
    pub fn set_text(&mut self, value: String) {
        match &mut self.value {
            FieldValue::Text(s) => *s = value,
            FieldValue::Choice { value: current, .. } => *current = value,
        }
    }

    /// Push a character to a text field; select fields ignore typing
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from a text field
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Step through the placeholder and every option, wrapping around
    pub fn cycle_choice(&mut self, forward: bool) {
        if let FieldValue::Choice { options, value } = &mut self.value {
            // Slot 0 is the placeholder, slot i + 1 is options[i]
            let slots = options.len() + 1;
            let current = options
                .iter()
                .position(|o| *o == value.as_str())
                .map(|i| i + 1)
                .unwrap_or(0);
            let next = if forward {
                (current + 1) % slots
            } else {
                (current + slots - 1) % slots
            };
            *value = match next {
                0 => String::new(),
                i => options[i - 1].to_string(),
            };
        }
    }
}
