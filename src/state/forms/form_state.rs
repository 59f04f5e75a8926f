//! Registration form fields and focus handling

use super::field::{FieldName, FormField};
use super::record::{Gender, MilitaryStatus};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// Buttons on the action row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Reset,
}

impl FormButton {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Submit => Self::Reset,
            Self::Reset => Self::Submit,
        }
    }
}

/// Field values of the registration form.
///
/// Focus order: the seven fields in `FieldName::ALL` order (the last one
/// is the attachment path input), then the buttons row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: FormField,
    pub phone_number: FormField,
    pub email: FormField,
    pub birth_date: FormField,
    pub gender: FormField,
    pub military_status: FormField,
    /// Typed path for browse-style attaching; not part of the record
    pub attachment_path: FormField,
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

pub const BUTTONS_ROW: usize = 7;

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::text(FieldName::FullName),
            phone_number: FormField::text(FieldName::PhoneNumber),
            email: FormField::text(FieldName::Email),
            birth_date: FormField::text(FieldName::BirthDate),
            gender: FormField::choice(FieldName::Gender, Gender::OPTIONS),
            military_status: FormField::choice(FieldName::MilitaryStatus, MilitaryStatus::OPTIONS),
            attachment_path: FormField::text(FieldName::AttachedFile),
            active_field_index: 0,
            selected_button: FormButton::default(),
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::FullName => &self.full_name,
            FieldName::PhoneNumber => &self.phone_number,
            FieldName::Email => &self.email,
            FieldName::BirthDate => &self.birth_date,
            FieldName::Gender => &self.gender,
            FieldName::MilitaryStatus => &self.military_status,
            FieldName::AttachedFile => &self.attachment_path,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::FullName => &mut self.full_name,
            FieldName::PhoneNumber => &mut self.phone_number,
            FieldName::Email => &mut self.email,
            FieldName::BirthDate => &mut self.birth_date,
            FieldName::Gender => &mut self.gender,
            FieldName::MilitaryStatus => &mut self.military_status,
            FieldName::AttachedFile => &mut self.attachment_path,
        }
    }

    /// Store a raw value; no validation happens here
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.field_mut(name).set_text(value.into());
    }

    /// Name of the focused field, `None` on the buttons row
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn focus(&mut self, name: FieldName) {
        if let Some(index) = FieldName::ALL.iter().position(|f| *f == name) {
            self.active_field_index = index;
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        BUTTONS_ROW + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let name = self.active_field_name()?;
        Some(self.field_mut(name))
    }
}
