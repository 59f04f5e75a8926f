//! Application state and its update function
//!
//! `AppState` is a plain value. Every user interaction becomes a
//! `FormAction`, and `AppState::reduce` returns the next state without
//! touching the terminal or the submission handler. `apply` is the same
//! update performed in place.

use super::forms::{ErrorKind, FieldError, FieldErrors, FieldName, Form, RegistrationForm};
use crate::attachment::{Attachment, Rejection};
use crate::calendar::{self, CalendarMove, CalendarPicker};
use crate::i18n::Locale;
use chrono::NaiveDate;

/// Modal overlay shown above the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Submitted,
    Error(String),
}

/// Every state transition the form supports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetField(FieldName, String),
    FocusNext,
    FocusPrev,
    Focus(FieldName),
    InputChar(char),
    Backspace,
    CycleChoice { forward: bool },
    ToggleButton,
    ToggleCalendar,
    CalendarMove(CalendarMove),
    /// Raw Gregorian date reported by the calendar
    DateSelected(String),
    FilesAccepted(Vec<Attachment>),
    DropRejected(Vec<Rejection>),
    ValidationFailed(FieldErrors),
    Submitted,
    SubmitFailed(String),
    DismissDialog,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub form: RegistrationForm,
    pub attachment: Option<Attachment>,
    pub errors: FieldErrors,
    pub calendar: CalendarPicker,
    pub locale: Locale,
    /// One-line feedback for the status bar
    pub status_message: Option<String>,
    pub dialog: Option<Dialog>,
}

impl AppState {
    pub fn new(locale: Locale, calendar_start: NaiveDate) -> Self {
        Self {
            form: RegistrationForm::new(),
            attachment: None,
            errors: FieldErrors::new(),
            calendar: CalendarPicker::new(calendar_start),
            locale,
            status_message: None,
            dialog: None,
        }
    }

    pub fn is_calendar_visible(&self) -> bool {
        self.calendar.visible
    }

    /// Apply one action and return the resulting state
    #[must_use]
    pub fn reduce(mut self, action: FormAction) -> Self {
        self.apply(action);
        self
    }

    /// Apply one action in place
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SetField(name, value) => self.form.set_field(name, value),
            FormAction::FocusNext => self.form.next_field(),
            FormAction::FocusPrev => self.form.prev_field(),
            FormAction::Focus(name) => self.form.focus(name),
            FormAction::InputChar(c) => {
                if let Some(field) = self.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            FormAction::Backspace => {
                if let Some(field) = self.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            FormAction::CycleChoice { forward } => {
                if let Some(field) = self.form.get_active_field_mut() {
                    field.cycle_choice(forward);
                }
            }
            FormAction::ToggleButton => {
                self.form.selected_button = self.form.selected_button.toggle();
            }
            FormAction::ToggleCalendar => {
                if !self.calendar.visible {
                    self.calendar.focus_value(self.form.birth_date.as_text());
                }
                self.calendar.toggle_visibility();
            }
            FormAction::CalendarMove(movement) => self.calendar.move_cursor(movement),
            FormAction::DateSelected(raw) => self.select_date(&raw),
            FormAction::FilesAccepted(files) => {
                // Single-file policy: extra entries are discarded
                match files.into_iter().next() {
                    Some(first) => {
                        self.status_message =
                            Some(format!("{} ({} KB)", first.name, first.size_kib()));
                        self.attachment = Some(first);
                    }
                    None => self.status_message = None,
                }
            }
            FormAction::DropRejected(rejections) => {
                if !rejections.is_empty() {
                    let summary = rejections
                        .iter()
                        .map(|r| format!("{}: {}", r.path.display(), r.reason))
                        .collect::<Vec<_>>()
                        .join("; ");
                    // Appended so a partly accepted drop reports both outcomes
                    self.status_message = Some(match self.status_message.take() {
                        Some(accepted) => format!("{accepted}; {summary}"),
                        None => summary,
                    });
                }
            }
            FormAction::ValidationFailed(errors) => self.errors = errors,
            FormAction::Submitted => {
                self.errors = FieldErrors::new();
                self.dialog = Some(Dialog::Submitted);
            }
            FormAction::SubmitFailed(message) => self.dialog = Some(Dialog::Error(message)),
            FormAction::DismissDialog => self.dialog = None,
            FormAction::Reset => *self = Self::new(self.locale, self.calendar.cursor),
        }
    }

    /// Write the converted date into the one birth date field. A date
    /// that cannot be converted leaves the old value and flags the field.
    fn select_date(&mut self, raw: &str) {
        match calendar::to_birth_date(raw) {
            Ok(birth_date) => {
                self.form.birth_date.set_text(birth_date);
                if self
                    .errors
                    .get(FieldName::BirthDate)
                    .is_some_and(|e| e.kind == ErrorKind::InvalidDate)
                {
                    self.errors.remove(FieldName::BirthDate);
                }
            }
            Err(err) => {
                tracing::warn!(raw, error = %err, "calendar date rejected");
                self.errors.insert(
                    FieldName::BirthDate,
                    FieldError::new(self.locale, FieldName::BirthDate, ErrorKind::InvalidDate),
                );
            }
        }
    }
}
