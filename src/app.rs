//! Application state and core logic

use crate::attachment::{parse_dropped_paths, DropZone, DropZoneConfig};
use crate::calendar::CalendarMove;
use crate::config::FormConfig;
use crate::platform::has_shortcut_modifier;
use crate::state::{validate, AppState, FieldErrors, FieldName, FormAction, FormButton, Submission};
use crate::submission::SubmissionHandler;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

/// What a submit attempt ended in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    /// Validation failed on this many fields
    Invalid(usize),
    HandlerFailed,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Receives validated submissions
    handler: Box<dyn SubmissionHandler>,
    /// Kind/count filter for dropped files
    drop_zone: DropZone,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &FormConfig, handler: Box<dyn SubmissionHandler>) -> Self {
        let today = chrono::Local::now().date_naive();
        let state = AppState::new(config.locale(), config.calendar_start_or(today));

        Self {
            state,
            handler,
            drop_zone: DropZone::new(DropZoneConfig::default()),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Run an action through the state's update function
    pub fn dispatch(&mut self, action: FormAction) {
        self.state.apply(action);
    }

    /// Store a field value without validating it
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.dispatch(FormAction::SetField(name, value.into()));
    }

    /// Validate the current values against every field rule
    pub fn validate(&self) -> Result<Submission, FieldErrors> {
        validate(
            &self.state.form,
            self.state.attachment.as_ref(),
            self.state.locale,
        )
    }

    /// Validate and, when everything passes, hand the record to the handler
    pub async fn submit(&mut self) -> SubmitOutcome {
        let submission = match self.validate() {
            Ok(submission) => submission,
            Err(errors) => {
                let count = errors.len();
                tracing::debug!(
                    errors = ?errors
                        .iter()
                        .map(|(field, error)| (field.as_str(), error.kind))
                        .collect::<Vec<_>>(),
                    "validation failed"
                );
                self.dispatch(FormAction::ValidationFailed(errors));
                return SubmitOutcome::Invalid(count);
            }
        };

        match self
            .handler
            .submit(&submission.record, &submission.attachment)
            .await
        {
            Ok(()) => {
                self.dispatch(FormAction::Submitted);
                SubmitOutcome::Submitted
            }
            Err(err) => {
                tracing::error!(error = %err, "submission handler failed");
                self.dispatch(FormAction::SubmitFailed(err.to_string()));
                SubmitOutcome::HandlerFailed
            }
        }
    }

    /// Run dropped or typed paths through the drop zone into the form
    pub fn drop_paths(&mut self, paths: Vec<PathBuf>) {
        let outcome = self.drop_zone.accept_paths(paths);
        for rejection in &outcome.rejected {
            tracing::warn!(
                path = %rejection.path.display(),
                reason = %rejection.reason,
                "dropped file rejected"
            );
        }
        let accepted_any = !outcome.accepted.is_empty();
        // Accepted first: rejections are appended to its status
        self.dispatch(FormAction::FilesAccepted(outcome.accepted));
        self.dispatch(FormAction::DropRejected(outcome.rejected));
        if accepted_any {
            self.set_field(FieldName::AttachedFile, "");
        }
    }

    /// Handle a bracketed paste. Dropping a file onto the terminal pastes
    /// its path, so pasted text naming existing files is treated as a drop.
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.dialog.is_some() || self.state.is_calendar_visible() {
            return;
        }

        let paths = parse_dropped_paths(text);
        let looks_like_drop = !paths.is_empty() && paths.iter().all(|p| p.is_file());
        let on_attachment = self.state.form.active_field_name() == Some(FieldName::AttachedFile);

        if looks_like_drop || on_attachment {
            self.drop_paths(paths);
        } else {
            for c in text.chars().filter(|c| !c.is_control()) {
                self.dispatch(FormAction::InputChar(c));
            }
        }
    }

    /// Handle key events
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
        } else if self.state.dialog.is_some() {
            self.handle_dialog_key(key);
        } else if self.state.is_calendar_visible() {
            self.handle_calendar_key(key);
        } else {
            self.handle_form_key(key).await;
        }
        Ok(())
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.dispatch(FormAction::DismissDialog);
        }
    }

    fn handle_calendar_key(&mut self, key: KeyEvent) {
        let movement = match key.code {
            KeyCode::Left => Some(CalendarMove::Days(-1)),
            KeyCode::Right => Some(CalendarMove::Days(1)),
            KeyCode::Up => Some(CalendarMove::Days(-7)),
            KeyCode::Down => Some(CalendarMove::Days(7)),
            KeyCode::PageUp => Some(CalendarMove::Months(-1)),
            KeyCode::PageDown => Some(CalendarMove::Months(1)),
            _ => None,
        };
        if let Some(movement) = movement {
            self.dispatch(FormAction::CalendarMove(movement));
            return;
        }

        match key.code {
            KeyCode::Enter => {
                let raw = self.state.calendar.selected_raw();
                self.dispatch(FormAction::DateSelected(raw));
            }
            KeyCode::Esc => self.dispatch(FormAction::ToggleCalendar),
            _ => {}
        }
    }

    async fn handle_form_key(&mut self, key: KeyEvent) {
        let on_buttons = self.state.form.is_buttons_row_active();
        let active = self.state.form.active_field_name();
        let on_choice = active.is_some_and(|name| self.state.form.field(name).is_choice());

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if has_shortcut_modifier(key.modifiers) => {
                self.submit().await;
            }
            KeyCode::Char('r') if has_shortcut_modifier(key.modifiers) => {
                self.dispatch(FormAction::Reset);
            }
            KeyCode::Tab => self.dispatch(FormAction::FocusNext),
            KeyCode::BackTab => self.dispatch(FormAction::FocusPrev),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down if on_buttons => {
                self.dispatch(FormAction::ToggleButton);
            }
            KeyCode::Enter if on_buttons => match self.state.form.selected_button {
                FormButton::Submit => {
                    self.submit().await;
                }
                FormButton::Reset => self.dispatch(FormAction::Reset),
            },
            KeyCode::Left if on_choice => self.dispatch(FormAction::CycleChoice { forward: false }),
            KeyCode::Right | KeyCode::Char(' ') if on_choice => {
                self.dispatch(FormAction::CycleChoice { forward: true });
            }
            KeyCode::Enter => match active {
                Some(FieldName::BirthDate) => self.dispatch(FormAction::ToggleCalendar),
                Some(FieldName::AttachedFile) => {
                    let typed = self.state.form.attachment_path.as_text().to_string();
                    self.drop_paths(parse_dropped_paths(&typed));
                }
                _ => self.dispatch(FormAction::FocusNext),
            },
            KeyCode::Down => self.dispatch(FormAction::FocusNext),
            KeyCode::Up => self.dispatch(FormAction::FocusPrev),
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                self.dispatch(FormAction::InputChar(c));
            }
            KeyCode::Backspace => self.dispatch(FormAction::Backspace),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::{Attachment, FileKind};
    use crate::i18n::Locale;
    use crate::state::{Dialog, ErrorKind};
    use crate::submission::MockSubmissionHandler;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config() -> FormConfig {
        FormConfig {
            locale: Some(Locale::En),
            calendar_start: Some("2024-03-20".to_string()),
        }
    }

    fn app_with(handler: MockSubmissionHandler) -> App {
        App::new(&config(), Box::new(handler))
    }

    fn attachment() -> Attachment {
        Attachment {
            name: "cv.pdf".to_string(),
            path: PathBuf::from("/tmp/cv.pdf"),
            size_bytes: 2048,
            kind: FileKind::Pdf,
        }
    }

    fn fill(app: &mut App) {
        app.set_field(FieldName::FullName, "Sara Ahmadi");
        app.set_field(FieldName::PhoneNumber, "+989123456789");
        app.set_field(FieldName::Email, "a@b.com");
        app.dispatch(FormAction::DateSelected("1990-05-15".to_string()));
        app.set_field(FieldName::Gender, "female");
        app.set_field(FieldName::MilitaryStatus, "notCompleted");
        app.dispatch(FormAction::FilesAccepted(vec![attachment()]));
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn temp_file(suffix: &str, bytes: usize) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(&vec![0u8; bytes]).unwrap();
        file
    }

    fn file_name(file: &NamedTempFile) -> String {
        file.path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned()
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_valid_form_calls_handler_once() {
            let mut handler = MockSubmissionHandler::new();
            handler
                .expect_submit()
                .withf(|record, attachment| {
                    record.birth_date == "1369/02/25" && attachment.name == "cv.pdf"
                })
                .times(1)
                .returning(|_, _| Ok(()));
            let mut app = app_with(handler);
            fill(&mut app);

            assert_eq!(app.submit().await, SubmitOutcome::Submitted);
            assert_eq!(app.state.dialog, Some(Dialog::Submitted));
            assert!(app.state.errors.is_empty());
        }

        #[tokio::test]
        async fn test_invalid_form_never_calls_handler() {
            let mut handler = MockSubmissionHandler::new();
            handler.expect_submit().times(0);
            let mut app = app_with(handler);
            fill(&mut app);
            app.set_field(FieldName::Email, "not-an-email");

            assert_eq!(app.submit().await, SubmitOutcome::Invalid(1));
            let error = app.state.errors.get(FieldName::Email).unwrap();
            assert_eq!(error.kind, ErrorKind::InvalidEmail);
            assert!(app.state.dialog.is_none());
        }

        #[tokio::test]
        async fn test_missing_attachment_blocks_submit() {
            let mut handler = MockSubmissionHandler::new();
            handler.expect_submit().times(0);
            let mut app = app_with(handler);
            fill(&mut app);
            app.state.attachment = None;

            assert_eq!(app.submit().await, SubmitOutcome::Invalid(1));
            assert!(app.state.errors.contains(FieldName::AttachedFile));
        }

        #[tokio::test]
        async fn test_resubmit_after_fix_clears_error() {
            let mut handler = MockSubmissionHandler::new();
            handler.expect_submit().times(1).returning(|_, _| Ok(()));
            let mut app = app_with(handler);
            fill(&mut app);
            app.set_field(FieldName::PhoneNumber, "0912345678");

            assert_eq!(app.submit().await, SubmitOutcome::Invalid(1));
            assert!(app.state.errors.contains(FieldName::PhoneNumber));

            app.set_field(FieldName::PhoneNumber, "09123456789");
            assert_eq!(app.submit().await, SubmitOutcome::Submitted);
            assert!(!app.state.errors.contains(FieldName::PhoneNumber));
        }

        #[tokio::test]
        async fn test_handler_error_opens_error_dialog() {
            let mut handler = MockSubmissionHandler::new();
            handler
                .expect_submit()
                .times(1)
                .returning(|_, _| Err(anyhow::anyhow!("backend unavailable")));
            let mut app = app_with(handler);
            fill(&mut app);

            assert_eq!(app.submit().await, SubmitOutcome::HandlerFailed);
            assert_eq!(
                app.state.dialog,
                Some(Dialog::Error("backend unavailable".to_string()))
            );
            assert_eq!(app.state.form.full_name.as_text(), "Sara Ahmadi");
        }

        #[tokio::test]
        async fn test_ctrl_s_submits() {
            let mut handler = MockSubmissionHandler::new();
            handler.expect_submit().times(1).returning(|_, _| Ok(()));
            let mut app = app_with(handler);
            fill(&mut app);

            app.handle_key(ctrl('s')).await.unwrap();
            assert_eq!(app.state.dialog, Some(Dialog::Submitted));
        }
    }

    mod keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_typing_fills_focused_field() {
            let mut app = app_with(MockSubmissionHandler::new());
            for c in "Sara".chars() {
                app.handle_key(key(KeyCode::Char(c))).await.unwrap();
            }
            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            assert_eq!(app.state.form.full_name.as_text(), "Sar");
        }

        #[tokio::test]
        async fn test_tab_moves_focus() {
            let mut app = app_with(MockSubmissionHandler::new());
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(
                app.state.form.active_field_name(),
                Some(FieldName::PhoneNumber)
            );
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            assert_eq!(app.state.form.active_field_name(), Some(FieldName::FullName));
        }

        #[tokio::test]
        async fn test_space_cycles_select() {
            let mut app = app_with(MockSubmissionHandler::new());
            app.dispatch(FormAction::Focus(FieldName::Gender));
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            assert_eq!(app.state.form.gender.as_text(), "male");
            app.handle_key(key(KeyCode::Left)).await.unwrap();
            assert_eq!(app.state.form.gender.as_text(), "");
        }

        #[tokio::test]
        async fn test_calendar_flow_sets_birth_date() {
            let mut app = app_with(MockSubmissionHandler::new());
            app.dispatch(FormAction::Focus(FieldName::BirthDate));

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.is_calendar_visible());

            // 2024-03-20 + 1 day = 1403/01/02
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.form.birth_date.as_text(), "1403/01/02");
            assert!(app.state.is_calendar_visible());

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(!app.state.is_calendar_visible());
        }

        #[tokio::test]
        async fn test_calendar_swallows_typing() {
            let mut app = app_with(MockSubmissionHandler::new());
            app.dispatch(FormAction::ToggleCalendar);
            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            assert_eq!(app.state.form.full_name.as_text(), "");
        }

        #[tokio::test]
        async fn test_dialog_dismissed_with_enter() {
            let mut app = app_with(MockSubmissionHandler::new());
            app.dispatch(FormAction::SubmitFailed("x".to_string()));
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.dialog.is_none());
        }

        #[tokio::test]
        async fn test_reset_button() {
            let mut app = app_with(MockSubmissionHandler::new());
            fill(&mut app);
            app.dispatch(FormAction::FocusPrev);
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(app.state.form.selected_button, FormButton::Reset);
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.form.full_name.as_text(), "");
            assert!(app.state.attachment.is_none());
        }

        #[tokio::test]
        async fn test_ctrl_c_quits_from_calendar() {
            let mut app = app_with(MockSubmissionHandler::new());
            app.dispatch(FormAction::ToggleCalendar);
            assert!(!app.should_quit());
            app.handle_key(ctrl('c')).await.unwrap();
            assert!(app.should_quit());
        }
    }

    mod drops {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_paste_of_existing_files_attaches_first() {
            let first = temp_file(".pdf", 1536);
            let second = temp_file(".png", 10);
            let mut app = app_with(MockSubmissionHandler::new());

            app.handle_paste(&format!(
                "{} {}",
                first.path().display(),
                second.path().display()
            ));

            let attachment = app.state.attachment.clone().unwrap();
            assert_eq!(attachment.name, file_name(&first));
            assert_eq!(attachment.size_kib(), "1.50");
            assert!(app.state.errors.is_empty());
            assert_eq!(app.state.form.full_name.as_text(), "");

            let status = app.state.status_message.clone().unwrap();
            assert!(status.starts_with(&format!("{} (1.50 KB)", file_name(&first))));
            assert!(status.contains(&format!(
                "{}: only one file can be attached",
                second.path().display()
            )));
        }

        #[test]
        fn test_paste_of_plain_text_types_into_field() {
            let mut app = app_with(MockSubmissionHandler::new());
            app.handle_paste("Sara Ahmadi");
            assert_eq!(app.state.form.full_name.as_text(), "Sara Ahmadi");
            assert!(app.state.attachment.is_none());
        }

        #[test]
        fn test_unsupported_drop_reports_status_only() {
            let notes = temp_file(".txt", 10);
            let mut app = app_with(MockSubmissionHandler::new());

            app.drop_paths(vec![notes.path().to_path_buf()]);

            assert!(app.state.attachment.is_none());
            assert!(app.state.status_message.is_some());
            assert!(app.state.errors.is_empty());
        }

        #[tokio::test]
        async fn test_enter_on_typed_path_attaches() {
            let gif = temp_file(".gif", 100);
            let mut app = app_with(MockSubmissionHandler::new());
            app.dispatch(FormAction::Focus(FieldName::AttachedFile));
            app.set_field(FieldName::AttachedFile, gif.path().display().to_string());

            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(
                app.state.attachment.as_ref().map(|a| a.kind),
                Some(FileKind::Gif)
            );
            assert_eq!(app.state.form.attachment_path.as_text(), "");
        }
    }
}
