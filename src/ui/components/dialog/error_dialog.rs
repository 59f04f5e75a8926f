//! Error dialog component

use super::base::{dismiss_hint, render_dialog, DialogConfig};
use crate::i18n::{ui_text, Locale, UiText};
use ratatui::{style::Color, Frame};

/// Render the submission failure dialog centered on the screen
pub fn render_error_dialog(frame: &mut Frame, locale: Locale, error_message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: ui_text(locale, UiText::SubmitFailed),
            title_color: Color::Red,
            border_color: Color::Red,
            message: error_message,
            hint: Some(dismiss_hint(locale)),
            max_width: 60,
        },
    );
}
