//! Success notice shown after a submission is handed off

use super::base::{dismiss_hint, render_dialog, DialogConfig};
use crate::i18n::{ui_text, Locale, UiText};
use ratatui::{style::Color, Frame};

pub fn render_notice_dialog(frame: &mut Frame, locale: Locale) {
    render_dialog(
        frame,
        DialogConfig {
            title: ui_text(locale, UiText::Submitted),
            title_color: Color::Green,
            border_color: Color::Green,
            hint: Some(dismiss_hint(locale)),
            max_width: 50,
            ..Default::default()
        },
    );
}
