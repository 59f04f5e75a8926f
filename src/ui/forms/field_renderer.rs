//! Field rendering utilities for forms

use crate::i18n::{choice_label, field_label, ui_text, Locale, UiText};
use crate::state::{FieldError, FieldValue, FormField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus its error line
pub const FIELD_HEIGHT: u16 = 4;

/// Text shown inside the input box
pub fn display_value(field: &FormField, locale: Locale, is_active: bool) -> String {
    match &field.value {
        FieldValue::Choice { value, .. } => {
            let label = if value.is_empty() {
                ui_text(locale, UiText::SelectPlaceholder)
            } else {
                choice_label(locale, value)
            };
            if is_active {
                format!("◂ {label} ▸")
            } else {
                label.to_string()
            }
        }
        FieldValue::Text(text) if text.is_empty() && !is_active => "(empty)".to_string(),
        FieldValue::Text(text) => text.clone(),
    }
}

/// Draw a form field with its label and, below it, its current error
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&FieldError>,
    locale: Locale,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_color = match (is_active, error.is_some()) {
        (true, _) => Color::Cyan,
        (false, true) => Color::Red,
        (false, false) => Color::DarkGray,
    };
    let text_color = if is_active { Color::Cyan } else { Color::Gray };

    let mut spans = vec![Span::styled(
        display_value(field, locale, is_active),
        Style::default().fg(text_color),
    )];
    if is_active && !field.is_choice() {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .title(format!(" {} ", field_label(locale, field.name)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[0]);

    if let Some(error) = error {
        let message = Paragraph::new(Span::styled(
            format!(" {}", error.message),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(message, chunks[1]);
    }
}

/// Draw a dimmed hint line
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldName, Gender};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_text_placeholder_only_when_inactive() {
        let field = FormField::text(FieldName::Email);
        assert_eq!(display_value(&field, Locale::En, false), "(empty)");
        assert_eq!(display_value(&field, Locale::En, true), "");
    }

    #[test]
    fn test_choice_shows_localized_label() {
        let mut field = FormField::choice(FieldName::Gender, Gender::OPTIONS);
        assert_eq!(display_value(&field, Locale::En, false), "Select");

        field.cycle_choice(true);
        assert_eq!(display_value(&field, Locale::En, false), "Male");
        assert_eq!(display_value(&field, Locale::Fa, false), "مرد");
        assert_eq!(display_value(&field, Locale::En, true), "◂ Male ▸");
    }
}
