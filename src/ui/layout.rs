//! Layout components (content area, status bar)

use crate::i18n::field_label;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(
        format!(" {} ", get_hints(state)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)));
    }

    if !state.errors.is_empty() {
        let fields = state
            .errors
            .fields()
            .map(|field| field_label(state.locale, field))
            .collect::<Vec<_>>()
            .join(", ");
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("✗ {fields}"),
            Style::default().fg(Color::Red),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current mode
fn get_hints(state: &AppState) -> String {
    if state.dialog.is_some() {
        "Enter/Esc:dismiss".to_string()
    } else if state.is_calendar_visible() {
        "←→↑↓:day  PgUp/PgDn:month  Enter:select  Esc:close".to_string()
    } else if state.form.is_buttons_row_active() {
        "←→:choose  Enter:press  Tab:next".to_string()
    } else {
        format!("Tab:next  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:reset")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::state::FormAction;
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState::new(Locale::En, NaiveDate::from_ymd_opt(2024, 3, 20).unwrap())
    }

    #[test]
    fn test_layout_reserves_status_line() {
        let (content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(content.height, 23);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
    }

    #[test]
    fn test_hints_follow_mode() {
        assert!(get_hints(&state()).contains(SUBMIT_SHORTCUT));
        assert!(get_hints(&state().reduce(FormAction::ToggleCalendar)).contains("PgUp"));
        assert!(get_hints(&state().reduce(FormAction::SubmitFailed("x".to_string())))
            .contains("dismiss"));
    }
}
