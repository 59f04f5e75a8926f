//! Registration form rendering

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use crate::i18n::{ui_text, UiText};
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{AppState, FieldName, FormButton};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Field pairs laid out left/right
const GRID: [(FieldName, FieldName); 3] = [
    (FieldName::FullName, FieldName::PhoneNumber),
    (FieldName::Email, FieldName::BirthDate),
    (FieldName::Gender, FieldName::MilitaryStatus),
];

/// Draw the form with the action panel on the right
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], state);
    draw_action_panel(frame, main_chunks[1], state);
}

fn draw_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let form_focused = !state.form.is_buttons_row_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(format!(" {} ", ui_text(state.locale, UiText::FormTitle)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // Name / phone
            Constraint::Length(FIELD_HEIGHT), // Email / birth date
            Constraint::Length(FIELD_HEIGHT), // Gender / military status
            Constraint::Length(FIELD_HEIGHT + 2), // Attachment
            Constraint::Min(0),
            Constraint::Length(1), // Help
        ])
        .margin(1)
        .split(area);

    for (row, (left, right)) in GRID.iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[row]);
        draw_named_field(frame, columns[0], state, *left);
        draw_named_field(frame, columns[1], state, *right);
    }

    draw_attachment(frame, chunks[3], state);

    let help = match state.form.active_field_name() {
        Some(FieldName::BirthDate) => format!(
            "Enter:{}  Tab:next",
            ui_text(state.locale, UiText::OpenCalendar)
        ),
        Some(FieldName::Gender | FieldName::MilitaryStatus) => {
            "←/→/Space:choose  Tab:next".to_string()
        }
        Some(FieldName::AttachedFile) => {
            "Enter:attach path  paste/drop:attach  Tab:next".to_string()
        }
        _ => "Tab:next  Shift+Tab:prev".to_string(),
    };
    draw_help_text(frame, chunks[5], &help);
}

fn draw_named_field(frame: &mut Frame, area: Rect, state: &AppState, name: FieldName) {
    draw_field(
        frame,
        area,
        state.form.field(name),
        state.form.active_field_name() == Some(name),
        state.errors.get(name),
        state.locale,
    );
}

/// Path input followed by the attached file's name and size
fn draw_attachment(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FIELD_HEIGHT), Constraint::Length(2)])
        .split(area);

    draw_named_field(frame, chunks[0], state, FieldName::AttachedFile);

    let lines = attachment_lines(state);
    frame.render_widget(Paragraph::new(lines), chunks[1]);
}

fn attachment_lines(state: &AppState) -> Vec<Line<'static>> {
    let locale = state.locale;
    let label = Style::default().fg(Color::DarkGray);

    match &state.attachment {
        Some(file) => vec![
            Line::from(vec![
                Span::styled(format!(" {} ", ui_text(locale, UiText::UploadedFile)), label),
                Span::styled(
                    file.name.clone(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled(format!(" {} ", ui_text(locale, UiText::FileSize)), label),
                Span::raw(format!("{} KB", file.size_kib())),
            ]),
        ],
        None => vec![Line::from(Span::styled(
            format!(" {}", ui_text(locale, UiText::DropHint)),
            label,
        ))],
    }
}

fn draw_action_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let is_focused = state.form.is_buttons_row_active();
    let selected = state.form.selected_button;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Min(0),
            Constraint::Length(2), // Shortcuts
        ])
        .split(inner_area);

    render_action_button(
        frame,
        button_chunks[0],
        ui_text(state.locale, UiText::Submit),
        is_focused && selected == FormButton::Submit,
        true,
        Some(Color::Green),
    );
    render_action_button(
        frame,
        button_chunks[1],
        ui_text(state.locale, UiText::Reset),
        is_focused && selected == FormButton::Reset,
        true,
        Some(Color::Yellow),
    );

    let shortcuts = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {SUBMIT_SHORTCUT}"),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!(" {RESET_SHORTCUT}"),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(shortcuts, button_chunks[3]);
}
