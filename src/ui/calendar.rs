//! Jalali month popup for picking the birth date

use crate::i18n::{month_name, ui_text, weekday_headers, Locale, UiText};
use crate::state::AppState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Each day cell is 4 columns wide
const CELL_WIDTH: u16 = 4;

/// Render the picker centered over the form
pub fn draw(frame: &mut Frame, state: &AppState) {
    let picker = &state.calendar;
    let Some(cursor) = picker.cursor_jalali() else {
        return;
    };
    let grid = picker.month_grid();

    let area = frame.area();
    let popup_width = CELL_WIDTH * 7 + 16;
    let popup_height = grid.len() as u16 + 7;
    let popup_area = Rect {
        x: area.x + area.width.saturating_sub(popup_width) / 2,
        y: area.y + area.height.saturating_sub(popup_height) / 2,
        width: popup_width.min(area.width),
        height: popup_height.min(area.height),
    };

    frame.render_widget(Clear, popup_area);

    let mut content = vec![
        Line::from(Span::styled(
            format!("{} {}", month_name(state.locale, cursor.month), cursor.year),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        header_line(state.locale),
    ];
    content.extend(grid.iter().map(|week| week_line(week, cursor.day)));
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("←→↑↓", Style::default().fg(Color::Cyan)),
        Span::styled(" day  ", Style::default().fg(Color::DarkGray)),
        Span::styled("PgUp/PgDn", Style::default().fg(Color::Cyan)),
        Span::styled(" month  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" select", Style::default().fg(Color::DarkGray)),
    ]));

    let popup = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" Esc: {} ", ui_text(state.locale, UiText::CloseCalendar)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(popup, popup_area);
}

fn header_line(locale: Locale) -> Line<'static> {
    let spans = weekday_headers(locale)
        .into_iter()
        .map(|name| {
            Span::styled(
                pad_cell(name),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn week_line(week: &[Option<u32>; 7], selected_day: u32) -> Line<'static> {
    let spans = week
        .iter()
        .map(|cell| match cell {
            Some(day) if *day == selected_day => Span::styled(
                pad_cell(&day.to_string()),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Some(day) => Span::raw(pad_cell(&day.to_string())),
            None => Span::raw(pad_cell("")),
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

/// Right-align text in a day cell
fn pad_cell(text: &str) -> String {
    format!("{text:>width$} ", width = CELL_WIDTH as usize - 1)
}
