//! UI module for rendering the TUI

mod calendar;
mod components;
mod forms;
mod layout;

use crate::state::{AppState, Dialog};
use components::{render_error_dialog, render_notice_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_registration_form(frame, main_area, state);

    if state.is_calendar_visible() {
        calendar::draw(frame, state);
    }

    match &state.dialog {
        Some(Dialog::Submitted) => render_notice_dialog(frame, state.locale),
        Some(Dialog::Error(message)) => render_error_dialog(frame, state.locale, message),
        None => {}
    }

    layout::draw_status_bar(frame, status_area, state);
}
