//! Dialog components for TUI

mod base;
mod error_dialog;
mod notice_dialog;

pub use error_dialog::render_error_dialog;
pub use notice_dialog::render_notice_dialog;
