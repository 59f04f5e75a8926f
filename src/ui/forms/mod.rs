//! Form rendering module
//!
//! - `field_renderer`: single field with label and error line
//! - `registration_form`: the registration screen and its action panel

mod field_renderer;
mod registration_form;

pub use registration_form::draw as draw_registration_form;
