//! Birth date calendar
//!
//! - `jalali`: Solar Hijri conversion and month arithmetic
//! - `adapter`: raw calendar date to the stored birth date string
//! - `picker`: month-grid picker state

mod adapter;
mod jalali;
mod picker;

pub use adapter::{parse_gregorian, to_birth_date};
pub use picker::{CalendarMove, CalendarPicker};
