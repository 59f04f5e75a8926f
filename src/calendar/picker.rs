//! Month-grid date picker state

use super::jalali::{month_length, JalaliDate};
use chrono::{Datelike, Days, NaiveDate};

/// Cursor movement inside the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarMove {
    Days(i64),
    Months(i32),
}

/// Visibility flag plus the highlighted day.
///
/// The cursor is kept as a Gregorian date because that is what the
/// picker hands to the birth date adapter; it is displayed in Jalali.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarPicker {
    pub visible: bool,
    pub cursor: NaiveDate,
}

impl CalendarPicker {
    pub fn new(cursor: NaiveDate) -> Self {
        Self {
            visible: false,
            cursor,
        }
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    /// Place the cursor on an existing birth date value if it parses
    pub fn focus_value(&mut self, birth_date: &str) {
        let parsed = birth_date
            .parse::<JalaliDate>()
            .ok()
            .and_then(|date| date.to_gregorian().ok());
        if let Some(date) = parsed {
            self.cursor = date;
        }
    }

    /// Move the cursor; moves that leave the supported range are ignored
    pub fn move_cursor(&mut self, movement: CalendarMove) {
        let moved = match movement {
            CalendarMove::Days(n) if n >= 0 => self.cursor.checked_add_days(Days::new(n as u64)),
            CalendarMove::Days(n) => self.cursor.checked_sub_days(Days::new(n.unsigned_abs())),
            CalendarMove::Months(n) => JalaliDate::from_gregorian(self.cursor)
                .ok()
                .and_then(|date| date.add_months(n))
                .and_then(|date| date.to_gregorian().ok()),
        };
        if let Some(date) = moved.filter(|date| JalaliDate::from_gregorian(*date).is_ok()) {
            self.cursor = date;
        }
    }

    /// The cursor as the raw date string the calendar reports on selection
    pub fn selected_raw(&self) -> String {
        self.cursor.format("%Y-%m-%d").to_string()
    }

    pub fn cursor_jalali(&self) -> Option<JalaliDate> {
        JalaliDate::from_gregorian(self.cursor).ok()
    }

    /// Grid of the cursor's Jalali month: rows of seven cells, Saturday
    /// first, `None` for padding before day 1 and after the last day
    pub fn month_grid(&self) -> Vec<[Option<u32>; 7]> {
        let Some(today) = self.cursor_jalali() else {
            return Vec::new();
        };
        let Ok(first) = today.first_of_month().to_gregorian() else {
            return Vec::new();
        };
        // Saturday = 0
        let lead = ((first.weekday().num_days_from_sunday() + 1) % 7) as usize;
        let days = month_length(today.year, today.month);

        let mut cells: Vec<Option<u32>> = vec![None; lead];
        cells.extend((1..=days).map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        cells
            .chunks(7)
            .map(|week| {
                let mut row = [None; 7];
                row.copy_from_slice(week);
                row
            })
            .collect()
    }
}
