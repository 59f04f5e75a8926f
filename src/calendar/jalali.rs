//! Solar Hijri (Jalali) calendar arithmetic
//!
//! Year boundaries follow the 33-year cycle table with the break years
//! where the cycle shifts, so conversions agree with the astronomical
//! calendar for Jalali years -61 through 3177. The Gregorian side is
//! delegated to `chrono`.

use chrono::{Datelike, Days, NaiveDate};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Jalali years where the leap cycle restarts
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

pub const MIN_YEAR: i32 = BREAKS[0];
pub const MAX_YEAR: i32 = BREAKS[BREAKS.len() - 1] - 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateConversionError {
    #[error("unrecognized date: {0:?}")]
    Unparseable(String),
    #[error("date is outside the supported calendar range")]
    OutOfRange,
}

/// Position of a Jalali year inside its leap cycle
struct YearInfo {
    /// Years since the last leap year; 0 means this year is leap
    leap: i32,
    gregorian_year: i32,
    /// Day of March on which Farvardin 1 falls
    march_day: u32,
}

fn year_info(jy: i32) -> Option<YearInfo> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&jy) {
        return None;
    }

    let gy = jy + 621;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;

    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        jp = jm;
    }

    let mut n = jy - jp;
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march_day = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Some(YearInfo {
        leap,
        gregorian_year: gy,
        march_day: u32::try_from(march_day).ok()?,
    })
}

/// Whether Esfand of `year` has 30 days
pub fn is_leap_year(year: i32) -> bool {
    year_info(year).is_some_and(|info| info.leap == 0)
}

/// Days in a 1-based Jalali month; 0 for an invalid month
pub fn month_length(year: i32, month: u32) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 if is_leap_year(year) => 30,
        12 => 29,
        _ => 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl JalaliDate {
    /// Build a date, rejecting days past the end of the month
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) || day == 0 || day > month_length(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn from_gregorian(date: NaiveDate) -> Result<Self, DateConversionError> {
        let gy = date.year();
        let mut year = gy - 621;
        let info = year_info(year).ok_or(DateConversionError::OutOfRange)?;
        let nowruz = NaiveDate::from_ymd_opt(gy, 3, info.march_day)
            .ok_or(DateConversionError::OutOfRange)?;

        let mut k = i32::try_from(date.signed_duration_since(nowruz).num_days())
            .map_err(|_| DateConversionError::OutOfRange)?;

        if k >= 0 {
            if k <= 185 {
                let date = Self {
                    year,
                    month: (1 + k / 31) as u32,
                    day: (k % 31 + 1) as u32,
                };
                return Ok(date);
            }
            k -= 186;
        } else {
            // Before Nowruz: the tail of the previous Jalali year
            year -= 1;
            k += 179;
            if info.leap == 1 {
                k += 1;
            }
        }

        if year < MIN_YEAR {
            return Err(DateConversionError::OutOfRange);
        }
        Ok(Self {
            year,
            month: (7 + k / 30) as u32,
            day: (k % 30 + 1) as u32,
        })
    }

    pub fn to_gregorian(&self) -> Result<NaiveDate, DateConversionError> {
        let info = year_info(self.year).ok_or(DateConversionError::OutOfRange)?;
        let nowruz = NaiveDate::from_ymd_opt(info.gregorian_year, 3, info.march_day)
            .ok_or(DateConversionError::OutOfRange)?;
        let m = self.month as i64;
        let offset = (m - 1) * 31 - (m / 7) * (m - 7) + self.day as i64 - 1;
        let offset = u64::try_from(offset).map_err(|_| DateConversionError::OutOfRange)?;
        nowruz
            .checked_add_days(Days::new(offset))
            .ok_or(DateConversionError::OutOfRange)
    }

    /// Shift by whole months, clamping the day to the target month's length
    pub fn add_months(&self, delta: i32) -> Option<Self> {
        let total = self.year * 12 + (self.month as i32 - 1) + delta;
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u32;
        let day = self.day.min(month_length(year, month));
        Self::new(year, month, day)
    }

    pub fn first_of_month(&self) -> Self {
        Self { day: 1, ..*self }
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for JalaliDate {
    type Err = DateConversionError;

    /// Parse `YYYY/MM/DD`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparseable = || DateConversionError::Unparseable(s.to_string());
        let mut parts = s.trim().split('/');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(unparseable());
        };
        let year: i32 = year.parse().map_err(|_| unparseable())?;
        let month: u32 = month.parse().map_err(|_| unparseable())?;
        let day: u32 = day.parse().map_err(|_| unparseable())?;
        Self::new(year, month, day).ok_or_else(unparseable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod conversion {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_nowruz_1403() {
            let date = JalaliDate::from_gregorian(ymd(2024, 3, 20)).unwrap();
            assert_eq!(date.to_string(), "1403/01/01");
        }

        #[test]
        fn test_second_month() {
            let date = JalaliDate::from_gregorian(ymd(1990, 5, 15)).unwrap();
            assert_eq!(date.to_string(), "1369/02/25");
        }

        #[test]
        fn test_before_nowruz_falls_in_previous_year() {
            let date = JalaliDate::from_gregorian(ymd(2000, 1, 1)).unwrap();
            assert_eq!(date.to_string(), "1378/10/11");
        }

        #[test]
        fn test_last_day_of_leap_year() {
            // 1403 is leap, so Esfand has 30 days
            let date = JalaliDate::from_gregorian(ymd(2025, 3, 20)).unwrap();
            assert_eq!(date.to_string(), "1403/12/30");
            let next = JalaliDate::from_gregorian(ymd(2025, 3, 21)).unwrap();
            assert_eq!(next.to_string(), "1404/01/01");
        }

        #[test]
        fn test_mehr_first() {
            let date = JalaliDate::from_gregorian(ymd(2023, 9, 23)).unwrap();
            assert_eq!(date.to_string(), "1402/07/01");
        }

        #[test]
        fn test_to_gregorian_inverts_known_dates() {
            assert_eq!(
                JalaliDate::new(1403, 1, 1).unwrap().to_gregorian().unwrap(),
                ymd(2024, 3, 20)
            );
            assert_eq!(
                JalaliDate::new(1378, 10, 11).unwrap().to_gregorian().unwrap(),
                ymd(2000, 1, 1)
            );
            assert_eq!(
                JalaliDate::new(1402, 7, 1).unwrap().to_gregorian().unwrap(),
                ymd(2023, 9, 23)
            );
        }

        #[test]
        fn test_every_day_of_a_year_round_trips() {
            let mut day = ymd(2023, 1, 1);
            let end = ymd(2025, 12, 31);
            while day <= end {
                let jalali = JalaliDate::from_gregorian(day).unwrap();
                assert_eq!(jalali.to_gregorian().unwrap(), day, "{jalali}");
                day = day.succ_opt().unwrap();
            }
        }

        #[test]
        fn test_out_of_range_year() {
            assert_eq!(
                JalaliDate::from_gregorian(ymd(4000, 1, 1)),
                Err(DateConversionError::OutOfRange)
            );
        }
    }

    mod leap_years {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_known_leap_years() {
            assert!(is_leap_year(1399));
            assert!(is_leap_year(1403));
            assert!(!is_leap_year(1400));
            assert!(!is_leap_year(1402));
        }

        #[test]
        fn test_month_lengths() {
            assert_eq!(month_length(1402, 1), 31);
            assert_eq!(month_length(1402, 6), 31);
            assert_eq!(month_length(1402, 7), 30);
            assert_eq!(month_length(1402, 12), 29);
            assert_eq!(month_length(1403, 12), 30);
            assert_eq!(month_length(1403, 13), 0);
        }
    }

    mod date_value {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_rejects_invalid_days() {
            assert!(JalaliDate::new(1402, 12, 30).is_none());
            assert!(JalaliDate::new(1403, 12, 30).is_some());
            assert!(JalaliDate::new(1402, 7, 31).is_none());
            assert!(JalaliDate::new(1402, 0, 1).is_none());
            assert!(JalaliDate::new(1402, 1, 0).is_none());
        }

        #[test]
        fn test_display_zero_pads() {
            assert_eq!(JalaliDate::new(1369, 2, 5).unwrap().to_string(), "1369/02/05");
        }

        #[test]
        fn test_from_str() {
            let date: JalaliDate = "1369/02/25".parse().unwrap();
            assert_eq!(date, JalaliDate::new(1369, 2, 25).unwrap());
            assert!("1369-02-25".parse::<JalaliDate>().is_err());
            assert!("1369/02".parse::<JalaliDate>().is_err());
            assert!("1369/02/25/1".parse::<JalaliDate>().is_err());
            assert!("1402/12/30".parse::<JalaliDate>().is_err());
        }

        #[test]
        fn test_add_months_clamps_day() {
            let date = JalaliDate::new(1402, 6, 31).unwrap();
            assert_eq!(date.add_months(1), JalaliDate::new(1402, 7, 30));
            assert_eq!(date.add_months(6), JalaliDate::new(1402, 12, 29));
        }

        #[test]
        fn test_add_months_crosses_years() {
            let date = JalaliDate::new(1402, 12, 1).unwrap();
            assert_eq!(date.add_months(1), JalaliDate::new(1403, 1, 1));
            let date = JalaliDate::new(1403, 1, 15).unwrap();
            assert_eq!(date.add_months(-1), JalaliDate::new(1402, 12, 15));
        }
    }
}
