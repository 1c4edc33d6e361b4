//! Date window derivation and end-date parsing

use crate::error::{Result, WindowError};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Full timestamps, with optional fractional seconds
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y%m%dT%H:%M:%S%.f",
];

/// Dates without a time component, read as midnight
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

/// Date used for strings that only carry a time of day
const TIME_ONLY_DATE: (i32, u32, u32) = (1900, 1, 1);

/// The `(start, end, future)` triple bounding a training window and the
/// forecast horizon that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    /// First timestamp of the training interval
    pub start: NaiveDateTime,
    /// Anchor: last timestamp of the training interval
    pub end: NaiveDateTime,
    /// Last timestamp of the forecast horizon
    pub future: NaiveDateTime,
}

/// Computes a [`DateWindow`] from an anchor and two window lengths in days.
///
/// Implementations must return `start <= end <= future` for every input;
/// the time range still re-checks the ordering after deriving.
pub trait DateWindowDeriver {
    /// Derive the window around `end_date`
    fn derive(
        &self,
        end_date: NaiveDateTime,
        train_window: u32,
        future_window: u32,
    ) -> Result<DateWindow>;
}

impl<F> DateWindowDeriver for F
where
    F: Fn(NaiveDateTime, u32, u32) -> Result<DateWindow>,
{
    fn derive(
        &self,
        end_date: NaiveDateTime,
        train_window: u32,
        future_window: u32,
    ) -> Result<DateWindow> {
        self(end_date, train_window, future_window)
    }
}

/// Plain calendar-day arithmetic: the training window starts
/// `train_window` days before the anchor and the horizon ends
/// `future_window` days after it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarDayDeriver;

impl DateWindowDeriver for CalendarDayDeriver {
    fn derive(
        &self,
        end_date: NaiveDateTime,
        train_window: u32,
        future_window: u32,
    ) -> Result<DateWindow> {
        let start = end_date
            .checked_sub_signed(Duration::days(i64::from(train_window)))
            .ok_or_else(|| {
                WindowError::DateOutOfRange(format!(
                    "{} minus {} days",
                    end_date, train_window
                ))
            })?;
        let future = end_date
            .checked_add_signed(Duration::days(i64::from(future_window)))
            .ok_or_else(|| {
                WindowError::DateOutOfRange(format!(
                    "{} plus {} days",
                    end_date, future_window
                ))
            })?;

        Ok(DateWindow {
            start,
            end: end_date,
            future,
        })
    }
}

/// Parse a timestamp string in one of the layouts pipelines commonly pass
/// around.
///
/// Accepted, in order: `2019-10-25 18:35:22[.000333]`,
/// `2019-10-25T18:35:22[.000333]`, `20191025T18:35:22`, `2019-10-25T18`,
/// `2019-10-25`, `20191025`, `201910` (first of the month) and
/// `18:35:22[.000333]` (on 1900-01-01).
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }

    // Hour-only timestamps
    if let Ok(parsed) = NaiveDateTime::parse_from_str(&format!("{}:00", value), "%Y-%m-%dT%H:%M")
    {
        return Ok(parsed);
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date.and_time(NaiveTime::MIN));
        }
    }

    // Year and month only
    if value.len() == 6 {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{}01", value), "%Y%m%d") {
            return Ok(date.and_time(NaiveTime::MIN));
        }
    }

    if let Ok(time) = NaiveTime::parse_from_str(value, "%H:%M:%S%.f") {
        let (year, month, day) = TIME_ONLY_DATE;
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| WindowError::InvalidDate(value.to_string()))?;
        return Ok(date.and_time(time));
    }

    Err(WindowError::InvalidDate(format!(
        "{} does not match any supported date format",
        value
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_calendar_day_deriver() {
        let window = CalendarDayDeriver.derive(at(2019, 7, 1), 365 * 4, 365).unwrap();

        assert_eq!(window.start, at(2015, 7, 2));
        assert_eq!(window.end, at(2019, 7, 1));
        assert_eq!(window.future, at(2020, 6, 30));
    }

    #[test]
    fn test_zero_windows_collapse_to_anchor() {
        let anchor = at(2021, 3, 14);
        let window = CalendarDayDeriver.derive(anchor, 0, 0).unwrap();

        assert_eq!(window.start, anchor);
        assert_eq!(window.future, anchor);
    }

    #[test]
    fn test_deriver_reports_overflow() {
        let result = CalendarDayDeriver.derive(NaiveDateTime::MAX, 0, 1);
        assert!(matches!(result, Err(WindowError::DateOutOfRange(_))));

        let result = CalendarDayDeriver.derive(NaiveDateTime::MIN, 1, 0);
        assert!(matches!(result, Err(WindowError::DateOutOfRange(_))));
    }

    #[test]
    fn test_closure_deriver() {
        let weekly = |end: NaiveDateTime, train: u32, future: u32| -> Result<DateWindow> {
            Ok(DateWindow {
                start: end - Duration::weeks(i64::from(train)),
                end,
                future: end + Duration::weeks(i64::from(future)),
            })
        };

        let window = weekly.derive(at(2020, 1, 15), 2, 1).unwrap();
        assert_eq!(window.start, at(2020, 1, 1));
        assert_eq!(window.future, at(2020, 1, 22));
    }
}
