//! Validated training and forecast windows

use crate::dates::{parse_datetime, CalendarDayDeriver, DateWindowDeriver};
use crate::error::{Result, WindowError};
use crate::granularity::TimeGranularity;
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Layout used when writing dates back into settings
const SETTINGS_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Raw, unvalidated inputs of a [`TimeRangeConfiguration`], as they appear
/// in pipeline configuration files.
///
/// ```json
/// {
///     "end_date": "2019-07-01",
///     "forecast_train_window": 1460,
///     "forecast_future_window": 365,
///     "time_granularity": "M"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRangeSettings {
    /// Anchor date, in any layout accepted by [`parse_datetime`]
    pub end_date: String,
    /// Days of history before the anchor
    pub forecast_train_window: u32,
    /// Days of forecast horizon after the anchor
    pub forecast_future_window: u32,
    /// Granularity code (`H`, `D`, `W` or `M`)
    pub time_granularity: String,
    /// Hour the derived end date is pinned to
    #[serde(default)]
    pub end_hour: u32,
}

/// Time configuration that stays constant when a forecast is reprocessed.
///
/// Built once and never mutated. Construction either yields a value with
/// `start_date <= end_date <= future_date` and a known granularity, or
/// fails with [`WindowError::InvalidConfiguration`].
///
/// ```
/// use chrono::NaiveDate;
/// use forecast_window::{TimeGranularity, TimeRangeConfiguration};
///
/// let end = NaiveDate::from_ymd_opt(2019, 7, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let trc = TimeRangeConfiguration::new(end, 365 * 4, 365, TimeGranularity::Monthly, 0).unwrap();
///
/// assert_eq!(trc.start_date().to_string(), "2015-07-02 00:00:00");
/// assert_eq!(trc.future_date().to_string(), "2020-06-30 00:00:00");
/// assert!(trc.is_monthly());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "TimeRangeSettings", try_from = "TimeRangeSettings")]
pub struct TimeRangeConfiguration {
    anchor_date: NaiveDateTime,
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
    future_date: NaiveDateTime,
    forecast_train_window: u32,
    forecast_future_window: u32,
    time_granularity: TimeGranularity,
    end_hour: u32,
}

impl TimeRangeConfiguration {
    /// Create a time range using calendar-day arithmetic around `end_date`.
    ///
    /// Only the hour of the derived end date is replaced by `end_hour`;
    /// minutes and seconds are left as they came out of the deriver.
    pub fn new(
        end_date: NaiveDateTime,
        forecast_train_window: u32,
        forecast_future_window: u32,
        time_granularity: TimeGranularity,
        end_hour: u32,
    ) -> Result<Self> {
        Self::with_deriver(
            &CalendarDayDeriver,
            end_date,
            forecast_train_window,
            forecast_future_window,
            time_granularity,
            end_hour,
        )
    }

    /// Create a time range from a raw granularity code such as `"M"`
    pub fn from_code(
        end_date: NaiveDateTime,
        forecast_train_window: u32,
        forecast_future_window: u32,
        time_granularity: &str,
        end_hour: u32,
    ) -> Result<Self> {
        let time_granularity = TimeGranularity::from_code(time_granularity).map_err(|err| {
            warn!(error = %err, "rejected time range configuration");
            err
        })?;
        Self::new(
            end_date,
            forecast_train_window,
            forecast_future_window,
            time_granularity,
            end_hour,
        )
    }

    /// Create a time range with a custom date window deriver
    pub fn with_deriver<D>(
        deriver: &D,
        end_date: NaiveDateTime,
        forecast_train_window: u32,
        forecast_future_window: u32,
        time_granularity: TimeGranularity,
        end_hour: u32,
    ) -> Result<Self>
    where
        D: DateWindowDeriver + ?Sized,
    {
        let window = deriver.derive(end_date, forecast_train_window, forecast_future_window)?;
        let pinned_end = window.end.with_hour(end_hour).ok_or_else(|| {
            WindowError::InvalidConfiguration(format!(
                "Bad end hour passed:{}, expected a value between 0 and 23.",
                end_hour
            ))
        })?;

        let config = Self {
            anchor_date: end_date,
            start_date: window.start,
            end_date: pinned_end,
            future_date: window.future,
            forecast_train_window,
            forecast_future_window,
            time_granularity,
            end_hour,
        };

        if let Err(err) = config.validate() {
            warn!(error = %err, "rejected time range configuration");
            return Err(err);
        }

        debug!(
            start = %config.start_date,
            end = %config.end_date,
            future = %config.future_date,
            granularity = %config.time_granularity,
            "built time range configuration"
        );
        Ok(config)
    }

    /// Read settings from JSON and build the time range they describe
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: TimeRangeSettings = serde_json::from_str(json)?;
        Self::try_from(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.start_date > self.end_date {
            return Err(WindowError::InvalidConfiguration(format!(
                "Bad dates passed. Start:{}, end:{}.",
                self.start_date, self.end_date
            )));
        }
        if self.end_date > self.future_date {
            return Err(WindowError::InvalidConfiguration(format!(
                "Bad dates passed. End:{}, future:{}.",
                self.end_date, self.future_date
            )));
        }
        Ok(())
    }

    /// Settings that rebuild this time range
    pub fn to_settings(&self) -> TimeRangeSettings {
        TimeRangeSettings {
            end_date: self.anchor_date.format(SETTINGS_DATE_FORMAT).to_string(),
            forecast_train_window: self.forecast_train_window,
            forecast_future_window: self.forecast_future_window,
            time_granularity: self.time_granularity.code().to_string(),
            end_hour: self.end_hour,
        }
    }

    /// End date exactly as it was passed in, before the end hour was applied
    pub fn anchor_date(&self) -> NaiveDateTime {
        self.anchor_date
    }

    /// First timestamp of the training window
    pub fn start_date(&self) -> NaiveDateTime {
        self.start_date
    }

    /// Last timestamp of the training window, pinned to the end hour
    pub fn end_date(&self) -> NaiveDateTime {
        self.end_date
    }

    /// Last timestamp of the forecast horizon
    pub fn future_date(&self) -> NaiveDateTime {
        self.future_date
    }

    pub fn forecast_train_window(&self) -> u32 {
        self.forecast_train_window
    }

    pub fn forecast_future_window(&self) -> u32 {
        self.forecast_future_window
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    pub fn granularity(&self) -> TimeGranularity {
        self.time_granularity
    }

    /// Granularity code, e.g. `"M"`
    pub fn time_granularity(&self) -> &'static str {
        self.time_granularity.code()
    }

    /// Granularity display name, e.g. `"monthly"`
    pub fn time_granularity_name(&self) -> &'static str {
        self.time_granularity.name()
    }

    /// Whole days between the start and end dates
    pub fn train_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Whole days between the end and future dates
    pub fn future_days(&self) -> i64 {
        (self.future_date - self.end_date).num_days()
    }

    pub fn is_hourly(&self) -> bool {
        self.time_granularity == TimeGranularity::Hourly
    }

    pub fn is_daily(&self) -> bool {
        self.time_granularity == TimeGranularity::Daily
    }

    pub fn is_weekly(&self) -> bool {
        self.time_granularity == TimeGranularity::Weekly
    }

    pub fn is_monthly(&self) -> bool {
        self.time_granularity == TimeGranularity::Monthly
    }
}

impl TryFrom<TimeRangeSettings> for TimeRangeConfiguration {
    type Error = WindowError;

    fn try_from(settings: TimeRangeSettings) -> Result<Self> {
        let end_date = parse_datetime(&settings.end_date)?;
        Self::from_code(
            end_date,
            settings.forecast_train_window,
            settings.forecast_future_window,
            &settings.time_granularity,
            settings.end_hour,
        )
    }
}

impl From<TimeRangeConfiguration> for TimeRangeSettings {
    fn from(config: TimeRangeConfiguration) -> Self {
        config.to_settings()
    }
}

impl fmt::Display for TimeRangeConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "train {} .. {}, forecast until {} ({})",
            self.start_date, self.end_date, self.future_date, self.time_granularity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_validate_rejects_inverted_start() {
        let config = TimeRangeConfiguration {
            anchor_date: at(2020, 1, 1, 0),
            start_date: at(2020, 1, 2, 0),
            end_date: at(2020, 1, 1, 0),
            future_date: at(2020, 1, 3, 0),
            forecast_train_window: 0,
            forecast_future_window: 2,
            time_granularity: TimeGranularity::Daily,
            end_hour: 0,
        };

        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("Start:2020-01-02 00:00:00"));
    }

    #[test]
    fn test_display_summary() {
        let config =
            TimeRangeConfiguration::new(at(2020, 1, 10, 0), 9, 5, TimeGranularity::Daily, 0)
                .unwrap();

        assert_eq!(
            config.to_string(),
            "train 2020-01-01 00:00:00 .. 2020-01-10 00:00:00, forecast until 2020-01-15 00:00:00 (daily)"
        );
    }
}
