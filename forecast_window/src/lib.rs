//! # Forecast Window
//!
//! Time windows and step telemetry for forecasting pipelines.
//!
//! ## Features
//!
//! - Derivation of a `(start, end, future)` window from an anchor date, a
//!   training window and a forecast horizon, both in days
//! - Validation of the window ordering and of the reporting granularity
//! - Granularity predicates (`is_hourly`, `is_daily`, `is_weekly`, `is_monthly`)
//! - JSON settings for pipeline configuration files
//! - A metric and artifact bag any pipeline step can own
//!
//! ## Quick Start
//!
//! ```rust
//! use forecast_window::TimeRangeConfiguration;
//!
//! let trc = TimeRangeConfiguration::from_json(
//!     r#"{
//!         "end_date": "2019-07-01",
//!         "forecast_train_window": 1460,
//!         "forecast_future_window": 365,
//!         "time_granularity": "M"
//!     }"#,
//! )?;
//!
//! assert_eq!(trc.time_granularity_name(), "monthly");
//! assert_eq!(trc.end_date().to_string(), "2019-07-01 00:00:00");
//! # Ok::<(), forecast_window::WindowError>(())
//! ```

pub mod attributes;
pub mod dates;
pub mod error;
pub mod granularity;
pub mod time_range;

// Re-export commonly used types
pub use crate::attributes::{AttributeBag, AttributeHelper};
pub use crate::dates::{parse_datetime, CalendarDayDeriver, DateWindow, DateWindowDeriver};
pub use crate::error::{Result, WindowError};
pub use crate::granularity::TimeGranularity;
pub use crate::time_range::{TimeRangeConfiguration, TimeRangeSettings};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
