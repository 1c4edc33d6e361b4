//! # Forecast Window Workspace
//!
//! Entry point re-exporting the [`forecast_window`] crate for pipelines that
//! depend on the workspace as a whole.
//!
//! ## Example
//!
//! ```
//! use forecast_window_workspace::{TimeGranularity, TimeRangeConfiguration};
//! use forecast_window_workspace::parse_datetime;
//!
//! let end = parse_datetime("2019-07-01").unwrap();
//! let trc = TimeRangeConfiguration::new(end, 365 * 4, 365, TimeGranularity::Monthly, 0).unwrap();
//! assert_eq!(trc.start_date().to_string(), "2015-07-02 00:00:00");
//! ```

pub use forecast_window::*;
