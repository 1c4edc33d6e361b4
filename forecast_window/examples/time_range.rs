//! Build a forecast time range from settings and log step metrics against it.
//!
//! Run with `RUST_LOG=debug cargo run --example time_range` to see the
//! library's log output.

use forecast_window::{AttributeBag, AttributeHelper, Result, TimeRangeConfiguration};
use tracing_subscriber::EnvFilter;

struct BacktestStep {
    time_range: TimeRangeConfiguration,
    attributes: AttributeBag,
}

impl AttributeHelper for BacktestStep {
    fn attributes(&self) -> &AttributeBag {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeBag {
        &mut self.attributes
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let time_range = TimeRangeConfiguration::from_json(
        r#"{
            "end_date": "2019-07-01",
            "forecast_train_window": 1460,
            "forecast_future_window": 365,
            "time_granularity": "M"
        }"#,
    )?;

    println!("Time range: {}", time_range);
    println!(
        "Start: {}, end: {}, future: {}, monthly: {}",
        time_range.start_date(),
        time_range.end_date(),
        time_range.future_date(),
        time_range.is_monthly()
    );

    let mut step = BacktestStep {
        time_range,
        attributes: AttributeBag::new(),
    };
    step.log_metric("train_days", step.time_range.train_days() as f64);
    step.log_metric("future_days", step.time_range.future_days() as f64);
    step.log_artifact("reports/backtest.html");

    println!("Metrics: {:?}", step.get_metrics());
    println!("Artifacts: {:?}", step.get_artifacts());

    match TimeRangeConfiguration::from_json(
        r#"{"end_date": "2019-07-01", "forecast_train_window": 30, "forecast_future_window": 7, "time_granularity": "Q"}"#,
    ) {
        Ok(_) => println!("Unexpectedly accepted granularity Q"),
        Err(err) => println!("Rejected: {}", err),
    }

    Ok(())
}
