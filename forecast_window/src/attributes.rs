//! Metrics and artifacts collected by pipeline steps
//!
//! A step owns an [`AttributeBag`] field and implements [`AttributeHelper`]
//! to get the logging operations. The step does not need to know which
//! backend eventually reports what it logged.
//!
//! A bag is not synchronised. Steps logged from several threads need
//! their own lock around it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Metrics (last write wins per key) and artifacts (append-only, in
/// insertion order) of a single step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeBag {
    metrics: HashMap<String, f64>,
    artifacts: Vec<PathBuf>,
}

impl AttributeBag {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a metric, replacing any previous value for the same key
    pub fn log_metric(&mut self, key: impl Into<String>, value: f64) {
        let key = key.into();
        trace!(metric = %key, value, "logged metric");
        self.metrics.insert(key, value);
    }

    /// Merge several metrics, overwriting keys that already exist
    pub fn log_metrics<I, K>(&mut self, metrics: I)
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        for (key, value) in metrics {
            self.log_metric(key, value);
        }
    }

    /// Current metrics. The map is borrowed, not copied.
    pub fn get_metrics(&self) -> &HashMap<String, f64> {
        &self.metrics
    }

    pub fn metric(&self, key: &str) -> Option<f64> {
        self.metrics.get(key).copied()
    }

    /// Record an artifact path. Duplicates are kept.
    pub fn log_artifact(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        trace!(artifact = %path.display(), "logged artifact");
        self.artifacts.push(path);
    }

    /// Artifact paths in the order they were logged
    pub fn get_artifacts(&self) -> &[PathBuf] {
        &self.artifacts
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty() && self.artifacts.is_empty()
    }

    /// Drop every metric and artifact
    pub fn clear(&mut self) {
        self.metrics.clear();
        self.artifacts.clear();
    }
}

/// Gives a type the metric and artifact logging operations of the
/// [`AttributeBag`] it owns.
///
/// ```
/// use forecast_window::{AttributeBag, AttributeHelper};
///
/// #[derive(Default)]
/// struct Trainer {
///     attributes: AttributeBag,
/// }
///
/// impl AttributeHelper for Trainer {
///     fn attributes(&self) -> &AttributeBag {
///         &self.attributes
///     }
///
///     fn attributes_mut(&mut self) -> &mut AttributeBag {
///         &mut self.attributes
///     }
/// }
///
/// let mut trainer = Trainer::default();
/// trainer.log_metric("rmse", 0.42);
/// assert_eq!(trainer.get_metrics()["rmse"], 0.42);
/// ```
pub trait AttributeHelper {
    fn attributes(&self) -> &AttributeBag;

    fn attributes_mut(&mut self) -> &mut AttributeBag;

    fn log_metric(&mut self, key: impl Into<String>, value: f64) {
        self.attributes_mut().log_metric(key, value);
    }

    fn log_metrics<I, K>(&mut self, metrics: I)
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        self.attributes_mut().log_metrics(metrics);
    }

    fn get_metrics(&self) -> &HashMap<String, f64> {
        self.attributes().get_metrics()
    }

    fn log_artifact(&mut self, path: impl Into<PathBuf>) {
        self.attributes_mut().log_artifact(path);
    }

    fn get_artifacts(&self) -> &[PathBuf] {
        self.attributes().get_artifacts()
    }
}

impl<P: AsRef<Path>> Extend<P> for AttributeBag {
    fn extend<T: IntoIterator<Item = P>>(&mut self, paths: T) {
        for path in paths {
            self.log_artifact(path.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bag_is_empty() {
        let bag = AttributeBag::new();
        assert!(bag.is_empty());
        assert!(bag.get_metrics().is_empty());
        assert!(bag.get_artifacts().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut bag = AttributeBag::new();
        bag.log_metric("mae", 1.5);
        bag.log_artifact("plots/residuals.png");
        assert!(!bag.is_empty());

        bag.clear();
        assert!(bag.is_empty());
    }

    #[test]
    fn test_extend_with_artifacts() {
        let mut bag = AttributeBag::new();
        bag.extend(["a.csv", "b.csv"]);

        assert_eq!(
            bag.get_artifacts(),
            &[PathBuf::from("a.csv"), PathBuf::from("b.csv")]
        );
    }
}
