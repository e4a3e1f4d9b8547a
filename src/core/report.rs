//! Wellness report builder.
//!
//! Runs the engine in its documented order (pattern detection, then risk
//! assessment over the detected patterns, then progress metrics) and wraps the
//! results with producer metadata for export.

use crate::config::EngineConfig;
use crate::core::patterns::PatternDetector;
use crate::core::progress::ProgressTracker;
use crate::core::risk::RiskAssessor;
use crate::core::stamp::Stamper;
use crate::model::{Assessment, ProgressMetrics, RiskAssessment, StressPattern};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The current report format version.
pub const REPORT_VERSION: &str = "1.0";

/// The name of this producer.
pub const PRODUCER_NAME: &str = "wellness-engine";

/// Producer metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producer {
    pub name: String,
    pub version: String,
}

impl Default for Producer {
    fn default() -> Self {
        Self {
            name: PRODUCER_NAME.to_string(),
            version: crate::VERSION.to_string(),
        }
    }
}

/// Everything the engine derives from one history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessReport {
    pub report_version: String,
    pub producer: Producer,
    pub computed_at: DateTime<Utc>,
    pub sample_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_date: Option<NaiveDate>,
    pub patterns: Vec<StressPattern>,
    pub risk: RiskAssessment,
    pub progress: ProgressMetrics,
}

/// Composes the engine services into a single report.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    detector: PatternDetector,
    assessor: RiskAssessor,
    tracker: ProgressTracker,
}

impl ReportBuilder {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            detector: PatternDetector::new(config.patterns.clone()),
            assessor: RiskAssessor::new(config.risk.clone()),
            tracker: ProgressTracker::new(config.progress.clone()),
        }
    }

    /// Build a report for `history`.
    pub fn build<S: Stamper + ?Sized>(
        &self,
        history: &[Assessment],
        stamper: &S,
    ) -> WellnessReport {
        let patterns = self.detector.detect(history, stamper);
        let risk = self.assessor.assess(history, &patterns, stamper);
        let progress = self.tracker.track(history);

        tracing::debug!(
            samples = history.len(),
            patterns = patterns.len(),
            level = %risk.risk_level,
            "Built wellness report"
        );

        WellnessReport {
            report_version: REPORT_VERSION.to_string(),
            producer: Producer::default(),
            computed_at: stamper.now(),
            sample_count: history.len(),
            first_date: history.iter().map(|a| a.date).min(),
            last_date: history.iter().map(|a| a.date).max(),
            patterns,
            risk,
            progress,
        }
    }
}
