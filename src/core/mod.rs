//! Core functionality for the wellness engine.
//!
//! This module contains:
//! - Stress prediction from a single day's lifestyle inputs
//! - Gap-based weekly grouping and weekly trend pattern detection
//! - Risk assessment and progress metrics over the history
//! - Report building for export

pub mod patterns;
pub mod predictor;
pub mod progress;
pub mod report;
pub mod risk;
pub mod rules;
pub mod stamp;
pub mod stats;
pub mod windowing;

// Re-export commonly used types
pub use patterns::{PatternDetector, WeeklyTrend};
pub use predictor::{Contribution, Factor, StressBreakdown, StressPredictor};
pub use progress::ProgressTracker;
pub use report::{ReportBuilder, WellnessReport, PRODUCER_NAME, REPORT_VERSION};
pub use risk::{classify, RiskAssessor};
pub use stamp::{FixedStamper, Stamper, SystemStamper};
pub use windowing::{partition_weekly, sorted_by_date, WeekBucket};
