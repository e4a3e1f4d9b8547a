//! Wellness Engine - rule-based analytics for daily wellness logs.
//!
//! This library turns a history of self-reported daily assessments into a
//! predicted stress level, detected weekly stress patterns, and a risk
//! assessment with recommendations. Every output is a deterministic function
//! of its inputs; identifiers and timestamps come from an injected
//! [`Stamper`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Wellness Engine                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐   ┌─────────────┐   ┌─────────────┐       │
//! │  │ Assessments │──▶│  Windowing  │──▶│  Patterns   │       │
//! │  │  (history)  │   │ (gap weeks) │   │ (trend fit) │       │
//! │  └─────────────┘   └─────────────┘   └─────────────┘       │
//! │         │                                    │              │
//! │         ▼                                    ▼              │
//! │  ┌─────────────┐                     ┌─────────────┐       │
//! │  │  Progress   │                     │    Risk     │       │
//! │  │  Metrics    │                     │ Assessment  │       │
//! │  └─────────────┘                     └─────────────┘       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use wellness_engine::{LifestyleInputs, ReportBuilder, StressPredictor, SystemStamper};
//!
//! let inputs = LifestyleInputs {
//!     sleep_hours: Some(5.0),
//!     work_hours: Some(11.0),
//!     ..Default::default()
//! };
//! let level = StressPredictor::new().predict(&inputs);
//! assert!((1..=10).contains(&level));
//!
//! let report = ReportBuilder::default().build(&[], &SystemStamper);
//! assert_eq!(report.risk.score, 0);
//! ```

pub mod config;
pub mod core;
pub mod model;

// Re-export key types at crate root for convenience
pub use crate::core::{
    FixedStamper, PatternDetector, ProgressTracker, ReportBuilder, RiskAssessor, Stamper,
    StressPredictor, SystemStamper, WellnessReport,
};
pub use config::{ConfigError, EngineConfig};
pub use model::{
    Assessment, LifestyleInputs, PatternType, ProgressMetrics, RiskAssessment, RiskLevel,
    StressPattern,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Disclaimer that can be displayed to users alongside any output.
pub const DISCLAIMER: &str = r#"
╔══════════════════════════════════════════════════════════════════╗
║               WELLNESS ENGINE - IMPORTANT NOTICE                 ║
╠══════════════════════════════════════════════════════════════════╣
║                                                                  ║
║  Scores are produced by fixed rules over self-reported data.     ║
║                                                                  ║
║  ✓ WHAT THE ENGINE DOES:                                         ║
║    • Estimates daily stress from sleep, work, and habits         ║
║    • Flags stress that rises week over week                      ║
║    • Summarizes recent stress, mood, and sleep into a risk level ║
║                                                                  ║
║  ✗ WHAT THE ENGINE IS NOT:                                       ║
║    • A diagnosis or a substitute for professional care           ║
║    • A trained or validated clinical model                       ║
║                                                                  ║
║  If you are in crisis, contact local emergency services or a     ║
║  crisis line immediately.                                        ║
║                                                                  ║
╚══════════════════════════════════════════════════════════════════╝
"#;
