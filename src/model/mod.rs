//! Data model for the wellness engine.
//!
//! Input samples are read-only to the engine; output records are created by
//! the engine services.

pub mod types;

// Re-export commonly used types
pub use types::{
    Assessment, LifestyleInputs, PatternType, ProgressMetrics, RiskAssessment, RiskLevel,
    StressPattern,
};
