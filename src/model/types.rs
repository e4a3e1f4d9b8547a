//! Value types exchanged with the engine.
//!
//! Inputs are owned by the caller and only read. Outputs are created by the
//! engine and carry the identifier/timestamp fields handed out by a
//! [`Stamper`](crate::core::Stamper).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single self-reported daily sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// Record identifier assigned by the storage layer
    #[serde(default)]
    pub id: String,
    /// Owner of the record
    #[serde(default)]
    pub user_id: String,
    /// Calendar day the sample describes
    pub date: NaiveDate,
    /// Self-reported stress, 1-10
    pub stress_level: u8,
    /// Self-reported mood, 1-10
    pub mood_level: u8,
    pub sleep_hours: f64,
    pub work_hours: f64,
    pub exercise_minutes: u32,
    /// Amount of social contact, 1-10
    pub social_interaction: u8,
    pub screen_time: f64,
    /// Caffeinated drinks
    pub caffeine: u32,
    /// Alcoholic drinks
    pub alcohol: u32,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

impl Assessment {
    /// Create a sample for `date` with neutral lifestyle values.
    ///
    /// Stress and mood default to 5, sleep and work to 8 hours, with 30 minutes
    /// of exercise. Callers override the fields they care about.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: String::new(),
            user_id: String::new(),
            date,
            stress_level: 5,
            mood_level: 5,
            sleep_hours: 8.0,
            work_hours: 8.0,
            exercise_minutes: 30,
            social_interaction: 5,
            screen_time: 4.0,
            caffeine: 1,
            alcohol: 0,
            symptoms: Vec::new(),
            notes: String::new(),
        }
    }
}

/// A partially filled day used for stress prediction.
///
/// Absent factors resolve to the predictor's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleInputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_interaction: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caffeine: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alcohol: Option<u32>,
}

impl From<&Assessment> for LifestyleInputs {
    fn from(a: &Assessment) -> Self {
        Self {
            sleep_hours: Some(a.sleep_hours),
            work_hours: Some(a.work_hours),
            exercise_minutes: Some(a.exercise_minutes),
            social_interaction: Some(a.social_interaction),
            screen_time: Some(a.screen_time),
            caffeine: Some(a.caffeine),
            alcohol: Some(a.alcohol),
        }
    }
}

/// Cadence of a detected pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    Weekly,
    Monthly,
    Seasonal,
}

/// A recurring stress pattern found in the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressPattern {
    pub id: String,
    pub user_id: String,
    pub pattern_type: PatternType,
    /// Lifestyle factors associated with high-stress days, in fixed order
    pub triggers: Vec<String>,
    /// Rounded stress average of the latest week, 1-10
    pub intensity: u8,
    /// Occurrences per week
    pub frequency: u32,
    /// Length in days
    pub duration: u32,
    pub detected_at: DateTime<Utc>,
}

/// Ordered risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Whether this level warrants pointing the user at a professional.
    pub fn needs_professional_help(&self) -> bool {
        *self >= RiskLevel::High
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregated risk for the recent history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub id: String,
    pub user_id: String,
    pub risk_level: RiskLevel,
    /// Human-readable contributing factors
    pub factors: Vec<String>,
    /// Additive risk score
    pub score: u32,
    /// Most urgent first
    pub recommendations: Vec<String>,
    pub needs_professional_help: bool,
    pub assessed_at: DateTime<Utc>,
}

/// Recent-versus-older comparison of the history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressMetrics {
    /// Older mean stress minus recent mean stress (positive = improving)
    pub stress_trend: f64,
    /// Recent mean mood minus older mean mood (positive = improving)
    pub mood_trend: f64,
    /// Recent mean sleep hours divided by 10
    pub sleep_quality: f64,
    pub intervention_success: f64,
    /// Composite index, 0-100
    pub overall_wellness: f64,
}
