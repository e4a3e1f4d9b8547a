//! Risk assessment over the most recent assessments.
//!
//! Stress, mood and sleep averages and the presence of high-intensity
//! patterns each add points from an ordered tier table. The total picks a
//! risk level, and the level's recommendation is placed ahead of the
//! factor-specific ones.

use crate::config::RiskConfig;
use crate::core::rules::{first_match, Bound, Tier};
use crate::core::stamp::Stamper;
use crate::core::stats::mean_of;
use crate::core::windowing::sorted_by_date;
use crate::model::{Assessment, RiskAssessment, RiskLevel, StressPattern};

pub const EMPTY_HISTORY_RECOMMENDATION: &str =
    "Please complete daily assessments for accurate risk evaluation";

/// User id reported when there is no history to take one from.
const UNKNOWN_USER: &str = "unknown";

/// Text attached to a scored tier.
#[derive(Debug, Clone, Copy)]
pub struct RiskText {
    pub factor: &'static str,
    pub recommendation: &'static str,
}

const STRESS_TIERS: &[Tier<RiskText>] = &[
    Tier::new(
        Bound::AtLeast(8.0),
        40,
        RiskText {
            factor: "Consistently high stress levels",
            recommendation: "Practice stress reduction techniques daily",
        },
    ),
    Tier::new(
        Bound::AtLeast(6.0),
        20,
        RiskText {
            factor: "Elevated stress levels",
            recommendation: "Implement regular stress management activities",
        },
    ),
];

const MOOD_TIERS: &[Tier<RiskText>] = &[
    Tier::new(
        Bound::AtMost(3.0),
        35,
        RiskText {
            factor: "Persistently low mood",
            recommendation: "Consider mood-boosting activities and social connections",
        },
    ),
    Tier::new(
        Bound::AtMost(5.0),
        20,
        RiskText {
            factor: "Below-average mood",
            recommendation: "Focus on activities that bring joy and fulfillment",
        },
    ),
];

const SLEEP_TIERS: &[Tier<RiskText>] = &[Tier::new(
    Bound::Below(6.0),
    25,
    RiskText {
        factor: "Insufficient sleep",
        recommendation: "Prioritize sleep hygiene and consistent sleep schedule",
    },
)];

/// Scored against the number of high-intensity patterns.
const PATTERN_TIERS: &[Tier<RiskText>] = &[Tier::new(
    Bound::AtLeast(1.0),
    30,
    RiskText {
        factor: "Detected high-intensity stress patterns",
        recommendation: "Work on identifying and managing stress triggers",
    },
)];

/// Minimum score for each level, highest first.
const LEVEL_TIERS: &[Tier<(RiskLevel, &str)>] = &[
    Tier::new(
        Bound::AtLeast(80.0),
        0,
        (
            RiskLevel::Critical,
            "URGENT: Please consider seeking immediate professional mental health support",
        ),
    ),
    Tier::new(
        Bound::AtLeast(60.0),
        0,
        (
            RiskLevel::High,
            "Consider speaking with a mental health professional",
        ),
    ),
    Tier::new(
        Bound::AtLeast(30.0),
        0,
        (
            RiskLevel::Moderate,
            "Monitor your mental health closely and consider preventive measures",
        ),
    ),
    Tier::new(
        Bound::AtLeast(0.0),
        0,
        (
            RiskLevel::Low,
            "Continue maintaining good mental health practices",
        ),
    ),
];

/// Averages over the recent window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecentAverages {
    pub stress: f64,
    pub mood: f64,
    pub sleep: f64,
}

/// Level and lead recommendation for a total score.
pub fn classify(score: u32) -> (RiskLevel, &'static str) {
    first_match(LEVEL_TIERS, score as f64)
        .map(|tier| tier.payload)
        .unwrap_or(LEVEL_TIERS[LEVEL_TIERS.len() - 1].payload)
}

/// Scores recent history and detected patterns into a risk assessment.
#[derive(Debug, Clone, Default)]
pub struct RiskAssessor {
    config: RiskConfig,
}

impl RiskAssessor {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    /// Assess `history` together with the patterns detected in it.
    pub fn assess<S: Stamper + ?Sized>(
        &self,
        history: &[Assessment],
        patterns: &[StressPattern],
        stamper: &S,
    ) -> RiskAssessment {
        let id = stamper.next_id("risk");
        let assessed_at = stamper.now();

        if history.is_empty() {
            return RiskAssessment {
                id,
                user_id: UNKNOWN_USER.to_string(),
                risk_level: RiskLevel::Low,
                factors: Vec::new(),
                score: 0,
                recommendations: vec![EMPTY_HISTORY_RECOMMENDATION.to_string()],
                needs_professional_help: false,
                assessed_at,
            };
        }

        let sorted = sorted_by_date(history);
        let averages = self.recent_averages(&sorted);
        let high_intensity = patterns
            .iter()
            .filter(|p| p.intensity >= self.config.high_intensity)
            .count();

        let scored = [
            (STRESS_TIERS, averages.stress),
            (MOOD_TIERS, averages.mood),
            (SLEEP_TIERS, averages.sleep),
            (PATTERN_TIERS, high_intensity as f64),
        ];

        let mut score = 0;
        let mut factors = Vec::new();
        let mut recommendations = Vec::new();
        for (tiers, value) in scored {
            if let Some(tier) = first_match(tiers, value) {
                score += tier.points;
                factors.push(tier.payload.factor.to_string());
                recommendations.push(tier.payload.recommendation.to_string());
            }
        }

        let (risk_level, lead) = classify(score);
        recommendations.insert(0, lead.to_string());

        tracing::debug!(
            score,
            level = %risk_level,
            stress = averages.stress,
            mood = averages.mood,
            sleep = averages.sleep,
            "Assessed risk"
        );

        RiskAssessment {
            id,
            user_id: sorted[0].user_id.clone(),
            risk_level,
            factors,
            score,
            recommendations,
            needs_professional_help: risk_level.needs_professional_help(),
            assessed_at,
        }
    }

    /// Averages over the last `recent_window` samples of date-sorted history.
    pub fn recent_averages(&self, sorted: &[&Assessment]) -> RecentAverages {
        let start = sorted.len().saturating_sub(self.config.recent_window);
        let recent = &sorted[start..];

        RecentAverages {
            stress: mean_of(recent, |a| a.stress_level as f64),
            mood: mean_of(recent, |a| a.mood_level as f64),
            sleep: mean_of(recent, |a| a.sleep_hours),
        }
    }
}
