//! Stress prediction from a single day's lifestyle inputs.
//!
//! Each factor contributes the points of its highest matching band. The sum is
//! scaled by 1/15, rounded and clamped to the 1-10 stress scale.

use crate::core::rules::{first_match, Bound, Tier};
use crate::model::LifestyleInputs;
use serde::Serialize;

/// Divisor mapping the raw point sum onto the stress scale.
const POINTS_PER_LEVEL: f64 = 15.0;

pub const MIN_STRESS: u8 = 1;
pub const MAX_STRESS: u8 = 10;

/// Values assumed for absent inputs.
pub const DEFAULT_SLEEP_HOURS: f64 = 8.0;
pub const DEFAULT_WORK_HOURS: f64 = 8.0;
pub const DEFAULT_EXERCISE_MINUTES: u32 = 0;
pub const DEFAULT_SOCIAL_INTERACTION: u8 = 5;
pub const DEFAULT_SCREEN_TIME: f64 = 4.0;
pub const DEFAULT_CAFFEINE: u32 = 1;
pub const DEFAULT_ALCOHOL: u32 = 0;

/// Lifestyle factor scored by the predictor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Sleep,
    Work,
    Exercise,
    Social,
    ScreenTime,
    Caffeine,
    Alcohol,
}

impl Factor {
    pub const ALL: [Factor; 7] = [
        Factor::Sleep,
        Factor::Work,
        Factor::Exercise,
        Factor::Social,
        Factor::ScreenTime,
        Factor::Caffeine,
        Factor::Alcohol,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Factor::Sleep => "sleep_hours",
            Factor::Work => "work_hours",
            Factor::Exercise => "exercise_minutes",
            Factor::Social => "social_interaction",
            Factor::ScreenTime => "screen_time",
            Factor::Caffeine => "caffeine",
            Factor::Alcohol => "alcohol",
        }
    }

    fn bands(&self) -> &'static [Tier<()>] {
        match self {
            Factor::Sleep => SLEEP_BANDS,
            Factor::Work => WORK_BANDS,
            Factor::Exercise => EXERCISE_BANDS,
            Factor::Social => SOCIAL_BANDS,
            Factor::ScreenTime => SCREEN_BANDS,
            Factor::Caffeine => CAFFEINE_BANDS,
            Factor::Alcohol => ALCOHOL_BANDS,
        }
    }

    /// The input value for this factor, or its default when absent.
    fn resolve(&self, inputs: &LifestyleInputs) -> f64 {
        match self {
            Factor::Sleep => inputs.sleep_hours.unwrap_or(DEFAULT_SLEEP_HOURS),
            Factor::Work => inputs.work_hours.unwrap_or(DEFAULT_WORK_HOURS),
            Factor::Exercise => inputs
                .exercise_minutes
                .unwrap_or(DEFAULT_EXERCISE_MINUTES) as f64,
            Factor::Social => inputs
                .social_interaction
                .unwrap_or(DEFAULT_SOCIAL_INTERACTION) as f64,
            Factor::ScreenTime => inputs.screen_time.unwrap_or(DEFAULT_SCREEN_TIME),
            Factor::Caffeine => inputs.caffeine.unwrap_or(DEFAULT_CAFFEINE) as f64,
            Factor::Alcohol => inputs.alcohol.unwrap_or(DEFAULT_ALCOHOL) as f64,
        }
    }
}

const SLEEP_BANDS: &[Tier<()>] = &[
    Tier::new(Bound::Below(6.0), 40, ()),
    Tier::new(Bound::Below(7.0), 25, ()),
    Tier::new(Bound::Above(9.0), 15, ()),
];

const WORK_BANDS: &[Tier<()>] = &[
    Tier::new(Bound::Above(10.0), 30, ()),
    Tier::new(Bound::Above(9.0), 20, ()),
    Tier::new(Bound::Above(8.0), 10, ()),
];

const EXERCISE_BANDS: &[Tier<()>] = &[
    Tier::new(Bound::Equal(0.0), 20, ()),
    Tier::new(Bound::Below(30.0), 10, ()),
];

const SOCIAL_BANDS: &[Tier<()>] = &[
    Tier::new(Bound::Below(3.0), 25, ()),
    Tier::new(Bound::Below(5.0), 15, ()),
];

const SCREEN_BANDS: &[Tier<()>] = &[
    Tier::new(Bound::Above(8.0), 15, ()),
    Tier::new(Bound::Above(6.0), 10, ()),
];

const CAFFEINE_BANDS: &[Tier<()>] = &[
    Tier::new(Bound::Above(3.0), 10, ()),
    Tier::new(Bound::Above(2.0), 5, ()),
];

const ALCOHOL_BANDS: &[Tier<()>] = &[
    Tier::new(Bound::Above(2.0), 10, ()),
    Tier::new(Bound::Above(1.0), 5, ()),
];

/// Points awarded to one factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contribution {
    pub factor: Factor,
    /// Value scored, after defaults were applied
    pub value: f64,
    pub points: u32,
}

/// Per-factor breakdown of a prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressBreakdown {
    pub contributions: Vec<Contribution>,
    pub raw_score: u32,
    pub stress_level: u8,
}

/// Maps lifestyle inputs to a 1-10 stress estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct StressPredictor;

impl StressPredictor {
    pub fn new() -> Self {
        Self
    }

    /// Predicted stress level in `[1, 10]`.
    pub fn predict(&self, inputs: &LifestyleInputs) -> u8 {
        self.breakdown(inputs).stress_level
    }

    /// Score every factor and report how the prediction was reached.
    pub fn breakdown(&self, inputs: &LifestyleInputs) -> StressBreakdown {
        let contributions: Vec<Contribution> = Factor::ALL
            .iter()
            .map(|&factor| {
                let value = factor.resolve(inputs);
                let points = first_match(factor.bands(), value).map_or(0, |band| band.points);
                Contribution {
                    factor,
                    value,
                    points,
                }
            })
            .collect();

        let raw_score: u32 = contributions.iter().map(|c| c.points).sum();
        let stress_level = scale(raw_score);

        tracing::debug!(raw_score, stress_level, "Predicted stress level");

        StressBreakdown {
            contributions,
            raw_score,
            stress_level,
        }
    }
}

/// Map a raw point sum onto the stress scale.
fn scale(raw_score: u32) -> u8 {
    let level = (raw_score as f64 / POINTS_PER_LEVEL).round();
    level.clamp(MIN_STRESS as f64, MAX_STRESS as f64) as u8
}
