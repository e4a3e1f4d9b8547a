//! Detection of worsening weekly stress.
//!
//! The history is grouped into gap-anchored weeks, a least-squares line is fit
//! to the weekly stress averages, and a rising slope yields one weekly
//! pattern. Triggers are inferred from the lifestyle averages of high-stress
//! days.

use crate::config::PatternConfig;
use crate::core::rules::Bound;
use crate::core::stamp::Stamper;
use crate::core::stats::{mean_of, trend_slope};
use crate::core::windowing::{partition_weekly, sorted_by_date};
use crate::model::{Assessment, PatternType, StressPattern};

pub const TRIGGER_LONG_WORK_HOURS: &str = "Long work hours";
pub const TRIGGER_POOR_SLEEP: &str = "Poor sleep quality";
pub const TRIGGER_LOW_ACTIVITY: &str = "Lack of physical activity";

/// Occurrences per week reported on weekly patterns.
const WEEKLY_FREQUENCY: u32 = 5;
/// Length in days reported on weekly patterns.
const WEEKLY_DURATION: u32 = 7;

/// Lifestyle average checked on high-stress days.
#[derive(Debug, Clone, Copy)]
enum TriggerMetric {
    WorkHours,
    SleepHours,
    ExerciseMinutes,
}

impl TriggerMetric {
    fn of(&self, a: &Assessment) -> f64 {
        match self {
            TriggerMetric::WorkHours => a.work_hours,
            TriggerMetric::SleepHours => a.sleep_hours,
            TriggerMetric::ExerciseMinutes => a.exercise_minutes as f64,
        }
    }
}

struct TriggerRule {
    metric: TriggerMetric,
    bound: Bound,
    label: &'static str,
}

/// Evaluated in order; every matching rule contributes its label.
const TRIGGER_RULES: &[TriggerRule] = &[
    TriggerRule {
        metric: TriggerMetric::WorkHours,
        bound: Bound::Above(9.0),
        label: TRIGGER_LONG_WORK_HOURS,
    },
    TriggerRule {
        metric: TriggerMetric::SleepHours,
        bound: Bound::Below(6.5),
        label: TRIGGER_POOR_SLEEP,
    },
    TriggerRule {
        metric: TriggerMetric::ExerciseMinutes,
        bound: Bound::Below(30.0),
        label: TRIGGER_LOW_ACTIVITY,
    },
];

/// Weekly stress averages and their fitted trend.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyTrend {
    pub averages: Vec<f64>,
    pub slope: f64,
}

/// Finds rising weekly stress in an assessment history.
#[derive(Debug, Clone, Default)]
pub struct PatternDetector {
    config: PatternConfig,
}

impl PatternDetector {
    pub fn new(config: PatternConfig) -> Self {
        Self { config }
    }

    /// Detect patterns in `history`. Returns at most one pattern.
    ///
    /// Histories shorter than the configured minimum, or spanning too few
    /// weeks to fit a trend, produce no patterns.
    pub fn detect<S: Stamper + ?Sized>(
        &self,
        history: &[Assessment],
        stamper: &S,
    ) -> Vec<StressPattern> {
        if history.len() < self.config.min_samples {
            tracing::debug!(
                samples = history.len(),
                required = self.config.min_samples,
                "Not enough samples for pattern detection"
            );
            return Vec::new();
        }

        let sorted = sorted_by_date(history);
        let Some(trend) = self.weekly_trend(&sorted) else {
            return Vec::new();
        };

        if trend.slope <= self.config.trend_threshold {
            return Vec::new();
        }

        let last_average = trend.averages.last().copied().unwrap_or(0.0);
        let pattern = StressPattern {
            id: stamper.next_id("pattern"),
            user_id: sorted[0].user_id.clone(),
            pattern_type: PatternType::Weekly,
            triggers: self.identify_triggers(&sorted),
            intensity: last_average.round() as u8,
            frequency: WEEKLY_FREQUENCY,
            duration: WEEKLY_DURATION,
            detected_at: stamper.now(),
        };

        tracing::debug!(
            intensity = pattern.intensity,
            triggers = pattern.triggers.len(),
            "Detected weekly stress pattern"
        );

        vec![pattern]
    }

    /// Weekly averages and slope, or `None` when there are too few weeks.
    pub fn weekly_trend(&self, sorted: &[&Assessment]) -> Option<WeeklyTrend> {
        let averages: Vec<f64> = partition_weekly(sorted, self.config.bucket_gap_days)
            .iter()
            .map(|bucket| bucket.mean_stress())
            .collect();

        if averages.len() < self.config.min_buckets {
            tracing::debug!(weeks = averages.len(), "Too few weeks to fit a trend");
            return None;
        }

        let slope = trend_slope(&averages);
        tracing::debug!(weeks = averages.len(), slope, "Fitted weekly stress trend");

        Some(WeeklyTrend { averages, slope })
    }

    /// Labels for lifestyle factors that are unfavourable on high-stress days.
    pub fn identify_triggers(&self, history: &[&Assessment]) -> Vec<String> {
        let high_stress: Vec<&Assessment> = history
            .iter()
            .copied()
            .filter(|a| a.stress_level >= self.config.high_stress_level)
            .collect();

        if high_stress.is_empty() {
            return Vec::new();
        }

        TRIGGER_RULES
            .iter()
            .filter(|rule| {
                rule.bound
                    .matches(mean_of(&high_stress, |a| rule.metric.of(a)))
            })
            .map(|rule| rule.label.to_string())
            .collect()
    }
}
