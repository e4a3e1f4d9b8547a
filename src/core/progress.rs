//! Progress metrics comparing recent assessments with the period before.

use crate::config::ProgressConfig;
use crate::core::stats::mean_of;
use crate::core::windowing::sorted_by_date;
use crate::model::{Assessment, ProgressMetrics};

/// Weights of the overall wellness index.
const STRESS_WEIGHT: f64 = 30.0;
const MOOD_WEIGHT: f64 = 30.0;
const SLEEP_WEIGHT: f64 = 25.0;
const INTERVENTION_WEIGHT: f64 = 15.0;

#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    config: ProgressConfig,
}

impl ProgressTracker {
    pub fn new(config: ProgressConfig) -> Self {
        Self { config }
    }

    /// Compute progress metrics. An empty history gives all zeros.
    pub fn track(&self, history: &[Assessment]) -> ProgressMetrics {
        if history.is_empty() {
            return ProgressMetrics::default();
        }

        let sorted = sorted_by_date(history);
        let window = self.config.window;
        let recent_start = sorted.len().saturating_sub(window);
        let older_start = recent_start.saturating_sub(window);
        let recent = &sorted[recent_start..];
        let older = &sorted[older_start..recent_start];

        let recent_stress = mean_of(recent, |a| a.stress_level as f64);
        let older_stress = mean_of(older, |a| a.stress_level as f64);
        let recent_mood = mean_of(recent, |a| a.mood_level as f64);
        let older_mood = mean_of(older, |a| a.mood_level as f64);

        let sleep_quality = mean_of(recent, |a| a.sleep_hours) / 10.0;
        let intervention_success = self.config.intervention_success;

        let overall_wellness = ((10.0 - recent_stress) / 10.0 * STRESS_WEIGHT
            + recent_mood / 10.0 * MOOD_WEIGHT
            + sleep_quality * SLEEP_WEIGHT
            + intervention_success * INTERVENTION_WEIGHT)
            .clamp(0.0, 100.0);

        ProgressMetrics {
            stress_trend: older_stress - recent_stress,
            mood_trend: recent_mood - older_mood,
            sleep_quality,
            intervention_success,
            overall_wellness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn day(offset: i64, stress: u8, mood: u8, sleep: f64) -> Assessment {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut a = Assessment::new(start + Duration::days(offset));
        a.stress_level = stress;
        a.mood_level = mood;
        a.sleep_hours = sleep;
        a
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(ProgressTracker::default().track(&[]), ProgressMetrics::default());
    }

    #[test]
    fn test_improvement_over_four_weeks() {
        let mut history: Vec<Assessment> = (0..14).map(|i| day(i, 8, 3, 6.0)).collect();
        history.extend((14..28).map(|i| day(i, 4, 7, 8.0)));

        let m = ProgressTracker::default().track(&history);
        assert!(approx(m.stress_trend, 4.0));
        assert!(approx(m.mood_trend, 4.0));
        assert!(approx(m.sleep_quality, 0.8));
        assert!(approx(m.intervention_success, 0.75));
        // 0.6·30 + 0.7·30 + 0.8·25 + 0.75·15
        assert!(approx(m.overall_wellness, 18.0 + 21.0 + 20.0 + 11.25));
    }

    #[test]
    fn test_short_history_has_no_older_window() {
        let history: Vec<Assessment> = (0..5).map(|i| day(i, 6, 5, 7.0)).collect();
        let m = ProgressTracker::default().track(&history);

        // Older averages are 0, so trends compare against zero.
        assert!(approx(m.stress_trend, -6.0));
        assert!(approx(m.mood_trend, 5.0));
        assert!(approx(m.sleep_quality, 0.7));
    }

    #[test]
    fn test_wellness_is_clamped() {
        let history = vec![day(0, 1, 10, 40.0)];
        let m = ProgressTracker::default().track(&history);
        assert_eq!(m.overall_wellness, 100.0);
    }

    #[test]
    fn test_unsorted_history_uses_latest_dates() {
        let mut history: Vec<Assessment> = (0..14).map(|i| day(i, 9, 2, 5.0)).collect();
        history.extend((14..28).map(|i| day(i, 3, 8, 8.0)));
        history.reverse();

        let m = ProgressTracker::default().track(&history);
        assert!(approx(m.stress_trend, 6.0));
    }
}
