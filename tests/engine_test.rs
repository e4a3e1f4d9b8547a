//! End-to-end tests for the wellness engine services.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use wellness_engine::core::{partition_weekly, sorted_by_date};
use wellness_engine::{
    Assessment, EngineConfig, FixedStamper, LifestyleInputs, PatternDetector, ReportBuilder,
    RiskAssessor, RiskLevel, StressPredictor,
};

fn stamper() -> FixedStamper {
    FixedStamper::new(Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap())
}

fn day(offset: i64) -> Assessment {
    let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
    let mut a = Assessment::new(start + Duration::days(offset));
    a.user_id = "user-42".to_string();
    a
}

fn history_from_json(json: &str) -> Vec<Assessment> {
    serde_json::from_str(json).expect("valid history")
}

#[test]
fn test_worst_day_predicts_ten() {
    let inputs = LifestyleInputs {
        sleep_hours: Some(5.0),
        work_hours: Some(11.0),
        exercise_minutes: Some(0),
        social_interaction: Some(2),
        screen_time: Some(9.0),
        caffeine: Some(4),
        alcohol: Some(3),
    };
    let breakdown = StressPredictor::new().breakdown(&inputs);

    assert_eq!(breakdown.raw_score, 150);
    assert_eq!(breakdown.stress_level, 10);
}

#[test]
fn test_fewer_than_seven_samples_has_no_patterns() {
    for n in 0..7 {
        let mut history: Vec<Assessment> = (0..n).map(|i| day(i * 10)).collect();
        for (i, a) in history.iter_mut().enumerate() {
            a.stress_level = 1 + i as u8;
        }
        assert!(PatternDetector::default()
            .detect(&history, &stamper())
            .is_empty());
    }
}

#[test]
fn test_ten_daily_samples_partition() {
    let history: Vec<Assessment> = (0..10).map(day).collect();
    let sorted = sorted_by_date(&history);
    let sizes: Vec<usize> = partition_weekly(&sorted, 7)
        .iter()
        .map(|b| b.len())
        .collect();

    assert_eq!(sizes, vec![7, 3]);
}

#[test]
fn test_empty_history_risk() {
    let risk = RiskAssessor::default().assess(&[], &[], &stamper());

    assert_eq!(risk.score, 0);
    assert_eq!(risk.risk_level, RiskLevel::Low);
    assert!(!risk.needs_professional_help);
}

#[test]
fn test_report_from_json_history() {
    // Three weeks sampled every other day with rising stress and long days.
    let mut entries = Vec::new();
    for (week, stress) in [(0, 3), (1, 5), (2, 8)] {
        for d in [0, 2, 4, 6] {
            let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap() + Duration::days(week * 7 + d);
            entries.push(format!(
                r#"{{"id":"a-{week}-{d}","userId":"user-42","date":"{date}","stressLevel":{stress},
                "moodLevel":6,"sleepHours":6.0,"workHours":10.5,"exerciseMinutes":10,
                "socialInteraction":4,"screenTime":7.0,"caffeine":3,"alcohol":1,
                "symptoms":["headache"],"notes":""}}"#
            ));
        }
    }
    let history = history_from_json(&format!("[{}]", entries.join(",")));
    assert_eq!(history.len(), 12);

    let report = ReportBuilder::new(&EngineConfig::default()).build(&history, &stamper());

    assert_eq!(report.patterns.len(), 1);
    let pattern = &report.patterns[0];
    assert_eq!(pattern.intensity, 8);
    assert_eq!(
        pattern.triggers,
        vec![
            "Long work hours",
            "Poor sleep quality",
            "Lack of physical activity"
        ]
    );

    // The last seven samples average stress 47/7 (20) plus the high-intensity
    // pattern (30); mood 6 and sleep 6 do not score.
    assert_eq!(report.risk.score, 50);
    assert_eq!(report.risk.risk_level, RiskLevel::Moderate);
    assert!(!report.risk.needs_professional_help);
    assert_eq!(report.risk.user_id, "user-42");
}

#[test]
fn test_stress_average_exactly_on_tier() {
    // Seven samples summing to 56 average exactly 8.0.
    let history: Vec<Assessment> = [1, 7, 10, 10, 10, 8, 10]
        .into_iter()
        .enumerate()
        .map(|(i, stress)| {
            let mut a = day(i as i64);
            a.stress_level = stress;
            a.mood_level = 8;
            a
        })
        .collect();

    let risk = RiskAssessor::default().assess(&history, &[], &stamper());
    assert_eq!(risk.score, 40);
    assert_eq!(risk.risk_level, RiskLevel::Moderate);
}

#[test]
fn test_identical_inputs_identical_outputs() {
    let history: Vec<Assessment> = (0..28)
        .map(|i| {
            let mut a = day(i);
            a.stress_level = (2 + i / 4).min(10) as u8;
            a.mood_level = 4;
            a.sleep_hours = 5.5;
            a
        })
        .collect();
    let builder = ReportBuilder::default();

    assert_eq!(
        builder.build(&history, &stamper()),
        builder.build(&history, &stamper())
    );
    let inputs = LifestyleInputs::from(&history[3]);
    assert_eq!(
        StressPredictor::new().predict(&inputs),
        StressPredictor::new().predict(&inputs)
    );
}

#[test]
fn test_custom_config_changes_windows() {
    let mut config = EngineConfig::default();
    config.risk.recent_window = 1;

    // Only the very last sample counts with a one-day window.
    let mut history: Vec<Assessment> = (0..7).map(day).collect();
    for a in history.iter_mut() {
        a.stress_level = 9;
        a.mood_level = 8;
    }
    history[6].stress_level = 2;

    let report = ReportBuilder::new(&config).build(&history, &stamper());
    assert_eq!(report.risk.score, 0);
}

fn any_inputs() -> impl Strategy<Value = LifestyleInputs> {
    (
        proptest::option::of(0.0f64..14.0),
        proptest::option::of(0.0f64..16.0),
        proptest::option::of(0u32..180),
        proptest::option::of(1u8..=10),
        proptest::option::of(0.0f64..16.0),
        proptest::option::of(0u32..8),
        proptest::option::of(0u32..8),
    )
        .prop_map(
            |(sleep, work, exercise, social, screen, caffeine, alcohol)| LifestyleInputs {
                sleep_hours: sleep,
                work_hours: work,
                exercise_minutes: exercise,
                social_interaction: social,
                screen_time: screen,
                caffeine,
                alcohol,
            },
        )
}

proptest! {
    #[test]
    fn prediction_is_on_scale(inputs in any_inputs()) {
        let level = StressPredictor::new().predict(&inputs);
        prop_assert!((1..=10).contains(&level));
    }

    #[test]
    fn less_sleep_below_six_never_lowers_stress(inputs in any_inputs(), a in 0.0f64..6.0, b in 0.0f64..6.0) {
        let (less, more) = if a < b { (a, b) } else { (b, a) };
        let p = StressPredictor::new();
        let with_less = p.predict(&LifestyleInputs { sleep_hours: Some(less), ..inputs.clone() });
        let with_more = p.predict(&LifestyleInputs { sleep_hours: Some(more), ..inputs });
        prop_assert!(with_less >= with_more);
    }

    #[test]
    fn more_work_never_lowers_stress(inputs in any_inputs(), a in 0.0f64..16.0, b in 0.0f64..16.0) {
        let (less, more) = if a < b { (a, b) } else { (b, a) };
        let p = StressPredictor::new();
        let low = p.predict(&LifestyleInputs { work_hours: Some(less), ..inputs.clone() });
        let high = p.predict(&LifestyleInputs { work_hours: Some(more), ..inputs });
        prop_assert!(high >= low);
    }

    #[test]
    fn less_exercise_never_lowers_stress(inputs in any_inputs(), a in 0u32..180, b in 0u32..180) {
        let (less, more) = if a < b { (a, b) } else { (b, a) };
        let p = StressPredictor::new();
        let sedentary = p.predict(&LifestyleInputs { exercise_minutes: Some(less), ..inputs.clone() });
        let active = p.predict(&LifestyleInputs { exercise_minutes: Some(more), ..inputs });
        prop_assert!(sedentary >= active);
    }

    #[test]
    fn more_screen_time_never_lowers_stress(inputs in any_inputs(), a in 0.0f64..16.0, b in 0.0f64..16.0) {
        let (less, more) = if a < b { (a, b) } else { (b, a) };
        let p = StressPredictor::new();
        let low = p.predict(&LifestyleInputs { screen_time: Some(less), ..inputs.clone() });
        let high = p.predict(&LifestyleInputs { screen_time: Some(more), ..inputs });
        prop_assert!(high >= low);
    }

    #[test]
    fn less_social_contact_never_lowers_stress(inputs in any_inputs(), a in 1u8..=10, b in 1u8..=10) {
        let (less, more) = if a < b { (a, b) } else { (b, a) };
        let p = StressPredictor::new();
        let isolated = p.predict(&LifestyleInputs { social_interaction: Some(less), ..inputs.clone() });
        let social = p.predict(&LifestyleInputs { social_interaction: Some(more), ..inputs });
        prop_assert!(isolated >= social);
    }

    #[test]
    fn more_caffeine_or_alcohol_never_lowers_stress(inputs in any_inputs(), a in 0u32..8, b in 0u32..8) {
        let (less, more) = if a < b { (a, b) } else { (b, a) };
        let p = StressPredictor::new();
        let caffeine_low = p.predict(&LifestyleInputs { caffeine: Some(less), ..inputs.clone() });
        let caffeine_high = p.predict(&LifestyleInputs { caffeine: Some(more), ..inputs.clone() });
        prop_assert!(caffeine_high >= caffeine_low);

        let alcohol_low = p.predict(&LifestyleInputs { alcohol: Some(less), ..inputs.clone() });
        let alcohol_high = p.predict(&LifestyleInputs { alcohol: Some(more), ..inputs });
        prop_assert!(alcohol_high >= alcohol_low);
    }

    #[test]
    fn short_histories_never_produce_patterns(stress in proptest::collection::vec(1u8..=10, 0..7)) {
        let history: Vec<Assessment> = stress
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                let mut a = day(i as i64 * 7);
                a.stress_level = s;
                a
            })
            .collect();
        prop_assert!(PatternDetector::default().detect(&history, &stamper()).is_empty());
    }
}
