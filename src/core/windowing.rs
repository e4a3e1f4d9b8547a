//! Gap-based weekly grouping of assessments.
//!
//! A bucket is anchored at the date of its first sample and keeps accepting
//! samples while they fall less than `gap_days` after that anchor. The first
//! sample at or beyond the gap closes the bucket and anchors the next one, so
//! bucket boundaries follow the data's own cadence rather than calendar weeks.

use crate::model::Assessment;
use chrono::{Duration, NaiveDate};

/// A run of assessments sharing one anchor date.
#[derive(Debug, Clone)]
pub struct WeekBucket<'a> {
    /// Date of the first sample in the bucket
    pub start: NaiveDate,
    /// Samples in date order
    pub entries: Vec<&'a Assessment>,
}

impl<'a> WeekBucket<'a> {
    fn new(first: &'a Assessment) -> Self {
        Self {
            start: first.date,
            entries: vec![first],
        }
    }

    /// Check if a date falls within `span` of the anchor.
    pub fn contains(&self, date: NaiveDate, span: Duration) -> bool {
        date - self.start < span
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mean stress level of the bucket.
    pub fn mean_stress(&self) -> f64 {
        crate::core::stats::mean_of(&self.entries, |a| a.stress_level as f64)
    }
}

/// Sort a history by date without touching the caller's slice.
///
/// The sort is stable: samples on the same date keep their relative order.
pub fn sorted_by_date(history: &[Assessment]) -> Vec<&Assessment> {
    let mut sorted: Vec<&Assessment> = history.iter().collect();
    sorted.sort_by_key(|a| a.date);
    sorted
}

/// Partition date-sorted samples into gap-anchored buckets.
pub fn partition_weekly<'a>(sorted: &[&'a Assessment], gap_days: i64) -> Vec<WeekBucket<'a>> {
    let span = Duration::days(gap_days);
    let mut buckets: Vec<WeekBucket<'a>> = Vec::new();

    for &assessment in sorted {
        match buckets.last_mut() {
            Some(bucket) if bucket.contains(assessment.date, span) => {
                bucket.entries.push(assessment);
            }
            // Gap reached (or first sample): anchor a new bucket here
            _ => buckets.push(WeekBucket::new(assessment)),
        }
    }

    buckets
}
