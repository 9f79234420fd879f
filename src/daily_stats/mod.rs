//! DailyStats - Camera Registration Trend
//!
//! ## Responsibilities
//!
//! - Fold the current camera set into a cumulative per-day series
//! - Pure computation: no I/O, no stored state
//!
//! The provider calls [`daily_camera_counts`] after every change to the
//! camera set; nothing here is recomputed implicitly.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::camera_provider::types::Camera;

/// Days covered by the series, today inclusive
pub const DAILY_SERIES_DAYS: i64 = 7;

/// Cumulative camera count as of one local calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Cumulative camera counts for the trailing seven local calendar days.
///
/// Oldest day first, `today` last. A camera counts toward a day when its
/// local registration date is on or before that day, so the series never
/// decreases. Cameras without a registration timestamp are skipped.
pub fn daily_camera_counts(cameras: &[Camera], today: NaiveDate) -> Vec<DailyCount> {
    let created: Vec<NaiveDate> = cameras.iter().filter_map(Camera::created_on).collect();

    (0..DAILY_SERIES_DAYS)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let count = created.iter().filter(|d| **d <= date).count();
            DailyCount { date, count }
        })
        .collect()
}
