use crate::models::{LabelCount, StatsResponse, User, WeekSummary, WorkoutLog, XpPoint};
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use std::collections::BTreeMap;

const WEEK_COUNT: usize = 8;
const TOP_LABELS: usize = 10;

/// Sunday-first, matching the histogram index.
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

pub fn build_stats(logs: &[WorkoutLog]) -> StatsResponse {
    build_stats_at(Local::now().date_naive(), logs)
}

/// `logs` must already be sorted ascending by date.
pub fn build_stats_at(today: NaiveDate, logs: &[WorkoutLog]) -> StatsResponse {
    StatsResponse {
        xp_over_time: xp_series(logs).collect(),
        weekday_counts: weekday_counts(logs),
        label_distribution: label_distribution(logs),
        weekly_summary: weekly_summary(today, logs),
    }
}

/// Running XP total, one point per log.
pub struct XpSeries<'a> {
    logs: std::slice::Iter<'a, WorkoutLog>,
    total: u64,
}

impl Iterator for XpSeries<'_> {
    type Item = XpPoint;

    fn next(&mut self) -> Option<XpPoint> {
        let log = self.logs.next()?;
        self.total = self.total.saturating_add(u64::from(log.xp_gained));
        Some(XpPoint {
            date: log.date,
            xp: self.total,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.logs.size_hint()
    }
}

pub fn xp_series(logs: &[WorkoutLog]) -> XpSeries<'_> {
    XpSeries {
        logs: logs.iter(),
        total: 0,
    }
}

pub fn weekday_counts(logs: &[WorkoutLog]) -> [u64; 7] {
    let mut counts = [0u64; 7];
    for log in logs.iter().filter(|log| !log.is_rest_day) {
        counts[log.date.weekday().num_days_from_sunday() as usize] += 1;
    }
    counts
}

/// Top workout labels by count; equal counts are ordered by label.
pub fn label_distribution(logs: &[WorkoutLog]) -> Vec<LabelCount> {
    let mut freq: BTreeMap<&str, u64> = BTreeMap::new();
    for log in logs.iter().filter(|log| !log.is_rest_day) {
        let Some(label) = log.workout_text.as_deref().map(str::trim) else {
            continue;
        };
        if !label.is_empty() {
            *freq.entry(label).or_default() += 1;
        }
    }

    let mut ranked: Vec<(&str, u64)> = freq.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(TOP_LABELS)
        .map(|(label, count)| LabelCount {
            label: label.to_string(),
            count,
        })
        .collect()
}

pub fn weekly_summary(today: NaiveDate, logs: &[WorkoutLog]) -> Vec<WeekSummary> {
    let start = week_start(today - Duration::weeks(WEEK_COUNT as i64 - 1));
    let mut buckets: Vec<WeekSummary> = (0..WEEK_COUNT)
        .map(|offset| WeekSummary {
            week_start: start + Duration::weeks(offset as i64),
            workouts: 0,
            rest: 0,
        })
        .collect();

    for log in logs.iter().filter(|log| log.date >= start) {
        let key = week_start(log.date);
        let Some(bucket) = buckets.iter_mut().find(|bucket| bucket.week_start == key) else {
            continue;
        };
        if log.is_rest_day {
            bucket.rest += 1;
        } else {
            bucket.workouts += 1;
        }
    }

    buckets
}

/// Weekday with the most workouts; ties go to the earliest day from Sunday.
pub fn most_active_day(logs: &[WorkoutLog]) -> Option<&'static str> {
    let counts = weekday_counts(logs);
    let mut best: Option<(usize, u64)> = None;
    for (idx, &count) in counts.iter().enumerate() {
        if count > 0 && best.is_none_or(|(_, top)| count > top) {
            best = Some((idx, count));
        }
    }
    best.map(|(idx, _)| weekday_name(WEEKDAYS[idx]))
}

/// Refreshes the cached most-active day. Returns true when the user changed.
pub fn reconcile_most_active_day(user: &mut User, logs: &[WorkoutLog]) -> bool {
    let Some(day) = most_active_day(logs) else {
        return false;
    };
    if user.most_active_day.as_deref() == Some(day) {
        return false;
    }
    user.most_active_day = Some(day.to_string());
    true
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}
