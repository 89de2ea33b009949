//! Day bucketing and windowing of grouped counts.

use crate::reference::domain::Task;
use crate::report::domain::{GroupKind, GroupedCount, ReportBucket};
use chrono::{NaiveDate, TimeZone};
use std::collections::BTreeMap;

/// Counts completed tasks per calendar day of their completion time in
/// `zone`, ascending by day.
///
/// The completion time is the task's last update. Tasks without one are not
/// counted. An empty input gives no buckets.
#[must_use]
pub fn aggregate_by_day<Tz: TimeZone>(tasks: &[Task], zone: &Tz) -> Vec<ReportBucket> {
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for completed in tasks.iter().filter_map(Task::updated_at) {
        let day = completed.with_timezone(zone).date_naive();
        let count = per_day.entry(day).or_insert(0);
        *count = count.saturating_add(1);
    }
    per_day
        .into_iter()
        .map(|(day, count)| ReportBucket::new(day.format("%Y-%m-%d").to_string(), count))
        .collect()
}

/// The first `n` entries in received order; all of them when `n` exceeds the
/// length.
#[must_use]
pub fn top_n<T>(items: &[T], n: usize) -> &[T] {
    items.get(..n).unwrap_or(items)
}

/// Labels server-grouped rows for a chart, keeping the server's order and
/// optionally windowing to the first `limit` rows.
#[must_use]
pub fn grouped_chart(
    kind: GroupKind,
    rows: &[GroupedCount],
    limit: Option<usize>,
) -> Vec<ReportBucket> {
    let window = limit.map_or(rows, |n| top_n(rows, n));
    window
        .iter()
        .map(|row| ReportBucket::new(row.label(kind), row.count))
        .collect()
}
