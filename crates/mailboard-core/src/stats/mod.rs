//! Aggregated statistics over record collections.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::record::{CATEGORIES, Priority, Record, Region, Status};

const TOP_LIMIT: usize = 5;
const UNSPECIFIED: &str = "unspecified";

/// Summary counters and breakdowns for a record collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RecordStats {
    /// All records.
    pub total: usize,
    /// Records waiting for classification.
    pub pending: usize,
    /// Records already classified.
    pub classified: usize,
    /// Records filed away.
    pub archived: usize,
    /// Records at `Urgent` priority exactly; `High` does not count here.
    pub urgent: usize,
    /// Records dated within the last seven days.
    pub recent: usize,
    /// Count per region, in display order, zero counts included.
    pub by_region: Vec<(Region, usize)>,
    /// Count per well-known category, in fixed order, zero counts included.
    pub by_category: Vec<(String, usize)>,
    /// Count per `{REGION}-{City}` key, first-encounter order, only for
    /// records carrying both fields.
    pub by_city: Vec<(String, usize)>,
}

impl RecordStats {
    /// Computes the summary for `records` at instant `now`.
    #[must_use]
    pub fn compute(records: &[Record], now: DateTime<Utc>) -> Self {
        let cutoff = now - Duration::days(7);
        let mut stats = Self {
            total: records.len(),
            by_region: by_region(records),
            by_category: by_category(records),
            by_city: by_city(records),
            ..Self::default()
        };

        for record in records {
            match record.status {
                Status::Pending => stats.pending += 1,
                Status::Classified => stats.classified += 1,
                Status::Archived => stats.archived += 1,
            }
            if record.priority == Priority::Urgent {
                stats.urgent += 1;
            }
            if record.date > cutoff {
                stats.recent += 1;
            }
        }

        stats
    }
}

fn by_region(records: &[Record]) -> Vec<(Region, usize)> {
    Region::ALL
        .into_iter()
        .map(|region| {
            let count = records
                .iter()
                .filter(|record| record.region == Some(region))
                .count();
            (region, count)
        })
        .collect()
}

fn by_category(records: &[Record]) -> Vec<(String, usize)> {
    CATEGORIES
        .into_iter()
        .map(|label| {
            let count = records
                .iter()
                .filter(|record| record.category.as_deref() == Some(label))
                .count();
            (label.to_string(), count)
        })
        .collect()
}

fn by_city(records: &[Record]) -> Vec<(String, usize)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in records {
        let (Some(region), Some(city)) = (record.region, record.city.as_deref()) else {
            continue;
        };
        let key = format!("{}-{city}", region.as_str());
        if !counts.contains_key(&key) {
            order.push(key.clone());
        }
        *counts.entry(key).or_insert(0) += 1;
    }

    order
        .into_iter()
        .map(|key| {
            let count = counts.remove(&key).unwrap_or_default();
            (key, count)
        })
        .collect()
}

/// One day of the week-long trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    /// UTC calendar day.
    pub date: NaiveDate,
    /// Records dated on that day.
    pub total: usize,
    /// Pending records dated on that day.
    pub pending: usize,
}

/// Per-day counts for the trailing seven days, oldest first.
///
/// The last entry is the day of `now`; records outside the window are
/// ignored.
#[must_use]
pub fn daily_trend(records: &[Record], now: DateTime<Utc>) -> Vec<DailyCount> {
    (0..7)
        .rev()
        .map(|offset| {
            let day = (now - Duration::days(offset)).date_naive();
            let total = records
                .iter()
                .filter(|record| record.date.date_naive() == day)
                .count();
            let pending = records
                .iter()
                .filter(|record| record.date.date_naive() == day && record.is_pending())
                .count();
            DailyCount {
                date: day,
                total,
                pending,
            }
        })
        .collect()
}

/// Per-priority record counts for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionPriorityCount {
    /// Region the row describes.
    pub region: Region,
    /// Records at `Low` priority.
    pub low: usize,
    /// Records at `Medium` priority.
    pub medium: usize,
    /// Records at `High` priority.
    pub high: usize,
    /// Records at `Urgent` priority.
    pub urgent: usize,
    /// All records in the region.
    pub total: usize,
}

/// Per-priority counts for every region, in display order, zero rows
/// included.
///
/// Records without a region appear in no row.
#[must_use]
pub fn priority_by_region(records: &[Record]) -> Vec<RegionPriorityCount> {
    Region::ALL
        .into_iter()
        .map(|region| {
            let mut row = RegionPriorityCount {
                region,
                low: 0,
                medium: 0,
                high: 0,
                urgent: 0,
                total: 0,
            };
            for record in records.iter().filter(|item| item.region == Some(region)) {
                match record.priority {
                    Priority::Low => row.low += 1,
                    Priority::Medium => row.medium += 1,
                    Priority::High => row.high += 1,
                    Priority::Urgent => row.urgent += 1,
                }
                row.total += 1;
            }
            row
        })
        .collect()
}

/// Top regions by record count, best first, at most five entries.
///
/// Records without a region fall under the `unspecified` key. Ties keep
/// first-encounter order.
#[must_use]
pub fn top_by_region(records: &[Record]) -> Vec<(String, usize)> {
    top_by(records, |record| {
        record.region.map_or_else(
            || UNSPECIFIED.to_string(),
            |region| region.as_str().to_string(),
        )
    })
}

/// Top senders by record count, best first, at most five entries.
///
/// Blank senders fall under the `unspecified` key. Ties keep
/// first-encounter order.
#[must_use]
pub fn top_by_sender(records: &[Record]) -> Vec<(String, usize)> {
    top_by(records, |record| {
        if record.sender.is_empty() {
            UNSPECIFIED.to_string()
        } else {
            record.sender.clone()
        }
    })
}

fn top_by<F>(records: &[Record], key: F) -> Vec<(String, usize)>
where
    F: Fn(&Record) -> String,
{
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = key(record);
        if !counts.contains_key(&key) {
            order.push(key.clone());
        }
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|key| {
            let count = counts.remove(&key).unwrap_or_default();
            (key, count)
        })
        .collect();
    // sort_by is stable, so ties keep first-encounter order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_LIMIT);
    ranked
}
