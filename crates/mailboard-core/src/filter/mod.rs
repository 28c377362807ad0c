//! Composable filters over record collections.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Priority, Record, Region};

/// Status dimension of a filter.
///
/// Extends the lifecycle states with two virtual values derived from other
/// fields rather than from `Record::status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Records waiting for classification.
    Pending,
    /// Records already classified.
    Classified,
    /// Records filed away.
    Archived,
    /// Records at `High` or `Urgent` priority, in any lifecycle state.
    Urgent,
    /// Records dated within the last seven days, in any lifecycle state.
    Recent,
}

impl StatusFilter {
    /// Every filterable status value.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Classified,
        Self::Archived,
        Self::Urgent,
        Self::Recent,
    ];

    /// Parse from the wire/storage string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "classified" => Some(Self::Classified),
            "archived" => Some(Self::Archived),
            "urgent" => Some(Self::Urgent),
            "recent" => Some(Self::Recent),
            _ => None,
        }
    }

    /// Convert to the wire/storage string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Classified => "classified",
            Self::Archived => "archived",
            Self::Urgent => "urgent",
            Self::Recent => "recent",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::Classified => "Classificado",
            Self::Archived => "Arquivado",
            Self::Urgent => "Urgente",
            Self::Recent => "Recente",
        }
    }

    /// Check if `record` satisfies this status value at instant `now`.
    #[must_use]
    pub fn matches(self, record: &Record, now: DateTime<Utc>) -> bool {
        match self {
            Self::Pending => record.is_pending(),
            Self::Classified => record.is_classified(),
            Self::Archived => record.is_archived(),
            Self::Urgent => matches!(record.priority, Priority::High | Priority::Urgent),
            Self::Recent => record.date > now - Duration::days(7),
        }
    }
}

/// A conjunction of optional record criteria.
///
/// Unset dimensions do not constrain anything; an all-default filter matches
/// every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Status dimension, including the virtual `urgent`/`recent` values.
    pub status: Option<StatusFilter>,
    /// Priority level, compared exactly.
    pub priority: Option<Priority>,
    /// Category label, compared trimmed and case-insensitively.
    pub category: Option<String>,
    /// Administrative region, compared exactly; a record without a region
    /// never matches.
    pub region: Option<Region>,
    /// Sender address, compared exactly.
    pub sender: Option<String>,
    /// Free-text query over subject, sender, content, recipient and city.
    pub search: Option<String>,
    /// Inclusive lower bound, as a UTC calendar day.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound, as a UTC calendar day.
    pub date_to: Option<NaiveDate>,
}

impl RecordFilter {
    /// Sets the status dimension.
    #[must_use]
    pub const fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the priority dimension.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the category dimension.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the region dimension.
    #[must_use]
    pub const fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Sets the sender dimension.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Sets the free-text query.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sets the inclusive lower date bound.
    #[must_use]
    pub const fn with_date_from(mut self, from: NaiveDate) -> Self {
        self.date_from = Some(from);
        self
    }

    /// Sets the inclusive upper date bound.
    #[must_use]
    pub const fn with_date_to(mut self, to: NaiveDate) -> Self {
        self.date_to = Some(to);
        self
    }

    /// Check if `record` satisfies every set dimension at instant `now`.
    #[must_use]
    pub fn matches(&self, record: &Record, now: DateTime<Utc>) -> bool {
        if let Some(status) = self.status {
            if !status.matches(record, now) {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if record.priority != priority {
                return false;
            }
        }

        if let Some(category) = &self.category {
            let wanted = category.trim().to_lowercase();
            let matched = record
                .category
                .as_ref()
                .is_some_and(|label| label.trim().to_lowercase() == wanted);
            if !matched {
                return false;
            }
        }

        if let Some(region) = self.region {
            if record.region != Some(region) {
                return false;
            }
        }

        if let Some(sender) = &self.sender {
            if record.sender != *sender {
                return false;
            }
        }

        if let Some(search) = &self.search {
            if !record.matches_text(search) {
                return false;
            }
        }

        if let Some(from) = self.date_from {
            if record.date < from.and_time(NaiveTime::MIN).and_utc() {
                return false;
            }
        }

        if let Some(end) = self.date_to.and_then(|date| date.succ_opt()) {
            if record.date >= end.and_time(NaiveTime::MIN).and_utc() {
                return false;
            }
        }

        true
    }

    /// Filters `records`, preserving their order.
    ///
    /// `now` is taken once for the whole pass, so `recent` is evaluated
    /// consistently across the collection.
    #[must_use]
    pub fn apply(&self, records: &[Record], now: DateTime<Utc>) -> Vec<Record> {
        records
            .iter()
            .filter(|record| self.matches(record, now))
            .cloned()
            .collect()
    }
}

/// Groups records by sender, in first-encounter order.
///
/// Records within each group keep their relative order.
#[must_use]
pub fn group_by_sender(records: &[Record]) -> Vec<(String, Vec<Record>)> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<Record>> = HashMap::new();

    for record in records {
        if !groups.contains_key(&record.sender) {
            order.push(record.sender.clone());
        }
        groups
            .entry(record.sender.clone())
            .or_default()
            .push(record.clone());
    }

    order
        .into_iter()
        .map(|sender| {
            let group = groups.remove(&sender).unwrap_or_default();
            (sender, group)
        })
        .collect()
}

/// Distinct cities across `records`, sorted, absent cities skipped.
#[must_use]
pub fn unique_cities(records: &[Record]) -> Vec<String> {
    let mut cities: Vec<String> = records
        .iter()
        .filter_map(|record| record.city.clone())
        .collect();
    cities.sort();
    cities.dedup();
    cities
}

/// Distinct cities across the records of `region`, sorted.
#[must_use]
pub fn unique_cities_in(records: &[Record], region: Region) -> Vec<String> {
    let mut cities: Vec<String> = records
        .iter()
        .filter(|record| record.region == Some(region))
        .filter_map(|record| record.city.clone())
        .collect();
    cities.sort();
    cities.dedup();
    cities
}
