//! Saved filter shortcuts.

use serde::{Deserialize, Serialize};

use crate::filter::{RecordFilter, StatusFilter};
use crate::record::{Priority, Region};

/// A titled filter preset, persisted for one-click reuse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    /// Title, unique within the collection, identity key for removal.
    pub title: String,
    /// The saved criteria.
    pub filters: ShortcutFilters,
}

impl Shortcut {
    /// Creates a shortcut over `filters`.
    #[must_use]
    pub fn new(title: impl Into<String>, filters: ShortcutFilters) -> Self {
        Self {
            title: title.into(),
            filters,
        }
    }
}

/// The four persistable filter dimensions of a shortcut.
///
/// An unset dimension is unconstrained; free text and date bounds are never
/// part of a shortcut. Only the set dimensions are persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutFilters {
    /// Status dimension, including the virtual `urgent`/`recent` values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusFilter>,
    /// Priority level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Category label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Administrative region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
}

impl ShortcutFilters {
    /// Builds from raw dimension labels.
    ///
    /// The `"all"` sentinel (any case), blanks, and unknown values leave the
    /// dimension unconstrained.
    #[must_use]
    pub fn from_labels(status: &str, priority: &str, category: &str, region: &str) -> Self {
        Self {
            status: StatusFilter::parse(status),
            priority: Priority::parse(priority),
            category: Some(category.trim())
                .filter(|label| !label.is_empty() && !label.eq_ignore_ascii_case("all"))
                .map(ToString::to_string),
            region: Region::parse(region),
        }
    }

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

    /// The engine filter equivalent to these dimensions.
    #[must_use]
    pub fn to_filter(&self) -> RecordFilter {
        RecordFilter {
            status: self.status,
            priority: self.priority,
            category: self.category.clone(),
            region: self.region,
            ..RecordFilter::default()
        }
    }
}
