//! # mailboard-core
//!
//! Core business logic for the `MailBoard` email-triage dashboard.
//!
//! This crate provides:
//! - **Record Model** - email-like records with a classification lifecycle
//! - **Synthetic Seed** - first-run data generation
//! - **Stores** - whole-collection record and shortcut persistence over `SQLite`
//! - **Filter Engine** - composable criteria with virtual status values
//! - **Aggregation** - tile counters, breakdowns, daily trend, top-5 rankings
//! - **Custom Shortcuts** - user-authored filter presets with live counts
//! - **Employee Roster** - in-memory roster fed by the external source
//! - **Report Planner** - pure multi-page pagination geometry

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
pub mod filter;
pub mod record;
pub mod report;
pub mod roster;
pub mod shortcut;
pub mod stats;
pub mod storage;

pub use error::{Error, Result};
pub use filter::{RecordFilter, StatusFilter, group_by_sender, unique_cities, unique_cities_in};
pub use record::{
    CATEGORIES, NewRecord, Priority, Record, RecordPatch, RecordStore, Region, SEED_COUNT, Status,
    synthetic_records,
};
pub use report::{A4_HEIGHT_MM, A4_WIDTH_MM, PagePlan, plan_a4, plan_pages};
pub use roster::{Employee, EmployeeRoster};
pub use shortcut::{Shortcut, ShortcutFilters, ShortcutStore};
pub use stats::{
    DailyCount, RecordStats, RegionPriorityCount, daily_trend, priority_by_region, top_by_region,
    top_by_sender,
};
pub use storage::Storage;
