//! Triage records: data model, lifecycle, seeding and persistence.

pub mod model;
pub mod seed;
pub mod store;

pub use model::{CATEGORIES, NewRecord, Priority, Record, RecordPatch, Region, Status};
pub use seed::{SEED_COUNT, cities_for, synthetic_records};
pub use store::RecordStore;
