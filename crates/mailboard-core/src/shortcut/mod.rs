//! Filter shortcuts: model and persistence.

pub mod model;
pub mod store;

pub use model::{Shortcut, ShortcutFilters};
pub use store::ShortcutStore;
