//! # mailboard-api
//!
//! HTTP client for the external mail source API.
//!
//! ## Features
//!
//! - **Typed fetches**: the record collection (all, pending, by id) and the
//!   employee roster
//! - **Wire mapping**: Portuguese server field names map into the dashboard
//!   model types
//! - **Lenient coercions**: scalar tags wrap into lists, malformed dates fall
//!   back to the Unix epoch, numeric strings parse as counters
//! - **Envelope handling**: `success`/`data`/`error` payloads surface as
//!   typed errors
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailboard_api::SourceClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SourceClient::new("http://127.0.0.1:5000")?;
//!
//!     let records = client.fetch_records().await?;
//!     println!("Fetched {} records", records.len());
//!
//!     let employees = client.fetch_employees().await?;
//!     println!("Roster has {} employees", employees.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
mod error;
pub mod wire;

pub use client::SourceClient;
pub use error::{Error, Result};
