//! Shared utilities for the in-memory chat store.
//!
//! Cross-cutting helpers that are not part of the domain model:
//! logger setup and wall-clock time in JST.

pub mod logger;
pub mod time;

pub use logger::setup_logger;
pub use time::{get_jst_timestamp, timestamp_to_jst_rfc3339};
