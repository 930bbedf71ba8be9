//! Core comparison pipeline for bench-delta.
//!
//! This module contains the feed schema, identifier decoding, timing tables
//! and the delta metric itself.

pub mod delta;
pub mod name;
pub mod schema;
pub mod table;

// Re-export key types for convenience
pub use name::{DecodedName, FeedMode};
pub use schema::{BenchmarkEntry, MeasurementKey, ResultFeed};
pub use table::TimingTable;
