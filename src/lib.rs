//! Pulls the hour and minute of the pickup timestamp out of gzip-compressed
//! CSV trip records.
//!
//! [`PickupExtractor`] reads the header, then yields one [`PickupTime`] per
//! row whose field count matches it, stopping after `limit` pairs.
//! [`write_pickups`] drains an extractor into any writer as
//! `<hour> <minute>` lines.

pub mod error;
pub mod extract;
pub mod output;
pub mod pickup;

pub use error::ExtractError;
pub use extract::{ExtractSummary, GzFile, PickupExtractor, TIMESTAMP_COLUMN};
pub use output::{write_pickups, PickupWriter};
pub use pickup::{parse_pickup, PickupTime, TimestampError};
