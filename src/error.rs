//! Fatal errors raised while extracting pickup times.
//!
//! Rows whose field count differs from the header are not errors; they are
//! skipped by the extractor and never reach this enum.

use std::path::PathBuf;

use snafu::prelude::*;

use crate::pickup::TimestampError;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ExtractError {
    /// The input file could not be opened.
    #[snafu(display("Cannot open {}: {source}", path.display()))]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Decompression or CSV decoding failed while reading the header.
    #[snafu(display("Cannot read header record: {source}"))]
    ReadHeader { source: csv::Error },

    /// The stream ended before a header record was seen.
    #[snafu(display("Input has no header record"))]
    MissingHeader,

    /// Decompression or CSV decoding failed while reading a data row.
    #[snafu(display("Cannot read record: {source}"))]
    ReadRow { source: csv::Error },

    /// A well-formed row has no field at the timestamp index.
    #[snafu(display("Line {line}: row has no timestamp field"))]
    MissingTimestamp { line: u64 },

    /// The timestamp field does not spell `<date> <hour>:<minute>...`.
    #[snafu(display("Line {line}: bad timestamp {field:?}: {source}"))]
    Timestamp {
        line: u64,
        field: String,
        source: TimestampError,
    },

    /// Writing a pair to the output sink failed.
    #[snafu(display("Cannot write output: {source}"))]
    Write { source: csv::Error },
}
