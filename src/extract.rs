use std::fs::File;
use std::io::Read;
use std::iter::FusedIterator;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use flate2::read::MultiGzDecoder;
use snafu::prelude::*;
use tracing::{debug, trace};

use crate::error::*;
use crate::pickup::{parse_pickup, PickupTime};

/// Column holding the pickup timestamp.
pub const TIMESTAMP_COLUMN: usize = 1;

pub type GzFile = MultiGzDecoder<File>;

/// Counters for a finished (or abandoned) extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractSummary {
    pub emitted: usize,
    pub skipped: usize,
    pub limit_reached: bool,
}

/// Lazily yields up to `limit` pickup times from a CSV stream.
///
/// The header is read when the extractor is built and fixes the field count
/// every data row must have. Rows with a different field count are skipped
/// without touching the limit. A row with the right field count but a bad
/// timestamp is a fatal error: it is yielded once and the iterator is done.
///
/// The underlying reader is dropped as soon as the limit is reached, the
/// input ends, or an error is yielded, so no record past the last emitted
/// one is ever read.
pub struct PickupExtractor<R: Read> {
    reader: Option<csv::Reader<R>>,
    header: StringRecord,
    record: StringRecord,
    remaining: usize,
    emitted: usize,
    skipped: usize,
}

impl PickupExtractor<GzFile> {
    /// Opens a gzip-compressed CSV file.
    pub fn open(path: impl AsRef<Path>, limit: usize) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        let file = File::open(path).context(OpenSnafu { path })?;
        debug!(path = %path.display(), limit, "opened input");
        Self::from_gzip(file, limit)
    }
}

impl<R: Read> PickupExtractor<MultiGzDecoder<R>> {
    /// Wraps a reader of gzip bytes. Concatenated gzip members are read
    /// through as one stream.
    pub fn from_gzip(reader: R, limit: usize) -> Result<Self, ExtractError> {
        Self::from_csv(MultiGzDecoder::new(reader), limit)
    }
}

impl<R: Read> PickupExtractor<R> {
    /// Wraps a reader of plain CSV text and consumes its header record.
    pub fn from_csv(reader: R, limit: usize) -> Result<Self, ExtractError> {
        // flexible, so rows of the wrong width reach the skip check instead
        // of failing inside the parser
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let header = reader.headers().context(ReadHeaderSnafu)?.clone();
        ensure!(!header.is_empty(), MissingHeaderSnafu);
        debug!(columns = header.len(), "read header");

        Ok(Self {
            reader: Some(reader),
            header,
            record: StringRecord::new(),
            remaining: limit,
            emitted: 0,
            skipped: 0,
        })
    }

    pub fn header(&self) -> &StringRecord {
        &self.header
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn summary(&self) -> ExtractSummary {
        ExtractSummary {
            emitted: self.emitted,
            skipped: self.skipped,
            limit_reached: self.remaining == 0,
        }
    }

    fn current_pickup(&self, line: u64) -> Result<PickupTime, ExtractError> {
        let field = self
            .record
            .get(TIMESTAMP_COLUMN)
            .context(MissingTimestampSnafu { line })?;
        parse_pickup(field).context(TimestampSnafu { line, field })
    }

    fn finish(&mut self) {
        self.reader = None;
    }
}

impl<R: Read> Iterator for PickupExtractor<R> {
    type Item = Result<PickupTime, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.remaining == 0 {
                self.finish();
                return None;
            }
            let reader = self.reader.as_mut()?;

            match reader.read_record(&mut self.record) {
                Ok(true) => {}
                Ok(false) => {
                    self.finish();
                    return None;
                }
                Err(source) => {
                    self.finish();
                    return Some(Err(ExtractError::ReadRow { source }));
                }
            }

            let line = self.record.position().map_or(0, |pos| pos.line());
            if self.record.len() != self.header.len() {
                self.skipped += 1;
                trace!(line, fields = self.record.len(), "skipping row");
                continue;
            }

            return match self.current_pickup(line) {
                Ok(pickup) => {
                    self.remaining -= 1;
                    self.emitted += 1;
                    if self.remaining == 0 {
                        self.finish();
                    }
                    Some(Ok(pickup))
                }
                Err(err) => {
                    self.finish();
                    Some(Err(err))
                }
            };
        }
    }
}

impl<R: Read> FusedIterator for PickupExtractor<R> {}
