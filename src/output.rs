use std::io::{Read, Write};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use snafu::prelude::*;

use crate::error::*;
use crate::extract::{ExtractSummary, PickupExtractor};
use crate::pickup::PickupTime;

/// Writes pickup times as `<hour> <minute>` lines.
pub struct PickupWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> PickupWriter<W> {
    pub fn new(sink: W) -> Self {
        let inner = WriterBuilder::new()
            .has_headers(false)
            .delimiter(b' ')
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(sink);
        Self { inner }
    }

    pub fn write(&mut self, pickup: &PickupTime) -> Result<(), ExtractError> {
        self.inner.serialize(pickup).context(WriteSnafu)
    }

    pub fn flush(&mut self) -> Result<(), ExtractError> {
        self.inner.flush().map_err(csv::Error::from).context(WriteSnafu)
    }
}

/// Drains `pickups` into `sink`, one line per pair.
///
/// Pairs written before a fatal error are flushed before the error is
/// returned.
pub fn write_pickups<R: Read, W: Write>(
    mut pickups: PickupExtractor<R>,
    sink: W,
) -> Result<ExtractSummary, ExtractError> {
    let mut writer = PickupWriter::new(sink);
    for pickup in &mut pickups {
        match pickup {
            Ok(pickup) => writer.write(&pickup)?,
            Err(err) => {
                writer.flush()?;
                return Err(err);
            }
        }
    }
    writer.flush()?;
    Ok(pickups.summary())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(csv: &str, limit: usize) -> (String, Result<ExtractSummary, ExtractError>) {
        let mut out = Vec::new();
        let extractor = PickupExtractor::from_csv(csv.as_bytes(), limit).unwrap();
        let result = write_pickups(extractor, &mut out);
        (String::from_utf8(out).unwrap(), result)
    }

    #[test]
    fn writes_one_pair_per_line() {
        let mut out = Vec::new();
        {
            let mut writer = PickupWriter::new(&mut out);
            writer.write(&PickupTime { hour: 14, minute: 35 }).unwrap();
            writer.write(&PickupTime { hour: 9, minute: 5 }).unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "14 35\n9 5\n");
    }

    #[test]
    fn renders_two_trips() {
        let csv = "id,pickup,dropoff\n\
                   1,\"2016-01-01 14:35:00\",x\n\
                   2,\"2016-01-01 09:05:00\",y\n";
        let (out, summary) = render(csv, 2);
        assert_eq!(out, "14 35\n9 5\n");
        let summary = summary.unwrap();
        assert_eq!(summary.emitted, 2);
        assert!(summary.limit_reached);
    }

    #[test]
    fn pairs_before_a_failure_are_kept() {
        let csv = "id,pickup,dropoff\n\
                   1,\"2016-01-01 14:35:00\",x\n\
                   2,\"2016-01-01\",y\n\
                   3,\"2016-01-01 09:05:00\",z\n";
        let (out, result) = render(csv, 5);
        assert_eq!(out, "14 35\n");
        assert!(matches!(result, Err(ExtractError::Timestamp { line: 3, .. })));
    }

    #[test]
    fn empty_body_writes_nothing() {
        let (out, summary) = render("id,pickup,dropoff\n", 3);
        assert!(out.is_empty());
        assert_eq!(summary.unwrap(), ExtractSummary::default());
    }
}
