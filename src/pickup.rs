use std::fmt;
use std::num::ParseIntError;

use serde::Serialize;
use snafu::prelude::*;

/// Hour and minute of a pickup timestamp.
///
/// Values are carried through as written in the input; nothing checks that
/// the hour is below 24 or the minute below 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PickupTime {
    pub hour: i64,
    pub minute: i64,
}

impl fmt::Display for PickupTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.hour, self.minute)
    }
}

#[derive(Debug, Snafu)]
pub enum TimestampError {
    #[snafu(display("no time-of-day after the date"))]
    MissingTime,

    #[snafu(display("time-of-day {time:?} has no minute part"))]
    MissingMinute { time: String },

    #[snafu(display("{name} {value:?} is not an integer: {source}"))]
    Component {
        name: &'static str,
        value: String,
        source: ParseIntError,
    },
}

/// Parses `"<date> <hour>:<minute>[:...]"` into a [`PickupTime`].
///
/// The field is split on whitespace and the second token is taken as the
/// time-of-day; anything after the minute is ignored.
pub fn parse_pickup(field: &str) -> Result<PickupTime, TimestampError> {
    let time = field.split_whitespace().nth(1).context(MissingTimeSnafu)?;

    let mut parts = time.split(':');
    // split always yields at least one item
    let hour = parts.next().unwrap_or_default();
    let minute = parts.next().context(MissingMinuteSnafu { time })?;

    Ok(PickupTime {
        hour: parse_component("hour", hour)?,
        minute: parse_component("minute", minute)?,
    })
}

fn parse_component(name: &'static str, value: &str) -> Result<i64, TimestampError> {
    value.parse().context(ComponentSnafu { name, value })
}
