//! Parsing timestamps and rendering durations as clock strings.

use chrono::{DateTime, Local, NaiveDateTime, TimeDelta, TimeZone};

use crate::math::div_mod;

/// Layout accepted by [`strftime`]: `2025-08-09 15:30:00`.
pub const DATE_TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("invalid date time `{input}`: {source}")]
    Parse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("`{input}` does not name a single local time")]
    LocalTime { input: String },
}

/// Parses `YYYY-MM-DD HH:MM:SS` as a wall clock time in the system's local zone.
pub fn strftime(s: &str) -> Result<DateTime<Local>, FormatError> {
    strftime_in(&Local, s)
}

/// Parses `YYYY-MM-DD HH:MM:SS` as a wall clock time in `tz`.
///
/// Times skipped or repeated by a DST transition are rejected with [`FormatError::LocalTime`].
pub fn strftime_in<Tz: TimeZone>(tz: &Tz, s: &str) -> Result<DateTime<Tz>, FormatError> {
    let naive = NaiveDateTime::parse_from_str(s, DATE_TIME_LAYOUT).map_err(|source| {
        FormatError::Parse {
            input: s.to_owned(),
            source,
        }
    })?;

    tz.from_local_datetime(&naive)
        .single()
        .ok_or_else(|| FormatError::LocalTime { input: s.to_owned() })
}

/// Renders `d` as `HH:MM:SS`, with `.mmm` appended when there are leftover milliseconds.
///
/// Hours are not wrapped at 24 and negative durations get a leading `-`. Precision below a
/// millisecond is dropped.
pub fn format_duration(d: TimeDelta) -> String {
    let millis = d.num_milliseconds();
    let sign = if millis < 0 { "-" } else { "" };

    let (secs, ms) = div_mod(millis.unsigned_abs(), 1000);
    let (mins, ss) = div_mod(secs, 60);
    let (hh, mm) = div_mod(mins, 60);

    if ms > 0 {
        format!("{sign}{hh:02}:{mm:02}:{ss:02}.{ms:03}")
    } else {
        format!("{sign}{hh:02}:{mm:02}:{ss:02}")
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, FixedOffset, Timelike};

    use super::*;

    #[test]
    fn durations() {
        let d = TimeDelta::hours(1)
            + TimeDelta::minutes(2)
            + TimeDelta::seconds(3)
            + TimeDelta::milliseconds(456);

        assert_eq!(format_duration(d), "01:02:03.456");
        assert_eq!(
            format_duration(TimeDelta::hours(10) + TimeDelta::minutes(20) + TimeDelta::seconds(30)),
            "10:20:30"
        );
        assert_eq!(format_duration(-TimeDelta::minutes(1)), "-00:01:00");
        assert_eq!(format_duration(TimeDelta::zero()), "00:00:00");
        assert_eq!(format_duration(TimeDelta::milliseconds(123)), "00:00:00.123");
        assert_eq!(format_duration(TimeDelta::hours(25) + TimeDelta::minutes(30)), "25:30:00");
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "00:00:00");
    }

    #[test]
    fn parse_in_zone() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let t = strftime_in(&tokyo, "2025-08-09 15:30:45").unwrap();

        assert_eq!((t.year(), t.month(), t.day()), (2025, 8, 9));
        assert_eq!((t.hour(), t.minute(), t.second()), (15, 30, 45));
        assert_eq!(t.offset(), &tokyo);
    }

    #[test]
    fn parse_local() {
        let t = strftime("2024-02-29 00:00:01").unwrap();

        assert_eq!(t.naive_local().to_string(), "2024-02-29 00:00:01");
    }

    #[test]
    fn parse_errors() {
        let inputs = [
            "",
            "2025-08-09",
            "2025-08-09T15:30:45",
            "2025-13-01 00:00:00",
            "2025-02-30 00:00:00",
        ];

        for input in inputs {
            let err = strftime_in(&chrono::Utc, input).unwrap_err();

            assert!(matches!(&err, FormatError::Parse { input: i, .. } if i == input), "{err}");
            assert!(std::error::Error::source(&err).is_some());
        }
    }
}
