//! Calendar arithmetic on zoned timestamps.
//!
//! Every function works in the time zone of its argument: "start of day" is local midnight, weeks
//! start on a caller chosen weekday, and day differences count calendar dates.

use chrono::{
    DateTime, Datelike, DurationRound, NaiveDate, NaiveTime, Offset, TimeDelta, TimeZone, Utc,
    Weekday,
};

use crate::math::positive_mod;

/// Earliest of `t` and `others`. On ties the first one wins.
pub fn min_time<Tz, I>(t: DateTime<Tz>, others: I) -> DateTime<Tz>
where
    Tz: TimeZone,
    I: IntoIterator<Item = DateTime<Tz>>,
{
    others
        .into_iter()
        .fold(t, |min, v| if v < min { v } else { min })
}

/// Latest of `t` and `others`. On ties the first one wins.
pub fn max_time<Tz, I>(t: DateTime<Tz>, others: I) -> DateTime<Tz>
where
    Tz: TimeZone,
    I: IntoIterator<Item = DateTime<Tz>>,
{
    others
        .into_iter()
        .fold(t, |max, v| if v > max { v } else { max })
}

/// First instant of the local day `t` falls on.
///
/// Usually local midnight. If a DST transition skips midnight, the day starts at the transition.
pub fn start_of_day<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let midnight = t.date_naive().and_time(NaiveTime::MIN);
    let tz = t.timezone();

    tz.from_local_datetime(&midnight).earliest().unwrap_or_else(|| {
        // Midnight read with the offset in effect before the gap is the transition instant.
        let before = tz.offset_from_utc_datetime(&(midnight - TimeDelta::days(1)));
        let offset = TimeDelta::seconds(i64::from(before.fix().local_minus_utc()));
        tz.from_utc_datetime(&(midnight - offset))
    })
}

/// Time elapsed since local midnight, with full sub-second precision.
///
/// `clock(2025-08-08 15:30:00.123 +09:00) == 15h30m0.123s`
pub fn clock<Tz: TimeZone>(t: &DateTime<Tz>) -> TimeDelta {
    t.clone().signed_duration_since(start_of_day(t))
}

/// Days elapsed since the most recent `start_of_week`, in `0..7`.
///
/// `day_of_week_in_week(2025-01-08 (Wednesday), Weekday::Mon) == 2`
pub fn day_of_week_in_week<Tz: TimeZone>(t: &DateTime<Tz>, start_of_week: Weekday) -> u32 {
    days_into_week(t.weekday(), start_of_week)
}

fn days_into_week(day: Weekday, start_of_week: Weekday) -> u32 {
    let diff = i64::from(day.num_days_from_sunday())
        - i64::from(start_of_week.num_days_from_sunday());
    positive_mod(diff, 7) as u32
}

/// ISO 8601 week number: weeks start on Monday, week 1 holds the year's first Thursday.
pub fn week_of_year_iso<Tz: TimeZone>(t: &DateTime<Tz>) -> u32 {
    t.iso_week().week()
}

/// 1 based week of the month `t` falls in, with weeks starting on `start_of_week`.
///
/// Week 1 is the week containing the 1st of the month, so it may begin in the previous month.
///
/// `week_of_month(2025-08-09 (Saturday), Weekday::Mon) == 2`
pub fn week_of_month<Tz: TimeZone>(t: &DateTime<Tz>, start_of_week: Weekday) -> i64 {
    let date = t.date_naive();
    let first_of_month = date - TimeDelta::days(i64::from(date.day0()));

    let first_week = week_start(first_of_month, start_of_week);
    let this_week = week_start(date, start_of_week);

    (this_week - first_week).num_days() / 7 + 1
}

fn week_start(date: NaiveDate, start_of_week: Weekday) -> NaiveDate {
    date - TimeDelta::days(i64::from(days_into_week(date.weekday(), start_of_week)))
}

/// Calendar days from `from` to `to`, ignoring the time of day. Negative if `to` is earlier.
///
/// A day shortened or stretched by DST still counts as one.
///
/// `days_between(2025-01-01 10:00, 2025-01-03 09:00) == 2`
pub fn days_between<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>) -> i64 {
    (to.date_naive() - from.date_naive()).num_days()
}

/// Truncates `t` to a multiple of `d`, measured on the local wall clock.
///
/// With `d` of 24 hours this yields local midnight, whatever the zone's offset. `None` if `d` is
/// not positive, too large, or the truncated wall clock time does not exist in the zone.
pub fn truncate_local<Tz: TimeZone>(t: &DateTime<Tz>, d: TimeDelta) -> Option<DateTime<Tz>> {
    if d <= TimeDelta::zero() {
        return None;
    }

    let local = t.naive_local().duration_trunc(d).ok()?;
    t.timezone().from_local_datetime(&local).earliest()
}

/// Whether `t` lies within `tolerance` (inclusive) of a multiple of `interval`, counted from the
/// Unix epoch.
///
/// The multiples are absolute instants, so the answer does not depend on the zone `t` is viewed
/// in: `within_range(t, 1h, 5m)` holds from xx:55:00 to xx:05:00 UTC, which in a +05:30 zone is
/// around half past the local hour. Returns `false` for a non-positive `interval`.
pub fn within_range<Tz: TimeZone>(
    t: &DateTime<Tz>,
    interval: TimeDelta,
    tolerance: TimeDelta,
) -> bool {
    if interval <= TimeDelta::zero() {
        return false;
    }

    let utc = t.with_timezone(&Utc);
    let Ok(floor) = utc.duration_trunc(interval) else {
        return false;
    };

    let diff = utc.signed_duration_since(floor);
    diff <= tolerance || diff >= interval - tolerance
}

/// Span between the earliest and latest of `times`, zero if empty.
pub fn time_range<Tz: TimeZone>(times: &[DateTime<Tz>]) -> TimeDelta {
    let Some((first, rest)) = times.split_first() else {
        return TimeDelta::zero();
    };

    let (min, max) = rest.iter().fold((first, first), |(min, max), t| {
        (if t < min { t } else { min }, if t > max { t } else { max })
    });

    max.clone().signed_duration_since(min.clone())
}

/// Whether `t` is after the current instant.
pub fn is_future<Tz: TimeZone>(t: &DateTime<Tz>) -> bool {
    *t > Utc::now()
}

/// Whether `t` is before the current instant.
pub fn is_past<Tz: TimeZone>(t: &DateTime<Tz>) -> bool {
    *t < Utc::now()
}
