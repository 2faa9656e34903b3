//! Date helpers shared by the picker and its columns.
//!
//! All functions are pure and never panic: invalid combinations come back as
//! `None`, out-of-range dates are clamped.

use std::fmt::Write as _;
use std::ops::RangeInclusive;

use chrono::{Datelike as _, NaiveDate, NaiveDateTime, TimeDelta, Timelike as _};

use crate::Unit;

/// Drop sub-second precision from `date` and clamp it into `bounds` (inclusive).
///
/// Reversed bounds are treated as the swapped range, so the result is always
/// inside the range spanned by the two ends. Bounds are taken at whole seconds too.
/// `normalize(normalize(d)) == normalize(d)`.
pub fn normalize(date: NaiveDateTime, bounds: RangeInclusive<NaiveDateTime>) -> NaiveDateTime {
    let (start, end) = bounds.into_inner();
    let (min, max) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };
    whole_seconds(date).clamp(whole_seconds(min), whole_seconds(max))
}

fn whole_seconds(date: NaiveDateTime) -> NaiveDateTime {
    date.with_nanosecond(0).unwrap_or(date)
}

/// Are `a` and `b` the same instant, ignoring anything below a second?
pub fn same_instant(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.and_utc().timestamp() == b.and_utc().timestamp()
}

/// Render `date` with a token pattern such as `"YYYY/MM/DD hh:mm"`.
///
/// * A run of `Y` keeps that many trailing digits of the four-digit year (`YY` -> `"20"` for 2020).
/// * `M`, `D`, `h`, `m`, `s` render month, day, hour, minute, second: one letter unpadded,
///   two or more letters zero-padded to two digits.
/// * Every other character is copied as-is.
///
/// ```
/// # use chrono::NaiveDate;
/// let date = NaiveDate::from_ymd_opt(2020, 6, 5).unwrap().and_hms_opt(8, 3, 0).unwrap();
/// assert_eq!(egui_wheel_datepicker::time::format(&date, "YYYY/MM/DD"), "2020/06/05");
/// assert_eq!(egui_wheel_datepicker::time::format(&date, "M-D h:mm"), "6-5 8:03");
/// ```
pub fn format(date: &NaiveDateTime, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        let mut run = 1;
        while chars.next_if_eq(&c).is_some() {
            run += 1;
        }

        let field = match c {
            'Y' => {
                let year = format!("{:04}", date.year());
                let keep = run.min(year.len());
                out.push_str(&year[year.len() - keep..]);
                continue;
            }
            'M' => date.month(),
            'D' => date.day(),
            'h' => date.hour(),
            'm' => date.minute(),
            's' => date.second(),
            _ => {
                out.extend(std::iter::repeat_n(c, run));
                continue;
            }
        };

        if run == 1 {
            write!(out, "{field}").ok();
        } else {
            write!(out, "{field:02}").ok();
        }
    }

    out
}

/// Number of days in the given month, or `0` for a month outside `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    date.with_day(31)
        .map(|_| 31)
        .or_else(|| date.with_day(30).map(|_| 30))
        .or_else(|| date.with_day(29).map(|_| 29))
        .unwrap_or(28)
}

/// Set one component of `date` to `value`, keeping the others.
///
/// Changing the year or month clamps the day to the length of the target
/// month (Jan 31 with month 2 becomes Feb 28/29).
/// Returns `None` for values the unit can't hold, and always for [`Unit::List`].
pub fn with_unit(date: NaiveDateTime, unit: Unit, value: i32) -> Option<NaiveDateTime> {
    match unit {
        Unit::Year => with_year_month(date, value, date.month()),
        Unit::Month => with_year_month(date, date.year(), u32::try_from(value).ok()?),
        Unit::Day => date.with_day(u32::try_from(value).ok()?),
        Unit::Hour => date.with_hour(u32::try_from(value).ok()?),
        Unit::Minute => date.with_minute(u32::try_from(value).ok()?),
        Unit::Second => date.with_second(u32::try_from(value).ok()?),
        Unit::List => None,
    }
}

/// The current value of one component of `date`.
pub fn unit_value(date: &NaiveDateTime, unit: Unit) -> Option<i32> {
    let value = match unit {
        Unit::Year => return Some(date.year()),
        Unit::Month => date.month(),
        Unit::Day => date.day(),
        Unit::Hour => date.hour(),
        Unit::Minute => date.minute(),
        Unit::Second => date.second(),
        Unit::List => return None,
    };
    i32::try_from(value).ok()
}

/// Move one component of `date` by `delta`.
///
/// Year and month steps keep the day when possible and clamp it otherwise.
/// Day, hour, minute and second steps are plain durations and carry over
/// into the larger units.
pub fn step(date: NaiveDateTime, unit: Unit, delta: i32) -> Option<NaiveDateTime> {
    let delta = i64::from(delta);
    match unit {
        Unit::Year => with_year_month(
            date,
            i32::try_from(i64::from(date.year()) + delta).ok()?,
            date.month(),
        ),
        Unit::Month => {
            let months = i64::from(date.year()) * 12 + i64::from(date.month0()) + delta;
            let year = i32::try_from(months.div_euclid(12)).ok()?;
            let month = u32::try_from(months.rem_euclid(12)).ok()? + 1;
            with_year_month(date, year, month)
        }
        Unit::Day => date.checked_add_signed(TimeDelta::try_days(delta)?),
        Unit::Hour => date.checked_add_signed(TimeDelta::try_hours(delta)?),
        Unit::Minute => date.checked_add_signed(TimeDelta::try_minutes(delta)?),
        Unit::Second => date.checked_add_signed(TimeDelta::try_seconds(delta)?),
        Unit::List => None,
    }
}

fn with_year_month(date: NaiveDateTime, year: i32, month: u32) -> Option<NaiveDateTime> {
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.and_time(date.time()))
}
