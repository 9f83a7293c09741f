use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Calendar granularity used by timeline windows, grid cells, and drag math.
///
/// `Seconds` through `Weeks` have a fixed length; `Months` and `Years` are
/// calendar-sized and must never be approximated with fixed durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl TimeUnit {
    /// Length in seconds for fixed-size units; `None` for calendar-sized ones.
    #[must_use]
    pub const fn fixed_seconds(self) -> Option<i64> {
        match self {
            Self::Seconds => Some(1),
            Self::Minutes => Some(60),
            Self::Hours => Some(3_600),
            Self::Days => Some(86_400),
            Self::Weeks => Some(604_800),
            Self::Months | Self::Years => None,
        }
    }
}

/// Adds `amount` whole units to `instant`, calendar-aware for months/years.
///
/// Month arithmetic clamps to the end of shorter months (Jan 31 + 1 month ==
/// Feb 28/29), matching the conventional calendar-library behavior the grid
/// semantics rely on.
#[must_use]
pub fn add_units(instant: DateTime<Utc>, amount: i64, unit: TimeUnit) -> DateTime<Utc> {
    match unit {
        TimeUnit::Seconds => instant + Duration::seconds(amount),
        TimeUnit::Minutes => instant + Duration::minutes(amount),
        TimeUnit::Hours => instant + Duration::hours(amount),
        TimeUnit::Days => instant + Duration::days(amount),
        TimeUnit::Weeks => instant + Duration::weeks(amount),
        TimeUnit::Months => add_months(instant, amount),
        TimeUnit::Years => add_months(instant, amount.saturating_mul(12)),
    }
}

/// Subtracts `amount` whole units from `instant`.
#[must_use]
pub fn subtract_units(instant: DateTime<Utc>, amount: i64, unit: TimeUnit) -> DateTime<Utc> {
    add_units(instant, -amount, unit)
}

fn add_months(instant: DateTime<Utc>, amount: i64) -> DateTime<Utc> {
    let months = Months::new(amount.unsigned_abs().min(u64::from(u32::MAX)) as u32);
    let shifted = if amount >= 0 {
        instant.checked_add_months(months)
    } else {
        instant.checked_sub_months(months)
    };
    // Overflow only at the extremes of the representable calendar.
    shifted.unwrap_or(instant)
}

/// Rounds `instant` down to the containing `unit` boundary.
///
/// Week boundaries are ISO: Monday 00:00.
#[must_use]
pub fn floor_to(instant: DateTime<Utc>, unit: TimeUnit) -> DateTime<Utc> {
    let floored = match unit {
        TimeUnit::Seconds => instant.with_nanosecond(0),
        TimeUnit::Minutes => instant.with_nanosecond(0).and_then(|i| i.with_second(0)),
        TimeUnit::Hours => instant
            .with_nanosecond(0)
            .and_then(|i| i.with_second(0))
            .and_then(|i| i.with_minute(0)),
        TimeUnit::Days => start_of_day(instant.date_naive()),
        TimeUnit::Weeks => {
            let days_into_week = i64::from(instant.weekday().num_days_from_monday());
            start_of_day(instant.date_naive() - Duration::days(days_into_week))
        }
        TimeUnit::Months => instant.date_naive().with_day(1).and_then(start_of_day),
        TimeUnit::Years => NaiveDate::from_ymd_opt(instant.year(), 1, 1).and_then(start_of_day),
    };
    floored.unwrap_or(instant)
}

/// Rounds `instant` up to the next `unit` boundary.
///
/// Instants already on a boundary are returned unchanged.
#[must_use]
pub fn ceil_to(instant: DateTime<Utc>, unit: TimeUnit) -> DateTime<Utc> {
    let floored = floor_to(instant, unit);
    if floored == instant {
        instant
    } else {
        add_units(floored, 1, unit)
    }
}

fn start_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Whole-unit difference `end - start`, truncated toward zero.
///
/// Calendar-sized units follow the usual calendar-diff convention: the whole
/// month count is reduced when the end's day/time within the month falls short
/// of the start's (Jan 15 12:00 → Feb 15 06:00 is zero whole months).
#[must_use]
pub fn units_between(start: DateTime<Utc>, end: DateTime<Utc>, unit: TimeUnit) -> i64 {
    if let Some(unit_seconds) = unit.fixed_seconds() {
        return (end - start).num_seconds() / unit_seconds;
    }

    let months = months_between(start, end);
    match unit {
        TimeUnit::Years => months / 12,
        _ => months,
    }
}

fn months_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let mut whole = i64::from(end.year() - start.year()) * 12 + i64::from(end.month())
        - i64::from(start.month());
    let anchor = add_months(start, whole);
    if whole > 0 && anchor > end {
        whole -= 1;
    } else if whole < 0 && anchor < end {
        whole += 1;
    }
    whole
}

/// Signed span `end - start` in fractional seconds (millisecond precision).
#[must_use]
pub fn seconds_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / 1000.0
}

#[must_use]
pub fn datetime_to_unix_seconds(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / 1000.0
}

/// Converts fractional unix seconds back to an instant.
///
/// Returns `None` when the value is not finite or falls outside the
/// representable calendar range.
#[must_use]
pub fn unix_seconds_to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    Utc.timestamp_millis_opt((seconds * 1000.0).round() as i64)
        .single()
}

/// Formats `instant` using a `strftime` pattern.
///
/// Returns `None` when the pattern itself is malformed; grid building falls
/// back to RFC 3339 labels in that case rather than failing the layout.
#[must_use]
pub fn try_format_instant(instant: DateTime<Utc>, pattern: &str) -> Option<String> {
    use std::fmt::Write as _;

    let mut out = String::new();
    match write!(out, "{}", instant.format(pattern)) {
        Ok(()) => Some(out),
        Err(_) => None,
    }
}

#[must_use]
pub fn format_instant(instant: DateTime<Utc>, pattern: &str) -> String {
    try_format_instant(instant, pattern).unwrap_or_else(|| instant.to_rfc3339())
}

/// Human-readable duration label: the first non-zero of years/months/days/
/// hours/minutes, using fixed 365-day years and 30-day months.
#[must_use]
pub fn humanize_seconds(seconds: f64) -> String {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 3_600.0;
    const DAY: f64 = 86_400.0;
    const MONTH: f64 = 30.0 * DAY;
    const YEAR: f64 = 365.0 * DAY;

    let total = seconds.abs();
    let years = (total / YEAR) as u64;
    if years > 0 {
        return format!("{years} years");
    }
    let months = (total / MONTH) as u64;
    if months > 0 {
        return format!("{months} months");
    }
    let days = (total / DAY) as u64;
    if days > 0 {
        return format!("{days} days");
    }
    let hours = (total / HOUR) as u64;
    if hours > 0 {
        return format!("{hours} hours");
    }
    format!("{} minutes", (total / MINUTE) as u64)
}

/// Finite, restartable enumeration of instants between two bounds.
///
/// Elements are `start + i * unit` for `i = 0, step, 2*step, ...`, stopping
/// strictly before `end`. A non-positive difference yields an empty range.
/// The range is `Clone`, so callers can walk it more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    start: DateTime<Utc>,
    unit: TimeUnit,
    step: i64,
    len: usize,
    index: usize,
}

impl TimeRange {
    #[must_use]
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>, unit: TimeUnit) -> Self {
        Self::between_stepped(start, end, unit, 1)
    }

    /// Enumerates every `step`-th unit boundary; a step below 1 is treated as 1.
    #[must_use]
    pub fn between_stepped(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        unit: TimeUnit,
        step: i64,
    ) -> Self {
        let step = step.max(1);
        let diff = units_between(start, end, unit);
        let len = if diff <= 0 {
            0
        } else {
            // diff and step are both positive here.
            usize::try_from((diff + step - 1) / step).unwrap_or(usize::MAX)
        };

        Self {
            start,
            unit,
            step,
            len,
            index: 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Restarts the cursor without rebuilding the range.
    pub fn restart(&mut self) {
        self.index = 0;
    }
}

impl Iterator for TimeRange {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }
        let offset = self.index as i64 * self.step;
        self.index += 1;
        Some(add_units(self.start, offset, self.unit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TimeRange {}
