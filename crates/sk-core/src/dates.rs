//! Date expression normalization for `--before` / `--after` filters.
//!
//! Operators pass either absolute dates (`2023-01-01`, `2023-01-01 12:00:00`,
//! RFC 3339) or relative expressions (`today`, `-1 year`, `3 days ago`,
//! `today -1 week`). Everything resolves to a UTC instant against an injected
//! [`Clock`] so tests never depend on wall time.
//!
//! Grammar: an optional base (`now`, `today`, `midnight`, `yesterday`,
//! `tomorrow` or an absolute date) followed by any number of offsets of the
//! form `[+|-]N unit` or `N unit ago`. Without a base, offsets apply to now.

use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use thiserror::Error;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Reasons a date expression could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("empty date expression")]
    Empty,

    #[error("unrecognized token '{0}'")]
    UnknownToken(String),

    #[error("missing unit after '{0}'")]
    MissingUnit(String),

    #[error("unknown time unit '{0}'")]
    UnknownUnit(String),

    #[error("date arithmetic out of range")]
    OutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Fortnight,
    Month,
    Year,
}

impl Unit {
    fn parse(raw: &str) -> Option<Self> {
        let lower = raw.to_ascii_lowercase();
        let stem = lower
            .strip_suffix('s')
            .filter(|stem| !stem.is_empty())
            .unwrap_or(&lower);
        match stem {
            "sec" | "second" => Some(Self::Second),
            "min" | "minute" => Some(Self::Minute),
            "hour" => Some(Self::Hour),
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "fortnight" => Some(Self::Fortnight),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            _ => None,
        }
    }

    /// Length in seconds for units of fixed duration.
    const fn fixed_seconds(self) -> Option<i64> {
        match self {
            Self::Second => Some(1),
            Self::Minute => Some(60),
            Self::Hour => Some(3_600),
            Self::Day => Some(86_400),
            Self::Week => Some(604_800),
            Self::Fortnight => Some(1_209_600),
            Self::Month | Self::Year => None,
        }
    }

    const fn calendar_months(self) -> i64 {
        match self {
            Self::Year => 12,
            _ => 1,
        }
    }
}

/// Resolve a date expression to an absolute UTC instant.
///
/// # Errors
///
/// Returns `DateError` if the expression is empty, contains a token that is
/// neither a base nor an offset, or shifts outside the representable range.
pub fn normalize(expr: &str, clock: &dyn Clock) -> Result<DateTime<Utc>, DateError> {
    let tokens: Vec<&str> = expr.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(DateError::Empty);
    }

    let (base, consumed) = parse_base(&tokens, clock.now())?;
    apply_offsets(base, &tokens[consumed..])
}

fn parse_base(tokens: &[&str], now: DateTime<Utc>) -> Result<(DateTime<Utc>, usize), DateError> {
    if let [date, time, ..] = tokens
        && let Some(instant) = parse_date_and_time(date, time)
    {
        return Ok((instant, 2));
    }

    let Some((first, _)) = tokens.split_first() else {
        return Err(DateError::Empty);
    };

    if let Some(instant) = parse_absolute(first) {
        return Ok((instant, 1));
    }

    let midnight = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    let one_day = TimeDelta::days(1);
    let base = match first.to_ascii_lowercase().as_str() {
        "now" => Some(now),
        "today" | "midnight" => Some(midnight),
        "yesterday" => midnight.checked_sub_signed(one_day),
        "tomorrow" => midnight.checked_add_signed(one_day),
        _ => return Ok((now, 0)),
    };
    base.map(|instant| (instant, 1)).ok_or(DateError::OutOfRange)
}

fn parse_date_and_time(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let joined = format!("{date} {time}");
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&joined, format).ok())
        .map(|naive| naive.and_utc())
}

fn parse_absolute(token: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(token) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(token, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(token, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

fn apply_offsets(mut instant: DateTime<Utc>, tokens: &[&str]) -> Result<DateTime<Utc>, DateError> {
    let mut index = 0;
    while let Some(token) = tokens.get(index) {
        let (mut amount, inline_unit) =
            split_amount(token).ok_or_else(|| DateError::UnknownToken((*token).to_string()))?;
        index += 1;

        let raw_unit = match inline_unit {
            Some(unit) => unit,
            None => {
                let next = tokens
                    .get(index)
                    .ok_or_else(|| DateError::MissingUnit((*token).to_string()))?;
                index += 1;
                *next
            }
        };
        let unit = Unit::parse(raw_unit).ok_or_else(|| DateError::UnknownUnit(raw_unit.to_string()))?;

        if tokens
            .get(index)
            .is_some_and(|next| next.eq_ignore_ascii_case("ago"))
        {
            amount = amount.checked_neg().ok_or(DateError::OutOfRange)?;
            index += 1;
        }

        instant = shift(instant, amount, unit)?;
    }
    Ok(instant)
}

/// Split `"-1"`, `"+2weeks"` or `"3"` into a signed amount and an optional
/// unit glued to the digits.
fn split_amount(token: &str) -> Option<(i64, Option<&str>)> {
    let (sign, rest) = if let Some(rest) = token.strip_prefix('-') {
        (-1, rest)
    } else if let Some(rest) = token.strip_prefix('+') {
        (1, rest)
    } else {
        (1, token)
    };

    let digits_end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let amount: i64 = rest[..digits_end].parse().ok()?;
    let unit = &rest[digits_end..];
    Some((sign * amount, (!unit.is_empty()).then_some(unit)))
}

fn shift(instant: DateTime<Utc>, amount: i64, unit: Unit) -> Result<DateTime<Utc>, DateError> {
    let shifted = if let Some(per_unit) = unit.fixed_seconds() {
        amount
            .checked_mul(per_unit)
            .and_then(TimeDelta::try_seconds)
            .and_then(|delta| instant.checked_add_signed(delta))
    } else {
        let months = amount
            .checked_mul(unit.calendar_months())
            .ok_or(DateError::OutOfRange)?;
        let magnitude = u32::try_from(months.unsigned_abs()).map_err(|_| DateError::OutOfRange)?;
        if months >= 0 {
            instant.checked_add_months(Months::new(magnitude))
        } else {
            instant.checked_sub_months(Months::new(magnitude))
        }
    };
    shifted.ok_or(DateError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 3, 31, 15, 30, 0).unwrap())
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[rstest]
    #[case("now", at(2024, 3, 31, 15, 30, 0))]
    #[case("today", at(2024, 3, 31, 0, 0, 0))]
    #[case("TODAY", at(2024, 3, 31, 0, 0, 0))]
    #[case("midnight", at(2024, 3, 31, 0, 0, 0))]
    #[case("yesterday", at(2024, 3, 30, 0, 0, 0))]
    #[case("tomorrow", at(2024, 4, 1, 0, 0, 0))]
    #[case("-1 year", at(2023, 3, 31, 15, 30, 0))]
    #[case("+2 weeks", at(2024, 4, 14, 15, 30, 0))]
    #[case("3 days ago", at(2024, 3, 28, 15, 30, 0))]
    #[case("2 hours ago", at(2024, 3, 31, 13, 30, 0))]
    #[case("-10days", at(2024, 3, 21, 15, 30, 0))]
    #[case("-1 month", at(2024, 2, 29, 15, 30, 0))]
    #[case("today -1 week", at(2024, 3, 24, 0, 0, 0))]
    #[case("-1 day -12 hours", at(2024, 3, 30, 3, 30, 0))]
    fn resolves_relative_expressions(#[case] expr: &str, #[case] expected: DateTime<Utc>) {
        assert_eq!(normalize(expr, &clock()).unwrap(), expected);
    }

    #[rstest]
    #[case("2023-01-01", at(2023, 1, 1, 0, 0, 0))]
    #[case("2023-01-01 12:30:15", at(2023, 1, 1, 12, 30, 15))]
    #[case("2023-01-01 12:30", at(2023, 1, 1, 12, 30, 0))]
    #[case("2023-01-01T08:00:00", at(2023, 1, 1, 8, 0, 0))]
    #[case("2023-01-01T08:00:00+02:00", at(2023, 1, 1, 6, 0, 0))]
    #[case("2023-01-01 +1 day", at(2023, 1, 2, 0, 0, 0))]
    fn resolves_absolute_expressions(#[case] expr: &str, #[case] expected: DateTime<Utc>) {
        assert_eq!(normalize(expr, &clock()).unwrap(), expected);
    }

    #[rstest]
    #[case("", DateError::Empty)]
    #[case("   ", DateError::Empty)]
    #[case("someday", DateError::UnknownToken("someday".into()))]
    #[case("-1", DateError::MissingUnit("-1".into()))]
    #[case("-1 parsecs", DateError::UnknownUnit("parsecs".into()))]
    #[case("+99999999999 years", DateError::OutOfRange)]
    fn rejects_malformed_expressions(#[case] expr: &str, #[case] expected: DateError) {
        assert_eq!(normalize(expr, &clock()).unwrap_err(), expected);
    }

    #[test]
    fn system_clock_is_close_to_now() {
        let before = Utc::now();
        let now = SystemClock.now();
        assert!(now >= before);
    }
}
