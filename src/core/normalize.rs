use crate::utils::error::{HumanizeError, Result};
use chrono::{DateTime, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// Canonical exchange format every accepted endpoint is rendered back into.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
];

/// Date-only formats resolve to midnight. Dotted dates are day-first,
/// slash dates month-first.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%m/%d/%Y", "%d %B %Y"];

/// An interval endpoint: an already-resolved timestamp, or free text still
/// to be interpreted against the reference instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Instant(NaiveDateTime),
    Text(String),
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::Instant(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Instant(value.and_time(NaiveTime::MIN))
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::Instant(value.naive_utc())
    }
}

impl From<DateTime<Local>> for DateInput {
    fn from(value: DateTime<Local>) -> Self {
        DateInput::Instant(value.naive_local())
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

struct RelativePatterns {
    offset_ahead: Regex,
    offset_ago: Regex,
}

fn relative_patterns() -> &'static RelativePatterns {
    static PATTERNS: OnceLock<RelativePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| RelativePatterns {
        offset_ahead: Regex::new(
            r"(?i)^in\s+(\d+)\s+(seconds?|minutes?|hours?|days?|weeks?|months?|years?)$",
        )
        .unwrap(),
        offset_ago: Regex::new(
            r"(?i)^(\d+)\s+(seconds?|minutes?|hours?|days?|weeks?|months?|years?)\s+ago$",
        )
        .unwrap(),
    })
}

/// Resolves an endpoint to a concrete timestamp. Text goes through the
/// relative vocabulary first, then the absolute format table; whatever
/// parses must survive a round trip through [`CANONICAL_FORMAT`] or the
/// input is rejected.
pub fn normalize(input: &DateInput, now: NaiveDateTime) -> Result<NaiveDateTime> {
    match input {
        DateInput::Instant(instant) => Ok(*instant),
        DateInput::Text(text) => normalize_text(text, now),
    }
}

fn normalize_text(text: &str, now: NaiveDateTime) -> Result<NaiveDateTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(invalid(text));
    }

    let parsed = parse_relative(trimmed, now)
        .or_else(|| parse_absolute(trimmed))
        .ok_or_else(|| invalid(text))?;

    let canonical = parsed.format(CANONICAL_FORMAT).to_string();
    let reparsed = NaiveDateTime::parse_from_str(&canonical, CANONICAL_FORMAT)
        .map_err(|_| invalid(text))?;
    if reparsed != parsed {
        return Err(invalid(text));
    }
    Ok(parsed)
}

fn parse_relative(text: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let lowered = text.to_ascii_lowercase();
    match lowered.as_str() {
        "now" => return Some(now),
        "today" => return Some(now.date().and_time(NaiveTime::MIN)),
        "tomorrow" => {
            return now.date().succ_opt().map(|date| date.and_time(NaiveTime::MIN));
        }
        "yesterday" => {
            return now.date().pred_opt().map(|date| date.and_time(NaiveTime::MIN));
        }
        _ => {}
    }

    let patterns = relative_patterns();
    if let Some(caps) = patterns.offset_ahead.captures(&lowered) {
        let amount: i64 = caps[1].parse().ok()?;
        return apply_offset(now, amount, &caps[2]);
    }
    if let Some(caps) = patterns.offset_ago.captures(&lowered) {
        let amount: i64 = caps[1].parse().ok()?;
        return apply_offset(now, -amount, &caps[2]);
    }
    None
}

fn apply_offset(base: NaiveDateTime, amount: i64, unit: &str) -> Option<NaiveDateTime> {
    match unit.trim_end_matches('s') {
        "second" => base.checked_add_signed(Duration::try_seconds(amount)?),
        "minute" => base.checked_add_signed(Duration::try_minutes(amount)?),
        "hour" => base.checked_add_signed(Duration::try_hours(amount)?),
        "day" => base.checked_add_signed(Duration::try_days(amount)?),
        "week" => base.checked_add_signed(Duration::try_weeks(amount)?),
        "month" => shift_months(base, amount),
        "year" => shift_months(base, amount.checked_mul(12)?),
        _ => None,
    }
}

fn shift_months(base: NaiveDateTime, amount: i64) -> Option<NaiveDateTime> {
    let months = Months::new(u32::try_from(amount.unsigned_abs()).ok()?);
    if amount >= 0 {
        base.checked_add_months(months)
    } else {
        base.checked_sub_months(months)
    }
}

fn parse_absolute(text: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(parsed);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(text, format) {
            return Some(parsed.and_time(NaiveTime::MIN));
        }
    }
    None
}

fn invalid(input: &str) -> HumanizeError {
    HumanizeError::InvalidInput {
        input: input.to_string(),
    }
}
