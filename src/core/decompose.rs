use crate::domain::model::DurationComponents;
use chrono::{Datelike, Months, NaiveDateTime};

/// Splits the span between two timestamps into calendar-aware components:
/// whole months first (anchored at `from`, so month lengths and leap days
/// count for what they really are), then the remainder as day and clock
/// units. Endpoints may come in either order; the magnitude is the same
/// both ways.
pub fn decompose(from: NaiveDateTime, till: NaiveDateTime) -> DurationComponents {
    let (from, till) = if till < from { (till, from) } else { (from, till) };

    let mut months = whole_months_between(from, till);
    // The raw month count overshoots when the start day has no counterpart
    // in the target month; one step back always lands at or before `till`.
    if months > 0 && anchor_after(from, months) > till {
        months -= 1;
    }

    let anchor = anchor_after(from, months);
    let rest = till - anchor;

    DurationComponents {
        years: months / 12,
        months: months % 12,
        days: rest.num_days() as u32,
        hours: (rest.num_hours() % 24) as u32,
        minutes: (rest.num_minutes() % 60) as u32,
        seconds: (rest.num_seconds() % 60) as u32,
    }
}

fn whole_months_between(from: NaiveDateTime, till: NaiveDateTime) -> u32 {
    let span = (till.year() - from.year()) * 12 + till.month() as i32 - from.month() as i32;
    span.max(0) as u32
}

fn anchor_after(from: NaiveDateTime, months: u32) -> NaiveDateTime {
    // The month count never reaches past `till`'s month, so the shifted
    // anchor stays in range whenever both endpoints do.
    from.checked_add_months(Months::new(months)).unwrap_or(from)
}
