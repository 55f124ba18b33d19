use chrono::{Duration, Months, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Calendar units in most-significant-first order, matching the order of the
/// decomposed components and the grammar tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 6] = [
        TimeUnit::Years,
        TimeUnit::Months,
        TimeUnit::Days,
        TimeUnit::Hours,
        TimeUnit::Minutes,
        TimeUnit::Seconds,
    ];

    /// Stable key used by the locale grammar tables.
    pub fn key(self) -> &'static str {
        match self {
            TimeUnit::Years => "years",
            TimeUnit::Months => "months",
            TimeUnit::Days => "days",
            TimeUnit::Hours => "hours",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Seconds => "seconds",
        }
    }
}

/// Calendar-aware difference between two instants. Magnitudes are always
/// non-negative and follow civil-calendar rollover (days never exceed the
/// length of the month they were carved from).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationComponents {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl DurationComponents {
    pub fn as_array(&self) -> [(TimeUnit, u32); 6] {
        [
            (TimeUnit::Years, self.years),
            (TimeUnit::Months, self.months),
            (TimeUnit::Days, self.days),
            (TimeUnit::Hours, self.hours),
            (TimeUnit::Minutes, self.minutes),
            (TimeUnit::Seconds, self.seconds),
        ]
    }

    /// Compacted view feeding the formatter: non-zero magnitudes only, in
    /// order, each keeping its unit identity.
    pub fn non_zero(&self) -> Vec<(TimeUnit, u32)> {
        self.as_array()
            .into_iter()
            .filter(|&(_, magnitude)| magnitude > 0)
            .collect()
    }

    pub fn is_zero(&self) -> bool {
        self.as_array().iter().all(|&(_, magnitude)| magnitude == 0)
    }

    /// Re-applies the components to `from` via calendar addition: years and
    /// months first (day-of-month clamped), then days and the time part.
    /// `None` only when the result falls outside the representable range.
    pub fn apply_to(&self, from: NaiveDateTime) -> Option<NaiveDateTime> {
        let months = self.years.checked_mul(12)?.checked_add(self.months)?;
        let anchored = from.checked_add_months(Months::new(months))?;
        let tail = Duration::days(i64::from(self.days))
            + Duration::hours(i64::from(self.hours))
            + Duration::minutes(i64::from(self.minutes))
            + Duration::seconds(i64::from(self.seconds));
        anchored.checked_add_signed(tail)
    }
}

pub const DEFAULT_MAX_UNITS: usize = 3;
pub const DEFAULT_SEPARATOR: &str = " ";

/// How a decomposed interval is rendered: which locale's word forms, how many
/// leading components, and what goes between them. Locale always travels here
/// explicitly instead of living in process-global state.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub locale: String,
    pub max_units: usize,
    pub separator: String,
}

impl FormatOptions {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            max_units: DEFAULT_MAX_UNITS,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    pub fn with_max_units(mut self, max_units: usize) -> Self {
        self.max_units = max_units;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
