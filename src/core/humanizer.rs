use crate::config::LocaleTable;
use crate::core::normalize::DateInput;
use crate::core::{decompose, format, normalize};
use crate::domain::model::{DurationComponents, FormatOptions};
use crate::utils::error::Result;
use chrono::{Local, NaiveDateTime};

/// Facade wiring the pipeline together: normalize both endpoints, decompose
/// the span, render the phrase. Holds only the locale table, which is fixed
/// after construction, so a single instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Humanizer {
    table: LocaleTable,
}

impl Default for Humanizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Humanizer {
    /// A humanizer with the stock locales.
    pub fn new() -> Self {
        Self {
            table: LocaleTable::builtin(),
        }
    }

    /// A humanizer over a caller-supplied table.
    pub fn with_table(table: LocaleTable) -> Self {
        Self { table }
    }

    /// Registers extra locales on top of the current ones; colliding codes
    /// take the incoming grammar.
    pub fn add_locales(&mut self, table: LocaleTable) {
        self.table.extend(table);
    }

    pub fn table(&self) -> &LocaleTable {
        &self.table
    }

    /// Localized phrase for the span between two endpoints; a missing second
    /// endpoint means now. The clock is read once and shared by both
    /// endpoints, so relative vocabulary on either side resolves against the
    /// same instant.
    pub fn interval(
        &self,
        from: impl Into<DateInput>,
        till: Option<DateInput>,
        options: &FormatOptions,
    ) -> Result<String> {
        let now = Local::now().naive_local();
        let till = till.unwrap_or(DateInput::Instant(now));
        self.interval_at(&from.into(), &till, now, options)
    }

    /// Localized phrase for the span from an endpoint up to now.
    pub fn age(&self, from: impl Into<DateInput>, options: &FormatOptions) -> Result<String> {
        self.interval(from, None, options)
    }

    /// The full pipeline with an explicit reference instant instead of the
    /// system clock.
    pub fn interval_at(
        &self,
        from: &DateInput,
        till: &DateInput,
        reference: NaiveDateTime,
        options: &FormatOptions,
    ) -> Result<String> {
        let from = normalize::normalize(from, reference)?;
        let till = normalize::normalize(till, reference)?;
        let components = decompose::decompose(from, till);
        format::format_components(&components, options, &self.table)
    }

    /// Decomposed span without rendering, for callers that want the numbers
    /// rather than the phrase.
    pub fn components(
        &self,
        from: impl Into<DateInput>,
        till: impl Into<DateInput>,
    ) -> Result<DurationComponents> {
        let now = Local::now().naive_local();
        let from = normalize::normalize(&from.into(), now)?;
        let till = normalize::normalize(&till.into(), now)?;
        Ok(decompose::decompose(from, till))
    }
}
