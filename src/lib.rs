pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{LocaleGrammar, LocaleTable, PluralRule};
pub use core::humanizer::Humanizer;
pub use core::normalize::{DateInput, CANONICAL_FORMAT};
pub use domain::model::{
    DurationComponents, FormatOptions, TimeUnit, DEFAULT_MAX_UNITS, DEFAULT_SEPARATOR,
};
pub use utils::error::{HumanizeError, Result};

/// One-shot phrase for the span between two endpoints, over the stock
/// locales; `till = None` means now.
pub fn interval(
    from: impl Into<DateInput>,
    till: Option<DateInput>,
    options: &FormatOptions,
) -> Result<String> {
    Humanizer::new().interval(from, till, options)
}

/// One-shot phrase for the span from an endpoint up to now, over the stock
/// locales.
pub fn age(from: impl Into<DateInput>, options: &FormatOptions) -> Result<String> {
    Humanizer::new().age(from, options)
}
