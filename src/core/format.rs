use crate::config::{LocaleGrammar, LocaleTable};
use crate::domain::model::{DurationComponents, FormatOptions, TimeUnit};
use crate::utils::error::{HumanizeError, Result};
use crate::utils::validation;

/// Renders components into a localized phrase: drop zero units, keep the
/// most significant `max_units`, and give each survivor the word form its
/// own magnitude selects. An interval with nothing to say comes back as an
/// empty string before the locale is even consulted.
pub fn format_components(
    components: &DurationComponents,
    options: &FormatOptions,
    table: &LocaleTable,
) -> Result<String> {
    validation::validate_max_units(options.max_units)?;

    let picked: Vec<(TimeUnit, u32)> = components
        .non_zero()
        .into_iter()
        .take(options.max_units)
        .collect();
    if picked.is_empty() {
        return Ok(String::new());
    }

    let grammar =
        table
            .grammar(&options.locale)
            .ok_or_else(|| HumanizeError::UnsupportedLocale {
                locale: options.locale.clone(),
                supported: table.supported_locales().join(", "),
            })?;

    let phrases = picked
        .into_iter()
        .map(|(unit, magnitude)| phrase(grammar, &options.locale, unit, magnitude))
        .collect::<Result<Vec<_>>>()?;

    Ok(phrases.join(&options.separator))
}

fn phrase(
    grammar: &LocaleGrammar,
    locale: &str,
    unit: TimeUnit,
    magnitude: u32,
) -> Result<String> {
    let forms = grammar.forms_for(unit);
    let index = grammar.rule.index_for(magnitude);
    let word = forms.get(index).ok_or_else(|| HumanizeError::Table {
        message: format!(
            "locale {locale:?} has no plural form {index} for {}",
            unit.key()
        ),
    })?;
    Ok(format!("{magnitude} {word}"))
}
