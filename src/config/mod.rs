#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::model::TimeUnit;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Which plural-form index a magnitude selects. New locales pick one of the
/// existing rules and supply their own words, so the table stays pure data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluralRule {
    /// Two forms: singular for exactly 1, plural otherwise (English and most
    /// Germanic/Romance languages).
    OneOther,
    /// Three forms: singular / few / many with the Slavic mod-100 exception
    /// (5..=19 always take "many").
    OneFewMany,
}

impl PluralRule {
    pub fn min_forms(self) -> usize {
        match self {
            PluralRule::OneOther => 2,
            PluralRule::OneFewMany => 3,
        }
    }

    pub fn index_for(self, magnitude: u32) -> usize {
        match self {
            PluralRule::OneOther => {
                if magnitude == 1 {
                    0
                } else {
                    1
                }
            }
            PluralRule::OneFewMany => {
                if (5..=19).contains(&(magnitude % 100)) {
                    2
                } else {
                    match magnitude % 10 {
                        1 => 0,
                        2..=4 => 1,
                        _ => 2,
                    }
                }
            }
        }
    }
}

/// Word forms for one locale: a plural rule plus an ordered form list per
/// unit. Built once, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleGrammar {
    pub rule: PluralRule,
    pub years: Vec<String>,
    pub months: Vec<String>,
    pub days: Vec<String>,
    pub hours: Vec<String>,
    pub minutes: Vec<String>,
    pub seconds: Vec<String>,
}

impl LocaleGrammar {
    /// The single seam pairing a component with its word forms. Selection is
    /// by unit identity, not by position in a trimmed list, so zero-valued
    /// units elsewhere in the interval cannot shift the pairing.
    pub fn forms_for(&self, unit: TimeUnit) -> &[String] {
        match unit {
            TimeUnit::Years => &self.years,
            TimeUnit::Months => &self.months,
            TimeUnit::Days => &self.days,
            TimeUnit::Hours => &self.hours,
            TimeUnit::Minutes => &self.minutes,
            TimeUnit::Seconds => &self.seconds,
        }
    }
}

/// Locale code → grammar. `builtin` carries the stock locales; more load from
/// TOML files keyed by locale code, one table per locale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTable {
    locales: BTreeMap<String, LocaleGrammar>,
}

fn forms(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

impl LocaleTable {
    /// The stock grammar data: English and Russian.
    pub fn builtin() -> Self {
        let mut locales = BTreeMap::new();

        locales.insert(
            "en".to_string(),
            LocaleGrammar {
                rule: PluralRule::OneOther,
                years: forms(&["year", "years"]),
                months: forms(&["month", "months"]),
                days: forms(&["day", "days"]),
                hours: forms(&["hour", "hours"]),
                minutes: forms(&["minute", "minutes"]),
                seconds: forms(&["second", "seconds"]),
            },
        );

        locales.insert(
            "ru".to_string(),
            LocaleGrammar {
                rule: PluralRule::OneFewMany,
                years: forms(&["год", "года", "лет"]),
                months: forms(&["месяц", "месяца", "месяцев"]),
                days: forms(&["день", "дня", "дней"]),
                hours: forms(&["час", "часа", "часов"]),
                minutes: forms(&["минута", "минуты", "минут"]),
                seconds: forms(&["секунда", "секунды", "секунд"]),
            },
        );

        Self { locales }
    }

    /// Loads a table from a TOML file and validates it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let table = Self::from_toml_str(&content)?;
        tracing::debug!(
            "loaded {} locale(s) from {}",
            table.locales.len(),
            path.as_ref().display()
        );
        Ok(table)
    }

    /// Parses a table from a TOML string and validates it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: Self = toml::from_str(content)?;
        table.validate()?;
        Ok(table)
    }

    pub fn insert(&mut self, code: impl Into<String>, grammar: LocaleGrammar) {
        self.locales.insert(code.into(), grammar);
    }

    /// Merges `other` over this table; colliding locale codes take the
    /// incoming grammar.
    pub fn extend(&mut self, other: LocaleTable) {
        self.locales.extend(other.locales);
    }

    pub fn grammar(&self, locale: &str) -> Option<&LocaleGrammar> {
        self.locales.get(locale)
    }

    /// Supported codes in sorted order, as enumerated by locale errors.
    pub fn supported_locales(&self) -> Vec<&str> {
        self.locales.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl Validate for LocaleTable {
    fn validate(&self) -> Result<()> {
        for (code, grammar) in &self.locales {
            validation::validate_locale_code(code)?;
            let required = grammar.rule.min_forms();
            for unit in TimeUnit::ALL {
                validation::validate_word_forms(code, unit.key(), grammar.forms_for(unit), required)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_valid() {
        let table = LocaleTable::builtin();
        assert!(table.validate().is_ok());
        assert_eq!(table.supported_locales(), vec!["en", "ru"]);
    }

    #[test]
    fn test_one_other_rule_indices() {
        let rule = PluralRule::OneOther;
        assert_eq!(rule.index_for(1), 0);
        assert_eq!(rule.index_for(0), 1);
        assert_eq!(rule.index_for(2), 1);
        assert_eq!(rule.index_for(27), 1);
    }

    #[test]
    fn test_one_few_many_rule_indices() {
        let rule = PluralRule::OneFewMany;
        // 5..=19 by mod 100 always take "many", even 11.
        assert_eq!(rule.index_for(11), 2);
        assert_eq!(rule.index_for(114), 2);
        assert_eq!(rule.index_for(21), 0);
        assert_eq!(rule.index_for(22), 1);
        assert_eq!(rule.index_for(25), 2);
        assert_eq!(rule.index_for(30), 2);
        assert_eq!(rule.index_for(1), 0);
        assert_eq!(rule.index_for(3), 1);
    }

    #[test]
    fn test_parse_locale_toml() {
        let toml_content = r#"
[de]
rule = "one-other"
years = ["Jahr", "Jahre"]
months = ["Monat", "Monate"]
days = ["Tag", "Tage"]
hours = ["Stunde", "Stunden"]
minutes = ["Minute", "Minuten"]
seconds = ["Sekunde", "Sekunden"]
"#;

        let table = LocaleTable::from_toml_str(toml_content).unwrap();
        assert_eq!(table.supported_locales(), vec!["de"]);

        let grammar = table.grammar("de").unwrap();
        assert_eq!(grammar.rule, PluralRule::OneOther);
        assert_eq!(grammar.forms_for(TimeUnit::Days), ["Tag", "Tage"]);
    }

    #[test]
    fn test_rejects_too_few_forms() {
        // one-few-many requires three forms per unit.
        let toml_content = r#"
[uk]
rule = "one-few-many"
years = ["рік", "роки"]
months = ["місяць", "місяці", "місяців"]
days = ["день", "дні", "днів"]
hours = ["година", "години", "годин"]
minutes = ["хвилина", "хвилини", "хвилин"]
seconds = ["секунда", "секунди", "секунд"]
"#;

        assert!(LocaleTable::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_extend_overrides_builtin() {
        let mut table = LocaleTable::builtin();
        let override_en = r#"
[en]
rule = "one-other"
years = ["yr", "yrs"]
months = ["mo", "mos"]
days = ["d", "d"]
hours = ["h", "h"]
minutes = ["min", "min"]
seconds = ["s", "s"]
"#;
        table.extend(LocaleTable::from_toml_str(override_en).unwrap());

        assert_eq!(table.supported_locales(), vec!["en", "ru"]);
        assert_eq!(
            table.grammar("en").unwrap().forms_for(TimeUnit::Years),
            ["yr", "yrs"]
        );
        // The untouched locale survives the merge.
        assert!(table.grammar("ru").is_some());
    }
}
