use crate::domain::model::{FormatOptions, DEFAULT_MAX_UNITS, DEFAULT_SEPARATOR};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "interval-humanize")]
#[command(about = "Render the span between dates as localized text")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "en")]
    pub locale: String,

    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_MAX_UNITS,
        help = "Most significant units to keep (1-6)"
    )]
    pub max: usize,

    #[arg(long, global = true, default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    #[arg(
        long,
        global = true,
        help = "TOML file with extra locales, merged over the built-ins"
    )]
    pub locales_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Emit a JSON report instead of the plain phrase"
    )]
    pub json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Span between two date expressions; a missing TILL means now
    Interval { from: String, till: Option<String> },
    /// Span between a date expression and now
    Age { from: String },
}

impl Cli {
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions::new(&self.locale)
            .with_max_units(self.max)
            .with_separator(&self.separator)
    }
}

impl Validate for Cli {
    fn validate(&self) -> Result<()> {
        validation::validate_max_units(self.max)?;
        validation::validate_locale_code(&self.locale)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["interval-humanize", "age", "28.06.1986"]);
        assert_eq!(cli.locale, "en");
        assert_eq!(cli.max, DEFAULT_MAX_UNITS);
        assert_eq!(cli.separator, DEFAULT_SEPARATOR);
        assert!(!cli.json);
        assert!(matches!(cli.command, Command::Age { ref from } if from == "28.06.1986"));
    }

    #[test]
    fn test_interval_till_is_optional() {
        let cli = Cli::parse_from(["interval-humanize", "interval", "2012-01-10"]);
        assert!(matches!(
            cli.command,
            Command::Interval { ref from, till: None } if from == "2012-01-10"
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "interval-humanize",
            "interval",
            "2012-01-10",
            "2014-04-10",
            "--locale",
            "ru",
            "--max",
            "2",
        ]);
        assert_eq!(cli.locale, "ru");
        assert_eq!(cli.max, 2);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_max() {
        let cli = Cli::parse_from(["interval-humanize", "age", "now", "--max", "7"]);
        assert!(cli.validate().is_err());
    }
}
