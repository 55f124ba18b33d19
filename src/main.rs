use clap::Parser;
use interval_humanize::config::cli::{Cli, Command};
use interval_humanize::core::{decompose, format, normalize};
use interval_humanize::utils::{logger, validation::Validate};
use interval_humanize::{DateInput, DurationComponents, LocaleTable, CANONICAL_FORMAT};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    from: String,
    till: String,
    locale: &'a str,
    components: DurationComponents,
    phrase: &'a str,
}

fn main() {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        eprintln!("❌ {e}");
        std::process::exit(2);
    }

    if let Err(e) = run(&cli) {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut table = LocaleTable::builtin();
    if let Some(path) = &cli.locales_file {
        table.extend(LocaleTable::from_file(path)?);
    }

    let options = cli.format_options();
    let now = chrono::Local::now().naive_local();

    let (from, till) = match &cli.command {
        Command::Interval { from, till } => (
            DateInput::from(from.as_str()),
            till.as_deref()
                .map(DateInput::from)
                .unwrap_or(DateInput::Instant(now)),
        ),
        Command::Age { from } => (DateInput::from(from.as_str()), DateInput::Instant(now)),
    };

    let from = normalize::normalize(&from, now)?;
    let till = normalize::normalize(&till, now)?;
    tracing::debug!("normalized interval {} -> {}", from, till);

    let components = decompose::decompose(from, till);
    let phrase = format::format_components(&components, &options, &table)?;

    if cli.json {
        let report = Report {
            from: from.format(CANONICAL_FORMAT).to_string(),
            till: till.format(CANONICAL_FORMAT).to_string(),
            locale: &options.locale,
            components,
            phrase: &phrase,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{phrase}");
    }

    Ok(())
}
