//! Command-line front end for `lectio-core`.

pub mod cli_args;

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use chrono::Datelike;
use cli_args::{Cli, Command, ReadingsArgs, VersesArgs, date_or_today};
use lectio_core::lectionary::masses_for_entry;
use lectio_core::{
    CalendarYear, CelebrationQuery, Citation, FileConfig, Lectionary, LoggingDestination,
    MassReadings, MemoryTextStore, OutputFormat, Resolution, TextStore, Verse,
    apply_runtime_overrides, easter_sunday, fetch, init_logging, load_config,
    parse_citation_in, resolve, resolve_text_store_dir,
};
use serde::Serialize;
use tracing::debug;

/// Load configuration, install logging and execute the parsed command against stdout.
pub fn run(cli: Cli) -> Result<()> {
    let destination = if cli.global.verbose {
        LoggingDestination::FileAndStderr
    } else {
        LoggingDestination::FileOnly
    };
    if let Err(err) = init_logging(destination) {
        eprintln!("Warning: logging disabled: {err}");
    }

    let load = load_config();
    for warning in &load.warnings {
        eprintln!("Warning: {warning}");
    }
    let config = apply_runtime_overrides(load.config, &cli.global.to_runtime_overrides());
    debug!(source = ?load.source, "Configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &config, &mut out)
}

/// Execute `cli` with an already resolved configuration, writing results to `out`.
pub fn execute<W: Write>(cli: &Cli, config: &FileConfig, out: &mut W) -> Result<()> {
    let format = config.output.format;
    match &cli.command {
        Command::Verses(args) => print_verses(args, config, format, out),
        Command::Day(args) => {
            let resolution = resolve(date_or_today(args.date))?;
            match format {
                OutputFormat::Json => write_json(out, &resolution),
                OutputFormat::Text => write_day(out, &resolution),
            }
        }
        Command::Readings(args) => print_readings(args, config, format, out),
        Command::Calendar(args) => {
            let year = CalendarYear::new(args.year)?;
            match format {
                OutputFormat::Json => write_json(out, &year.days().collect::<Vec<_>>()),
                OutputFormat::Text => {
                    for day in year.days() {
                        writeln!(
                            out,
                            "{} {:<3}  {:<10} {}",
                            day.date,
                            day.date.weekday(),
                            day.rank().label(),
                            day.celebration.name
                        )?;
                    }
                    Ok(())
                }
            }
        }
        Command::Easter(args) => {
            let easter = easter_sunday(args.year)?;
            match format {
                OutputFormat::Json => write_json(
                    out,
                    &serde_json::json!({ "year": args.year, "easter": easter }),
                ),
                OutputFormat::Text => writeln!(out, "{easter}").map_err(Into::into),
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct PassageText {
    citation: String,
    verses: Vec<Verse>,
}

#[derive(Debug, Serialize)]
struct ReadingsReport<'a> {
    date: chrono::NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    day: Option<&'a Resolution>,
    masses: &'a [MassReadings],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    texts: Vec<PassageText>,
}

fn print_verses<W: Write>(
    args: &VersesArgs,
    config: &FileConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let store = open_text_store(config)?;
    let citations = args
        .citations()
        .iter()
        .map(|text| {
            parse_citation_in(text, store.versification())
                .with_context(|| format!("cannot read '{text}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    if citations.is_empty() {
        bail!("no citation given");
    }
    let passages = passages(&store, citations.iter())?;
    match format {
        OutputFormat::Json => write_json(out, &passages),
        OutputFormat::Text => {
            for passage in &passages {
                write_passage(out, passage, "")?;
            }
            Ok(())
        }
    }
}

fn print_readings<W: Write>(
    args: &ReadingsArgs,
    config: &FileConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let lectionary = Lectionary::load()?;
    let date = date_or_today(args.date);
    let resolution = resolve(date)?;

    let (day, masses) = match args.mass.as_deref() {
        Some(text) => {
            let query = CelebrationQuery::parse(text)?;
            let entry = lectionary.lookup(&query)?;
            let sunday = query.cycle.unwrap_or(resolution.sunday_cycle);
            let masses = masses_for_entry(entry, sunday, resolution.weekday_cycle)?;
            (None, masses)
        }
        None => {
            let masses = lectionary.masses_for(&resolution)?;
            (Some(&resolution), masses)
        }
    };

    let texts = if args.text {
        let store = open_text_store(config)?;
        let citations = masses
            .iter()
            .flat_map(|mass| &mass.readings)
            .map(|reading| &reading.text_citation);
        passages(&store, citations)?
    } else {
        Vec::new()
    };

    match format {
        OutputFormat::Json => write_json(
            out,
            &ReadingsReport {
                date,
                day,
                masses: &masses,
                texts,
            },
        ),
        OutputFormat::Text => {
            if let Some(day) = day {
                write_day(out, day)?;
                writeln!(out)?;
            }
            for mass in &masses {
                writeln!(out, "{}: {}", mass.celebration, mass.name)?;
                for reading in &mass.readings {
                    let vulgate = reading.text_citation.to_string();
                    write!(out, "  {}", reading.citation)?;
                    if let Some(shorter) = &reading.shorter_form {
                        write!(out, " (shorter: {shorter})")?;
                    }
                    if vulgate != reading.citation.to_string() {
                        write!(out, " [Vulgate {vulgate}]")?;
                    }
                    writeln!(out)?;
                    for alternative in &reading.alternatives {
                        writeln!(out, "    or {alternative}")?;
                    }
                    let text = texts.iter().find(|passage| passage.citation == vulgate);
                    if let Some(passage) = text {
                        write_verses(out, &passage.verses, "    ")?;
                    }
                }
            }
            Ok(())
        }
    }
}

fn open_text_store(config: &FileConfig) -> Result<MemoryTextStore> {
    let dir = resolve_text_store_dir(config).context(
        "no text directory configured; pass --text-dir, set LECTIO_TEXT_DIR or add text.store_dir to config.toml",
    )?;
    Ok(MemoryTextStore::load_dir(&dir)?)
}

fn passages<'a>(
    store: &MemoryTextStore,
    citations: impl Iterator<Item = &'a Citation>,
) -> Result<Vec<PassageText>> {
    citations
        .map(|citation| {
            Ok(PassageText {
                citation: citation.to_string(),
                verses: fetch(store, citation)?,
            })
        })
        .collect()
}

fn write_day<W: Write>(out: &mut W, day: &Resolution) -> Result<()> {
    writeln!(out, "{}  {}", day.date, day.celebration.name)?;
    writeln!(out, "  rank:   {}", day.rank().label())?;
    writeln!(out, "  season: {}", day.season.label())?;
    writeln!(
        out,
        "  cycle:  Year {}, Weekday {}",
        day.sunday_cycle, day.weekday_cycle
    )?;
    if let Some(from) = day.celebration.transferred_from {
        writeln!(out, "  transferred from {from}")?;
    }
    if let Some(eve) = &day.eve_of {
        writeln!(out, "  evening: vigil of {}", eve.name)?;
    }
    Ok(())
}

fn write_passage<W: Write>(out: &mut W, passage: &PassageText, indent: &str) -> Result<()> {
    writeln!(out, "{indent}{}", passage.citation)?;
    write_verses(out, &passage.verses, indent)
}

fn write_verses<W: Write>(out: &mut W, verses: &[Verse], indent: &str) -> Result<()> {
    for verse in verses {
        writeln!(out, "{indent}{}:{} {}", verse.chapter, verse.verse, verse.text)?;
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
