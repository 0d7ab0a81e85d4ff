use chrono::{Days, Local, NaiveDate};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};
use lectio_core::{OutputFormat, RuntimeOverrides, parse_date};

/// Scripture citations, the Roman liturgical calendar and the readings of each day.
#[derive(Parser, Debug, Clone)]
#[command(name = "lectio", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags accepted by every subcommand.
#[derive(Debug, Clone, Args, Default)]
pub struct GlobalArgs {
    /// Output format (defaults to the config value).
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// Directory holding one `<book>.txt` verse file per book.
    #[arg(
        long = "text-dir",
        global = true,
        value_name = "PATH",
        value_hint = ValueHint::DirPath
    )]
    pub text_dir: Option<String>,

    /// Mirror log events to stderr.
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Convert CLI flags into runtime overrides for the persisted configuration.
    pub fn to_runtime_overrides(&self) -> RuntimeOverrides {
        RuntimeOverrides {
            text_dir: self.text_dir.clone(),
            format: self.format.map(OutputFormat::from),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Supported subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the text of one or more citations.
    Verses(VersesArgs),
    /// Show the celebration of a day.
    Day(DayArgs),
    /// Show the readings of a day or of a named celebration.
    Readings(ReadingsArgs),
    /// List every day of a year with its celebration.
    Calendar(YearArgs),
    /// Print the date of Easter Sunday.
    Easter(YearArgs),
}

#[derive(Debug, Clone, Args)]
pub struct VersesArgs {
    /// Citations such as `Jn 3:16`; separate several with `;`.
    #[arg(required = true, num_args = 1.., value_name = "CITATION")]
    pub citation: Vec<String>,
}

impl VersesArgs {
    /// The citation texts, rejoined across shell words and split on `;`.
    pub fn citations(&self) -> Vec<String> {
        self.citation
            .join(" ")
            .split(';')
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, Args, Default)]
pub struct DayArgs {
    /// `YYYY-MM-DD`, `today`, `tomorrow` or `yesterday` (default: today).
    #[arg(value_name = "DATE", value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Args, Default)]
pub struct ReadingsArgs {
    /// `YYYY-MM-DD`, `today`, `tomorrow` or `yesterday` (default: today).
    #[arg(value_name = "DATE", value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,

    /// Celebration to show instead of the day's own, e.g. `a/easter-vigil`.
    #[arg(long = "mass", value_name = "QUERY")]
    pub mass: Option<String>,

    /// Include verse text from the text directory.
    #[arg(long, action = ArgAction::SetTrue)]
    pub text: bool,
}

#[derive(Debug, Clone, Args)]
pub struct YearArgs {
    #[arg(value_name = "YEAR")]
    pub year: i32,
}

/// Parse a date argument, accepting a few relative names.
pub fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    let today = Local::now().date_naive();
    match value.trim().to_ascii_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => today
            .checked_add_days(Days::new(1))
            .ok_or_else(|| "tomorrow is out of range".to_string()),
        "yesterday" => today
            .checked_sub_days(Days::new(1))
            .ok_or_else(|| "yesterday is out of range".to_string()),
        other => parse_date(other).ok_or_else(|| format!("'{value}' is not a YYYY-MM-DD date")),
    }
}

/// The date a command applies to, defaulting to today.
pub fn date_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}
