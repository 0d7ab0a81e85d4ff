//! The lectionary map: which readings belong to which celebration.
//!
//! Content lives in `static/lectionary.toml` and is embedded at compile time. A copy
//! on disk (named by `LECTIO_LECTIONARY`, or `static/lectionary.toml` under the
//! working directory) takes precedence so the content can be corrected without a
//! rebuild. Citations are kept as text and parsed on use.
//!
//! `citation` is written in lectionary numbering. Where the Clementine Vulgate
//! numbers the passage differently, `alt` gives the Vulgate citation, and that is the
//! one used to fetch text.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::calendar::{Resolution, SundayCycle, WeekdayCycle};
use crate::books::Versification;
use crate::citation::{Citation, CitationError, parse_citation, parse_citation_in};
use crate::normalize::fold_diacritics;

const SCHEMA_VERSION: u32 = 1;
const LECTIONARY_ENV: &str = "LECTIO_LECTIONARY";
const EMBEDDED_LECTIONARY: &str = include_str!("../../../static/lectionary.toml");

#[derive(Debug, Error)]
pub enum LectionaryError {
    #[error("no readings defined for {celebration} (Year {sunday_cycle}, Weekday {weekday_cycle})")]
    NoReadingsDefined {
        celebration: String,
        sunday_cycle: SundayCycle,
        weekday_cycle: WeekdayCycle,
    },
    #[error(transparent)]
    Citation(#[from] CitationError),
    #[error("malformed celebration query '{0}'; expected [a|b|c/]name")]
    MalformedQuery(String),
    #[error("query '{query}' matched {} celebrations{}", .matches.len(), format_matches(.matches))]
    NonSingularResults { query: String, matches: Vec<String> },
    #[error("failed to read lectionary: {0}")]
    Io(#[from] std::io::Error),
    #[error("lectionary TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported lectionary schema version {found}; expected {expected}")]
    SchemaVersion { expected: u32, found: u32 },
}

fn format_matches(matches: &[String]) -> String {
    if matches.is_empty() {
        String::new()
    } else {
        format!(": {}", matches.join(", "))
    }
}

/// Cycle a reading is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CycleTag {
    A,
    B,
    C,
    I,
    II,
}

impl CycleTag {
    fn matches(self, sunday: SundayCycle, weekday: WeekdayCycle) -> bool {
        match self {
            CycleTag::A => sunday == SundayCycle::A,
            CycleTag::B => sunday == SundayCycle::B,
            CycleTag::C => sunday == SundayCycle::C,
            CycleTag::I => weekday == WeekdayCycle::I,
            CycleTag::II => weekday == WeekdayCycle::II,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub citation: String,
    /// The same passage in Vulgate numbering, when it differs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Shorter form of the reading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shorter: Option<String>,
    /// Empty means every cycle.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cycles: Vec<CycleTag>,
    /// Readings that may be chosen instead.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<String>,
}

impl Reading {
    pub fn applies_to(&self, sunday: SundayCycle, weekday: WeekdayCycle) -> bool {
        self.cycles.is_empty() || self.cycles.iter().any(|tag| tag.matches(sunday, weekday))
    }

    pub fn citation(&self) -> Result<Citation, CitationError> {
        parse_citation(&self.citation)
    }

    /// The citation to fetch Vulgate text with: `alt` when given, else `citation`.
    pub fn text_citation(&self) -> Result<Citation, CitationError> {
        let text = self.alt.as_deref().unwrap_or(&self.citation);
        parse_citation_in(text, Versification::Vulgate)
    }

    pub fn shorter_form(&self) -> Result<Option<Citation>, CitationError> {
        self.shorter.as_deref().map(parse_citation).transpose()
    }

    fn resolve(&self) -> Result<ResolvedReading, CitationError> {
        Ok(ResolvedReading {
            citation: self.citation()?,
            text_citation: self.text_citation()?,
            shorter_form: self.shorter_form()?,
            alternatives: self
                .alternatives
                .iter()
                .map(|text| parse_citation(text))
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MassForm {
    pub name: String,
    #[serde(default)]
    pub principal: bool,
    /// Celebrated on the evening before the day.
    #[serde(default)]
    pub vigil: bool,
    pub readings: Vec<Reading>,
}

impl MassForm {
    fn applicable(&self, sunday: SundayCycle, weekday: WeekdayCycle) -> impl Iterator<Item = &Reading> {
        self.readings
            .iter()
            .filter(move |reading| reading.applies_to(sunday, weekday))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectionaryEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "mass")]
    pub masses: Vec<MassForm>,
}

impl LectionaryEntry {
    /// The mass form whose readings represent the day.
    pub fn principal_mass(&self) -> Option<&MassForm> {
        self.masses
            .iter()
            .find(|mass| mass.principal)
            .or_else(|| self.masses.iter().find(|mass| !mass.vigil))
            .or_else(|| self.masses.first())
    }

    fn has_readings_for(&self, sunday: SundayCycle) -> bool {
        self.masses.iter().any(|mass| {
            mass.applicable(sunday, WeekdayCycle::I).next().is_some()
                || mass.applicable(sunday, WeekdayCycle::II).next().is_some()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedReading {
    pub citation: Citation,
    /// `citation` in Vulgate numbering.
    pub text_citation: Citation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shorter_form: Option<Citation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<Citation>,
}

/// One mass form with the readings that apply in the active cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MassReadings {
    pub celebration: String,
    pub name: String,
    pub vigil: bool,
    pub readings: Vec<ResolvedReading>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LectionarySource {
    File(PathBuf),
    Embedded,
}

#[derive(Debug, Deserialize)]
struct LectionaryFile {
    schema_version: u32,
    #[serde(default, rename = "celebration")]
    celebrations: Vec<LectionaryEntry>,
}

#[derive(Debug, Clone)]
pub struct Lectionary {
    entries: Vec<LectionaryEntry>,
    index: HashMap<String, usize>,
    source: LectionarySource,
}

impl Lectionary {
    pub fn embedded() -> Result<Self, LectionaryError> {
        Self::from_toml_str(EMBEDDED_LECTIONARY)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, LectionaryError> {
        let file: LectionaryFile = toml::from_str(raw)?;
        if file.schema_version != SCHEMA_VERSION {
            return Err(LectionaryError::SchemaVersion {
                expected: SCHEMA_VERSION,
                found: file.schema_version,
            });
        }
        let index = file
            .celebrations
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.id.clone(), position))
            .collect();
        Ok(Self {
            entries: file.celebrations,
            index,
            source: LectionarySource::Embedded,
        })
    }

    /// First readable copy on disk, falling back to the embedded content.
    pub fn load() -> Result<Self, LectionaryError> {
        for path in candidate_paths() {
            if !path.exists() {
                continue;
            }
            match fs::read_to_string(&path) {
                Ok(raw) => match Self::from_toml_str(&raw) {
                    Ok(lectionary) => {
                        debug!(path = %path.display(), "Loaded lectionary from file");
                        return Ok(Self {
                            source: LectionarySource::File(path),
                            ..lectionary
                        });
                    }
                    Err(err) => {
                        warn!(path = %path.display(), error = %err, "Failed to parse lectionary");
                    }
                },
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Unable to read lectionary");
                }
            }
        }
        Self::embedded()
    }

    pub fn source(&self) -> &LectionarySource {
        &self.source
    }

    pub fn entries(&self) -> &[LectionaryEntry] {
        &self.entries
    }

    pub fn entry(&self, id: &str) -> Option<&LectionaryEntry> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    /// Readings of the principal mass of the winning celebration.
    pub fn readings_for(&self, resolution: &Resolution) -> Result<Vec<Citation>, LectionaryError> {
        let entry = self.entry_for(resolution)?;
        readings_for_entry(entry, resolution.sunday_cycle, resolution.weekday_cycle)
    }

    /// Every mass form of the day, followed by the vigil masses of tomorrow's solemnity.
    pub fn masses_for(&self, resolution: &Resolution) -> Result<Vec<MassReadings>, LectionaryError> {
        let (sunday, weekday) = (resolution.sunday_cycle, resolution.weekday_cycle);
        let entry = self.entry_for(resolution)?;
        let mut masses = masses_of(entry, sunday, weekday, |mass| !mass.vigil)?;
        if let Some(next) = resolution
            .eve_of
            .as_ref()
            .and_then(|celebration| self.entry(&celebration.id))
        {
            masses.extend(masses_of(next, sunday, weekday, |mass| mass.vigil)?);
        }
        if masses.is_empty() {
            return Err(no_readings(&entry.id, sunday, weekday));
        }
        Ok(masses)
    }

    /// Entries matching a query, by exact id when one exists, else by id or name substring.
    pub fn find(&self, query: &CelebrationQuery) -> Vec<&LectionaryEntry> {
        if let Some(entry) = self.entry(&query.pattern) {
            return vec![entry];
        }
        self.entries
            .iter()
            .filter(|entry| {
                entry.id.contains(&query.pattern) || slug(&entry.name).contains(&query.pattern)
            })
            .filter(|entry| query.cycle.is_none_or(|cycle| entry.has_readings_for(cycle)))
            .collect()
    }

    pub fn lookup(&self, query: &CelebrationQuery) -> Result<&LectionaryEntry, LectionaryError> {
        match self.find(query).as_slice() {
            [entry] => Ok(*entry),
            matches => Err(LectionaryError::NonSingularResults {
                query: query.to_string(),
                matches: matches.iter().map(|entry| entry.id.clone()).collect(),
            }),
        }
    }

    /// Parse every citation in the content, returning how many were checked.
    pub fn validate(&self) -> Result<usize, LectionaryError> {
        let mut checked = 0;
        for reading in self
            .entries
            .iter()
            .flat_map(|entry| &entry.masses)
            .flat_map(|mass| &mass.readings)
        {
            let resolved = reading.resolve()?;
            checked += 1
                + usize::from(reading.alt.is_some())
                + usize::from(resolved.shorter_form.is_some())
                + resolved.alternatives.len();
        }
        Ok(checked)
    }

    fn entry_for(&self, resolution: &Resolution) -> Result<&LectionaryEntry, LectionaryError> {
        self.entry(&resolution.celebration.id).ok_or_else(|| {
            no_readings(
                &resolution.celebration.id,
                resolution.sunday_cycle,
                resolution.weekday_cycle,
            )
        })
    }
}

/// Principal readings of `entry` in the given cycles.
pub fn readings_for_entry(
    entry: &LectionaryEntry,
    sunday: SundayCycle,
    weekday: WeekdayCycle,
) -> Result<Vec<Citation>, LectionaryError> {
    let readings = entry
        .principal_mass()
        .into_iter()
        .flat_map(|mass| mass.applicable(sunday, weekday))
        .map(Reading::citation)
        .collect::<Result<Vec<_>, _>>()?;
    if readings.is_empty() {
        return Err(no_readings(&entry.id, sunday, weekday));
    }
    Ok(readings)
}

/// Every mass form of `entry`, vigils included, with the readings of the given cycles.
pub fn masses_for_entry(
    entry: &LectionaryEntry,
    sunday: SundayCycle,
    weekday: WeekdayCycle,
) -> Result<Vec<MassReadings>, LectionaryError> {
    let masses = masses_of(entry, sunday, weekday, |_| true)?;
    if masses.is_empty() {
        return Err(no_readings(&entry.id, sunday, weekday));
    }
    Ok(masses)
}

fn masses_of(
    entry: &LectionaryEntry,
    sunday: SundayCycle,
    weekday: WeekdayCycle,
    keep: impl Fn(&MassForm) -> bool,
) -> Result<Vec<MassReadings>, LectionaryError> {
    let mut masses = Vec::new();
    for mass in entry.masses.iter().filter(|mass| keep(mass)) {
        let readings = mass
            .applicable(sunday, weekday)
            .map(Reading::resolve)
            .collect::<Result<Vec<_>, _>>()?;
        if readings.is_empty() {
            continue;
        }
        masses.push(MassReadings {
            celebration: entry.name.clone(),
            name: mass.name.clone(),
            vigil: mass.vigil,
            readings,
        });
    }
    Ok(masses)
}

fn no_readings(celebration: &str, sunday: SundayCycle, weekday: WeekdayCycle) -> LectionaryError {
    LectionaryError::NoReadingsDefined {
        celebration: celebration.to_string(),
        sunday_cycle: sunday,
        weekday_cycle: weekday,
    }
}

fn slug(text: &str) -> String {
    let folded = fold_diacritics(text).to_lowercase();
    let mut slug = String::with_capacity(folded.len());
    for word in folded.split(|ch: char| !ch.is_alphanumeric()).filter(|w| !w.is_empty()) {
        if !slug.is_empty() {
            slug.push('-');
        }
        slug.push_str(word);
    }
    slug
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(path) = env::var(LECTIONARY_ENV) {
        candidates.push(PathBuf::from(path));
    }

    if let Ok(current_dir) = env::current_dir() {
        candidates.push(current_dir.join("static/lectionary.toml"));
    }

    candidates
}

/// A celebration named by an optional Sunday cycle and an id fragment, e.g. `a/easter-vigil`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CelebrationQuery {
    pub cycle: Option<SundayCycle>,
    pub pattern: String,
}

impl CelebrationQuery {
    pub fn parse(text: &str) -> Result<Self, LectionaryError> {
        let malformed = || LectionaryError::MalformedQuery(text.to_string());
        let trimmed = text.trim();
        let (cycle, rest) = match trimmed.split_once('/') {
            Some((prefix, rest)) => match prefix.to_ascii_lowercase().as_str() {
                "a" => (Some(SundayCycle::A), rest),
                "b" => (Some(SundayCycle::B), rest),
                "c" => (Some(SundayCycle::C), rest),
                _ => (None, trimmed),
            },
            None => (None, trimmed),
        };
        let pattern = rest
            .split('/')
            .map(slug)
            .collect::<Vec<_>>()
            .join("/");
        if pattern.is_empty() || pattern.split('/').any(str::is_empty) {
            return Err(malformed());
        }
        Ok(Self { cycle, pattern })
    }
}

impl std::fmt::Display for CelebrationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cycle {
            Some(cycle) => write!(f, "{}/{}", cycle.letter().to_ascii_lowercase(), self.pattern),
            None => f.write_str(&self.pattern),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
schema_version = 1

[[celebration]]
id = "christmas"
name = "The Nativity of the Lord"

[[celebration.mass]]
name = "Vigil Mass"
vigil = true
readings = [{ citation = "Is 62:1-5" }, { citation = "Mt 1:1-25", shorter = "Mt 1:18-25" }]

[[celebration.mass]]
name = "Mass during the Day"
principal = true
readings = [{ citation = "Is 52:7-10" }, { citation = "Jn 1:1-18", shorter = "Jn 1:1-5,9-14" }]

[[celebration]]
id = "ordinary/week-2/sunday"
name = "2nd Sunday in Ordinary Time"

[[celebration.mass]]
name = "Mass"
readings = [
  { citation = "Is 49:3,5-6", cycles = ["A"] },
  { citation = "1 Sm 3:3b-10,19", cycles = ["B"] },
  { citation = "Jl 3:1-5", alt = "Jl 2:28-32", cycles = ["B"] },
  { citation = "Jn 1:29-34", cycles = ["A"] },
  { citation = "Jn 1:35-42", cycles = ["B"] },
]
"#;

    fn sample() -> Lectionary {
        Lectionary::from_toml_str(SAMPLE).unwrap()
    }

    #[test]
    fn principal_mass_is_marked_or_first_non_vigil() {
        let lectionary = sample();
        let christmas = lectionary.entry("christmas").unwrap();
        assert_eq!(christmas.principal_mass().unwrap().name, "Mass during the Day");
        let readings =
            readings_for_entry(christmas, SundayCycle::B, WeekdayCycle::II).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[1].to_string(), "Jn 1:1-18");
    }

    #[test]
    fn cycles_filter_readings() {
        let lectionary = sample();
        let sunday = lectionary.entry("ordinary/week-2/sunday").unwrap();
        let year_b = readings_for_entry(sunday, SundayCycle::B, WeekdayCycle::I).unwrap();
        let rendered: Vec<String> = year_b.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["1 Sm 3:3-10,19", "Jl 3:1-5", "Jn 1:35-42"]);
        assert!(matches!(
            readings_for_entry(sunday, SundayCycle::C, WeekdayCycle::I),
            Err(LectionaryError::NoReadingsDefined { .. })
        ));
    }

    #[test]
    fn schema_version_is_checked() {
        let err = Lectionary::from_toml_str("schema_version = 7\n").unwrap_err();
        assert!(matches!(
            err,
            LectionaryError::SchemaVersion {
                expected: 1,
                found: 7
            }
        ));
    }

    #[test]
    fn unknown_cycle_tags_are_rejected() {
        let raw = r#"
schema_version = 1
[[celebration]]
id = "x"
name = "X"
[[celebration.mass]]
name = "Mass"
readings = [{ citation = "Jn 1:1", cycles = ["D"] }]
"#;
        assert!(matches!(
            Lectionary::from_toml_str(raw),
            Err(LectionaryError::Toml(_))
        ));
    }

    #[test]
    fn queries_parse_cycle_and_pattern() {
        let query = CelebrationQuery::parse("a/easter-vigil").unwrap();
        assert_eq!(query.cycle, Some(SundayCycle::A));
        assert_eq!(query.pattern, "easter-vigil");
        assert_eq!(query.to_string(), "a/easter-vigil");

        let query = CelebrationQuery::parse("Ordinary/Week-2/Sunday").unwrap();
        assert_eq!(query.cycle, None);
        assert_eq!(query.pattern, "ordinary/week-2/sunday");

        let query = CelebrationQuery::parse("C/Saint Thérèse").unwrap();
        assert_eq!(query.pattern, "saint-therese");

        for bad in ["", "a/", "/", "b//x", "  "] {
            assert!(
                matches!(CelebrationQuery::parse(bad), Err(LectionaryError::MalformedQuery(_))),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn lookup_requires_exactly_one_match() {
        let lectionary = sample();
        let exact = CelebrationQuery::parse("christmas").unwrap();
        assert_eq!(lectionary.lookup(&exact).unwrap().id, "christmas");

        let by_name = CelebrationQuery::parse("nativity").unwrap();
        assert_eq!(lectionary.lookup(&by_name).unwrap().id, "christmas");

        let none = CelebrationQuery::parse("pentecost").unwrap();
        assert!(matches!(
            lectionary.lookup(&none),
            Err(LectionaryError::NonSingularResults { ref matches, .. }) if matches.is_empty()
        ));

        let many = CelebrationQuery::parse("s").unwrap();
        assert!(matches!(
            lectionary.lookup(&many),
            Err(LectionaryError::NonSingularResults { ref matches, .. }) if matches.len() == 2
        ));

        let wrong_cycle = CelebrationQuery::parse("c/week-2").unwrap();
        assert!(lectionary.find(&wrong_cycle).is_empty());
    }

    #[test]
    fn validate_counts_every_citation() {
        assert_eq!(sample().validate().unwrap(), 12);
    }

    #[test]
    fn alt_gives_the_vulgate_citation() {
        let lectionary = sample();
        let sunday = lectionary.entry("ordinary/week-2/sunday").unwrap();
        let masses = masses_for_entry(sunday, SundayCycle::B, WeekdayCycle::I).unwrap();
        let joel = &masses[0].readings[1];
        assert_eq!(joel.citation.to_string(), "Jl 3:1-5");
        assert_eq!(joel.citation.versification, Versification::Lectionary);
        assert_eq!(joel.text_citation.to_string(), "Jl 2:28-32");
        assert_eq!(joel.text_citation.versification, Versification::Vulgate);

        let samuel = &masses[0].readings[0];
        assert_eq!(samuel.text_citation.locations, samuel.citation.locations);
        assert_eq!(samuel.text_citation.versification, Versification::Vulgate);
    }

    #[test]
    fn passages_numbered_differently_need_an_alt() {
        let raw = r#"
schema_version = 1
[[celebration]]
id = "x"
name = "X"
[[celebration.mass]]
name = "Mass"
readings = [{ citation = "Mal 3:19-20a" }]
"#;
        let lectionary = Lectionary::from_toml_str(raw).unwrap();
        assert!(matches!(
            lectionary.validate(),
            Err(LectionaryError::Citation(CitationError::Range { .. }))
        ));
    }
}
