//! Resolves any date of a supported year to the one celebration of the Roman Rite
//! that takes place on it.
//!
//! A [`CalendarYear`] is built once per civil year: every rule of the table is
//! bound to a date, impeded solemnities are transferred, and from then on each
//! date resolves to the candidate with the lowest [`Precedence`]. Seasonal days
//! ("Friday of the 5th Week in Ordinary Time") are always candidates, so every
//! date has exactly one winner.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::dates::{SUPPORTED_YEARS, add_days, is_sunday, sunday_on_or_before, weekday_of};
use crate::rules::{
    self, CelebrationRule, Precedence, Rank, Season, SeasonBoundaries, Transfer,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error(
        "year {year} is outside the supported range {}..={}",
        SUPPORTED_YEARS.start(),
        SUPPORTED_YEARS.end()
    )]
    DateOutOfRange { year: i32 },
    #[error("{date} does not belong to the calendar of {year}")]
    NotInYear { date: NaiveDate, year: i32 },
}

/// Longest distance a transferred solemnity may travel looking for a free day.
const TRANSFER_WINDOW: i64 = 14;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Celebration {
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub rank: Rank,
    pub precedence: Precedence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transferred_from: Option<NaiveDate>,
}

impl Celebration {
    fn named(rule: &'static CelebrationRule, transferred_from: Option<NaiveDate>) -> Self {
        Self {
            id: Cow::Borrowed(rule.id),
            name: Cow::Borrowed(rule.name),
            rank: rule.rank,
            precedence: rule.precedence,
            transferred_from,
        }
    }

    fn seasonal(id: String, name: String, rank: Rank, class: u8) -> Self {
        Self {
            id: Cow::Owned(id),
            name: Cow::Owned(name),
            rank,
            precedence: Precedence::seasonal(class),
            transferred_from: None,
        }
    }

    pub fn is_seasonal(&self) -> bool {
        self.precedence.order == rules::SEASONAL_ORDER
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SundayCycle {
    A,
    B,
    C,
}

impl SundayCycle {
    pub fn letter(self) -> &'static str {
        match self {
            SundayCycle::A => "A",
            SundayCycle::B => "B",
            SundayCycle::C => "C",
        }
    }

    /// Cycle of a liturgical year; 2017 was a Year A.
    pub fn for_liturgical_year(liturgical_year: i32) -> Self {
        match (liturgical_year - 2017).rem_euclid(3) {
            0 => SundayCycle::A,
            1 => SundayCycle::B,
            _ => SundayCycle::C,
        }
    }
}

impl fmt::Display for SundayCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WeekdayCycle {
    I,
    II,
}

impl WeekdayCycle {
    pub fn numeral(self) -> &'static str {
        match self {
            WeekdayCycle::I => "I",
            WeekdayCycle::II => "II",
        }
    }

    pub fn for_liturgical_year(liturgical_year: i32) -> Self {
        if liturgical_year.rem_euclid(2) == 1 {
            WeekdayCycle::I
        } else {
            WeekdayCycle::II
        }
    }
}

impl fmt::Display for WeekdayCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.numeral())
    }
}

/// The outcome of resolving one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub date: NaiveDate,
    pub celebration: Celebration,
    pub season: Season,
    pub liturgical_year: i32,
    pub sunday_cycle: SundayCycle,
    pub weekday_cycle: WeekdayCycle,
    /// Solemnity of the following day, whose vigil Mass may be celebrated this evening.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eve_of: Option<Celebration>,
}

impl Resolution {
    pub fn rank(&self) -> Rank {
        self.celebration.rank
    }

    pub fn precedence(&self) -> Precedence {
        self.celebration.precedence
    }
}

#[derive(Debug, Clone, Copy)]
struct Placed {
    rule: &'static CelebrationRule,
    transferred_from: Option<NaiveDate>,
}

/// Every named celebration of one civil year, bound to its date after transfers.
#[derive(Debug, Clone)]
pub struct CalendarYear {
    year: i32,
    bounds: SeasonBoundaries,
    placed: BTreeMap<NaiveDate, Vec<Placed>>,
}

impl CalendarYear {
    pub fn new(year: i32) -> Result<Self, CalendarError> {
        let bounds = SeasonBoundaries::for_year(year)?;
        let mut calendar = Self {
            year,
            bounds,
            placed: BTreeMap::new(),
        };
        for rule in rules::all_rules() {
            let date = bounds.date_of(rule.date)?;
            calendar.place(date, Placed { rule, transferred_from: None });
        }

        let mut movable: Vec<(NaiveDate, &'static CelebrationRule)> = calendar
            .placed
            .iter()
            .flat_map(|(date, entries)| entries.iter().map(move |entry| (*date, entry.rule)))
            .filter(|(_, rule)| rule.transfer != Transfer::Omit)
            .collect();
        movable.sort_by_key(|(_, rule)| rule.precedence);
        for (date, rule) in movable {
            calendar.transfer_if_impeded(date, rule);
        }
        Ok(calendar)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn boundaries(&self) -> &SeasonBoundaries {
        &self.bounds
    }

    pub fn easter(&self) -> NaiveDate {
        self.bounds.easter
    }

    /// Date a named celebration falls on this year, after any transfer.
    pub fn date_of(&self, id: &str) -> Option<NaiveDate> {
        self.placed.iter().find_map(|(date, entries)| {
            entries
                .iter()
                .any(|entry| entry.rule.id == id)
                .then_some(*date)
        })
    }

    /// Every celebration that could take place on `date`, best first.
    pub fn candidates(&self, date: NaiveDate) -> Result<Vec<Celebration>, CalendarError> {
        self.check_date(date)?;
        Ok(self.candidates_in_year(date))
    }

    pub fn resolve(&self, date: NaiveDate) -> Result<Resolution, CalendarError> {
        self.check_date(date)?;
        Ok(self.resolve_in_year(date))
    }

    /// Each date of the year, January 1 through December 31, with its resolution.
    pub fn days(&self) -> impl Iterator<Item = Resolution> + '_ {
        let first = self.bounds.christmas.with_ordinal(1);
        first
            .into_iter()
            .flat_map(|first| first.iter_days())
            .take_while(move |date| date.year() == self.year)
            .map(move |date| self.resolve_in_year(date))
    }

    fn check_date(&self, date: NaiveDate) -> Result<(), CalendarError> {
        if date.year() == self.year {
            Ok(())
        } else {
            Err(CalendarError::NotInYear {
                date,
                year: self.year,
            })
        }
    }

    fn place(&mut self, date: NaiveDate, placed: Placed) {
        self.placed.entry(date).or_default().push(placed);
    }

    fn remove(&mut self, date: NaiveDate, id: &str) {
        if let Some(entries) = self.placed.get_mut(&date) {
            entries.retain(|entry| entry.rule.id != id);
            if entries.is_empty() {
                self.placed.remove(&date);
            }
        }
    }

    fn candidates_in_year(&self, date: NaiveDate) -> Vec<Celebration> {
        let mut candidates: Vec<Celebration> = self
            .placed
            .get(&date)
            .into_iter()
            .flatten()
            .map(|entry| Celebration::named(entry.rule, entry.transferred_from))
            .collect();
        candidates.push(self.seasonal_day(date));
        candidates.sort_by_key(|celebration| celebration.precedence);
        candidates
    }

    fn winner(&self, date: NaiveDate) -> Celebration {
        let mut candidates = self.candidates_in_year(date);
        // The seasonal day is always present.
        candidates.swap_remove(0)
    }

    fn resolve_in_year(&self, date: NaiveDate) -> Resolution {
        let celebration = self.winner(date);
        let liturgical_year = if date >= self.bounds.first_advent {
            self.year + 1
        } else {
            self.year
        };
        let eve_of = self
            .winner_of_next_day(date)
            .filter(|next| {
                next.rank == Rank::Solemnity
                    && next.id != celebration.id
                    && next.precedence < celebration.precedence
            });
        Resolution {
            date,
            season: self.bounds.season_of(date),
            liturgical_year,
            sunday_cycle: SundayCycle::for_liturgical_year(liturgical_year),
            weekday_cycle: WeekdayCycle::for_liturgical_year(liturgical_year),
            celebration,
            eve_of,
        }
    }

    fn winner_of_next_day(&self, date: NaiveDate) -> Option<Celebration> {
        let next = date.succ_opt()?;
        if next.year() == self.year {
            Some(self.winner(next))
        } else {
            CalendarYear::new(next.year()).ok().map(|year| year.winner(next))
        }
    }

    fn best_precedence(&self, date: NaiveDate, excluding: &str) -> Precedence {
        self.candidates_in_year(date)
            .into_iter()
            .filter(|celebration| celebration.id != excluding)
            .map(|celebration| celebration.precedence)
            .min()
            .unwrap_or(Precedence::seasonal(u8::MAX))
    }

    fn is_free(&self, date: NaiveDate) -> bool {
        date.year() == self.year && self.best_precedence(date, "").is_free()
    }

    fn transfer_if_impeded(&mut self, date: NaiveDate, rule: &'static CelebrationRule) {
        if self.best_precedence(date, rule.id) > rule.precedence {
            return;
        }
        let easter = self.bounds.easter;
        let paschal = self.bounds.in_paschal_weeks(date);
        let target = match rule.transfer {
            Transfer::Omit => None,
            Transfer::NextFreeDayOrBeforePalmSunday if paschal => Some(add_days(easter, -8)),
            Transfer::NextFreeDayOrAfterEasterOctave if paschal => Some(add_days(easter, 8)),
            Transfer::PreviousFreeDay => self.find_free_day(date, -1),
            Transfer::NextFreeDay
            | Transfer::NextFreeDayOrBeforePalmSunday
            | Transfer::NextFreeDayOrAfterEasterOctave => self.find_free_day(date, 1),
        };
        self.remove(date, rule.id);
        match target {
            Some(target) => {
                debug!(celebration = rule.id, from = %date, to = %target, "Transferred celebration");
                self.place(
                    target,
                    Placed {
                        rule,
                        transferred_from: Some(date),
                    },
                );
            }
            None => debug!(celebration = rule.id, %date, "Impeded celebration omitted"),
        }
    }

    fn find_free_day(&self, from: NaiveDate, step: i64) -> Option<NaiveDate> {
        (1..=TRANSFER_WINDOW)
            .map(|distance| add_days(from, distance * step))
            .find(|date| self.is_free(*date))
    }

    fn seasonal_day(&self, date: NaiveDate) -> Celebration {
        let b = &self.bounds;
        let weekday = weekday_of(date);
        match b.season_of(date) {
            Season::Christmas => christmas_day(date),
            Season::OrdinaryTime => {
                let week = if date < b.ash_wednesday {
                    // Week 1 starts the day after the Baptism of the Lord.
                    let base = if is_sunday(b.baptism) { b.baptism } else { b.epiphany };
                    (date - base).num_days() / 7 + 1
                } else {
                    let christ_the_king = add_days(b.first_advent, -7);
                    34 - (christ_the_king - sunday_on_or_before(date)).num_days() / 7
                };
                week_day("ordinary", "in Ordinary Time", week, weekday, 6, 13)
            }
            Season::Lent => {
                let first_sunday = add_days(b.ash_wednesday, 4);
                let palm_sunday = add_days(b.easter, -7);
                if date < first_sunday {
                    Celebration::seasonal(
                        format!("lent/ash-wednesday/{}", weekday_slug(weekday)),
                        format!("{} after Ash Wednesday", weekday_name(weekday)),
                        Rank::Weekday,
                        9,
                    )
                } else if date >= palm_sunday {
                    Celebration::seasonal(
                        format!("lent/holy-week/{}", weekday_slug(weekday)),
                        format!("{} of Holy Week", weekday_name(weekday)),
                        if is_sunday(date) { Rank::Sunday } else { Rank::Weekday },
                        2,
                    )
                } else {
                    let week = (date - first_sunday).num_days() / 7 + 1;
                    week_day("lent", "of Lent", week, weekday, 2, 9)
                }
            }
            Season::Triduum => Celebration::seasonal(
                format!("triduum/{}", weekday_slug(weekday)),
                format!("{} of the Paschal Triduum", weekday_name(weekday)),
                Rank::Triduum,
                1,
            ),
            Season::Easter => {
                let week = (date - b.easter).num_days() / 7 + 1;
                if week == 1 && !is_sunday(date) {
                    Celebration::seasonal(
                        format!("easter/octave/{}", weekday_slug(weekday)),
                        format!("{} within the Octave of Easter", weekday_name(weekday)),
                        Rank::Weekday,
                        2,
                    )
                } else {
                    week_day("easter", "of Easter", week, weekday, 2, 13)
                }
            }
            Season::Advent => {
                let week = (date - b.first_advent).num_days() / 7 + 1;
                if !is_sunday(date) && date.day() >= 17 {
                    Celebration::seasonal(
                        format!("advent/december-{}", date.day()),
                        format!("December {}", date.day()),
                        Rank::Weekday,
                        9,
                    )
                } else {
                    week_day("advent", "of Advent", week, weekday, 2, 13)
                }
            }
        }
    }
}

fn christmas_day(date: NaiveDate) -> Celebration {
    if is_sunday(date) {
        return Celebration::seasonal(
            "christmas/sunday".to_string(),
            "Sunday of Christmas Time".to_string(),
            Rank::Sunday,
            6,
        );
    }
    let octave_day = match (date.month(), date.day()) {
        (12, day) => Some(day - 24),
        (1, 1) => Some(8),
        _ => None,
    };
    match octave_day {
        Some(day) => Celebration::seasonal(
            format!("christmas/octave-day-{day}"),
            format!("{} Day within the Octave of Christmas", ordinal(i64::from(day))),
            Rank::Weekday,
            9,
        ),
        None => Celebration::seasonal(
            format!("christmas/january-{}", date.day()),
            format!("Christmas Weekday, January {}", date.day()),
            Rank::Weekday,
            13,
        ),
    }
}

fn week_day(
    season: &str,
    season_phrase: &str,
    week: i64,
    weekday: Weekday,
    sunday_class: u8,
    weekday_class: u8,
) -> Celebration {
    let id = format!("{season}/week-{week}/{}", weekday_slug(weekday));
    if weekday == Weekday::Sun {
        Celebration::seasonal(
            id,
            format!("{} Sunday {season_phrase}", ordinal(week)),
            Rank::Sunday,
            sunday_class,
        )
    } else {
        Celebration::seasonal(
            id,
            format!(
                "{} of the {} Week {season_phrase}",
                weekday_name(weekday),
                ordinal(week)
            ),
            Rank::Weekday,
            weekday_class,
        )
    }
}

fn ordinal(n: i64) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn weekday_slug(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Caller-owned cache of built years.
#[derive(Debug, Default)]
pub struct CalendarCache {
    years: HashMap<i32, Arc<CalendarYear>>,
}

impl CalendarCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year(&mut self, year: i32) -> Result<Arc<CalendarYear>, CalendarError> {
        if let Some(calendar) = self.years.get(&year) {
            return Ok(Arc::clone(calendar));
        }
        let calendar = Arc::new(CalendarYear::new(year)?);
        self.years.insert(year, Arc::clone(&calendar));
        Ok(calendar)
    }

    pub fn resolve(&mut self, date: NaiveDate) -> Result<Resolution, CalendarError> {
        self.year(date.year())?.resolve(date)
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn clear(&mut self) {
        self.years.clear();
    }
}

/// Resolve a single date without keeping the built year around.
pub fn resolve(date: NaiveDate) -> Result<Resolution, CalendarError> {
    CalendarYear::new(date.year())?.resolve(date)
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn winner(y: i32, m: u32, d: u32) -> Resolution {
        resolve(date(y, m, d)).unwrap()
    }

    #[test]
    fn st_joseph_moves_off_a_sunday_of_lent() {
        let year = CalendarYear::new(2017).unwrap();
        assert_eq!(year.date_of("joseph"), Some(date(2017, 3, 20)));
        let monday = year.resolve(date(2017, 3, 20)).unwrap();
        assert_eq!(monday.celebration.id, "joseph");
        assert_eq!(monday.celebration.transferred_from, Some(date(2017, 3, 19)));
        assert_eq!(year.resolve(date(2017, 3, 19)).unwrap().celebration.id, "lent/week-3/sunday");
    }

    #[test]
    fn holy_week_pushes_joseph_and_annunciation_out() {
        // Easter 2008 was March 23.
        let year = CalendarYear::new(2008).unwrap();
        assert_eq!(year.date_of("joseph"), Some(date(2008, 3, 15)));
        assert_eq!(year.date_of("annunciation"), Some(date(2008, 3, 31)));
    }

    #[test]
    fn immaculate_conception_on_advent_sunday() {
        let year = CalendarYear::new(2019).unwrap();
        assert_eq!(year.date_of("immaculate-conception"), Some(date(2019, 12, 9)));
        assert_eq!(
            year.resolve(date(2019, 12, 8)).unwrap().celebration.id,
            "advent/week-2/sunday"
        );
    }

    #[test]
    fn john_the_baptist_yields_to_the_sacred_heart() {
        let year = CalendarYear::new(2022).unwrap();
        assert_eq!(year.date_of("sacred-heart"), Some(date(2022, 6, 24)));
        assert_eq!(year.date_of("john-the-baptist"), Some(date(2022, 6, 23)));
    }

    #[test]
    fn memorials_on_sundays_are_not_kept() {
        // Agnes, January 21, 2018 was a Sunday.
        let sunday = winner(2018, 1, 21);
        assert_eq!(sunday.celebration.id, "ordinary/week-3/sunday");
        assert_eq!(sunday.celebration.name, "3rd Sunday in Ordinary Time");
        let candidates = CalendarYear::new(2018)
            .unwrap()
            .candidates(date(2018, 1, 21))
            .unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[1].id, "agnes");
    }

    #[test]
    fn seasonal_names() {
        assert_eq!(winner(2017, 1, 10).celebration.name, "Tuesday of the 1st Week in Ordinary Time");
        assert_eq!(winner(2017, 3, 2).celebration.name, "Thursday after Ash Wednesday");
        assert_eq!(winner(2017, 4, 11).celebration.name, "Tuesday of Holy Week");
        assert_eq!(winner(2017, 4, 18).celebration.name, "Tuesday within the Octave of Easter");
        assert_eq!(winner(2017, 5, 28).celebration.name, "7th Sunday of Easter");
        assert_eq!(winner(2017, 12, 19).celebration.id, "advent/december-19");
        assert_eq!(winner(2017, 12, 29).celebration.name, "5th Day within the Octave of Christmas");
        assert_eq!(winner(2018, 1, 3).celebration.id, "christmas/january-3");
    }

    #[test]
    fn ordinary_time_resumes_counting_back_from_christ_the_king() {
        assert_eq!(winner(2017, 6, 5).celebration.id, "ordinary/week-9/monday");
        assert_eq!(winner(2017, 6, 25).celebration.id, "ordinary/week-12/sunday");
        assert_eq!(winner(2017, 12, 2).celebration.id, "ordinary/week-34/saturday");
    }

    #[test]
    fn cycle_letters_change_on_the_first_sunday_of_advent() {
        let before = winner(2017, 12, 2);
        assert_eq!((before.sunday_cycle, before.weekday_cycle), (SundayCycle::A, WeekdayCycle::I));
        let after = winner(2017, 12, 3);
        assert_eq!(after.liturgical_year, 2018);
        assert_eq!((after.sunday_cycle, after.weekday_cycle), (SundayCycle::B, WeekdayCycle::II));
        assert_eq!(SundayCycle::for_liturgical_year(2016), SundayCycle::C);
        assert_eq!(SundayCycle::for_liturgical_year(2025), SundayCycle::C);
    }

    #[test]
    fn eve_of_solemnities() {
        let eve = winner(2017, 12, 24);
        assert_eq!(eve.celebration.id, "advent/week-4/sunday");
        assert_eq!(eve.eve_of.map(|c| c.id), Some(Cow::Borrowed("christmas")));
        assert_eq!(winner(2017, 12, 31).eve_of.map(|c| c.id), Some(Cow::Borrowed("mary-mother-of-god")));
        assert!(winner(2017, 7, 4).eve_of.is_none());
    }

    #[test]
    fn impeded_solemnity_has_no_vigil_on_the_sunday_evening() {
        let sunday = winner(2024, 12, 8);
        assert_eq!(sunday.celebration.id, "advent/week-2/sunday");
        assert_eq!(sunday.eve_of, None);
        let saturday = winner(2024, 12, 7);
        assert_eq!(saturday.eve_of, None);

        let monday = winner(2024, 12, 9);
        assert_eq!(monday.celebration.id, "immaculate-conception");
        assert_eq!(monday.celebration.transferred_from, Some(date(2024, 12, 8)));
    }

    #[test]
    fn cache_reuses_years() {
        let mut cache = CalendarCache::new();
        cache.resolve(date(2017, 4, 16)).unwrap();
        cache.resolve(date(2017, 8, 6)).unwrap();
        assert_eq!(cache.len(), 1);
        cache.resolve(date(2018, 1, 1)).unwrap();
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn out_of_range_and_wrong_year() {
        assert_eq!(
            resolve(date(1500, 6, 1)),
            Err(CalendarError::DateOutOfRange { year: 1500 })
        );
        let year = CalendarYear::new(2017).unwrap();
        assert!(matches!(
            year.resolve(date(2018, 1, 1)),
            Err(CalendarError::NotInYear { year: 2017, .. })
        ));
    }

    #[test]
    fn days_cover_the_whole_year() {
        let year = CalendarYear::new(2024).unwrap();
        let days: Vec<Resolution> = year.days().collect();
        assert_eq!(days.len(), 366);
        assert_eq!(days[0].celebration.id, "mary-mother-of-god");
        assert_eq!(days[365].date, date(2024, 12, 31));
    }
}
