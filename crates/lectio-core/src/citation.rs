//! Scripture citations: parsing, validation, normalization and formatting.
//!
//! A citation names one book and an ordered list of verse ranges inside it, for
//! example `Is 63:16b-17,19b,64:2b-7`. Partial-verse markers (`16b`) are accepted and
//! dropped; a [`Location`] always covers whole verses.
//!
//! Citations are validated against one [`Versification`] of their book. Plain
//! parsing uses lectionary numbering; text lookups use the Vulgate.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::books::{self, Book, Versification};

/// Extra context attached to an unknown book error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookHint {
    None,
    DidYouMean(&'static str),
    Ambiguous(Vec<&'static str>),
}

impl fmt::Display for BookHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookHint::None => Ok(()),
            BookHint::DidYouMean(name) => write!(f, "; did you mean {name}?"),
            BookHint::Ambiguous(names) => write!(f, "; could be any of {}", names.join(", ")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CitationError {
    #[error("unknown book '{token}'{hint}")]
    UnknownBook { token: String, hint: BookHint },
    #[error("{book} has no chapter {chapter} ({chapters} chapters)")]
    InvalidChapter {
        book: &'static str,
        chapter: u16,
        chapters: u16,
    },
    #[error("malformed citation '{text}': {reason}")]
    Syntax { text: String, reason: &'static str },
    #[error("{book}: {reason}")]
    Range { book: &'static str, reason: String },
}

/// A single verse, ordered by chapter then verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct VerseAddr {
    pub chapter: u16,
    pub verse: u16,
}

impl VerseAddr {
    pub const fn new(chapter: u16, verse: u16) -> Self {
        Self { chapter, verse }
    }
}

impl fmt::Display for VerseAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

/// An inclusive verse range; `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub start: VerseAddr,
    pub end: VerseAddr,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    #[serde(serialize_with = "serialize_book")]
    pub book: &'static Book,
    #[serde(skip_serializing_if = "Versification::is_lectionary")]
    pub versification: Versification,
    /// Sorted, disjoint and non-adjacent.
    pub locations: Vec<Location>,
}

fn serialize_book<S: Serializer>(book: &&'static Book, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(book.name)
}

impl Citation {
    /// Build a citation in lectionary numbering, sorting the locations and merging
    /// overlapping or adjacent ones.
    pub fn new(book: &'static Book, locations: Vec<Location>) -> Self {
        Self::new_in(book, Versification::Lectionary, locations)
    }

    pub fn new_in(
        book: &'static Book,
        versification: Versification,
        mut locations: Vec<Location>,
    ) -> Self {
        let counts = book.verse_counts_in(versification);
        locations.sort_by_key(|location| (location.start, location.end));
        let mut merged: Vec<Location> = Vec::with_capacity(locations.len());
        for location in locations {
            match merged.last_mut() {
                Some(last) if location.start <= successor(counts, last.end) => {
                    last.end = last.end.max(location.end);
                }
                _ => merged.push(location),
            }
        }
        Self {
            book,
            versification,
            locations: merged,
        }
    }

    pub fn whole_book(book: &'static Book) -> Self {
        Self::whole_book_in(book, Versification::Lectionary)
    }

    pub fn whole_book_in(book: &'static Book, versification: Versification) -> Self {
        let counts = book.verse_counts_in(versification);
        let last_chapter = counts.len() as u16;
        let last_verse = counts[counts.len() - 1];
        Self {
            book,
            versification,
            locations: vec![Location {
                start: VerseAddr::new(1, 1),
                end: VerseAddr::new(last_chapter, last_verse),
            }],
        }
    }

    pub fn is_whole_book(&self) -> bool {
        *self == Self::whole_book_in(self.book, self.versification)
    }

    /// Every verse covered by the citation, in canonical order.
    pub fn verses(&self) -> impl Iterator<Item = VerseAddr> + '_ {
        let counts = self.book.verse_counts_in(self.versification);
        self.locations.iter().flat_map(move |location| LocationVerses {
            counts,
            next: Some(location.start),
            end: location.end,
        })
    }

    pub fn verse_total(&self) -> usize {
        self.verses().count()
    }
}

struct LocationVerses {
    counts: &'static [u16],
    next: Option<VerseAddr>,
    end: VerseAddr,
}

impl Iterator for LocationVerses {
    type Item = VerseAddr;

    fn next(&mut self) -> Option<VerseAddr> {
        let current = self.next?;
        self.next = if current < self.end {
            Some(successor(self.counts, current))
        } else {
            None
        };
        Some(current)
    }
}

/// The verse immediately after `addr`, crossing into the next chapter when needed.
fn successor(counts: &[u16], addr: VerseAddr) -> VerseAddr {
    let last = counts
        .get(usize::from(addr.chapter).saturating_sub(1))
        .copied()
        .unwrap_or(0);
    if addr.verse < last {
        VerseAddr::new(addr.chapter, addr.verse + 1)
    } else {
        VerseAddr::new(addr.chapter + 1, 1)
    }
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.book.abbreviation())?;
        if self.is_whole_book() {
            return Ok(());
        }
        f.write_str(" ")?;
        let mut open_chapter = None;
        for (index, location) in self.locations.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            let Location { start, end } = *location;
            if !self.book.has_chapters {
                write!(f, "{}", start.verse)?;
                if end != start {
                    write!(f, "-{}", end.verse)?;
                }
                continue;
            }
            if open_chapter == Some(start.chapter) {
                write!(f, "{}", start.verse)?;
            } else {
                write!(f, "{start}")?;
            }
            if end != start {
                if end.chapter == start.chapter {
                    write!(f, "-{}", end.verse)?;
                } else {
                    write!(f, "-{end}")?;
                }
            }
            open_chapter = Some(end.chapter);
        }
        Ok(())
    }
}

impl FromStr for Citation {
    type Err = CitationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_citation(s)
    }
}

/// Canonical text form of a citation; `parse_citation(&format(c))` yields `c` again.
pub fn format(citation: &Citation) -> String {
    citation.to_string()
}

/// Parse a location list against a book named by `book_token`.
pub fn parse(book_token: &str, location_text: &str) -> Result<Citation, CitationError> {
    let book = books::resolve(book_token)?;
    parse_locations(book, location_text)
}

/// Parse a full citation such as `"Song of Songs 2:8-14"` or `"1 Cor 13"`.
pub fn parse_citation(text: &str) -> Result<Citation, CitationError> {
    parse_citation_in(text, Versification::Lectionary)
}

/// Parse a full citation written in the given numbering, e.g. `"Mal 4:1-2"` in the Vulgate.
pub fn parse_citation_in(
    text: &str,
    versification: Versification,
) -> Result<Citation, CitationError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(syntax(text, "empty citation"));
    }
    match books::parse_book_tokens(&tokens) {
        Some((book, consumed)) => {
            parse_locations_in(book, versification, &tokens[consumed..].join(" "))
        }
        None => {
            let book_tokens = tokens
                .iter()
                .skip(1)
                .position(|token| token.starts_with(|ch: char| ch.is_ascii_digit()))
                .map_or(tokens.len(), |position| position + 1);
            let book = books::resolve(&tokens[..book_tokens].join(" "))?;
            Err(CitationError::Syntax {
                text: text.trim().to_string(),
                reason: if book.has_chapters {
                    "book name is not followed by a location"
                } else {
                    "book name is not followed by a verse list"
                },
            })
        }
    }
}

/// Parse `location_text` for a known book. Empty text cites the whole book.
pub fn parse_locations(book: &'static Book, location_text: &str) -> Result<Citation, CitationError> {
    parse_locations_in(book, Versification::Lectionary, location_text)
}

pub fn parse_locations_in(
    book: &'static Book,
    versification: Versification,
    location_text: &str,
) -> Result<Citation, CitationError> {
    let text = location_text.trim();
    if text.is_empty() {
        return Ok(Citation::whole_book_in(book, versification));
    }

    let mut parser = LocationParser {
        book,
        versification,
        text,
        open_chapter: if book.has_chapters { None } else { Some(1) },
    };
    let mut locations = Vec::new();
    for item in text.split(',') {
        locations.push(parser.item(item.trim())?);
    }
    Ok(Citation::new_in(book, versification, locations))
}

#[derive(Debug, Clone, Copy)]
enum Token {
    /// A bare number: a verse when a chapter is open, otherwise a whole chapter.
    Number { value: u16, partial: bool },
    Verse { chapter: u16, verse: u16 },
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d+)(?::(\d+))?([a-z]{1,4})?$").expect("token pattern is valid")
    })
}

struct LocationParser<'a> {
    book: &'static Book,
    versification: Versification,
    text: &'a str,
    open_chapter: Option<u16>,
}

impl LocationParser<'_> {
    fn item(&mut self, item: &str) -> Result<Location, CitationError> {
        if item.is_empty() {
            return Err(syntax(self.text, "empty item in location list"));
        }
        let bounds: Vec<&str> = item.split('-').collect();
        match bounds.as_slice() {
            [single] => {
                let (start, whole_chapter) = self.start(self.token(single)?)?;
                let end = if whole_chapter {
                    self.chapter_end(start.chapter)?
                } else {
                    start
                };
                Ok(Location { start, end })
            }
            [first, last] => {
                let (start, whole_chapter) = self.start(self.token(first)?)?;
                let end = self.end(self.token(last)?, whole_chapter)?;
                if end < start {
                    return Err(CitationError::Range {
                        book: self.book.name,
                        reason: format!("range {start}-{end} runs backwards"),
                    });
                }
                Ok(Location { start, end })
            }
            _ => Err(syntax(self.text, "more than one '-' in a range")),
        }
    }

    fn token(&self, raw: &str) -> Result<Token, CitationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(syntax(self.text, "missing number in range"));
        }
        if raw.matches(':').count() > 1 {
            return Err(syntax(self.text, "more than one ':' in an address"));
        }
        let captures = token_pattern()
            .captures(raw)
            .ok_or_else(|| syntax(self.text, "expected chapter:verse or a number"))?;
        let first = parse_number(self.text, &captures[1])?;
        let partial = captures.get(3).is_some();
        match captures.get(2) {
            Some(verse) => Ok(Token::Verse {
                chapter: first,
                verse: parse_number(self.text, verse.as_str())?,
            }),
            None => Ok(Token::Number {
                value: first,
                partial,
            }),
        }
    }

    /// Resolve the first address of an item; the flag reports a whole-chapter start.
    fn start(&mut self, token: Token) -> Result<(VerseAddr, bool), CitationError> {
        match token {
            Token::Verse { chapter, verse } => {
                let addr = self.verse(chapter, verse)?;
                self.open_chapter = Some(chapter);
                Ok((addr, false))
            }
            Token::Number { value, partial } => match self.open_chapter {
                Some(chapter) => Ok((self.verse(chapter, value)?, false)),
                None => {
                    if partial {
                        return Err(syntax(self.text, "partial-verse marker on a whole chapter"));
                    }
                    self.book.verse_count_in(self.versification, value)?;
                    Ok((VerseAddr::new(value, 1), true))
                }
            },
        }
    }

    fn end(&mut self, token: Token, whole_chapter: bool) -> Result<VerseAddr, CitationError> {
        match token {
            Token::Verse { chapter, verse } => {
                let addr = self.verse(chapter, verse)?;
                self.open_chapter = Some(chapter);
                Ok(addr)
            }
            Token::Number { value, partial } if whole_chapter => {
                if partial {
                    return Err(syntax(self.text, "partial-verse marker on a whole chapter"));
                }
                self.chapter_end(value)
            }
            Token::Number { value, .. } => match self.open_chapter {
                Some(chapter) => self.verse(chapter, value),
                None => Err(syntax(self.text, "verse given without a chapter")),
            },
        }
    }

    fn chapter_end(&self, chapter: u16) -> Result<VerseAddr, CitationError> {
        Ok(VerseAddr::new(
            chapter,
            self.book.verse_count_in(self.versification, chapter)?,
        ))
    }

    fn verse(&self, chapter: u16, verse: u16) -> Result<VerseAddr, CitationError> {
        let count = self.book.verse_count_in(self.versification, chapter)?;
        if verse == 0 || verse > count {
            return Err(CitationError::Range {
                book: self.book.name,
                reason: format!("chapter {chapter} has {count} verses, not {verse}"),
            });
        }
        Ok(VerseAddr::new(chapter, verse))
    }
}

fn parse_number(text: &str, digits: &str) -> Result<u16, CitationError> {
    digits
        .parse::<u16>()
        .map_err(|_| syntax(text, "number too large"))
}

fn syntax(text: &str, reason: &'static str) -> CitationError {
    CitationError::Syntax {
        text: text.trim().to_string(),
        reason,
    }
}
