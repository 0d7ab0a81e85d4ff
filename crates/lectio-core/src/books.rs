//! The catalog of the 73 books of the Catholic canon.
//!
//! Every book carries two verse layouts. The lectionary layout follows the New
//! American Bible, whose chapter divisions track the Hebrew, so Joel has four
//! chapters and the psalms count their superscriptions. The Vulgate layout follows the
//! Clementine text read by the text store; it is only spelled out for books whose
//! numbering departs from the lectionary's.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;
use strsim::jaro_winkler;

use crate::citation::{BookHint, CitationError};
use crate::normalize::fold_diacritics;

const MIN_PREFIX_LEN: usize = 3;
const SUGGESTION_THRESHOLD: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Testament {
    Old,
    New,
}

/// Chapter and verse numbering a citation is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Versification {
    /// Numbering printed in the lectionary.
    #[default]
    Lectionary,
    /// Clementine Vulgate numbering.
    Vulgate,
}

impl Versification {
    pub fn is_lectionary(&self) -> bool {
        *self == Versification::Lectionary
    }
}

impl fmt::Display for Versification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Versification::Lectionary => "lectionary",
            Versification::Vulgate => "Vulgate",
        })
    }
}

/// A book of scripture with its chapter and verse layout.
#[derive(Debug)]
pub struct Book {
    pub name: &'static str,
    /// Accepted abbreviations. The first entry is the one used when formatting.
    pub abbreviations: &'static [&'static str],
    pub ordinal: u8,
    pub testament: Testament,
    /// Verse count of every chapter in lectionary numbering, indexed by `chapter - 1`.
    pub verse_counts: &'static [u16],
    /// Vulgate verse counts where they differ from `verse_counts`.
    pub vulgate_verse_counts: Option<&'static [u16]>,
    /// Obadiah, Philemon, 2 John, 3 John and Jude are cited by verse alone.
    pub has_chapters: bool,
}

impl Book {
    pub fn chapter_count(&self) -> u16 {
        self.chapter_count_in(Versification::Lectionary)
    }

    pub fn verse_count(&self, chapter: u16) -> Result<u16, CitationError> {
        self.verse_count_in(Versification::Lectionary, chapter)
    }

    pub fn verse_counts_in(&self, versification: Versification) -> &'static [u16] {
        match versification {
            Versification::Lectionary => self.verse_counts,
            Versification::Vulgate => self.vulgate_verse_counts.unwrap_or(self.verse_counts),
        }
    }

    pub fn chapter_count_in(&self, versification: Versification) -> u16 {
        self.verse_counts_in(versification).len() as u16
    }

    pub fn verse_count_in(
        &self,
        versification: Versification,
        chapter: u16,
    ) -> Result<u16, CitationError> {
        let counts = self.verse_counts_in(versification);
        if chapter == 0 || usize::from(chapter) > counts.len() {
            return Err(CitationError::InvalidChapter {
                book: self.name,
                chapter,
                chapters: counts.len() as u16,
            });
        }
        Ok(counts[usize::from(chapter - 1)])
    }

    /// Preferred abbreviation used in formatted citations.
    pub fn abbreviation(&self) -> &'static str {
        self.abbreviations.first().copied().unwrap_or(self.name)
    }

    pub fn normalized_name(&self) -> String {
        normalize_token(self.name)
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal == other.ordinal
    }
}

impl Eq for Book {}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Lowercase, fold diacritics and drop whitespace and periods.
///
/// Any other punctuation survives so that typos such as a stray back-tick fail
/// lookup instead of silently matching.
pub fn normalize_token(token: &str) -> String {
    fold_diacritics(token)
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '.')
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn all_books() -> &'static [Book] {
    &BOOKS
}

pub fn old_testament() -> impl Iterator<Item = &'static Book> {
    BOOKS.iter().filter(|book| book.testament == Testament::Old)
}

pub fn new_testament() -> impl Iterator<Item = &'static Book> {
    BOOKS.iter().filter(|book| book.testament == Testament::New)
}

pub fn by_ordinal(ordinal: u8) -> Option<&'static Book> {
    BOOKS.get(usize::from(ordinal).checked_sub(1)?)
}

struct CatalogIndex {
    exact: HashMap<String, &'static Book>,
    names: Vec<(String, &'static Book)>,
}

fn index() -> &'static CatalogIndex {
    static INDEX: OnceLock<CatalogIndex> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut exact = HashMap::new();
        let mut names = Vec::with_capacity(BOOKS.len());
        for book in BOOKS.iter() {
            let name = book.normalized_name();
            exact.insert(name.clone(), book);
            names.push((name, book));
            for abbreviation in book.abbreviations {
                exact.insert(normalize_token(abbreviation), book);
            }
        }
        CatalogIndex { exact, names }
    })
}

/// Resolve a book token to its catalog entry.
///
/// An exact match on a canonical name or abbreviation always wins. Failing that, a
/// token of at least three characters may select a book by a unique prefix of its
/// canonical name. Ambiguous prefixes are rejected with the candidates listed.
pub fn resolve(token: &str) -> Result<&'static Book, CitationError> {
    let normalized = normalize_token(token);
    let index = index();

    if let Some(book) = index.exact.get(&normalized) {
        return Ok(book);
    }

    if normalized.chars().count() >= MIN_PREFIX_LEN {
        let matches: Vec<&'static Book> = index
            .names
            .iter()
            .filter(|(name, _)| name.starts_with(&normalized))
            .map(|(_, book)| *book)
            .collect();
        match matches.as_slice() {
            [book] => return Ok(book),
            [] => {}
            _ => {
                return Err(CitationError::UnknownBook {
                    token: token.trim().to_string(),
                    hint: BookHint::Ambiguous(matches.iter().map(|book| book.name).collect()),
                });
            }
        }
    }

    Err(CitationError::UnknownBook {
        token: token.trim().to_string(),
        hint: suggest(&normalized),
    })
}

fn suggest(normalized: &str) -> BookHint {
    if normalized.is_empty() {
        return BookHint::None;
    }
    let best = index()
        .exact
        .iter()
        .map(|(key, book)| (jaro_winkler(normalized, key), *book))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0).then_with(|| b.1.ordinal.cmp(&a.1.ordinal)));
    match best {
        Some((_, book)) => BookHint::DidYouMean(book.name),
        None => BookHint::None,
    }
}

/// Greedily match the longest run of leading tokens that names a book.
///
/// Returns the book and the number of tokens consumed. Tokens containing a colon
/// or comma belong to the location and are never joined into a book name.
pub fn parse_book_tokens(tokens: &[&str]) -> Option<(&'static Book, usize)> {
    let limit = tokens
        .iter()
        .position(|token| token.contains(':') || token.contains(','))
        .unwrap_or(tokens.len());
    (1..=limit).rev().find_map(|count| {
        let joined: String = tokens[..count].concat();
        resolve(&joined).ok().map(|book| (book, count))
    })
}

const fn book(
    ordinal: u8,
    testament: Testament,
    name: &'static str,
    abbreviations: &'static [&'static str],
    verse_counts: &'static [u16],
) -> Book {
    Book {
        name,
        abbreviations,
        ordinal,
        testament,
        verse_counts,
        vulgate_verse_counts: None,
        has_chapters: verse_counts.len() > 1,
    }
}

impl Book {
    const fn with_vulgate(self, counts: &'static [u16]) -> Book {
        Book {
            vulgate_verse_counts: Some(counts),
            ..self
        }
    }
}

use Testament::{New, Old};

static BOOKS: [Book; 73] = [
    book(1, Old, "Genesis", &["Gn", "Gen"], &[
        31, 25, 24, 26, 32, 22, 24, 22, 29, 32, 32, 20, 18, 24, 21, 16, 27, 33, 38, 18, 34, 24,
        20, 67, 34, 35, 46, 22, 35, 43, 54, 33, 20, 31, 29, 43, 36, 30, 23, 23, 57, 38, 34, 34,
        28, 34, 31, 22, 33, 26,
    ]).with_vulgate(&[
        31, 25, 24, 26, 32, 22, 24, 22, 29, 32, 32, 20, 18, 24, 21, 16, 27, 33, 38, 18, 34, 24, 20,
        67, 34, 35, 46, 22, 35, 43, 55, 32, 20, 31, 29, 43, 36, 30, 23, 23, 57, 38, 34, 34, 28, 34,
        31, 22, 33, 26,
    ]),
    book(2, Old, "Exodus", &["Ex", "Exod"], &[
        22, 25, 22, 31, 23, 30, 29, 28, 35, 29, 10, 51, 22, 31, 27, 36, 16, 27, 25, 26, 37, 30,
        33, 18, 40, 37, 21, 43, 46, 38, 18, 35, 23, 35, 35, 38, 29, 31, 43, 38,
    ]).with_vulgate(&[
        22, 25, 22, 31, 23, 30, 25, 32, 35, 29, 10, 51, 22, 31, 27, 36, 16, 27, 25, 26, 36, 31, 33,
        18, 40, 37, 21, 43, 46, 38, 18, 35, 23, 35, 35, 38, 29, 31, 43, 38,
    ]),
    book(3, Old, "Leviticus", &["Lv", "Lev"], &[
        17, 16, 17, 35, 26, 23, 38, 36, 24, 20, 47, 8, 59, 57, 33, 34, 16, 30, 37, 27, 24, 33, 44,
        23, 55, 46, 34,
    ]).with_vulgate(&[
        17, 16, 17, 35, 19, 30, 38, 36, 24, 20, 47, 8, 59, 57, 33, 34, 16, 30, 37, 27, 24, 33, 44,
        23, 55, 46, 34,
    ]),
    book(4, Old, "Numbers", &["Nm", "Num"], &[
        54, 34, 51, 49, 31, 27, 89, 26, 23, 36, 35, 16, 33, 45, 41, 35, 28, 32, 22, 29, 35, 41, 30,
        25, 18, 65, 23, 31, 39, 17, 54, 42, 56, 29, 34, 13,
    ]).with_vulgate(&[
        54, 34, 51, 49, 31, 27, 89, 26, 23, 36, 35, 16, 33, 45, 41, 50, 13, 32, 22, 29, 35, 41, 30,
        25, 18, 65, 23, 31, 39, 17, 54, 42, 56, 29, 34, 13,
    ]),
    book(5, Old, "Deuteronomy", &["Dt", "Deut"], &[
        46, 37, 29, 49, 33, 25, 26, 20, 29, 22, 32, 31, 19, 29, 23, 22, 20, 22, 21, 20, 23, 29,
        26, 22, 19, 19, 26, 69, 28, 20, 30, 52, 29, 12,
    ]).with_vulgate(&[
        46, 37, 29, 49, 33, 25, 26, 20, 29, 22, 32, 32, 18, 29, 23, 22, 20, 22, 21, 20, 23, 30, 25,
        22, 19, 19, 26, 68, 29, 20, 30, 52, 29, 12,
    ]),
    book(6, Old, "Joshua", &["Jos", "Josh"], &[
        18, 24, 17, 24, 15, 27, 26, 35, 27, 43, 23, 24, 33, 15, 63, 10, 18, 28, 51, 9, 45, 34, 16,
        33,
    ]),
    book(7, Old, "Judges", &["Jgs", "Judg"], &[
        36, 23, 31, 24, 31, 40, 25, 35, 57, 18, 40, 15, 25, 20, 20, 31, 13, 31, 30, 48, 25,
    ]),
    book(8, Old, "Ruth", &["Ru"], &[22, 23, 18, 22]),
    book(9, Old, "1 Samuel", &["1 Sm", "1 Sam"], &[
        28, 36, 21, 22, 12, 21, 17, 22, 27, 27, 15, 25, 23, 52, 35, 23, 58, 30, 24, 42, 16, 15,
        28, 23, 44, 25, 12, 25, 11, 31, 13,
    ]),
    book(10, Old, "2 Samuel", &["2 Sm", "2 Sam"], &[
        27, 32, 39, 12, 25, 23, 29, 18, 13, 19, 27, 31, 39, 33, 37, 23, 29, 32, 44, 26, 22, 51,
        39, 25,
    ]).with_vulgate(&[
        27, 32, 39, 12, 25, 23, 29, 18, 13, 19, 27, 31, 39, 33, 37, 23, 29, 33, 43, 26, 22, 51, 39,
        25,
    ]),
    book(11, Old, "1 Kings", &["1 Kgs"], &[
        53, 46, 28, 20, 32, 38, 51, 66, 28, 29, 43, 33, 34, 31, 34, 34, 24, 46, 21, 43, 29, 54,
    ]).with_vulgate(&[
        53, 46, 28, 34, 18, 38, 51, 66, 28, 29, 43, 33, 34, 31, 34, 34, 24, 46, 21, 43, 29, 54,
    ]),
    book(12, Old, "2 Kings", &["2 Kgs"], &[
        18, 25, 27, 44, 27, 33, 20, 29, 37, 36, 20, 22, 25, 29, 38, 20, 41, 37, 37, 21, 26, 20,
        37, 20, 30,
    ]).with_vulgate(&[
        18, 25, 27, 44, 27, 33, 20, 29, 37, 36, 21, 21, 25, 29, 38, 20, 41, 37, 37, 21, 26, 20, 37,
        20, 30,
    ]),
    book(13, Old, "1 Chronicles", &["1 Chr", "1 Chron"], &[
        54, 55, 24, 43, 41, 66, 40, 40, 44, 14, 47, 41, 14, 17, 29, 43, 27, 17, 19, 8, 30, 19, 32,
        31, 31, 32, 34, 21, 30,
    ]).with_vulgate(&[
        54, 55, 24, 43, 26, 81, 40, 40, 44, 14, 47, 41, 14, 17, 29, 43, 27, 17, 19, 8, 30, 19, 32,
        31, 31, 32, 34, 21, 30,
    ]),
    book(14, Old, "2 Chronicles", &["2 Chr", "2 Chron"], &[
        18, 17, 17, 22, 14, 42, 22, 18, 31, 19, 23, 16, 23, 14, 19, 14, 19, 34, 11, 37, 20, 12,
        21, 27, 28, 23, 9, 27, 36, 27, 21, 33, 25, 33, 27, 23,
    ]).with_vulgate(&[
        17, 18, 17, 22, 14, 42, 22, 18, 31, 19, 23, 16, 23, 14, 19, 14, 19, 34, 11, 37, 20, 12, 21,
        27, 28, 23, 9, 27, 36, 27, 21, 33, 25, 33, 27, 23,
    ]),
    book(15, Old, "Ezra", &["Ezr"], &[11, 70, 13, 24, 17, 22, 28, 36, 15, 44]),
    book(16, Old, "Nehemiah", &["Neh"], &[
        11, 20, 38, 17, 19, 19, 72, 18, 37, 40, 36, 47, 31,
    ]).with_vulgate(&[
        11, 20, 32, 23, 19, 19, 72, 18, 37, 40, 36, 47, 31,
    ]),
    book(17, Old, "Tobit", &["Tb", "Tob"], &[
        22, 14, 17, 21, 23, 19, 17, 21, 6, 14, 19, 22, 18, 15,
    ]).with_vulgate(&[
        25, 23, 25, 23, 28, 22, 20, 24, 12, 13, 21, 22, 23, 17,
    ]),
    book(18, Old, "Judith", &["Jdt"], &[
        16, 28, 10, 15, 24, 21, 32, 36, 14, 23, 23, 20, 20, 19, 14, 25,
    ]),
    book(19, Old, "Esther", &["Est"], &[22, 23, 15, 17, 14, 14, 10, 17, 32, 3]).with_vulgate(&[
        22, 23, 15, 17, 14, 14, 10, 17, 32, 13, 12, 6, 18, 19, 19, 24,
    ]),
    book(20, Old, "1 Maccabees", &["1 Mc", "1 Macc"], &[
        64, 70, 60, 61, 68, 63, 50, 32, 73, 89, 74, 53, 53, 49, 41, 24,
    ]),
    book(21, Old, "2 Maccabees", &["2 Mc", "2 Macc"], &[
        36, 32, 40, 50, 27, 31, 42, 36, 29, 38, 38, 45, 26, 46, 39,
    ]),
    book(22, Old, "Job", &["Jb"], &[
        22, 13, 26, 21, 27, 30, 21, 22, 35, 22, 20, 25, 28, 22, 35, 22, 16, 21, 29, 29, 34, 30,
        17, 25, 6, 14, 23, 28, 25, 31, 40, 22, 33, 37, 16, 33, 24, 41, 30, 32, 26, 17,
    ]),
    book(23, Old, "Psalms", &["Ps", "Pss", "Psalm"], &[
        6, 12, 9, 9, 13, 11, 18, 10, 21, 18, 7, 9, 6, 7, 5, 11, 15, 51, 15, 10, 14, 32, 6, 10, 22,
        12, 14, 9, 11, 13, 25, 11, 22, 23, 28, 13, 40, 23, 14, 18, 14, 12, 5, 27, 18, 12, 10, 15,
        21, 23, 21, 11, 7, 9, 24, 14, 12, 12, 18, 14, 9, 13, 12, 11, 14, 20, 8, 36, 37, 6, 24, 20,
        28, 23, 11, 13, 21, 72, 13, 20, 17, 8, 19, 13, 14, 17, 7, 19, 53, 17, 16, 16, 5, 23, 11,
        13, 12, 9, 9, 5, 8, 29, 22, 35, 45, 48, 43, 14, 31, 7, 10, 10, 9, 8, 18, 19, 2, 29, 176, 7,
        8, 9, 4, 8, 5, 6, 5, 6, 8, 8, 3, 18, 3, 3, 21, 26, 9, 8, 24, 14, 10, 8, 12, 15, 21, 10, 20,
        14, 9, 6,
    ]).with_vulgate(&[
        6, 12, 9, 9, 13, 11, 18, 10, 39, 7, 9, 6, 7, 5, 11, 15, 51, 15, 10, 14, 32, 6, 10, 22, 12,
        14, 9, 11, 13, 25, 11, 22, 23, 28, 13, 40, 23, 14, 18, 14, 12, 5, 27, 18, 12, 10, 15, 21,
        23, 21, 11, 7, 9, 24, 14, 12, 12, 18, 14, 9, 13, 12, 11, 14, 20, 8, 36, 37, 6, 24, 20, 28,
        23, 11, 13, 21, 72, 13, 20, 17, 8, 19, 13, 14, 17, 7, 19, 53, 17, 16, 16, 5, 23, 11, 13,
        12, 9, 9, 5, 8, 29, 22, 35, 45, 48, 43, 14, 31, 7, 10, 10, 9, 26, 9, 10, 2, 29, 176, 7, 8,
        9, 4, 8, 5, 6, 5, 6, 8, 8, 3, 18, 3, 3, 21, 26, 9, 8, 24, 14, 10, 8, 12, 15, 21, 10, 11, 9,
        14, 9, 6,
    ]),
    book(24, Old, "Proverbs", &["Prv", "Prov"], &[
        33, 22, 35, 27, 23, 35, 27, 36, 18, 32, 31, 28, 25, 35, 33, 33, 28, 24, 29, 30, 31, 29,
        35, 34, 28, 28, 27, 28, 27, 33, 31,
    ]),
    book(25, Old, "Ecclesiastes", &["Eccl", "Qoheleth"], &[
        18, 26, 22, 17, 19, 12, 29, 17, 18, 20, 10, 14,
    ]),
    book(26, Old, "Song of Songs", &["Song", "Sg", "Canticle of Canticles"], &[
        17, 17, 11, 16, 16, 12, 14, 14,
    ]),
    book(27, Old, "Wisdom", &["Wis"], &[
        16, 24, 19, 20, 23, 25, 30, 21, 18, 21, 26, 27, 19, 31, 19, 29, 21, 25, 22,
    ]),
    book(28, Old, "Sirach", &["Sir", "Ecclesiasticus"], &[
        30, 18, 31, 31, 15, 37, 36, 19, 18, 31, 34, 18, 26, 27, 20, 30, 32, 33, 30, 31, 28, 27,
        27, 34, 26, 29, 30, 26, 28, 25, 31, 24, 33, 31, 26, 31, 31, 34, 35, 30, 24, 25, 33, 23,
        26, 20, 25, 25, 16, 29, 30,
    ]).with_vulgate(&[
        40, 23, 34, 36, 18, 37, 40, 22, 25, 34, 36, 19, 32, 27, 22, 31, 31, 33, 28, 33, 31, 33, 38,
        47, 36, 29, 33, 30, 35, 27, 42, 28, 33, 31, 26, 28, 34, 39, 41, 32, 28, 26, 37, 27, 31, 23,
        31, 28, 19, 31, 38,
    ]),
    book(29, Old, "Isaiah", &["Is", "Isa"], &[
        31, 22, 26, 6, 30, 13, 25, 23, 20, 34, 16, 6, 22, 32, 9, 14, 14, 7, 25, 6, 17, 25, 18, 23,
        12, 21, 13, 29, 24, 33, 9, 20, 24, 17, 10, 22, 38, 22, 8, 31, 29, 25, 28, 28, 25, 13, 15,
        22, 26, 11, 23, 15, 12, 17, 13, 12, 21, 14, 21, 22, 11, 12, 19, 11, 25, 24,
    ]).with_vulgate(&[
        31, 22, 26, 6, 30, 13, 25, 22, 21, 34, 16, 6, 22, 32, 9, 14, 14, 7, 25, 6, 17, 25, 18, 23,
        12, 21, 13, 29, 24, 33, 9, 20, 24, 17, 10, 22, 38, 22, 8, 31, 29, 25, 28, 28, 25, 13, 15,
        22, 26, 11, 23, 15, 12, 17, 13, 12, 21, 14, 21, 22, 11, 12, 19, 12, 25, 24,
    ]),
    book(30, Old, "Jeremiah", &["Jer"], &[
        19, 37, 25, 31, 31, 30, 34, 23, 25, 25, 23, 17, 27, 22, 21, 21, 27, 23, 15, 18, 14, 30,
        40, 10, 38, 24, 22, 17, 32, 24, 40, 44, 26, 22, 19, 32, 21, 28, 18, 16, 18, 22, 13, 30, 5,
        28, 7, 47, 39, 46, 64, 34,
    ]).with_vulgate(&[
        19, 37, 25, 31, 31, 30, 34, 22, 26, 25, 23, 17, 27, 22, 21, 21, 27, 23, 15, 18, 14, 30, 40,
        10, 38, 24, 22, 17, 32, 24, 40, 44, 26, 22, 19, 32, 21, 28, 18, 16, 18, 22, 13, 30, 5, 28,
        7, 47, 39, 46, 64, 34,
    ]),
    book(31, Old, "Lamentations", &["Lam"], &[22, 22, 66, 22, 22]),
    book(32, Old, "Baruch", &["Bar"], &[22, 35, 38, 37, 9, 72]),
    book(33, Old, "Ezekiel", &["Ez", "Ezek"], &[
        28, 10, 27, 17, 17, 14, 27, 18, 11, 22, 25, 28, 23, 23, 8, 63, 24, 32, 14, 44, 37, 31, 49,
        27, 17, 21, 36, 26, 21, 26, 18, 32, 33, 31, 15, 38, 28, 23, 29, 49, 26, 20, 27, 31, 25, 24,
        23, 35,
    ]).with_vulgate(&[
        28, 10, 27, 17, 17, 14, 27, 18, 11, 22, 25, 28, 23, 23, 8, 63, 24, 32, 14, 49, 32, 31, 49,
        27, 17, 21, 36, 26, 21, 26, 18, 32, 33, 31, 15, 38, 28, 23, 29, 49, 26, 20, 27, 31, 25, 24,
        23, 35,
    ]),
    book(34, Old, "Daniel", &["Dn", "Dan"], &[
        21, 49, 100, 34, 30, 29, 28, 27, 27, 21, 45, 13, 64, 42,
    ]).with_vulgate(&[
        21, 49, 100, 34, 31, 28, 28, 27, 27, 21, 45, 13, 64, 42,
    ]),
    book(35, Old, "Hosea", &["Hos"], &[
        9, 25, 5, 19, 15, 11, 16, 14, 17, 15, 11, 15, 15, 10,
    ]).with_vulgate(&[
        11, 23, 5, 19, 15, 11, 16, 14, 17, 15, 12, 14, 16, 9,
    ]),
    book(36, Old, "Joel", &["Jl"], &[20, 27, 5, 21]).with_vulgate(&[20, 32, 21]),
    book(37, Old, "Amos", &["Am"], &[15, 16, 15, 13, 27, 14, 17, 14, 15]),
    book(38, Old, "Obadiah", &["Ob", "Obad"], &[21]),
    book(39, Old, "Jonah", &["Jon"], &[16, 11, 10, 11]),
    book(40, Old, "Micah", &["Mi", "Mic"], &[16, 13, 12, 14, 14, 16, 20]).with_vulgate(&[
        16, 13, 12, 13, 15, 16, 20,
    ]),
    book(41, Old, "Nahum", &["Na", "Nah"], &[14, 14, 19]).with_vulgate(&[15, 13, 19]),
    book(42, Old, "Habakkuk", &["Hb", "Hab"], &[17, 20, 19]),
    book(43, Old, "Zephaniah", &["Zep", "Zeph"], &[18, 15, 20]),
    book(44, Old, "Haggai", &["Hg", "Hag"], &[15, 23]),
    book(45, Old, "Zechariah", &["Zec", "Zech"], &[
        17, 17, 10, 14, 11, 15, 14, 23, 17, 12, 17, 14, 9, 21,
    ]).with_vulgate(&[
        21, 13, 10, 14, 11, 15, 14, 23, 17, 12, 17, 14, 9, 21,
    ]),
    book(46, Old, "Malachi", &["Mal"], &[14, 17, 24]).with_vulgate(&[14, 17, 18, 6]),
    book(47, New, "Matthew", &["Mt", "Matt"], &[
        25, 23, 17, 25, 48, 34, 29, 34, 38, 42, 30, 50, 58, 36, 39, 28, 27, 35, 30, 34, 46, 46, 39,
        51, 46, 75, 66, 20,
    ]),
    book(48, New, "Mark", &["Mk"], &[
        45, 28, 35, 41, 43, 56, 37, 38, 50, 52, 33, 44, 37, 72, 47, 20,
    ]),
    book(49, New, "Luke", &["Lk"], &[
        80, 52, 38, 44, 39, 49, 50, 56, 62, 42, 54, 59, 35, 35, 32, 31, 37, 43, 48, 47, 38, 71, 56,
        53,
    ]),
    book(50, New, "John", &["Jn"], &[
        51, 25, 36, 54, 47, 71, 53, 59, 41, 42, 57, 50, 38, 31, 27, 33, 26, 40, 42, 31, 25,
    ]),
    book(51, New, "Acts", &["Acts of the Apostles"], &[
        26, 47, 43, 37, 42, 15, 60, 40, 43, 48, 30, 25, 52, 28, 41, 40, 34, 28, 40, 38, 40, 30,
        35, 27, 27, 32, 44, 31,
    ]),
    book(52, New, "Romans", &["Rom"], &[
        32, 29, 31, 25, 21, 23, 25, 39, 33, 21, 36, 21, 14, 23, 33, 27,
    ]),
    book(53, New, "1 Corinthians", &["1 Cor"], &[
        31, 16, 23, 21, 13, 20, 40, 13, 27, 33, 34, 31, 13, 40, 58, 24,
    ]),
    book(54, New, "2 Corinthians", &["2 Cor"], &[
        24, 17, 18, 18, 21, 18, 16, 24, 15, 18, 33, 21, 13,
    ]),
    book(55, New, "Galatians", &["Gal"], &[24, 21, 29, 31, 26, 18]),
    book(56, New, "Ephesians", &["Eph"], &[23, 22, 21, 32, 33, 24]),
    book(57, New, "Philippians", &["Phil"], &[30, 30, 21, 23]),
    book(58, New, "Colossians", &["Col"], &[29, 23, 25, 18]),
    book(59, New, "1 Thessalonians", &["1 Thes", "1 Thess"], &[10, 20, 13, 18, 28]),
    book(60, New, "2 Thessalonians", &["2 Thes", "2 Thess"], &[12, 17, 18]),
    book(61, New, "1 Timothy", &["1 Tm", "1 Tim"], &[20, 15, 16, 16, 25, 21]),
    book(62, New, "2 Timothy", &["2 Tm", "2 Tim"], &[18, 26, 17, 22]),
    book(63, New, "Titus", &["Ti", "Tit"], &[16, 15, 15]),
    book(64, New, "Philemon", &["Phlm"], &[25]),
    book(65, New, "Hebrews", &["Heb"], &[
        14, 18, 19, 16, 14, 20, 28, 13, 28, 39, 40, 29, 25,
    ]),
    book(66, New, "James", &["Jas"], &[27, 26, 18, 17, 20]),
    book(67, New, "1 Peter", &["1 Pt", "1 Pet"], &[25, 25, 22, 19, 14]),
    book(68, New, "2 Peter", &["2 Pt", "2 Pet"], &[21, 22, 18]),
    book(69, New, "1 John", &["1 Jn"], &[10, 29, 24, 21, 21]),
    book(70, New, "2 John", &["2 Jn"], &[13]),
    book(71, New, "3 John", &["3 Jn"], &[15]),
    book(72, New, "Jude", &["Jude"], &[25]),
    book(73, New, "Revelation", &["Rv", "Rev", "Apocalypse"], &[
        20, 29, 22, 11, 14, 17, 17, 13, 21, 11, 19, 18, 18, 20, 8, 21, 18, 24, 21, 15, 27, 21,
    ]),
];
