//! Verse text lookup.
//!
//! The resolver and lectionary never touch the text itself; callers fetch it through
//! a [`TextStore`] once a citation is known. A store is numbered in one
//! [`Versification`], normally the Clementine Vulgate's, and only serves citations
//! written in that numbering.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::books::{self, Book, Versification};
use crate::citation::{Citation, VerseAddr};

#[derive(Debug, Error)]
pub enum TextStoreError {
    #[error("{book} {chapter}:{verse} is not in the text store")]
    VerseNotFound {
        book: &'static str,
        chapter: u16,
        verse: u16,
    },
    #[error("text store directory {} does not exist", .0.display())]
    MissingDirectory(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{origin}:{line}: expected 'chapter:verse text'")]
    MalformedLine { origin: String, line: usize },
    #[error("{citation} is in {found} numbering but the text store uses {expected} numbering")]
    VersificationMismatch {
        citation: String,
        expected: Versification,
        found: Versification,
    },
}

/// Read access to verse text, keyed by book, chapter and verse.
pub trait TextStore: Send + Sync {
    fn verse_text(&self, book: &Book, chapter: u16, verse: u16) -> Result<&str, TextStoreError>;

    /// Numbering of the stored chapters and verses.
    fn versification(&self) -> Versification {
        Versification::Vulgate
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verse {
    pub chapter: u16,
    pub verse: u16,
    pub text: String,
}

/// Fetch every verse of `citation` in order, failing on the first missing verse.
pub fn fetch<S>(store: &S, citation: &Citation) -> Result<Vec<Verse>, TextStoreError>
where
    S: TextStore + ?Sized,
{
    if citation.versification != store.versification() {
        return Err(TextStoreError::VersificationMismatch {
            citation: citation.to_string(),
            expected: store.versification(),
            found: citation.versification,
        });
    }
    citation
        .verses()
        .map(|addr| {
            store
                .verse_text(citation.book, addr.chapter, addr.verse)
                .map(|text| Verse {
                    chapter: addr.chapter,
                    verse: addr.verse,
                    text: text.to_string(),
                })
        })
        .collect()
}

/// A text store held entirely in memory after a one-time load.
#[derive(Debug)]
pub struct MemoryTextStore {
    books: HashMap<u8, BTreeMap<VerseAddr, String>>,
    versification: Versification,
}

impl Default for MemoryTextStore {
    fn default() -> Self {
        Self::with_versification(Versification::Vulgate)
    }
}

impl MemoryTextStore {
    /// An empty store in Vulgate numbering.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_versification(versification: Versification) -> Self {
        Self {
            books: HashMap::new(),
            versification,
        }
    }

    /// File name a book is stored under, e.g. `1samuel.txt`.
    pub fn book_file_name(book: &Book) -> String {
        format!("{}.txt", book.normalized_name())
    }

    /// Load every book file present in `dir`. Books without a file are skipped.
    pub fn load_dir(dir: &Path) -> Result<Self, TextStoreError> {
        if !dir.is_dir() {
            return Err(TextStoreError::MissingDirectory(dir.to_path_buf()));
        }
        let mut store = Self::new();
        for book in books::all_books() {
            let path = dir.join(Self::book_file_name(book));
            if !path.exists() {
                debug!(book = book.name, path = %path.display(), "No text file for book");
                continue;
            }
            let raw = fs::read_to_string(&path).map_err(|source| TextStoreError::Io {
                path: path.clone(),
                source,
            })?;
            store.load_book_str(book, &raw, &path.display().to_string())?;
        }
        info!(
            dir = %dir.display(),
            books = store.books.len(),
            verses = store.len(),
            "Loaded text store"
        );
        Ok(store)
    }

    /// Add one book from `chapter:verse text` lines, returning the number of verses read.
    pub fn load_book_str(
        &mut self,
        book: &Book,
        source: &str,
        origin: &str,
    ) -> Result<usize, TextStoreError> {
        let verses = self.books.entry(book.ordinal).or_default();
        let mut count = 0;
        for (index, line) in source.lines().enumerate() {
            let line = line.trim_start_matches('\u{feff}').trim();
            if line.is_empty() {
                continue;
            }
            let malformed = || TextStoreError::MalformedLine {
                origin: origin.to_string(),
                line: index + 1,
            };
            let (addr, text) = line.split_once(char::is_whitespace).ok_or_else(malformed)?;
            let (chapter, verse) = addr.split_once(':').ok_or_else(malformed)?;
            let chapter = chapter.parse::<u16>().map_err(|_| malformed())?;
            let verse = verse.parse::<u16>().map_err(|_| malformed())?;
            verses.insert(VerseAddr::new(chapter, verse), text.trim().to_string());
            count += 1;
        }
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.books.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TextStore for MemoryTextStore {
    fn versification(&self) -> Versification {
        self.versification
    }

    fn verse_text(&self, book: &Book, chapter: u16, verse: u16) -> Result<&str, TextStoreError> {
        self.books
            .get(&book.ordinal)
            .and_then(|verses| verses.get(&VerseAddr::new(chapter, verse)))
            .map(String::as_str)
            .ok_or(TextStoreError::VerseNotFound {
                book: book.name,
                chapter,
                verse,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citation::{parse_citation, parse_citation_in};

    fn vulgate(text: &str) -> Citation {
        parse_citation_in(text, Versification::Vulgate).unwrap()
    }

    const EXODUS_20: &str = "\
20:1 Locutusque est Dominus cunctos sermones hos:
20:2 Ego sum Dominus Deus tuus, qui eduxi te de terra Ægypti, de domo servitutis.
20:3 Non habebis deos alienos coram me.
";

    #[test]
    fn loads_lines_and_fetches_citations() {
        let exodus = books::resolve("Ex").unwrap();
        let mut store = MemoryTextStore::new();
        assert_eq!(store.load_book_str(exodus, EXODUS_20, "exodus.txt").unwrap(), 3);

        let text = store.verse_text(exodus, 20, 1).unwrap();
        assert!(text.starts_with("Locutusque est Dominus"));

        let verses = fetch(&store, &vulgate("Ex 20:2-3")).unwrap();
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[1].text, "Non habebis deos alienos coram me.");
    }

    #[test]
    fn missing_verse_is_reported() {
        let exodus = books::resolve("Ex").unwrap();
        let mut store = MemoryTextStore::new();
        store.load_book_str(exodus, EXODUS_20, "exodus.txt").unwrap();
        let err = fetch(&store, &vulgate("Ex 20:1-5")).unwrap_err();
        assert!(matches!(
            err,
            TextStoreError::VerseNotFound {
                chapter: 20,
                verse: 4,
                ..
            }
        ));
    }

    #[test]
    fn malachi_is_read_in_vulgate_numbering() {
        let malachi = books::resolve("Mal").unwrap();
        let mut store = MemoryTextStore::new();
        store
            .load_book_str(
                malachi,
                "3:18 Et convertemini, et videbitis quid sit inter justum et impium.\n\
                 4:1 Ecce enim dies veniet succensa quasi caminus.\n\
                 4:2 Et orietur vobis timentibus nomen meum sol justitiae.\n",
                "malachi.txt",
            )
            .unwrap();

        let verses = fetch(&store, &vulgate("Mal 4:1-2a")).unwrap();
        assert_eq!(verses.len(), 2);
        assert!(verses[0].text.starts_with("Ecce enim dies veniet"));

        let err = fetch(&store, &parse_citation("Mal 3:18").unwrap()).unwrap_err();
        assert!(matches!(
            err,
            TextStoreError::VersificationMismatch {
                expected: Versification::Vulgate,
                found: Versification::Lectionary,
                ..
            }
        ));

        let mut lectionary_store = MemoryTextStore::with_versification(Versification::Lectionary);
        lectionary_store
            .load_book_str(malachi, "3:19 Lo, the day is coming.\n", "malachi.txt")
            .unwrap();
        let verses = fetch(&lectionary_store, &parse_citation("Mal 3:19").unwrap()).unwrap();
        assert_eq!(verses[0].text, "Lo, the day is coming.");
    }

    #[test]
    fn malformed_lines_are_rejected() {
        let genesis = books::resolve("Gn").unwrap();
        let mut store = MemoryTextStore::new();
        let err = store
            .load_book_str(genesis, "1:1 In principio\nnot a verse\n", "genesis.txt")
            .unwrap_err();
        assert!(matches!(err, TextStoreError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn loads_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let exodus = books::resolve("Ex").unwrap();
        fs::write(dir.path().join(MemoryTextStore::book_file_name(exodus)), EXODUS_20).unwrap();
        let store = MemoryTextStore::load_dir(dir.path()).unwrap();
        assert_eq!(store.len(), 3);
        assert!(matches!(
            MemoryTextStore::load_dir(&dir.path().join("missing")),
            Err(TextStoreError::MissingDirectory(_))
        ));
    }
}
