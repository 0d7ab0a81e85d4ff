use lectio_core::citation::{self, BookHint};
use lectio_core::{Citation, CitationError, Lectionary, books, parse_citation};

#[test]
fn lectionary_citations_reparse_from_their_canonical_form() {
    let lectionary = Lectionary::embedded().unwrap();
    let mut seen = 0;
    for reading in lectionary
        .entries()
        .iter()
        .flat_map(|entry| &entry.masses)
        .flat_map(|mass| &mass.readings)
    {
        let parsed = reading.citation().unwrap();
        let canonical = citation::format(&parsed);
        assert_eq!(
            parse_citation(&canonical).unwrap(),
            parsed,
            "{} rendered as {canonical}",
            reading.citation
        );
        seen += 1;
    }
    assert!(seen > 300);
}

#[test]
fn citations_parse_from_str() {
    let citation: Citation = "1 Cor 12:31-13:13".parse().unwrap();
    assert_eq!(citation.book.name, "1 Corinthians");
    assert_eq!(citation.verse_total(), 14);
    assert_eq!(citation.to_string(), "1 Cor 12:31-13:13");

    let whole: Citation = "Obadiah".parse().unwrap();
    assert!(whole.is_whole_book());
    assert_eq!(whole.verse_total(), 21);
}

#[test]
fn every_book_has_a_resolvable_abbreviation() {
    for book in books::all_books() {
        assert_eq!(books::resolve(book.abbreviation()).unwrap().name, book.name);
        assert_eq!(books::resolve(book.name).unwrap().name, book.name);
    }
    assert_eq!(books::old_testament().count(), 46);
    assert_eq!(books::new_testament().count(), 27);
}

#[test]
fn unknown_books_carry_a_hint() {
    match parse_citation("Revelations 1:1") {
        Err(CitationError::UnknownBook { hint, .. }) => {
            assert!(matches!(hint, BookHint::DidYouMean(_) | BookHint::None));
        }
        Ok(citation) => assert_eq!(citation.book.name, "Revelation"),
        Err(other) => panic!("unexpected error {other}"),
    }
    assert!(matches!(
        parse_citation("Gn 51:1"),
        Err(CitationError::InvalidChapter { chapter: 51, chapters: 50, .. })
    ));
}
