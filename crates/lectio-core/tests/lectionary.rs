use std::fs;

use chrono::{Datelike, NaiveDate, Weekday};
use lectio_core::lectionary::LectionarySource;
use lectio_core::{
    CalendarYear, CelebrationQuery, Lectionary, LectionaryError, MemoryTextStore, Rank, SundayCycle,
    TextStore, WeekdayCycle, books, fetch, parse_citation, resolve,
};
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn embedded_lectionary_is_well_formed() {
    let lectionary = Lectionary::embedded().expect("embedded lectionary parses");
    assert_eq!(lectionary.source(), &LectionarySource::Embedded);
    let checked = lectionary.validate().expect("every citation parses");
    assert!(checked > 500, "only {checked} citations checked");
    assert!(lectionary.entry("christmas").is_some());
    assert!(lectionary.entry("no-such-day").is_none());
}

#[test]
fn easter_vigil_year_a_has_nine_readings() {
    let lectionary = Lectionary::embedded().unwrap();
    let query = CelebrationQuery::parse("a/easter-vigil").unwrap();
    let entry = lectionary.lookup(&query).expect("one entry");
    let readings =
        lectio_core::lectionary::readings_for_entry(entry, SundayCycle::A, WeekdayCycle::I)
            .unwrap();
    assert_eq!(readings.len(), 9);
    assert_eq!(readings[0].to_string(), "Gn 1:1-2:2");
    assert_eq!(readings[8].to_string(), "Mt 28:1-10");
}

#[test]
fn ambiguous_queries_list_their_matches() {
    let lectionary = Lectionary::embedded().unwrap();
    let query = CelebrationQuery::parse("advent/week").unwrap();
    match lectionary.lookup(&query) {
        Err(LectionaryError::NonSingularResults { matches, .. }) => {
            assert_eq!(matches.len(), 4);
            assert!(matches.contains(&"advent/week-1/sunday".to_string()));
        }
        other => panic!("expected several matches, got {other:?}"),
    }
    assert!(matches!(
        CelebrationQuery::parse("a/"),
        Err(LectionaryError::MalformedQuery(_))
    ));
}

#[test]
fn readings_follow_the_resolved_day() {
    let lectionary = Lectionary::embedded().unwrap();

    let pentecost = resolve(date(2017, 6, 4)).unwrap();
    assert_eq!(pentecost.celebration.id, "pentecost");
    assert!(!lectionary.readings_for(&pentecost).unwrap().is_empty());

    let first_advent = resolve(date(2017, 12, 3)).unwrap();
    let readings = lectionary.readings_for(&first_advent).unwrap();
    let rendered: Vec<String> = readings.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec!["Is 63:16b-17,19b,64:2b-7", "1 Cor 1:3-9", "Mk 13:33-37"]
            .into_iter()
            .map(|text| parse_citation(text).unwrap().to_string())
            .collect::<Vec<_>>()
    );
}

#[test]
fn days_without_content_report_the_cycle() {
    let lectionary = Lectionary::embedded().unwrap();
    // Weekdays of the 20th week in Ordinary Time are not in the bundled content.
    let weekday = resolve(date(2017, 8, 23)).unwrap();
    match lectionary.readings_for(&weekday) {
        Err(LectionaryError::NoReadingsDefined {
            celebration,
            sunday_cycle,
            weekday_cycle,
        }) => {
            assert_eq!(celebration, weekday.celebration.id);
            assert_eq!(sunday_cycle, SundayCycle::A);
            assert_eq!(weekday_cycle, WeekdayCycle::I);
        }
        other => panic!("expected missing readings, got {other:?}"),
    }
}

#[test]
fn every_sunday_and_solemnity_has_readings() {
    let lectionary = Lectionary::embedded().unwrap();
    let mut sundays = 0;
    for y in 2017..=2019 {
        let year = CalendarYear::new(y).unwrap();
        for day in year.days() {
            let is_sunday = day.date.weekday() == Weekday::Sun;
            if !is_sunday && day.rank() < Rank::Feast {
                continue;
            }
            let readings = lectionary
                .readings_for(&day)
                .unwrap_or_else(|err| panic!("{} ({}): {err}", day.date, day.celebration.id));
            assert!(readings.len() >= 2, "{} has {} readings", day.date, readings.len());
            if is_sunday {
                sundays += 1;
                assert!(readings.len() >= 3, "{} ({})", day.date, day.celebration.id);
            }
        }
    }
    assert_eq!(sundays, 157);
}

#[test]
fn resolution_serializes_to_json() {
    let resolution = resolve(date(2017, 3, 20)).unwrap();
    let value = serde_json::to_value(&resolution).unwrap();
    assert_eq!(value["date"], "2017-03-20");
    assert_eq!(value["celebration"]["id"], "joseph");
    assert_eq!(value["celebration"]["transferred_from"], "2017-03-19");
    assert_eq!(value["sunday_cycle"], "A");
}

#[test]
fn readings_can_be_read_from_a_text_directory() {
    let dir = tempdir().expect("tempdir");
    let luke = books::resolve("Lk").unwrap();
    let lines: String = (15..=20)
        .map(|verse| format!("2:{verse} Luke two {verse}\n"))
        .collect();
    fs::write(dir.path().join(MemoryTextStore::book_file_name(luke)), lines).unwrap();

    let store = MemoryTextStore::load_dir(dir.path()).expect("store loads");
    assert_eq!(store.len(), 6);
    assert_eq!(store.verse_text(luke, 2, 20).unwrap(), "Luke two 20");

    let lectionary = Lectionary::embedded().unwrap();
    let christmas = resolve(date(2017, 12, 25)).unwrap();
    let dawn = lectionary
        .masses_for(&christmas)
        .unwrap()
        .into_iter()
        .find(|mass| mass.name == "Mass at Dawn")
        .expect("dawn mass");
    let gospel = &dawn.readings[2].text_citation;
    let verses = fetch(&store, gospel).unwrap();
    assert_eq!(verses.len(), 6);
    assert_eq!(verses[0].text, "Luke two 15");
}

#[test]
fn malachi_is_fetched_in_vulgate_numbering() {
    let dir = tempdir().expect("tempdir");
    let malachi = books::resolve("Mal").unwrap();
    fs::write(
        dir.path().join(MemoryTextStore::book_file_name(malachi)),
        "3:18 Et convertemini, et videbitis quid sit inter justum et impium\n\
         4:1 Ecce enim dies veniet succensa quasi caminus\n\
         4:2 Et orietur vobis timentibus nomen meum sol justitiae\n",
    )
    .unwrap();
    let store = MemoryTextStore::load_dir(dir.path()).unwrap();

    let lectionary = Lectionary::embedded().unwrap();
    let sunday = resolve(date(2019, 11, 17)).unwrap();
    assert_eq!(sunday.celebration.id, "ordinary/week-33/sunday");
    assert_eq!(sunday.sunday_cycle, SundayCycle::C);

    let masses = lectionary.masses_for(&sunday).unwrap();
    let first = &masses[0].readings[0];
    assert_eq!(first.citation.to_string(), "Mal 3:19-20");
    assert_eq!(first.text_citation.to_string(), "Mal 4:1-2");

    let verses = fetch(&store, &first.text_citation).unwrap();
    assert_eq!(verses.len(), 2);
    assert_eq!((verses[0].chapter, verses[0].verse), (4, 1));
    assert!(verses[0].text.starts_with("Ecce enim dies veniet"));
    assert!(fetch(&store, &first.citation).is_err());
}

#[test]
fn joel_alt_points_into_the_vulgate_second_chapter() {
    let joel = books::resolve("Jl").unwrap();
    let mut store = MemoryTextStore::new();
    let lines: String = (28..=32)
        .map(|verse| format!("2:{verse} Joel two {verse}\n"))
        .collect();
    store.load_book_str(joel, &lines, "joel.txt").unwrap();

    let raw = r#"
schema_version = 1
[[celebration]]
id = "pentecost-vigil"
name = "Vigil of Pentecost"
[[celebration.mass]]
name = "Vigil Mass"
readings = [{ citation = "Jl 3:1-5", alt = "Jl 2:28-32" }]
"#;
    let lectionary = Lectionary::from_toml_str(raw).unwrap();
    let entry = lectionary.entry("pentecost-vigil").unwrap();
    let reading = &entry.masses[0].readings[0];
    let verses = fetch(&store, &reading.text_citation().unwrap()).unwrap();
    assert_eq!(verses.len(), 5);
    assert_eq!(verses[4].text, "Joel two 32");
}
