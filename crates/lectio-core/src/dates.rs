//! Date arithmetic for the liturgical year: Easter and Sunday stepping.

use std::ops::RangeInclusive;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::calendar::CalendarError;

/// Years the calendar engine accepts. The Gregorian computus holds from 1583 on.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1583..=4099;

pub fn check_year(year: i32) -> Result<(), CalendarError> {
    if SUPPORTED_YEARS.contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::DateOutOfRange { year })
    }
}

pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::DateOutOfRange { year })
}

/// Gregorian Easter Sunday.
pub fn easter_sunday(year: i32) -> Result<NaiveDate, CalendarError> {
    check_year(year)?;
    let (month, day) = easter_month_day(year);
    ymd(year, month, day)
}

// Integer computus as published by the US Naval Observatory.
fn easter_month_day(y: i32) -> (u32, u32) {
    let c = y / 100;
    let n = y - 19 * (y / 19);
    let k = (c - 17) / 25;
    let mut i = c - c / 4 - (c - k) / 3 + 19 * n + 15;
    i -= 30 * (i / 30);
    i -= (i / 28) * (1 - (i / 28) * (29 / (i + 1)) * ((21 - n) / 11));
    let mut j = y + y / 4 + i + 2 - c + c / 4;
    j -= 7 * (j / 7);
    let l = i - j;
    let month = 3 + (l + 40) / 44;
    let day = l + 28 - 31 * (month / 4);
    (month as u32, day as u32)
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

pub fn weekday_of(date: NaiveDate) -> Weekday {
    date.weekday()
}

pub fn is_sunday(date: NaiveDate) -> bool {
    weekday_of(date) == Weekday::Sun
}

/// The first Sunday strictly after `date`.
pub fn sunday_after(date: NaiveDate) -> NaiveDate {
    let offset = 7 - i64::from(date.weekday().num_days_from_sunday());
    add_days(date, offset)
}

/// The last Sunday strictly before `date`.
pub fn sunday_before(date: NaiveDate) -> NaiveDate {
    let offset = match date.weekday().num_days_from_sunday() {
        0 => 7,
        days => i64::from(days),
    };
    add_days(date, -offset)
}

pub fn sunday_on_or_before(date: NaiveDate) -> NaiveDate {
    add_days(date, -i64::from(date.weekday().num_days_from_sunday()))
}

/// The `count`-th Sunday after (`count > 0`) or before (`count < 0`) `date`,
/// never counting `date` itself. A count of zero names no Sunday.
pub fn nth_sunday_from(date: NaiveDate, count: i32) -> Option<NaiveDate> {
    match count {
        0 => None,
        count if count > 0 => Some(add_days(
            sunday_after(date),
            7 * i64::from(count - 1),
        )),
        count => Some(add_days(
            sunday_before(date),
            7 * i64::from(count + 1),
        )),
    }
}

/// Fourth Sunday before Christmas; the liturgical year begins here.
pub fn first_sunday_of_advent(year: i32) -> Result<NaiveDate, CalendarError> {
    let christmas = ymd(year, 12, 25)?;
    Ok(add_days(sunday_before(christmas), -21))
}
