//! The liturgical rule table: every named celebration, its date rule and its
//! precedence, plus the season boundaries of a civil year.
//!
//! Precedence classes follow the Table of Liturgical Days (1 = Paschal Triduum,
//! 13 = ordinary weekdays). Inside a class the `order` number decides, so the
//! resolver never has to break a tie on its own. The content is the General Roman
//! Calendar with the proper observances of the dioceses of the United States:
//! Epiphany and Corpus Christi are kept on Sunday, the Ascension on Thursday.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::calendar::CalendarError;
use crate::dates::{self, add_days, sunday_after, ymd};

/// Descriptive rank of a celebration. Ordering is by dignity, lowest first.
///
/// The resolver never compares ranks; it compares [`Precedence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Weekday,
    Memorial,
    Feast,
    Sunday,
    Solemnity,
    /// Holy Thursday, Good Friday and the Easter Vigil.
    Triduum,
}

impl Rank {
    pub fn label(self) -> &'static str {
        match self {
            Rank::Weekday => "Weekday",
            Rank::Memorial => "Memorial",
            Rank::Feast => "Feast",
            Rank::Sunday => "Sunday",
            Rank::Solemnity => "Solemnity",
            Rank::Triduum => "Triduum",
        }
    }
}

/// Lower sorts first and wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Precedence {
    pub class: u8,
    pub order: u16,
}

/// Order given to implicit seasonal days: after every named entry of the same class.
pub const SEASONAL_ORDER: u16 = u16::MAX;

/// Highest class that still impedes a transferred solemnity.
const LAST_IMPEDING_CLASS: u8 = 8;

impl Precedence {
    pub const fn named(class: u8, order: u16) -> Self {
        Self { class, order }
    }

    pub const fn seasonal(class: u8) -> Self {
        Self {
            class,
            order: SEASONAL_ORDER,
        }
    }

    /// A day whose best celebration has this precedence can receive a transferred solemnity.
    pub fn is_free(self) -> bool {
        self.class > LAST_IMPEDING_CLASS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    Fixed { month: u32, day: u32 },
    /// Days from Easter Sunday.
    EasterOffset(i64),
    /// Days from the First Sunday of Advent.
    AdventOffset(i64),
    /// Sunday from January 2 to January 8.
    Epiphany,
    /// Sunday after Epiphany, or the Monday after when Epiphany is January 7 or 8.
    BaptismOfTheLord,
    /// Sunday within the octave of Christmas, else December 30.
    HolyFamily,
}

/// What happens when a celebration is outranked on its natural date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    Omit,
    NextFreeDay,
    PreviousFreeDay,
    /// In Holy Week or the Easter octave: the Saturday before Palm Sunday.
    NextFreeDayOrBeforePalmSunday,
    /// In Holy Week or the Easter octave: the Monday after the Second Sunday of Easter.
    NextFreeDayOrAfterEasterOctave,
}

#[derive(Debug)]
pub struct CelebrationRule {
    pub id: &'static str,
    pub name: &'static str,
    pub rank: Rank,
    pub precedence: Precedence,
    pub date: DateRule,
    pub transfer: Transfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Advent,
    Christmas,
    OrdinaryTime,
    Lent,
    Triduum,
    Easter,
}

impl Season {
    pub fn label(self) -> &'static str {
        match self {
            Season::Advent => "Advent",
            Season::Christmas => "Christmas Time",
            Season::OrdinaryTime => "Ordinary Time",
            Season::Lent => "Lent",
            Season::Triduum => "Paschal Triduum",
            Season::Easter => "Easter Time",
        }
    }
}

/// Key dates of one civil year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonBoundaries {
    pub year: i32,
    pub epiphany: NaiveDate,
    /// Baptism of the Lord; Christmas Time that began the previous December ends here.
    pub baptism: NaiveDate,
    pub ash_wednesday: NaiveDate,
    pub holy_thursday: NaiveDate,
    pub easter: NaiveDate,
    pub pentecost: NaiveDate,
    pub first_advent: NaiveDate,
    pub christmas: NaiveDate,
}

impl SeasonBoundaries {
    pub fn for_year(year: i32) -> Result<Self, CalendarError> {
        let easter = dates::easter_sunday(year)?;
        let epiphany = sunday_after(ymd(year, 1, 1)?);
        let baptism = if epiphany.day() >= 7 {
            add_days(epiphany, 1)
        } else {
            sunday_after(epiphany)
        };
        Ok(Self {
            year,
            epiphany,
            baptism,
            ash_wednesday: add_days(easter, -46),
            holy_thursday: add_days(easter, -3),
            easter,
            pentecost: add_days(easter, 49),
            first_advent: dates::first_sunday_of_advent(year)?,
            christmas: ymd(year, 12, 25)?,
        })
    }

    pub fn season_of(&self, date: NaiveDate) -> Season {
        if date <= self.baptism {
            Season::Christmas
        } else if date < self.ash_wednesday {
            Season::OrdinaryTime
        } else if date < self.holy_thursday {
            Season::Lent
        } else if date < self.easter {
            Season::Triduum
        } else if date <= self.pentecost {
            Season::Easter
        } else if date < self.first_advent {
            Season::OrdinaryTime
        } else if date < self.christmas {
            Season::Advent
        } else {
            Season::Christmas
        }
    }

    /// Holy Week (from Palm Sunday) through the Sunday closing the Easter octave.
    pub fn in_paschal_weeks(&self, date: NaiveDate) -> bool {
        date >= add_days(self.easter, -7) && date <= add_days(self.easter, 7)
    }

    pub fn date_of(&self, rule: DateRule) -> Result<NaiveDate, CalendarError> {
        let date = match rule {
            DateRule::Fixed { month, day } => ymd(self.year, month, day)?,
            DateRule::EasterOffset(days) => add_days(self.easter, days),
            DateRule::AdventOffset(days) => add_days(self.first_advent, days),
            DateRule::Epiphany => self.epiphany,
            DateRule::BaptismOfTheLord => self.baptism,
            DateRule::HolyFamily => {
                let sunday = sunday_after(self.christmas);
                if sunday.year() == self.year {
                    sunday
                } else {
                    ymd(self.year, 12, 30)?
                }
            }
        };
        Ok(date)
    }
}

pub fn fixed_celebrations() -> &'static [CelebrationRule] {
    FIXED
}

/// Easter-relative celebrations with their offset in days.
pub fn movable_celebration_rules() -> impl Iterator<Item = (i64, &'static CelebrationRule)> {
    MOVABLE.iter().filter_map(|rule| match rule.date {
        DateRule::EasterOffset(days) => Some((days, rule)),
        _ => None,
    })
}

/// Celebrations placed relative to Christmas, Epiphany or Advent.
pub fn christmas_cycle_rules() -> &'static [CelebrationRule] {
    CHRISTMAS_CYCLE
}

pub fn all_rules() -> impl Iterator<Item = &'static CelebrationRule> {
    MOVABLE
        .iter()
        .chain(christmas_cycle_rules())
        .chain(fixed_celebrations())
}

pub fn find_rule(id: &str) -> Option<&'static CelebrationRule> {
    all_rules().find(|rule| rule.id == id)
}

const fn rule(
    id: &'static str,
    name: &'static str,
    rank: Rank,
    class: u8,
    order: u16,
    date: DateRule,
    transfer: Transfer,
) -> CelebrationRule {
    CelebrationRule {
        id,
        name,
        rank,
        precedence: Precedence::named(class, order),
        date,
        transfer,
    }
}

const fn fixed(
    month: u32,
    day: u32,
    id: &'static str,
    name: &'static str,
    rank: Rank,
    class: u8,
    order: u16,
) -> CelebrationRule {
    rule(id, name, rank, class, order, DateRule::Fixed { month, day }, Transfer::Omit)
}

const fn memorial(month: u32, day: u32, id: &'static str, name: &'static str, order: u16) -> CelebrationRule {
    fixed(month, day, id, name, Rank::Memorial, 10, order)
}

/// Obligatory memorials of the proper calendar of the United States.
const fn proper_memorial(
    month: u32,
    day: u32,
    id: &'static str,
    name: &'static str,
    order: u16,
) -> CelebrationRule {
    fixed(month, day, id, name, Rank::Memorial, 11, order)
}

const fn feast(month: u32, day: u32, id: &'static str, name: &'static str, order: u16) -> CelebrationRule {
    fixed(month, day, id, name, Rank::Feast, 7, order)
}

use DateRule::{AdventOffset, EasterOffset};
use Rank::{Feast, Memorial, Solemnity, Sunday, Triduum, Weekday};
use Transfer::Omit;

static MOVABLE: &[CelebrationRule] = &[
    rule("holy-thursday", "Thursday of the Lord's Supper", Triduum, 1, 1, EasterOffset(-3), Omit),
    rule("good-friday", "Friday of the Passion of the Lord", Triduum, 1, 2, EasterOffset(-2), Omit),
    rule("easter-vigil", "Holy Saturday: the Easter Vigil in the Holy Night", Triduum, 1, 3, EasterOffset(-1), Omit),
    rule("easter-sunday", "Easter Sunday of the Resurrection of the Lord", Solemnity, 1, 4, EasterOffset(0), Omit),
    rule("ash-wednesday", "Ash Wednesday", Weekday, 2, 10, EasterOffset(-46), Omit),
    rule("palm-sunday", "Palm Sunday of the Passion of the Lord", Sunday, 2, 11, EasterOffset(-7), Omit),
    rule("ascension", "The Ascension of the Lord", Solemnity, 2, 12, EasterOffset(39), Omit),
    rule("pentecost", "Pentecost Sunday", Solemnity, 2, 13, EasterOffset(49), Omit),
    rule("trinity", "The Most Holy Trinity", Solemnity, 3, 20, EasterOffset(56), Omit),
    rule("corpus-christi", "The Most Holy Body and Blood of Christ", Solemnity, 3, 21, EasterOffset(63), Omit),
    rule("sacred-heart", "The Most Sacred Heart of Jesus", Solemnity, 3, 22, EasterOffset(68), Omit),
    rule("mary-mother-of-the-church", "The Blessed Virgin Mary, Mother of the Church", Memorial, 10, 200, EasterOffset(50), Omit),
    rule("immaculate-heart", "The Immaculate Heart of the Blessed Virgin Mary", Memorial, 10, 201, EasterOffset(69), Omit),
];

static CHRISTMAS_CYCLE: &[CelebrationRule] = &[
    rule("epiphany", "The Epiphany of the Lord", Solemnity, 2, 14, DateRule::Epiphany, Omit),
    rule("christ-the-king", "Our Lord Jesus Christ, King of the Universe", Solemnity, 3, 23, AdventOffset(-7), Omit),
    rule("holy-family", "The Holy Family of Jesus, Mary and Joseph", Feast, 5, 40, DateRule::HolyFamily, Omit),
    rule("baptism-of-the-lord", "The Baptism of the Lord", Feast, 5, 41, DateRule::BaptismOfTheLord, Omit),
];

static FIXED: &[CelebrationRule] = &[
    fixed(12, 25, "christmas", "The Nativity of the Lord", Solemnity, 2, 15),
    fixed(1, 1, "mary-mother-of-god", "Mary, the Holy Mother of God", Solemnity, 3, 24),
    rule("annunciation", "The Annunciation of the Lord", Solemnity, 3, 25, DateRule::Fixed { month: 3, day: 25 }, Transfer::NextFreeDayOrAfterEasterOctave),
    rule("immaculate-conception", "The Immaculate Conception of the Blessed Virgin Mary", Solemnity, 3, 26, DateRule::Fixed { month: 12, day: 8 }, Transfer::NextFreeDay),
    rule("assumption", "The Assumption of the Blessed Virgin Mary", Solemnity, 3, 27, DateRule::Fixed { month: 8, day: 15 }, Transfer::NextFreeDay),
    rule("joseph", "Saint Joseph, Spouse of the Blessed Virgin Mary", Solemnity, 3, 28, DateRule::Fixed { month: 3, day: 19 }, Transfer::NextFreeDayOrBeforePalmSunday),
    rule("john-the-baptist", "The Nativity of Saint John the Baptist", Solemnity, 3, 29, DateRule::Fixed { month: 6, day: 24 }, Transfer::PreviousFreeDay),
    rule("peter-and-paul", "Saints Peter and Paul, Apostles", Solemnity, 3, 30, DateRule::Fixed { month: 6, day: 29 }, Transfer::NextFreeDay),
    rule("all-saints", "All Saints", Solemnity, 3, 31, DateRule::Fixed { month: 11, day: 1 }, Transfer::NextFreeDay),
    fixed(11, 2, "all-souls", "The Commemoration of All the Faithful Departed", Solemnity, 3, 32),
    fixed(2, 2, "presentation", "The Presentation of the Lord", Feast, 5, 42),
    fixed(8, 6, "transfiguration", "The Transfiguration of the Lord", Feast, 5, 43),
    fixed(9, 14, "exaltation-of-the-cross", "The Exaltation of the Holy Cross", Feast, 5, 44),
    fixed(11, 9, "lateran-basilica", "The Dedication of the Lateran Basilica", Feast, 5, 45),
    feast(1, 25, "conversion-of-paul", "The Conversion of Saint Paul the Apostle", 60),
    feast(2, 22, "chair-of-peter", "The Chair of Saint Peter the Apostle", 61),
    feast(4, 25, "mark", "Saint Mark, Evangelist", 62),
    feast(5, 3, "philip-and-james", "Saints Philip and James, Apostles", 63),
    feast(5, 14, "matthias", "Saint Matthias, Apostle", 64),
    feast(5, 31, "visitation", "The Visitation of the Blessed Virgin Mary", 65),
    feast(7, 3, "thomas", "Saint Thomas, Apostle", 66),
    feast(7, 22, "mary-magdalene", "Saint Mary Magdalene", 67),
    feast(7, 25, "james", "Saint James, Apostle", 68),
    feast(8, 10, "lawrence", "Saint Lawrence, Deacon and Martyr", 69),
    feast(8, 24, "bartholomew", "Saint Bartholomew, Apostle", 70),
    feast(9, 8, "nativity-of-mary", "The Nativity of the Blessed Virgin Mary", 71),
    feast(9, 21, "matthew", "Saint Matthew, Apostle and Evangelist", 72),
    feast(9, 29, "archangels", "Saints Michael, Gabriel and Raphael, Archangels", 73),
    feast(10, 18, "luke", "Saint Luke, Evangelist", 74),
    feast(10, 28, "simon-and-jude", "Saints Simon and Jude, Apostles", 75),
    feast(11, 30, "andrew", "Saint Andrew, Apostle", 76),
    feast(12, 26, "stephen", "Saint Stephen, the First Martyr", 77),
    feast(12, 27, "john-apostle", "Saint John, Apostle and Evangelist", 78),
    feast(12, 28, "holy-innocents", "The Holy Innocents, Martyrs", 79),
    fixed(12, 12, "our-lady-of-guadalupe", "Our Lady of Guadalupe", Feast, 8, 80),
    memorial(1, 2, "basil-and-gregory", "Saints Basil the Great and Gregory Nazianzen, Bishops and Doctors", 100),
    memorial(1, 17, "anthony-abbot", "Saint Anthony, Abbot", 101),
    memorial(1, 21, "agnes", "Saint Agnes, Virgin and Martyr", 102),
    memorial(1, 24, "francis-de-sales", "Saint Francis de Sales, Bishop and Doctor", 103),
    memorial(1, 26, "timothy-and-titus", "Saints Timothy and Titus, Bishops", 104),
    memorial(1, 28, "thomas-aquinas", "Saint Thomas Aquinas, Priest and Doctor", 105),
    memorial(1, 31, "john-bosco", "Saint John Bosco, Priest", 106),
    memorial(2, 5, "agatha", "Saint Agatha, Virgin and Martyr", 107),
    memorial(2, 6, "paul-miki", "Saint Paul Miki and Companions, Martyrs", 108),
    memorial(2, 10, "scholastica", "Saint Scholastica, Virgin", 109),
    memorial(2, 23, "polycarp", "Saint Polycarp, Bishop and Martyr", 110),
    memorial(4, 7, "john-baptist-de-la-salle", "Saint John Baptist de la Salle, Priest", 111),
    memorial(4, 29, "catherine-of-siena", "Saint Catherine of Siena, Virgin and Doctor", 112),
    memorial(5, 2, "athanasius", "Saint Athanasius, Bishop and Doctor", 113),
    memorial(5, 26, "philip-neri", "Saint Philip Neri, Priest", 114),
    memorial(6, 1, "justin", "Saint Justin, Martyr", 115),
    memorial(6, 3, "charles-lwanga", "Saint Charles Lwanga and Companions, Martyrs", 116),
    memorial(6, 11, "barnabas", "Saint Barnabas, Apostle", 117),
    memorial(6, 13, "anthony-of-padua", "Saint Anthony of Padua, Priest and Doctor", 118),
    memorial(6, 21, "aloysius-gonzaga", "Saint Aloysius Gonzaga, Religious", 119),
    memorial(6, 28, "irenaeus", "Saint Irenaeus, Bishop, Martyr and Doctor", 120),
    memorial(7, 11, "benedict", "Saint Benedict, Abbot", 121),
    memorial(7, 15, "bonaventure", "Saint Bonaventure, Bishop and Doctor", 122),
    memorial(7, 26, "joachim-and-anne", "Saints Joachim and Anne, Parents of the Blessed Virgin Mary", 123),
    memorial(7, 29, "martha-mary-and-lazarus", "Saints Martha, Mary and Lazarus", 124),
    memorial(7, 31, "ignatius-of-loyola", "Saint Ignatius of Loyola, Priest", 125),
    memorial(8, 1, "alphonsus-liguori", "Saint Alphonsus Liguori, Bishop and Doctor", 126),
    memorial(8, 4, "john-vianney", "Saint John Vianney, Priest", 127),
    memorial(8, 8, "dominic", "Saint Dominic, Priest", 128),
    memorial(8, 11, "clare", "Saint Clare, Virgin", 129),
    memorial(8, 14, "maximilian-kolbe", "Saint Maximilian Kolbe, Priest and Martyr", 130),
    memorial(8, 20, "bernard", "Saint Bernard, Abbot and Doctor", 131),
    memorial(8, 21, "pius-x", "Saint Pius X, Pope", 132),
    memorial(8, 22, "queenship-of-mary", "The Queenship of the Blessed Virgin Mary", 133),
    memorial(8, 27, "monica", "Saint Monica", 134),
    memorial(8, 28, "augustine", "Saint Augustine, Bishop and Doctor", 135),
    memorial(8, 29, "passion-of-john-the-baptist", "The Passion of Saint John the Baptist", 136),
    memorial(9, 3, "gregory-the-great", "Saint Gregory the Great, Pope and Doctor", 137),
    memorial(9, 13, "john-chrysostom", "Saint John Chrysostom, Bishop and Doctor", 138),
    memorial(9, 15, "our-lady-of-sorrows", "Our Lady of Sorrows", 139),
    memorial(9, 16, "cornelius-and-cyprian", "Saints Cornelius, Pope, and Cyprian, Bishop, Martyrs", 140),
    memorial(9, 20, "korean-martyrs", "Saints Andrew Kim Tae-gon, Priest, and Paul Chong Ha-sang, and Companions, Martyrs", 141),
    memorial(9, 23, "pius-of-pietrelcina", "Saint Pius of Pietrelcina, Priest", 142),
    memorial(9, 27, "vincent-de-paul", "Saint Vincent de Paul, Priest", 143),
    memorial(9, 30, "jerome", "Saint Jerome, Priest and Doctor", 144),
    memorial(10, 1, "therese-of-the-child-jesus", "Saint Thérèse of the Child Jesus, Virgin and Doctor", 145),
    memorial(10, 2, "guardian-angels", "The Holy Guardian Angels", 146),
    memorial(10, 4, "francis-of-assisi", "Saint Francis of Assisi", 147),
    memorial(10, 7, "our-lady-of-the-rosary", "Our Lady of the Rosary", 148),
    memorial(10, 15, "teresa-of-jesus", "Saint Teresa of Jesus, Virgin and Doctor", 149),
    memorial(10, 17, "ignatius-of-antioch", "Saint Ignatius of Antioch, Bishop and Martyr", 150),
    memorial(11, 4, "charles-borromeo", "Saint Charles Borromeo, Bishop", 151),
    memorial(11, 10, "leo-the-great", "Saint Leo the Great, Pope and Doctor", 152),
    memorial(11, 11, "martin-of-tours", "Saint Martin of Tours, Bishop", 153),
    memorial(11, 12, "josaphat", "Saint Josaphat, Bishop and Martyr", 154),
    memorial(11, 17, "elizabeth-of-hungary", "Saint Elizabeth of Hungary, Religious", 155),
    memorial(11, 21, "presentation-of-mary", "The Presentation of the Blessed Virgin Mary", 156),
    memorial(11, 22, "cecilia", "Saint Cecilia, Virgin and Martyr", 157),
    memorial(11, 24, "vietnamese-martyrs", "Saint Andrew Dũng-Lạc, Priest, and Companions, Martyrs", 158),
    memorial(12, 3, "francis-xavier", "Saint Francis Xavier, Priest", 159),
    memorial(12, 7, "ambrose", "Saint Ambrose, Bishop and Doctor", 160),
    memorial(12, 13, "lucy", "Saint Lucy, Virgin and Martyr", 161),
    memorial(12, 14, "john-of-the-cross", "Saint John of the Cross, Priest and Doctor", 162),
    proper_memorial(1, 4, "elizabeth-ann-seton", "Saint Elizabeth Ann Seton, Religious", 170),
    proper_memorial(1, 5, "john-neumann", "Saint John Neumann, Bishop", 171),
    proper_memorial(7, 14, "kateri-tekakwitha", "Saint Kateri Tekakwitha, Virgin", 172),
    proper_memorial(9, 9, "peter-claver", "Saint Peter Claver, Priest", 173),
    proper_memorial(10, 19, "north-american-martyrs", "Saints John de Brébeuf and Isaac Jogues, Priests, and Companions, Martyrs", 174),
    proper_memorial(11, 13, "frances-xavier-cabrini", "Saint Frances Xavier Cabrini, Virgin", 175),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn precedence_and_ids_are_unique() {
        let mut ids = HashSet::new();
        let mut precedences = HashSet::new();
        for rule in all_rules() {
            assert!(ids.insert(rule.id), "duplicate id {}", rule.id);
            assert!(
                precedences.insert(rule.precedence),
                "duplicate precedence for {}",
                rule.id
            );
            assert_ne!(rule.precedence.order, SEASONAL_ORDER);
        }
    }

    #[test]
    fn fixed_dates_exist_in_every_year() {
        for rule in fixed_celebrations() {
            if let DateRule::Fixed { month, day } = rule.date {
                assert!(NaiveDate::from_ymd_opt(2023, month, day).is_some(), "{}", rule.id);
            } else {
                panic!("{} is not a fixed-date rule", rule.id);
            }
        }
    }

    #[test]
    fn movable_offsets() {
        let offsets: Vec<(i64, &str)> = movable_celebration_rules()
            .map(|(offset, rule)| (offset, rule.id))
            .collect();
        assert!(offsets.contains(&(-46, "ash-wednesday")));
        assert!(offsets.contains(&(39, "ascension")));
        assert!(offsets.contains(&(63, "corpus-christi")));
        assert!(offsets.contains(&(68, "sacred-heart")));
    }

    #[test]
    fn rules_are_found_by_id() {
        let epiphany = find_rule("epiphany").unwrap();
        assert_eq!(epiphany.date, DateRule::Epiphany);
        assert!(christmas_cycle_rules().iter().any(|rule| rule.id == "holy-family"));
        assert_eq!(find_rule("joseph").unwrap().rank, Rank::Solemnity);
        for id in ["holy-thursday", "good-friday", "easter-vigil"] {
            assert_eq!(find_rule(id).unwrap().rank, Rank::Triduum, "{id}");
        }
        assert_eq!(find_rule("easter-sunday").unwrap().rank, Rank::Solemnity);
        assert_eq!(Rank::Triduum.label(), "Triduum");
        assert!(find_rule("no-such-saint").is_none());
    }

    #[test]
    fn boundaries_2017() {
        let b = SeasonBoundaries::for_year(2017).unwrap();
        assert_eq!(b.epiphany, date(2017, 1, 8));
        assert_eq!(b.baptism, date(2017, 1, 9));
        assert_eq!(b.ash_wednesday, date(2017, 3, 1));
        assert_eq!(b.easter, date(2017, 4, 16));
        assert_eq!(b.pentecost, date(2017, 6, 4));
        assert_eq!(b.first_advent, date(2017, 12, 3));
        assert_eq!(b.date_of(DateRule::HolyFamily).unwrap(), date(2017, 12, 31));
        assert_eq!(b.date_of(AdventOffset(-7)).unwrap(), date(2017, 11, 26));
    }

    #[test]
    fn christmas_cycle_edges() {
        // Christmas 2022 fell on a Sunday: Holy Family moves to December 30.
        let b = SeasonBoundaries::for_year(2022).unwrap();
        assert_eq!(b.date_of(DateRule::HolyFamily).unwrap(), date(2022, 12, 30));
        // January 1, 2023 was a Sunday: Epiphany on the 8th, Baptism on Monday the 9th.
        let b = SeasonBoundaries::for_year(2023).unwrap();
        assert_eq!(b.epiphany, date(2023, 1, 8));
        assert_eq!(b.baptism, date(2023, 1, 9));
        // 2025: Epiphany on January 5, Baptism the following Sunday.
        let b = SeasonBoundaries::for_year(2025).unwrap();
        assert_eq!(b.epiphany, date(2025, 1, 5));
        assert_eq!(b.baptism, date(2025, 1, 12));
    }

    #[test]
    fn seasons_2017() {
        let b = SeasonBoundaries::for_year(2017).unwrap();
        assert_eq!(b.season_of(date(2017, 1, 9)), Season::Christmas);
        assert_eq!(b.season_of(date(2017, 1, 10)), Season::OrdinaryTime);
        assert_eq!(b.season_of(date(2017, 3, 1)), Season::Lent);
        assert_eq!(b.season_of(date(2017, 4, 13)), Season::Triduum);
        assert_eq!(b.season_of(date(2017, 4, 16)), Season::Easter);
        assert_eq!(b.season_of(date(2017, 6, 4)), Season::Easter);
        assert_eq!(b.season_of(date(2017, 6, 5)), Season::OrdinaryTime);
        assert_eq!(b.season_of(date(2017, 12, 3)), Season::Advent);
        assert_eq!(b.season_of(date(2017, 12, 25)), Season::Christmas);
    }

    #[test]
    fn paschal_weeks_cover_holy_week_and_octave() {
        let b = SeasonBoundaries::for_year(2024).unwrap();
        assert!(b.in_paschal_weeks(date(2024, 3, 25)));
        assert!(b.in_paschal_weeks(date(2024, 4, 7)));
        assert!(!b.in_paschal_weeks(date(2024, 4, 8)));
        assert!(!b.in_paschal_weeks(date(2024, 3, 23)));
    }
}
