//! Season resolution.
//!
//! The default rule set works from fixed month/day boundaries. It does not
//! know where Easter falls, so Lent is approximated as March and April and
//! the Easter rule is shadowed in April; `week_number` is a placeholder.
//! [`SeasonRules::Computus`] derives the moveable boundaries from the date of
//! Easter instead.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date::CanonicalDate;
use crate::event::{LiturgicalColor, Season};

/// Week number reported when no real week computation is done.
pub const PLACEHOLDER_WEEK: u32 = 1;

/// Derived season information for a day. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LiturgicalSeason {
    pub season: Season,
    pub color: LiturgicalColor,
    pub week_number: u32,
    pub description: &'static str,
}

impl LiturgicalSeason {
    pub fn new(season: Season, week_number: u32) -> Self {
        Self {
            season,
            color: season.color(),
            week_number,
            description: season.description(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonRules {
    #[default]
    FixedMonths,
    Computus,
}

impl SeasonRules {
    pub fn resolve(&self, date: CanonicalDate) -> LiturgicalSeason {
        match self {
            SeasonRules::FixedMonths => resolve_season(date),
            SeasonRules::Computus => resolve_with_computus(date),
        }
    }
}

impl FromStr for SeasonRules {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" | "fixed_months" => Ok(SeasonRules::FixedMonths),
            "computus" => Ok(SeasonRules::Computus),
            other => Err(format!("unknown season rules {:?}", other)),
        }
    }
}

/// Resolve the season from the fixed boundary table. First match wins.
pub fn resolve_season(date: CanonicalDate) -> LiturgicalSeason {
    let (month, day) = (date.month(), date.day());

    let season = if (month == 12 && day >= 25) || (month == 1 && day <= 13) {
        Season::Navidad
    } else if month == 12 {
        Season::Adviento
    } else if month == 3 || month == 4 {
        Season::Cuaresma
    } else if month == 4 || month == 5 {
        // April never gets here; May alone is Easter under these rules.
        Season::Pascua
    } else {
        Season::TiempoOrdinario
    };

    LiturgicalSeason::new(season, PLACEHOLDER_WEEK)
}

/// Easter Sunday for a Gregorian year (anonymous Gregorian algorithm).
pub fn easter_sunday(year: i32) -> Option<CanonicalDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    CanonicalDate::from_ymd(year, month as u32, day as u32).ok()
}

/// First Sunday of Advent: three weeks before the last Sunday preceding Christmas.
pub fn first_sunday_of_advent(year: i32) -> Option<CanonicalDate> {
    let christmas = CanonicalDate::from_ymd(year, 12, 25).ok()?;
    let back = match christmas.weekday().num_days_from_sunday() {
        0 => 7,
        n => n,
    };
    christmas.checked_sub_days(back + 21)
}

/// Baptism of the Lord: the Sunday after January 6.
pub fn baptism_of_the_lord(year: i32) -> Option<CanonicalDate> {
    let epiphany = CanonicalDate::from_ymd(year, 1, 6).ok()?;
    let ahead = 7 - epiphany.weekday().num_days_from_sunday();
    epiphany.checked_add_days(ahead)
}

/// Season boundaries of one civil year.
struct YearMarks {
    baptism: CanonicalDate,
    ash_wednesday: CanonicalDate,
    first_sunday_of_lent: CanonicalDate,
    easter: CanonicalDate,
    pentecost: CanonicalDate,
    advent: CanonicalDate,
}

impl YearMarks {
    fn for_year(year: i32) -> Option<Self> {
        let easter = easter_sunday(year)?;
        Some(Self {
            baptism: baptism_of_the_lord(year)?,
            ash_wednesday: easter.checked_sub_days(46)?,
            first_sunday_of_lent: easter.checked_sub_days(42)?,
            easter,
            pentecost: easter.checked_add_days(49)?,
            advent: first_sunday_of_advent(year)?,
        })
    }
}

fn week_from(date: CanonicalDate, start: CanonicalDate) -> u32 {
    (date.days_since(start).max(0) / 7 + 1) as u32
}

fn resolve_with_computus(date: CanonicalDate) -> LiturgicalSeason {
    let Some(marks) = YearMarks::for_year(date.year()) else {
        return resolve_season(date);
    };

    if date.month() == 12 && date.day() >= 25 {
        let christmas = CanonicalDate::from_ymd(date.year(), 12, 25).unwrap_or(date);
        return LiturgicalSeason::new(Season::Navidad, week_from(date, christmas));
    }
    if date <= marks.baptism {
        let christmas = CanonicalDate::from_ymd(date.year() - 1, 12, 25).unwrap_or(date);
        return LiturgicalSeason::new(Season::Navidad, week_from(date, christmas));
    }
    if date >= marks.advent {
        return LiturgicalSeason::new(Season::Adviento, week_from(date, marks.advent));
    }
    if date >= marks.ash_wednesday && date < marks.easter {
        let week = if date < marks.first_sunday_of_lent {
            0
        } else {
            week_from(date, marks.first_sunday_of_lent)
        };
        return LiturgicalSeason::new(Season::Cuaresma, week);
    }
    if date >= marks.easter && date <= marks.pentecost {
        return LiturgicalSeason::new(Season::Pascua, week_from(date, marks.easter));
    }

    // Ordinary Time: counted forward from the Baptism before Lent, and
    // backward from week 34 (ending the Saturday before Advent) after Pentecost.
    let week = if date < marks.ash_wednesday {
        (date.days_since(marks.baptism) / 7 + 1) as u32
    } else {
        let before_advent = marks.advent.days_since(date);
        34u32.saturating_sub(((before_advent - 1) / 7) as u32)
    };
    LiturgicalSeason::new(Season::TiempoOrdinario, week)
}
