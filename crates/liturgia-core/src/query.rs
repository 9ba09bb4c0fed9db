use std::cmp::Ordering;
use std::fmt;

use crate::date::{CanonicalDate, DateRange};
use crate::event::{CelebrationType, LiturgicalEvent, Season};

/// A read against the fact table. Every source answers every variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventQuery {
    /// Events on one day, rank descending.
    OnDate(CanonicalDate),
    /// Events in an inclusive range, date ascending then rank descending.
    InRange(DateRange),
    ByType {
        celebration_type: CelebrationType,
        range: DateRange,
    },
    BySeason { season: Season, range: DateRange },
    ByLocality { is_local: bool, range: DateRange },
    /// Case-insensitive substring over title, description and patron.
    /// Rank descending, then date ascending.
    Search { text: String, range: DateRange },
}

impl EventQuery {
    /// The day span the query is restricted to.
    pub fn range(&self) -> DateRange {
        match self {
            EventQuery::OnDate(date) => DateRange::single(*date),
            EventQuery::InRange(range)
            | EventQuery::ByType { range, .. }
            | EventQuery::BySeason { range, .. }
            | EventQuery::ByLocality { range, .. }
            | EventQuery::Search { range, .. } => *range,
        }
    }

    pub fn matches(&self, event: &LiturgicalEvent) -> bool {
        if !self.range().contains(event.date) {
            return false;
        }
        match self {
            EventQuery::OnDate(_) | EventQuery::InRange(_) => true,
            EventQuery::ByType {
                celebration_type, ..
            } => event.celebration_type == *celebration_type,
            EventQuery::BySeason { season, .. } => event.liturgical_season == *season,
            EventQuery::ByLocality { is_local, .. } => event.is_local_celebration == *is_local,
            EventQuery::Search { text, .. } => {
                let needle = text.to_lowercase();
                contains_folded(&event.title, &needle)
                    || event
                        .description
                        .as_deref()
                        .is_some_and(|d| contains_folded(d, &needle))
                    || event
                        .patron_of
                        .as_deref()
                        .is_some_and(|p| contains_folded(p, &needle))
            }
        }
    }

    /// Order results the way the query promises. The sort is stable.
    pub fn sort(&self, events: &mut [LiturgicalEvent]) {
        match self {
            EventQuery::Search { .. } => events.sort_by(rank_then_date),
            _ => events.sort_by(date_then_rank),
        }
    }
}

impl fmt::Display for EventQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventQuery::OnDate(date) => write!(f, "on {}", date),
            EventQuery::InRange(range) => write!(f, "in {}", range),
            EventQuery::ByType {
                celebration_type,
                range,
            } => write!(f, "type={} in {}", celebration_type, range),
            EventQuery::BySeason { season, range } => write!(f, "season={} in {}", season, range),
            EventQuery::ByLocality { is_local, range } => {
                write!(f, "local={} in {}", is_local, range)
            }
            EventQuery::Search { text, range } => write!(f, "search {:?} in {}", text, range),
        }
    }
}

fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn date_then_rank(a: &LiturgicalEvent, b: &LiturgicalEvent) -> Ordering {
    a.date.cmp(&b.date).then(b.rank.cmp(&a.rank))
}

fn rank_then_date(a: &LiturgicalEvent, b: &LiturgicalEvent) -> Ordering {
    b.rank.cmp(&a.rank).then(a.date.cmp(&b.date))
}
