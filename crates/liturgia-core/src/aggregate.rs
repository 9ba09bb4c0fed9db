//! Range aggregation: upcoming windows, month grids and yearly counts.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;

use crate::date::{CanonicalDate, DateRange};
use crate::event::{CelebrationType, LiturgicalEvent, Season, MAJOR_RANK};

/// Which celebrations count as "upcoming".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingFilter {
    pub local_only: bool,
    pub major_rank: i32,
}

impl Default for UpcomingFilter {
    fn default() -> Self {
        Self {
            local_only: false,
            major_rank: MAJOR_RANK,
        }
    }
}

impl UpcomingFilter {
    pub fn local_only() -> Self {
        Self {
            local_only: true,
            ..Self::default()
        }
    }

    pub fn accepts(&self, event: &LiturgicalEvent) -> bool {
        let notable = event.rank >= self.major_rank || event.is_local_celebration;
        notable && (!self.local_only || event.is_local_celebration)
    }
}

/// Keep the notable events inside `window`, preserving order.
pub fn select_upcoming(
    events: Vec<LiturgicalEvent>,
    window: DateRange,
    filter: UpcomingFilter,
) -> Vec<LiturgicalEvent> {
    events
        .into_iter()
        .filter(|e| window.contains(e.date) && filter.accepts(e))
        .collect()
}

/// Narrowing applied to the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CelebrationFilter {
    #[default]
    All,
    Type(CelebrationType),
    Local,
}

impl CelebrationFilter {
    pub fn accepts(&self, event: &LiturgicalEvent) -> bool {
        match self {
            CelebrationFilter::All => true,
            CelebrationFilter::Type(t) => event.celebration_type == *t,
            CelebrationFilter::Local => event.is_local_celebration,
        }
    }
}

impl FromStr for CelebrationFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CelebrationFilter::All),
            "local" => Ok(CelebrationFilter::Local),
            other => other
                .parse::<CelebrationType>()
                .map(CelebrationFilter::Type)
                .map_err(|e| e.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    /// Events shown per day before the rest is reported as overflow.
    pub max_per_day: usize,
    pub filter: CelebrationFilter,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            max_per_day: 2,
            filter: CelebrationFilter::All,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: CanonicalDate,
    /// Highest-ranked events of the day, at most `max_per_day`.
    pub events: Vec<LiturgicalEvent>,
    pub total: usize,
    /// Always `total - events.len()`.
    pub overflow: usize,
}

/// A Monday-first month layout for calendar views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Blank cells before day 1 (Monday = 0).
    pub leading_blanks: u32,
    /// Blank cells after the last day to complete the final week.
    pub trailing_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    pub fn build(month: DateRange, events: &[LiturgicalEvent], options: GridOptions) -> Self {
        let leading_blanks = month.start.weekday().num_days_from_monday();
        let used = leading_blanks + month.len();
        let trailing_blanks = (7 - used % 7) % 7;

        let days = month
            .days()
            .map(|date| {
                let mut of_day: Vec<LiturgicalEvent> = events
                    .iter()
                    .filter(|e| e.date == date && options.filter.accepts(e))
                    .cloned()
                    .collect();
                of_day.sort_by(|a, b| b.rank.cmp(&a.rank));

                let total = of_day.len();
                of_day.truncate(options.max_per_day);
                DayCell {
                    date,
                    overflow: total - of_day.len(),
                    total,
                    events: of_day,
                }
            })
            .collect();

        Self {
            year: month.start.year(),
            month: month.start.month(),
            leading_blanks,
            trailing_blanks,
            days,
        }
    }

    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.days.iter().find(|c| c.date.day() == day)
    }
}

/// Counts over a span of the calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalendarStatistics {
    pub total_events: usize,
    pub by_type: BTreeMap<String, usize>,
    pub by_season: BTreeMap<String, usize>,
    pub local_celebrations: usize,
    pub major_celebrations: usize,
}

impl CalendarStatistics {
    pub fn from_events(events: &[LiturgicalEvent], major_rank: i32) -> Self {
        let mut stats = Self {
            total_events: events.len(),
            ..Self::default()
        };
        for event in events {
            *stats
                .by_type
                .entry(event.celebration_type.to_string())
                .or_default() += 1;
            *stats
                .by_season
                .entry(event.liturgical_season.to_string())
                .or_default() += 1;
            if event.is_local_celebration {
                stats.local_celebrations += 1;
            }
            if event.rank >= major_rank {
                stats.major_celebrations += 1;
            }
        }
        stats
    }

    pub fn count_for_season(&self, season: Season) -> usize {
        self.by_season.get(season.as_str()).copied().unwrap_or(0)
    }
}
