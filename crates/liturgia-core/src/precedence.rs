use serde::Serialize;

use crate::event::{LiturgicalColor, LiturgicalEvent};
use crate::season::LiturgicalSeason;

/// The color a day is displayed in, and the celebration that set it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayColor<'a> {
    pub color: LiturgicalColor,
    pub winner: Option<&'a LiturgicalEvent>,
}

/// Picks the governing celebration of a day by rank.
pub struct PrecedenceResolver;

impl PrecedenceResolver {
    /// The first event carrying the maximum rank, in the order given.
    ///
    /// `Iterator::max_by_key` returns the *last* maximum, so ties are
    /// resolved by hand to keep the adapter's order authoritative.
    pub fn winner(events: &[LiturgicalEvent]) -> Option<&LiturgicalEvent> {
        events.iter().fold(None, |best, event| match best {
            Some(b) if b.rank >= event.rank => Some(b),
            _ => Some(event),
        })
    }

    /// Resolve a day's color: the winner's color, or the season default.
    pub fn resolve<'a>(events: &'a [LiturgicalEvent], season: &LiturgicalSeason) -> DayColor<'a> {
        match Self::winner(events) {
            Some(event) => DayColor {
                color: event.liturgical_color,
                winner: Some(event),
            },
            None => DayColor {
                color: season.color,
                winner: None,
            },
        }
    }
}

pub fn resolve_color_and_winner<'a>(
    events: &'a [LiturgicalEvent],
    season_default: &LiturgicalSeason,
) -> DayColor<'a> {
    PrecedenceResolver::resolve(events, season_default)
}
