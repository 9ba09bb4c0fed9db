use serde::Serialize;

use liturgia_core::{
    CanonicalDate, LiturgicalColor, LiturgicalEvent, LiturgicalSeason, SaintOfDay,
};

/// Everything shown for one day, built from a single event fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayView {
    pub date: CanonicalDate,
    pub season: LiturgicalSeason,
    pub color: LiturgicalColor,
    pub winning_event: Option<LiturgicalEvent>,
    pub events: Vec<LiturgicalEvent>,
    pub saints: Vec<SaintOfDay>,
}

/// The landing view: a day plus what is coming up after today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub day: DayView,
    pub upcoming: Vec<LiturgicalEvent>,
}
