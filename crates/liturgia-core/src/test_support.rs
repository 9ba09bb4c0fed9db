use crate::event::{CelebrationType, LiturgicalColor, LiturgicalEvent, Season};

/// A plain memorial on `date` with the given rank.
pub fn event(id: &str, date: &str, rank: i32) -> LiturgicalEvent {
    LiturgicalEvent {
        id: id.to_string(),
        date: date.parse().expect("test date"),
        title: format!("Celebración {}", id),
        celebration_type: CelebrationType::Memorial,
        liturgical_season: Season::TiempoOrdinario,
        liturgical_color: LiturgicalColor::Verde,
        rank,
        is_local_celebration: false,
        description: None,
        patron_of: None,
        readings_reference: None,
    }
}
