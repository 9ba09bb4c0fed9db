use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date::{normalize, CanonicalDate};
use crate::error::{RecordError, UnknownVariant};

/// Ranks at or above this are treated as major celebrations.
pub const MAJOR_RANK: i32 = 8;

/// Classification of a celebration, ordered by liturgical importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CelebrationType {
    Special,
    OptionalMemorial,
    Memorial,
    Feast,
    Solemnity,
}

impl CelebrationType {
    pub const ALL: [CelebrationType; 5] = [
        CelebrationType::Solemnity,
        CelebrationType::Feast,
        CelebrationType::Memorial,
        CelebrationType::OptionalMemorial,
        CelebrationType::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CelebrationType::Solemnity => "solemnity",
            CelebrationType::Feast => "feast",
            CelebrationType::Memorial => "memorial",
            CelebrationType::OptionalMemorial => "optional_memorial",
            CelebrationType::Special => "special",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Adviento,
    Navidad,
    #[serde(rename = "Tiempo Ordinario")]
    TiempoOrdinario,
    Cuaresma,
    Pascua,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Season::Adviento,
        Season::Navidad,
        Season::TiempoOrdinario,
        Season::Cuaresma,
        Season::Pascua,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Adviento => "Adviento",
            Season::Navidad => "Navidad",
            Season::TiempoOrdinario => "Tiempo Ordinario",
            Season::Cuaresma => "Cuaresma",
            Season::Pascua => "Pascua",
        }
    }

    /// Canonical color of the season.
    pub fn color(&self) -> LiturgicalColor {
        match self {
            Season::Adviento | Season::Cuaresma => LiturgicalColor::Morado,
            Season::Navidad | Season::Pascua => LiturgicalColor::Blanco,
            Season::TiempoOrdinario => LiturgicalColor::Verde,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Season::Adviento => "Tiempo de preparación para la Navidad",
            Season::Navidad => "Celebración del nacimiento de Jesús",
            Season::TiempoOrdinario => "Tiempo de crecimiento en la fe",
            Season::Cuaresma => "Tiempo de preparación para la Pascua",
            Season::Pascua => "Celebración de la Resurrección de Cristo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LiturgicalColor {
    Blanco,
    Rojo,
    Verde,
    Morado,
    Rosa,
    Dorado,
}

impl LiturgicalColor {
    pub const ALL: [LiturgicalColor; 6] = [
        LiturgicalColor::Blanco,
        LiturgicalColor::Rojo,
        LiturgicalColor::Verde,
        LiturgicalColor::Morado,
        LiturgicalColor::Rosa,
        LiturgicalColor::Dorado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LiturgicalColor::Blanco => "Blanco",
            LiturgicalColor::Rojo => "Rojo",
            LiturgicalColor::Verde => "Verde",
            LiturgicalColor::Morado => "Morado",
            LiturgicalColor::Rosa => "Rosa",
            LiturgicalColor::Dorado => "Dorado",
        }
    }
}

macro_rules! display_and_parse {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| UnknownVariant {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }
    };
}

display_and_parse!(CelebrationType, "celebration_type");
display_and_parse!(Season, "liturgical_season");
display_and_parse!(LiturgicalColor, "liturgical_color");

/// A celebration on the liturgical calendar. Read-only fact from the event source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiturgicalEvent {
    pub id: String,
    pub date: CanonicalDate,
    pub title: String,
    pub celebration_type: CelebrationType,
    pub liturgical_season: Season,
    pub liturgical_color: LiturgicalColor,
    pub rank: i32,
    pub is_local_celebration: bool,
    pub description: Option<String>,
    pub patron_of: Option<String>,
    pub readings_reference: Option<String>,
}

impl LiturgicalEvent {
    pub fn is_major(&self) -> bool {
        self.rank >= MAJOR_RANK
    }
}

/// An event record as the store holds it, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventRow {
    pub id: String,
    pub date: String,
    pub title: String,
    pub celebration_type: String,
    pub liturgical_season: String,
    pub liturgical_color: String,
    pub rank: i32,
    #[serde(default)]
    pub is_local_celebration: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub patron_of: Option<String>,
    #[serde(default)]
    pub readings_reference: Option<String>,
}

impl TryFrom<EventRow> for LiturgicalEvent {
    type Error = RecordError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        if row.id.trim().is_empty() {
            return Err(RecordError::EmptyField {
                id: row.id,
                field: "id",
            });
        }
        if row.title.trim().is_empty() {
            return Err(RecordError::EmptyField {
                id: row.id,
                field: "title",
            });
        }

        let date = normalize(row.date.as_str()).map_err(|source| RecordError::InvalidDate {
            id: row.id.clone(),
            source,
        })?;
        let unknown = |e: UnknownVariant| RecordError::UnknownVariant {
            id: row.id.clone(),
            field: e.field,
            value: e.value,
        };
        let celebration_type = row.celebration_type.parse().map_err(unknown)?;
        let liturgical_season = row.liturgical_season.parse().map_err(unknown)?;
        let liturgical_color = row.liturgical_color.parse().map_err(unknown)?;

        Ok(LiturgicalEvent {
            id: row.id,
            date,
            title: row.title,
            celebration_type,
            liturgical_season,
            liturgical_color,
            rank: row.rank,
            is_local_celebration: row.is_local_celebration,
            description: non_empty(row.description),
            patron_of: non_empty(row.patron_of),
            readings_reference: non_empty(row.readings_reference),
        })
    }
}

impl From<&LiturgicalEvent> for EventRow {
    fn from(e: &LiturgicalEvent) -> Self {
        Self {
            id: e.id.clone(),
            date: e.date.to_string(),
            title: e.title.clone(),
            celebration_type: e.celebration_type.to_string(),
            liturgical_season: e.liturgical_season.to_string(),
            liturgical_color: e.liturgical_color.to_string(),
            rank: e.rank,
            is_local_celebration: e.is_local_celebration,
            description: e.description.clone(),
            patron_of: e.patron_of.clone(),
            readings_reference: e.readings_reference.clone(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
