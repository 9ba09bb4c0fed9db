//! Liturgia Core - Calendar values and resolution rules.
//!
//! Pure functions of (date, event set): date normalization, season
//! resolution, precedence, saints projection and range aggregation, plus the
//! [`EventSource`] seam the engine reads facts through. No I/O lives here.

pub mod aggregate;
pub mod date;
pub mod error;
pub mod event;
pub mod precedence;
pub mod query;
pub mod saints;
pub mod season;
pub mod source;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;

// Re-exports for convenience
pub use aggregate::{
    select_upcoming, CalendarStatistics, CelebrationFilter, DayCell, GridOptions, MonthGrid,
    UpcomingFilter,
};
pub use date::{normalize, CanonicalDate, DateInput, DateRange, YearRange};
pub use error::{DateError, RecordError, SourceError, UnknownVariant};
pub use event::{CelebrationType, EventRow, LiturgicalColor, LiturgicalEvent, Season, MAJOR_RANK};
pub use precedence::{resolve_color_and_winner, DayColor, PrecedenceResolver};
pub use query::EventQuery;
pub use saints::{project_saints, SaintOfDay};
pub use season::{resolve_season, easter_sunday, LiturgicalSeason, SeasonRules};
pub use source::{EventSource, FetchedEvents};

#[cfg(any(test, feature = "test-utils"))]
pub use source::memory::InMemoryEventSource;
