//! Liturgia Engine - Calendar queries over an event source.
//!
//! [`CalendarEngine`] combines the pure rules from `liturgia-core` with
//! facts fetched through an [`EventSource`](liturgia_core::EventSource),
//! bounding every fetch by a timeout and degrading source failures into
//! reported [`CalendarIssue`]s.

pub mod clock;
pub mod engine;
pub mod error;
pub mod views;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{CalendarEngine, EngineOptions, EngineResult};
pub use error::{CalendarIssue, EngineError, Resolution};
pub use views::{DayView, Overview};
