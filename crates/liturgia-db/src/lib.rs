//! Liturgia DB - SQLite event source.
//!
//! Holds the `liturgical_calendar` fact table and answers
//! [`EventQuery`](liturgia_core::EventQuery) reads against it.

pub mod event_store;
pub mod pool;

pub use event_store::{insert_event, SqliteEventStore};
pub use pool::{init_pool, run_migrations};
