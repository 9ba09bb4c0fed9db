//! Liturgia REST - Event source backed by a PostgREST table.

pub mod client;
pub mod params;

pub use client::{RestConfig, RestEventSource};
pub use params::query_params;
