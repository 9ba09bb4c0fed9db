use std::future::Future;

use crate::error::{RecordError, SourceError};
use crate::event::{EventRow, LiturgicalEvent};
use crate::query::EventQuery;

/// What one source call produced: the valid events and the records that
/// failed validation and were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedEvents {
    pub events: Vec<LiturgicalEvent>,
    pub rejected: Vec<RecordError>,
}

impl FetchedEvents {
    pub fn new(events: Vec<LiturgicalEvent>) -> Self {
        Self {
            events,
            rejected: Vec::new(),
        }
    }

    /// Validate rows one at a time. A bad row never hides the good ones.
    pub fn from_rows(rows: impl IntoIterator<Item = EventRow>) -> Self {
        let mut fetched = Self::default();
        for row in rows {
            match LiturgicalEvent::try_from(row) {
                Ok(event) => fetched.events.push(event),
                Err(e) => fetched.rejected.push(e),
            }
        }
        fetched
    }
}

/// The external fact table the engine reads celebrations from.
///
/// Implementations must return events matching the query in the order
/// [`EventQuery::sort`] defines. Rows that violate the event contract go to
/// [`FetchedEvents::rejected`]; whole-call failures map onto [`SourceError`]:
/// `Unavailable` for transport or store failures, `Malformed` for a response
/// that cannot be decoded at all.
pub trait EventSource: Send + Sync {
    fn fetch(
        &self,
        query: &EventQuery,
    ) -> impl Future<Output = Result<FetchedEvents, SourceError>> + Send;
}

impl<S: EventSource> EventSource for std::sync::Arc<S> {
    fn fetch(
        &self,
        query: &EventQuery,
    ) -> impl Future<Output = Result<FetchedEvents, SourceError>> + Send {
        (**self).fetch(query)
    }
}

// In-memory implementation for testing
#[cfg(any(test, feature = "test-utils"))]
pub mod memory {
    use super::*;
    use std::sync::RwLock;

    /// In-memory event source for testing.
    #[derive(Default)]
    pub struct InMemoryEventSource {
        events: RwLock<Vec<LiturgicalEvent>>,
        rejected: RwLock<Vec<RecordError>>,
        failure: RwLock<Option<SourceError>>,
    }

    impl InMemoryEventSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_events(events: impl IntoIterator<Item = LiturgicalEvent>) -> Self {
            let source = Self::new();
            source.events.write().unwrap().extend(events);
            source
        }

        pub fn insert(&self, event: LiturgicalEvent) {
            self.events.write().unwrap().push(event);
        }

        /// Report `error` as a skipped record on every following fetch.
        pub fn reject(&self, error: RecordError) {
            self.rejected.write().unwrap().push(error);
        }

        /// Make every following fetch fail with `error` (or succeed again with `None`).
        pub fn fail_with(&self, error: Option<SourceError>) {
            *self.failure.write().unwrap() = error;
        }
    }

    impl EventSource for InMemoryEventSource {
        async fn fetch(&self, query: &EventQuery) -> Result<FetchedEvents, SourceError> {
            if let Some(error) = self.failure.read().unwrap().clone() {
                return Err(error);
            }

            let mut found: Vec<LiturgicalEvent> = self
                .events
                .read()
                .unwrap()
                .iter()
                .filter(|e| query.matches(e))
                .cloned()
                .collect();
            query.sort(&mut found);
            Ok(FetchedEvents {
                events: found,
                rejected: self.rejected.read().unwrap().clone(),
            })
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, color: &str) -> EventRow {
        EventRow {
            id: id.to_string(),
            date: "2025-02-10".to_string(),
            title: "Santa Escolástica".to_string(),
            celebration_type: "memorial".to_string(),
            liturgical_season: "Tiempo Ordinario".to_string(),
            liturgical_color: color.to_string(),
            rank: 4,
            ..EventRow::default()
        }
    }

    #[test]
    fn test_from_rows_keeps_valid_rows() {
        let fetched =
            FetchedEvents::from_rows([row("good", "Blanco"), row("bad", "Azul"), row("also", "Verde")]);

        let ids: Vec<_> = fetched.events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["good", "also"]);
        assert!(matches!(
            fetched.rejected.as_slice(),
            [RecordError::UnknownVariant { id, .. }] if id == "bad"
        ));
    }
}
