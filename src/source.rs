use liturgia_core::{EventQuery, EventSource, FetchedEvents, SourceError};
use liturgia_db::SqliteEventStore;
use liturgia_rest::RestEventSource;

/// The event source picked at startup.
pub enum AnyEventSource {
    Sqlite(SqliteEventStore),
    Rest(RestEventSource),
}

impl AnyEventSource {
    pub fn kind(&self) -> &'static str {
        match self {
            AnyEventSource::Sqlite(_) => "sqlite",
            AnyEventSource::Rest(_) => "rest",
        }
    }
}

impl EventSource for AnyEventSource {
    async fn fetch(&self, query: &EventQuery) -> Result<FetchedEvents, SourceError> {
        match self {
            AnyEventSource::Sqlite(store) => store.fetch(query).await,
            AnyEventSource::Rest(client) => client.fetch(query).await,
        }
    }
}
