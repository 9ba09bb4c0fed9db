use liturgia_core::{EventQuery, EventRow, EventSource, FetchedEvents, RecordError, SourceError};

use crate::params::query_params;

pub const DEFAULT_TABLE: &str = "liturgical_calendar";

/// Where the remote fact table lives.
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// Project root, e.g. `https://xyz.supabase.co`.
    pub base_url: String,
    pub api_key: String,
    pub table: String,
}

impl RestConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), self.table)
    }
}

/// Event source reading a PostgREST table over HTTP.
pub struct RestEventSource {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl RestEventSource {
    pub fn new(config: RestConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: RestConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint(),
            api_key: config.api_key,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl EventSource for RestEventSource {
    async fn fetch(&self, query: &EventQuery) -> Result<FetchedEvents, SourceError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&query_params(query))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::Unavailable(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let rows: Vec<EventRow> = response.json().await.map_err(|e| {
            if e.is_decode() {
                SourceError::Malformed(RecordError::Undecodable(e.to_string()))
            } else {
                SourceError::Unavailable(e.to_string())
            }
        })?;

        tracing::debug!("Fetched {} rows {}", rows.len(), query);

        let fetched = FetchedEvents::from_rows(rows);
        if !fetched.rejected.is_empty() {
            tracing::warn!(
                "Skipped {} malformed rows for {}",
                fetched.rejected.len(),
                query
            );
        }
        Ok(fetched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use axum::extract::Query;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use liturgia_core::DateRange;

    /// Serve `app` on an ephemeral local port and return its base URL.
    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn source(base_url: String) -> RestEventSource {
        RestEventSource::new(RestConfig::new(base_url, "secret-key"))
    }

    const ROWS: &str = r#"[
        {"id": "1", "date": "2025-12-25T00:00:00+00:00", "title": "Natividad del Señor",
         "celebration_type": "solemnity", "liturgical_season": "Navidad",
         "liturgical_color": "Blanco", "rank": 10, "is_local_celebration": false,
         "description": "", "patron_of": null, "readings_reference": "Jn 1,1-18"}
    ]"#;

    #[test]
    fn test_endpoint() {
        let config = RestConfig::new("https://example.org/", "k");
        assert_eq!(config.endpoint(), "https://example.org/rest/v1/liturgical_calendar");
    }

    #[tokio::test]
    async fn test_fetch_decodes_rows_and_sends_credentials() {
        let app = Router::new().route(
            "/rest/v1/liturgical_calendar",
            get(
                |headers: HeaderMap, Query(params): Query<HashMap<String, String>>| async move {
                    let authorized = headers.get("apikey").map(|v| v.as_bytes())
                        == Some(b"secret-key".as_slice())
                        && headers.get("authorization").map(|v| v.as_bytes())
                            == Some(b"Bearer secret-key".as_slice());
                    if !authorized || params.get("date").map(String::as_str) != Some("eq.2025-12-25")
                    {
                        return (StatusCode::UNAUTHORIZED, String::new());
                    }
                    (StatusCode::OK, ROWS.to_string())
                },
            ),
        );
        let source = source(serve(app).await);

        let events = source
            .fetch(&EventQuery::OnDate("2025-12-25".parse().unwrap()))
            .await
            .unwrap()
            .events;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date.to_string(), "2025-12-25");
        assert_eq!(events[0].rank, 10);
        assert_eq!(events[0].description, None);
        assert_eq!(events[0].readings_reference.as_deref(), Some("Jn 1,1-18"));
    }

    #[tokio::test]
    async fn test_bad_row_is_skipped() {
        let rows = r#"[
            {"id": "good", "date": "2025-02-01", "title": "Feria",
             "celebration_type": "memorial", "liturgical_season": "Tiempo Ordinario",
             "liturgical_color": "Verde", "rank": 2},
            {"id": "bad", "date": "2025-02-10", "title": "Mala",
             "celebration_type": "memorial", "liturgical_season": "Tiempo Ordinario",
             "liturgical_color": "Azul", "rank": 2}
        ]"#;
        let app = Router::new().route(
            "/rest/v1/liturgical_calendar",
            get(move || async move { rows }),
        );
        let source = source(serve(app).await);

        let fetched = source
            .fetch(&EventQuery::InRange(DateRange::month(2025, 2).unwrap()))
            .await
            .unwrap();
        assert_eq!(fetched.events.len(), 1);
        assert_eq!(fetched.events[0].id, "good");
        assert!(matches!(
            fetched.rejected.as_slice(),
            [RecordError::UnknownVariant { id, .. }] if id == "bad"
        ));
    }

    #[tokio::test]
    async fn test_http_error_is_unavailable() {
        let app = Router::new().route(
            "/rest/v1/liturgical_calendar",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
        let source = source(serve(app).await);

        let result = source
            .fetch(&EventQuery::InRange(DateRange::month(2025, 12).unwrap()))
            .await;
        assert!(matches!(result, Err(SourceError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_bad_body_is_malformed() {
        let app = Router::new().route(
            "/rest/v1/liturgical_calendar",
            get(|| async { "{\"message\": \"not a list\"}" }),
        );
        let source = source(serve(app).await);

        let result = source
            .fetch(&EventQuery::InRange(DateRange::month(2025, 12).unwrap()))
            .await;
        assert!(matches!(
            result,
            Err(SourceError::Malformed(RecordError::Undecodable(_)))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_unavailable() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = source(format!("http://{}", addr))
            .fetch(&EventQuery::OnDate("2025-01-01".parse().unwrap()))
            .await;
        assert!(matches!(result, Err(SourceError::Unavailable(_))));
    }
}
