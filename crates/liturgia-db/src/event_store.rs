use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use liturgia_core::{EventQuery, EventRow, EventSource, FetchedEvents, SourceError};

const SELECT_EVENTS: &str = "SELECT id, date, title, celebration_type, liturgical_season, \
     liturgical_color, rank, is_local_celebration, description, patron_of, readings_reference \
     FROM liturgical_calendar";

/// A `liturgical_calendar` row as SQLite returns it.
#[derive(Debug, sqlx::FromRow)]
struct SqlEventRow {
    id: String,
    date: String,
    title: String,
    celebration_type: String,
    liturgical_season: String,
    liturgical_color: String,
    rank: i32,
    is_local_celebration: bool,
    description: Option<String>,
    patron_of: Option<String>,
    readings_reference: Option<String>,
}

impl From<SqlEventRow> for EventRow {
    fn from(r: SqlEventRow) -> Self {
        Self {
            id: r.id,
            date: r.date,
            title: r.title,
            celebration_type: r.celebration_type,
            liturgical_season: r.liturgical_season,
            liturgical_color: r.liturgical_color,
            rank: r.rank,
            is_local_celebration: r.is_local_celebration,
            description: r.description,
            patron_of: r.patron_of,
            readings_reference: r.readings_reference,
        }
    }
}

/// SQLite implementation of EventSource.
#[derive(Clone)]
pub struct SqliteEventStore {
    pool: SqlitePool,
}

impl SqliteEventStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn select(&self, query: &EventQuery) -> Result<Vec<SqlEventRow>, sqlx::Error> {
        let range = query.range();
        let mut builder = QueryBuilder::<Sqlite>::new(SELECT_EVENTS);

        // Stored dates may carry a time part; compare on the day prefix.
        builder
            .push(" WHERE substr(date, 1, 10) BETWEEN ")
            .push_bind(range.start.to_string())
            .push(" AND ")
            .push_bind(range.end.to_string());

        match query {
            EventQuery::OnDate(_) | EventQuery::InRange(_) | EventQuery::Search { .. } => {}
            EventQuery::ByType {
                celebration_type, ..
            } => {
                builder
                    .push(" AND celebration_type = ")
                    .push_bind(celebration_type.as_str());
            }
            EventQuery::BySeason { season, .. } => {
                builder
                    .push(" AND liturgical_season = ")
                    .push_bind(season.as_str());
            }
            EventQuery::ByLocality { is_local, .. } => {
                builder
                    .push(" AND is_local_celebration = ")
                    .push_bind(*is_local);
            }
        }

        builder.push(" ORDER BY substr(date, 1, 10) ASC, rank DESC, rowid ASC");
        builder
            .build_query_as::<SqlEventRow>()
            .fetch_all(&self.pool)
            .await
    }
}

impl EventSource for SqliteEventStore {
    async fn fetch(&self, query: &EventQuery) -> Result<FetchedEvents, SourceError> {
        let rows = self.select(query).await.map_err(|e| {
            tracing::error!("SQLite query failed for {}: {}", query, e);
            SourceError::Unavailable(e.to_string())
        })?;

        let mut fetched = FetchedEvents::from_rows(rows.into_iter().map(EventRow::from));
        if !fetched.rejected.is_empty() {
            tracing::warn!(
                "Skipped {} malformed rows for {}",
                fetched.rejected.len(),
                query
            );
        }

        // SQLite's LIKE and lower() fold ASCII only, so text search runs here.
        if let EventQuery::Search { .. } = query {
            fetched.events.retain(|e| query.matches(e));
            query.sort(&mut fetched.events);
        }

        Ok(fetched)
    }
}

/// Insert an event row. An empty id gets a fresh UUID.
///
/// Returns the stored id and whether the row was new; an existing id keeps
/// its original values.
pub async fn insert_event(pool: &SqlitePool, row: &EventRow) -> Result<(String, bool), sqlx::Error> {
    let id = if row.id.trim().is_empty() {
        Uuid::new_v4().to_string()
    } else {
        row.id.clone()
    };

    let result = sqlx::query(
        r#"
        INSERT INTO liturgical_calendar (
            id, date, title, celebration_type, liturgical_season, liturgical_color,
            rank, is_local_celebration, description, patron_of, readings_reference
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(id) DO NOTHING
        "#,
    )
    .bind(&id)
    .bind(&row.date)
    .bind(&row.title)
    .bind(&row.celebration_type)
    .bind(&row.liturgical_season)
    .bind(&row.liturgical_color)
    .bind(row.rank)
    .bind(row.is_local_celebration)
    .bind(&row.description)
    .bind(&row.patron_of)
    .bind(&row.readings_reference)
    .execute(pool)
    .await?;

    Ok((id, result.rows_affected() > 0))
}
