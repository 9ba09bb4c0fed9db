use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use liturgia_core::{
    project_saints, resolve_color_and_winner, select_upcoming, CalendarStatistics, CanonicalDate,
    CelebrationType, DateInput, DateRange, EventQuery, EventSource, GridOptions, LiturgicalColor,
    LiturgicalEvent, LiturgicalSeason, MonthGrid, SaintOfDay, Season, SeasonRules, SourceError,
    UpcomingFilter, YearRange, MAJOR_RANK,
};

use crate::clock::{Clock, SystemClock};
use crate::error::{CalendarIssue, EngineError, Resolution};
use crate::views::{DayView, Overview};

/// Tunables of the engine. Every field has a production default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    pub season_rules: SeasonRules,
    /// Upper bound on a single source fetch.
    pub source_timeout: Duration,
    /// Rank from which a celebration counts as major.
    pub major_rank: i32,
    pub grid: GridOptions,
    /// Default window of `overview`.
    pub upcoming_days: u32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            season_rules: SeasonRules::default(),
            source_timeout: Duration::from_secs(5),
            major_rank: MAJOR_RANK,
            grid: GridOptions::default(),
            upcoming_days: 30,
        }
    }
}

pub type EngineResult<T> = Result<Resolution<T>, EngineError>;

/// Answers calendar questions from season rules and an event source.
///
/// The engine holds no mutable state. Every fetch is bounded by
/// [`EngineOptions::source_timeout`]; an unreachable or slow source yields an
/// empty event list and an [`CalendarIssue::EventSourceUnavailable`]. Records
/// that fail validation are left out and reported as
/// [`CalendarIssue::MalformedRecord`]; only an undecodable response fails the
/// operation.
pub struct CalendarEngine<S: EventSource, C: Clock = SystemClock> {
    source: Arc<S>,
    clock: C,
    options: EngineOptions,
}

impl<S: EventSource> CalendarEngine<S, SystemClock> {
    pub fn new(source: Arc<S>) -> Self {
        Self::with_clock(source, SystemClock, EngineOptions::default())
    }
}

impl<S: EventSource, C: Clock> CalendarEngine<S, C> {
    pub fn with_clock(source: Arc<S>, clock: C, options: EngineOptions) -> Self {
        Self {
            source,
            clock,
            options,
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn today(&self) -> CanonicalDate {
        self.clock.today()
    }

    /// Normalize `input`, falling back to today when absent or unreadable.
    pub fn normalize_or_today(&self, input: Option<DateInput>) -> Resolution<CanonicalDate> {
        let Some(input) = input else {
            return Resolution::clean(self.today());
        };
        let raw = describe(&input);
        match liturgia_core::normalize(input) {
            Ok(date) => Resolution::clean(date),
            Err(e) => {
                tracing::warn!("Falling back to today: {}", e);
                Resolution::degraded(
                    self.today(),
                    CalendarIssue::InvalidDateFormat { input: raw },
                )
            }
        }
    }

    pub fn season(&self, input: Option<DateInput>) -> Resolution<LiturgicalSeason> {
        self.normalize_or_today(input)
            .map(|date| self.options.season_rules.resolve(date))
    }

    /// Events on one day, rank descending.
    pub async fn events_on(&self, input: Option<DateInput>) -> EngineResult<Vec<LiturgicalEvent>> {
        let mut issues = Vec::new();
        let date = self.normalize_or_today(input).take(&mut issues);
        let events = self.fetch(EventQuery::OnDate(date)).await?.take(&mut issues);
        Ok(Resolution {
            value: events,
            issues,
        })
    }

    /// Events in `[start, end]`, date ascending then rank descending.
    pub async fn events_in_range(
        &self,
        start: DateInput,
        end: DateInput,
    ) -> EngineResult<Vec<LiturgicalEvent>> {
        let mut issues = Vec::new();
        let start = self.normalize_or_today(Some(start)).take(&mut issues);
        let end = self.normalize_or_today(Some(end)).take(&mut issues);
        let range = DateRange::new(start, end);
        if range.is_empty() {
            return Ok(Resolution {
                value: Vec::new(),
                issues,
            });
        }
        let events = self.fetch(EventQuery::InRange(range)).await?.take(&mut issues);
        Ok(Resolution {
            value: events,
            issues,
        })
    }

    pub async fn liturgical_color(&self, input: Option<DateInput>) -> EngineResult<LiturgicalColor> {
        Ok(self.day(input).await?.map(|day| day.color))
    }

    pub async fn saints_of_day(&self, input: Option<DateInput>) -> EngineResult<Vec<SaintOfDay>> {
        Ok(self.day(input).await?.map(|day| day.saints))
    }

    /// Season, color, winning celebration and saints of a day, from one fetch.
    pub async fn day(&self, input: Option<DateInput>) -> EngineResult<DayView> {
        let mut issues = Vec::new();
        let date = self.normalize_or_today(input).take(&mut issues);
        let season = self.options.season_rules.resolve(date);
        let events = self.fetch(EventQuery::OnDate(date)).await?.take(&mut issues);

        let resolved = resolve_color_and_winner(&events, &season);
        let color = resolved.color;
        let winning_event = resolved.winner.cloned();
        let saints = project_saints(&events);

        Ok(Resolution {
            value: DayView {
                date,
                season,
                color,
                winning_event,
                events,
                saints,
            },
            issues,
        })
    }

    /// A day view joined with the upcoming window, fetched concurrently.
    /// `window_days` defaults to [`EngineOptions::upcoming_days`].
    pub async fn overview(
        &self,
        input: Option<DateInput>,
        window_days: Option<u32>,
    ) -> EngineResult<Overview> {
        let window_days = window_days.unwrap_or(self.options.upcoming_days);
        let (day, upcoming) = tokio::join!(self.day(input), self.upcoming(window_days, false));

        let mut issues = Vec::new();
        let day = day?.take(&mut issues);
        let upcoming = upcoming?.take(&mut issues);
        Ok(Resolution {
            value: Overview { day, upcoming },
            issues,
        })
    }

    /// Major or local celebrations in `[today, today + window_days]`.
    pub async fn upcoming(
        &self,
        window_days: u32,
        local_only: bool,
    ) -> EngineResult<Vec<LiturgicalEvent>> {
        let today = self.today();
        let end = today.checked_add_days(window_days).unwrap_or_else(|| {
            tracing::warn!("Upcoming window of {} days overflows; clamping", window_days);
            CanonicalDate::saturating_from(chrono::NaiveDate::MAX)
        });
        let window = DateRange::new(today, end);
        let filter = UpcomingFilter {
            local_only,
            major_rank: self.options.major_rank,
        };

        Ok(self
            .fetch(EventQuery::InRange(window))
            .await?
            .map(|events| select_upcoming(events, window, filter)))
    }

    /// All events of a month. An invalid month falls back to the current one.
    pub async fn month_events(&self, year: i32, month: u32) -> EngineResult<Vec<LiturgicalEvent>> {
        let mut issues = Vec::new();
        let range = self.month_range(year, month).take(&mut issues);
        let events = self.fetch(EventQuery::InRange(range)).await?.take(&mut issues);
        Ok(Resolution {
            value: events,
            issues,
        })
    }

    pub async fn month_grid(
        &self,
        year: i32,
        month: u32,
        options: GridOptions,
    ) -> EngineResult<MonthGrid> {
        let mut issues = Vec::new();
        let range = self.month_range(year, month).take(&mut issues);
        let events = self.fetch(EventQuery::InRange(range)).await?.take(&mut issues);
        Ok(Resolution {
            value: MonthGrid::build(range, &events, options),
            issues,
        })
    }

    pub async fn events_by_type(
        &self,
        celebration_type: CelebrationType,
        years: Option<YearRange>,
    ) -> EngineResult<Vec<LiturgicalEvent>> {
        self.fetch_over_years(years, |range| EventQuery::ByType {
            celebration_type,
            range,
        })
        .await
    }

    pub async fn events_by_season(
        &self,
        season: Season,
        years: Option<YearRange>,
    ) -> EngineResult<Vec<LiturgicalEvent>> {
        self.fetch_over_years(years, |range| EventQuery::BySeason { season, range })
            .await
    }

    pub async fn local_celebrations(
        &self,
        years: Option<YearRange>,
    ) -> EngineResult<Vec<LiturgicalEvent>> {
        self.fetch_over_years(years, |range| EventQuery::ByLocality {
            is_local: true,
            range,
        })
        .await
    }

    /// Case-insensitive text search, rank descending then date ascending.
    pub async fn search(
        &self,
        text: &str,
        years: Option<YearRange>,
    ) -> EngineResult<Vec<LiturgicalEvent>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Resolution::clean(Vec::new()));
        }
        self.fetch_over_years(years, |range| EventQuery::Search {
            text: text.to_string(),
            range,
        })
        .await
    }

    pub async fn statistics(&self, years: Option<YearRange>) -> EngineResult<CalendarStatistics> {
        let major_rank = self.options.major_rank;
        Ok(self
            .fetch_over_years(years, EventQuery::InRange)
            .await?
            .map(|events| CalendarStatistics::from_events(&events, major_rank)))
    }

    async fn fetch_over_years(
        &self,
        years: Option<YearRange>,
        query: impl FnOnce(DateRange) -> EventQuery,
    ) -> EngineResult<Vec<LiturgicalEvent>> {
        let mut issues = Vec::new();
        let range = self.year_span(years).take(&mut issues);
        let events = self.fetch(query(range)).await?.take(&mut issues);
        Ok(Resolution {
            value: events,
            issues,
        })
    }

    fn month_range(&self, year: i32, month: u32) -> Resolution<DateRange> {
        match DateRange::month(year, month) {
            Ok(range) => Resolution::clean(range),
            Err(e) => {
                tracing::warn!("Falling back to the current month: {}", e);
                let today = self.today();
                let current = DateRange::month(today.year(), today.month())
                    .unwrap_or_else(|_| DateRange::single(today));
                Resolution::degraded(
                    current,
                    CalendarIssue::InvalidDateFormat {
                        input: format!("{:04}-{:02}", year, month),
                    },
                )
            }
        }
    }

    fn year_span(&self, years: Option<YearRange>) -> Resolution<DateRange> {
        let current = YearRange::single(self.today().year());
        let years = years.unwrap_or(current);
        match years.to_date_range() {
            Ok(range) => Resolution::clean(range),
            Err(e) => {
                tracing::warn!("Falling back to the current year: {}", e);
                let fallback = current
                    .to_date_range()
                    .unwrap_or_else(|_| DateRange::single(self.today()));
                Resolution::degraded(
                    fallback,
                    CalendarIssue::InvalidDateFormat {
                        input: format!("{}..={}", years.first, years.last),
                    },
                )
            }
        }
    }

    /// One bounded source call. Transient failures degrade to an empty list
    /// and rejected records to issues; an undecodable response is fatal.
    async fn fetch(&self, query: EventQuery) -> EngineResult<Vec<LiturgicalEvent>> {
        let limit = self.options.source_timeout;
        let outcome = match timeout(limit, self.source.fetch(&query)).await {
            Ok(result) => result,
            Err(_) => Err(SourceError::Timeout(limit)),
        };

        match outcome {
            Ok(fetched) => {
                let issues = fetched
                    .rejected
                    .iter()
                    .map(|e| {
                        tracing::warn!("Skipping malformed record for {}: {}", query, e);
                        CalendarIssue::MalformedRecord {
                            reason: e.to_string(),
                        }
                    })
                    .collect();
                Ok(Resolution {
                    value: discard_strays(&query, fetched.events),
                    issues,
                })
            }
            Err(SourceError::Malformed(e)) => {
                tracing::error!("Event source returned malformed data for {}: {}", query, e);
                Err(EngineError::ContractViolation(e))
            }
            Err(e) => {
                tracing::error!("Event source failed for {}: {}", query, e);
                Ok(Resolution::degraded(
                    Vec::new(),
                    CalendarIssue::EventSourceUnavailable {
                        reason: e.to_string(),
                    },
                ))
            }
        }
    }
}

/// Drop rows whose date lies outside what was asked for.
fn discard_strays(query: &EventQuery, events: Vec<LiturgicalEvent>) -> Vec<LiturgicalEvent> {
    let range = query.range();
    events
        .into_iter()
        .filter(|event| {
            let inside = range.contains(event.date);
            if !inside {
                tracing::warn!(
                    "Dropping event {} dated {} outside {}",
                    event.id,
                    event.date,
                    range
                );
            }
            inside
        })
        .collect()
}

fn describe(input: &DateInput) -> String {
    match input {
        DateInput::Text(text) => text.clone(),
        DateInput::Date(date) => date.to_string(),
        DateInput::DateTime(dt) => dt.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use liturgia_core::test_support::event;
    use liturgia_core::{FetchedEvents, InMemoryEventSource, RecordError};

    fn date(s: &str) -> CanonicalDate {
        s.parse().unwrap()
    }

    fn engine_on(
        today: &str,
        events: Vec<LiturgicalEvent>,
    ) -> (Arc<InMemoryEventSource>, CalendarEngine<InMemoryEventSource, FixedClock>) {
        let source = Arc::new(InMemoryEventSource::with_events(events));
        let engine = CalendarEngine::with_clock(
            source.clone(),
            FixedClock(date(today)),
            EngineOptions::default(),
        );
        (source, engine)
    }

    /// Returns events for every query, including ones on other days.
    struct LeakySource(Vec<LiturgicalEvent>);

    impl EventSource for LeakySource {
        async fn fetch(&self, _query: &EventQuery) -> Result<FetchedEvents, SourceError> {
            Ok(FetchedEvents::new(self.0.clone()))
        }
    }

    struct SlowSource;

    impl EventSource for SlowSource {
        async fn fetch(&self, _query: &EventQuery) -> Result<FetchedEvents, SourceError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(FetchedEvents::default())
        }
    }

    #[tokio::test]
    async fn test_christmas_day_view() {
        let mut christmas = event("navidad", "2025-12-25", 10);
        christmas.liturgical_color = LiturgicalColor::Blanco;
        christmas.celebration_type = CelebrationType::Solemnity;
        let (_, engine) = engine_on("2025-06-01", vec![christmas]);

        let day = engine.day(Some("2025-12-25".into())).await.unwrap();
        assert!(!day.is_degraded());
        assert_eq!(day.value.season.season, Season::Navidad);
        assert_eq!(day.value.season.color, LiturgicalColor::Blanco);
        assert_eq!(day.value.color, LiturgicalColor::Blanco);
        assert_eq!(day.value.winning_event.unwrap().id, "navidad");
        assert_eq!(day.value.saints.len(), 1);
    }

    #[tokio::test]
    async fn test_highest_rank_sets_color() {
        let mut ordinary = event("a", "2025-08-15", 3);
        ordinary.liturgical_color = LiturgicalColor::Verde;
        let mut solemn = event("b", "2025-08-15", 9);
        solemn.liturgical_color = LiturgicalColor::Dorado;
        let (_, engine) = engine_on("2025-06-01", vec![ordinary, solemn]);

        let color = engine
            .liturgical_color(Some("2025-08-15".into()))
            .await
            .unwrap();
        assert_eq!(color.value, LiturgicalColor::Dorado);
    }

    #[tokio::test]
    async fn test_empty_day_uses_season_color() {
        let (_, engine) = engine_on("2025-06-01", vec![]);
        let day = engine.day(Some("2025-12-10".into())).await.unwrap();
        assert_eq!(day.value.color, LiturgicalColor::Morado);
        assert!(day.value.winning_event.is_none());
        assert!(day.value.events.is_empty());
        assert!(day.issues.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_date_falls_back_to_today() {
        let (_, engine) = engine_on("2025-01-10", vec![event("x", "2025-01-10", 4)]);

        let day = engine.day(Some("25/12/2025".into())).await.unwrap();
        assert_eq!(day.value.date, date("2025-01-10"));
        assert_eq!(day.value.season.season, Season::Navidad);
        assert_eq!(day.value.events.len(), 1);
        assert_eq!(
            day.issues,
            vec![CalendarIssue::InvalidDateFormat {
                input: "25/12/2025".to_string()
            }]
        );
    }

    #[test]
    fn test_missing_date_is_today_without_issue() {
        let (_, engine) = engine_on("2025-03-15", vec![]);
        let season = engine.season(None);
        assert!(season.issues.is_empty());
        assert_eq!(season.value.season, Season::Cuaresma);
    }

    #[tokio::test]
    async fn test_source_failure_degrades() {
        let (source, engine) = engine_on("2025-06-01", vec![event("a", "2025-12-08", 10)]);
        source.fail_with(Some(SourceError::Unavailable("connection refused".to_string())));

        let day = engine.day(Some("2025-12-08".into())).await.unwrap();
        assert!(day.value.events.is_empty());
        assert_eq!(day.value.season.season, Season::Adviento);
        assert_eq!(day.value.color, LiturgicalColor::Morado);
        assert!(matches!(
            day.issues.as_slice(),
            [CalendarIssue::EventSourceUnavailable { .. }]
        ));
    }

    #[tokio::test]
    async fn test_malformed_record_is_skipped_and_reported() {
        let mut good = event("good", "2025-02-10", 4);
        good.liturgical_color = LiturgicalColor::Blanco;
        let (source, engine) = engine_on("2025-06-01", vec![good]);
        source.reject(RecordError::UnknownVariant {
            id: "bad".to_string(),
            field: "liturgical_color",
            value: "Azul".to_string(),
        });

        let day = engine.day(Some("2025-02-10".into())).await.unwrap();
        assert_eq!(day.value.events.len(), 1);
        assert_eq!(day.value.color, LiturgicalColor::Blanco);
        assert_eq!(day.value.winning_event.unwrap().id, "good");
        assert!(matches!(
            day.issues.as_slice(),
            [CalendarIssue::MalformedRecord { reason }] if reason.contains("Azul")
        ));

        let stats = engine.statistics(Some(YearRange::single(2025))).await.unwrap();
        assert_eq!(stats.value.total_events, 1);
        assert_eq!(stats.issues.len(), 1);
    }

    #[tokio::test]
    async fn test_undecodable_response_is_fatal() {
        let (source, engine) = engine_on("2025-06-01", vec![]);
        let broken = RecordError::Undecodable("expected a list".to_string());
        source.fail_with(Some(SourceError::Malformed(broken.clone())));

        let result = engine.events_on(None).await;
        assert_eq!(result, Err(EngineError::ContractViolation(broken)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_source_times_out() {
        let engine = CalendarEngine::with_clock(
            Arc::new(SlowSource),
            FixedClock(date("2025-06-01")),
            EngineOptions {
                source_timeout: Duration::from_millis(250),
                ..EngineOptions::default()
            },
        );

        let events = engine.events_on(None).await.unwrap();
        assert!(events.value.is_empty());
        assert!(matches!(
            events.issues.as_slice(),
            [CalendarIssue::EventSourceUnavailable { .. }]
        ));
    }

    #[tokio::test]
    async fn test_rows_outside_request_are_dropped() {
        let source = Arc::new(LeakySource(vec![
            event("right", "2025-07-16", 9),
            event("wrong", "2025-07-17", 10),
        ]));
        let engine = CalendarEngine::with_clock(
            source,
            FixedClock(date("2025-06-01")),
            EngineOptions::default(),
        );

        let day = engine.day(Some("2025-07-16".into())).await.unwrap();
        assert_eq!(day.value.events.len(), 1);
        assert_eq!(day.value.winning_event.unwrap().id, "right");
    }

    #[tokio::test]
    async fn test_upcoming_window() {
        let mut local = event("local", "2025-09-18", 2);
        local.is_local_celebration = true;
        let (_, engine) = engine_on(
            "2025-09-01",
            vec![
                event("yesterday", "2025-08-31", 10),
                event("minor", "2025-09-05", 4),
                event("major", "2025-09-14", 8),
                local,
                event("edge", "2025-10-01", 9),
                event("beyond", "2025-10-02", 10),
            ],
        );

        let upcoming = engine.upcoming(30, false).await.unwrap().value;
        let ids: Vec<_> = upcoming.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["major", "local", "edge"]);
        for e in &upcoming {
            assert!(e.date >= date("2025-09-01") && e.date <= date("2025-10-01"));
        }

        let local_only = engine.upcoming(30, true).await.unwrap().value;
        assert_eq!(local_only.len(), 1);
        assert_eq!(local_only[0].id, "local");
    }

    #[tokio::test]
    async fn test_month_events_february() {
        let (_, engine) = engine_on(
            "2025-06-01",
            vec![
                event("jan", "2025-01-31", 5),
                event("first", "2025-02-01", 5),
                event("last", "2025-02-28", 5),
                event("mar", "2025-03-01", 5),
            ],
        );

        let feb = engine.month_events(2025, 2).await.unwrap();
        let ids: Vec<_> = feb.value.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["first", "last"]);
    }

    #[tokio::test]
    async fn test_invalid_month_uses_current_month() {
        let (_, engine) = engine_on("2025-06-10", vec![event("june", "2025-06-20", 5)]);

        let grid = engine
            .month_grid(2025, 13, GridOptions::default())
            .await
            .unwrap();
        assert_eq!(grid.value.month, 6);
        assert_eq!(grid.value.days.len(), 30);
        assert_eq!(grid.value.day(20).unwrap().total, 1);
        assert_eq!(
            grid.issues,
            vec![CalendarIssue::InvalidDateFormat {
                input: "2025-13".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_overview_joins_day_and_upcoming() {
        let (_, engine) = engine_on(
            "2025-11-01",
            vec![
                event("santos", "2025-11-01", 10),
                event("difuntos", "2025-11-02", 9),
            ],
        );

        let overview = engine.overview(None, None).await.unwrap();
        assert_eq!(overview.value.day.date, date("2025-11-01"));
        assert_eq!(overview.value.day.events.len(), 1);
        assert_eq!(overview.value.upcoming.len(), 2);
    }

    #[tokio::test]
    async fn test_overview_collects_issues_from_both_branches() {
        let (source, engine) = engine_on("2025-11-01", vec![]);
        source.fail_with(Some(SourceError::Unavailable("down".to_string())));

        let overview = engine.overview(Some("garbage".into()), Some(7)).await.unwrap();
        assert_eq!(overview.issues.len(), 3);
        assert_eq!(overview.value.day.season.season, Season::TiempoOrdinario);
    }

    #[tokio::test]
    async fn test_year_queries_default_to_current_year() {
        let mut local = event("carmen", "2025-07-16", 9);
        local.is_local_celebration = true;
        local.title = "Virgen del Carmen".to_string();
        let mut old = event("old", "2024-07-16", 9);
        old.is_local_celebration = true;
        let (_, engine) = engine_on("2025-03-01", vec![local, old]);

        let this_year = engine.local_celebrations(None).await.unwrap().value;
        assert_eq!(this_year.len(), 1);

        let both = engine
            .local_celebrations(Some(YearRange::new(2024, 2025)))
            .await
            .unwrap()
            .value;
        assert_eq!(both.len(), 2);

        let found = engine.search("CARMEN", None).await.unwrap().value;
        assert_eq!(found[0].id, "carmen");
        assert!(engine.search("   ", None).await.unwrap().value.is_empty());
    }

    #[tokio::test]
    async fn test_statistics_for_year() {
        let mut advent = event("a", "2025-12-08", 10);
        advent.liturgical_season = Season::Adviento;
        let (_, engine) = engine_on(
            "2025-01-01",
            vec![advent, event("b", "2025-06-01", 3), event("c", "2026-01-01", 9)],
        );

        let stats = engine.statistics(None).await.unwrap().value;
        assert_eq!(stats.total_events, 2);
        assert_eq!(stats.major_celebrations, 1);
        assert_eq!(stats.count_for_season(Season::Adviento), 1);
    }

    #[tokio::test]
    async fn test_events_in_range_reversed_is_empty() {
        let (_, engine) = engine_on("2025-01-01", vec![event("a", "2025-05-05", 1)]);
        let none = engine
            .events_in_range("2025-05-10".into(), "2025-05-01".into())
            .await
            .unwrap();
        assert!(none.value.is_empty());

        let some = engine
            .events_in_range("2025-05-01".into(), "2025-05-10T08:00:00Z".into())
            .await
            .unwrap();
        assert_eq!(some.value.len(), 1);
    }
}
