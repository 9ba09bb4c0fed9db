use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use liturgia_core::{
    CalendarStatistics, CelebrationFilter, CelebrationType, GridOptions, LiturgicalColor,
    LiturgicalEvent, LiturgicalSeason, MonthGrid, Season,
};
use liturgia_engine::{DayView, Overview};

use crate::models::{
    ApiError, ApiResponse, DateQuery, MonthQuery, SearchQuery, TodayQuery, UpcomingQuery,
    YearQuery,
};
use crate::state::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/calendar/day", get(day))
        .route("/api/calendar/today", get(today))
        .route("/api/calendar/season", get(season))
        .route("/api/calendar/color", get(color))
        .route("/api/calendar/upcoming", get(upcoming))
        .route("/api/calendar/month/{year}/{month}", get(month))
        .route("/api/calendar/type/{celebration_type}", get(by_type))
        .route("/api/calendar/season/{season}", get(by_season))
        .route("/api/calendar/local", get(local))
        .route("/api/calendar/search", get(search))
        .route("/api/calendar/stats", get(stats))
}

/// GET /api/calendar/day?date=... - Season, color, winner, events and saints.
async fn day(State(state): State<AppState>, Query(query): Query<DateQuery>) -> ApiResult<DayView> {
    Ok(Json(state.engine.day(query.input()).await?.into()))
}

/// GET /api/calendar/today?days=... - Today's view plus upcoming celebrations.
async fn today(
    State(state): State<AppState>,
    Query(query): Query<TodayQuery>,
) -> ApiResult<Overview> {
    Ok(Json(state.engine.overview(None, query.days).await?.into()))
}

async fn season(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Json<ApiResponse<LiturgicalSeason>> {
    Json(state.engine.season(query.input()).into())
}

async fn color(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> ApiResult<LiturgicalColor> {
    Ok(Json(state.engine.liturgical_color(query.input()).await?.into()))
}

/// GET /api/calendar/upcoming?days=...&local_only=... - Major or local celebrations ahead.
async fn upcoming(
    State(state): State<AppState>,
    Query(query): Query<UpcomingQuery>,
) -> ApiResult<Vec<LiturgicalEvent>> {
    let days = query
        .days
        .unwrap_or(state.engine.options().upcoming_days);
    Ok(Json(state.engine.upcoming(days, query.local_only).await?.into()))
}

/// GET /api/calendar/month/{year}/{month}?filter=...&max_per_day=... - Month grid.
async fn month(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
    Query(query): Query<MonthQuery>,
) -> ApiResult<MonthGrid> {
    let filter = match query.filter.as_deref() {
        Some(f) => f.parse::<CelebrationFilter>().map_err(ApiError::BadRequest)?,
        None => CelebrationFilter::All,
    };
    let options = GridOptions {
        max_per_day: query
            .max_per_day
            .unwrap_or(state.engine.options().grid.max_per_day),
        filter,
    };
    Ok(Json(state.engine.month_grid(year, month, options).await?.into()))
}

async fn by_type(
    State(state): State<AppState>,
    Path(celebration_type): Path<String>,
    Query(query): Query<YearQuery>,
) -> ApiResult<Vec<LiturgicalEvent>> {
    let celebration_type = celebration_type
        .parse::<CelebrationType>()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    Ok(Json(
        state
            .engine
            .events_by_type(celebration_type, query.years())
            .await?
            .into(),
    ))
}

async fn by_season(
    State(state): State<AppState>,
    Path(season): Path<String>,
    Query(query): Query<YearQuery>,
) -> ApiResult<Vec<LiturgicalEvent>> {
    let season = parse_season(&season)?;
    Ok(Json(
        state
            .engine
            .events_by_season(season, query.years())
            .await?
            .into(),
    ))
}

async fn local(
    State(state): State<AppState>,
    Query(query): Query<YearQuery>,
) -> ApiResult<Vec<LiturgicalEvent>> {
    Ok(Json(
        state.engine.local_celebrations(query.years()).await?.into(),
    ))
}

/// GET /api/calendar/search?q=... - Text search over title, description and patron.
async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Vec<LiturgicalEvent>> {
    Ok(Json(
        state
            .engine
            .search(&query.q, query.years())
            .await?
            .into(),
    ))
}

async fn stats(
    State(state): State<AppState>,
    Query(query): Query<YearQuery>,
) -> ApiResult<CalendarStatistics> {
    Ok(Json(state.engine.statistics(query.years()).await?.into()))
}

/// Season names as stored ("Tiempo Ordinario") or path-friendly ("tiempo_ordinario").
fn parse_season(raw: &str) -> Result<Season, ApiError> {
    let wanted = raw.replace('_', " ");
    Season::ALL
        .into_iter()
        .find(|s| s.as_str().eq_ignore_ascii_case(&wanted))
        .ok_or_else(|| ApiError::BadRequest(format!("unknown liturgical_season value {:?}", raw)))
}
