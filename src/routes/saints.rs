use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use liturgia_core::SaintOfDay;

use crate::models::{ApiError, ApiResponse, DateQuery};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/saints", get(saints_of_day))
}

/// GET /api/saints?date=YYYY-MM-DD - Saint cards for a day.
async fn saints_of_day(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<ApiResponse<Vec<SaintOfDay>>>, ApiError> {
    let saints = state.engine.saints_of_day(query.input()).await?;
    Ok(Json(saints.into()))
}
