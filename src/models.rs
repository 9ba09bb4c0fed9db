use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use liturgia_core::{DateInput, YearRange};
use liturgia_engine::{CalendarIssue, EngineError, Resolution};

/// Body of every calendar response. `issues` is empty unless the answer degraded.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub issues: Vec<CalendarIssue>,
}

impl<T> From<Resolution<T>> for ApiResponse<T> {
    fn from(r: Resolution<T>) -> Self {
        Self {
            data: r.value,
            issues: r.issues,
        }
    }
}

/// Query parameters naming a single day; absent means today.
#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

impl DateQuery {
    pub fn input(self) -> Option<DateInput> {
        self.date.map(DateInput::from)
    }
}

#[derive(Debug, Deserialize)]
pub struct TodayQuery {
    pub days: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct UpcomingQuery {
    pub days: Option<u32>,
    #[serde(default)]
    pub local_only: bool,
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub filter: Option<String>,
    pub max_per_day: Option<usize>,
}

/// `year` alone is one year; `year` and `to_year` an inclusive span.
#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: Option<i32>,
    pub to_year: Option<i32>,
}

impl YearQuery {
    pub fn years(&self) -> Option<YearRange> {
        year_span(self.year, self.to_year)
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub year: Option<i32>,
    pub to_year: Option<i32>,
}

impl SearchQuery {
    pub fn years(&self) -> Option<YearRange> {
        year_span(self.year, self.to_year)
    }
}

fn year_span(year: Option<i32>, to_year: Option<i32>) -> Option<YearRange> {
    match (year, to_year) {
        (None, None) => None,
        (Some(y), None) | (None, Some(y)) => Some(YearRange::single(y)),
        (Some(a), Some(b)) => Some(YearRange::new(a, b)),
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Failures a calendar handler turns into an error status.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Engine(EngineError),
}

impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        ApiError::Engine(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Engine(e) => {
                tracing::error!("Calendar request failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_span() {
        assert_eq!(year_span(None, None), None);
        assert_eq!(year_span(Some(2025), None), Some(YearRange::single(2025)));
        assert_eq!(year_span(None, Some(2024)), Some(YearRange::single(2024)));
        assert_eq!(
            year_span(Some(2026), Some(2024)),
            Some(YearRange::new(2024, 2026))
        );
    }
}
