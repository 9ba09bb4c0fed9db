pub mod calendar;
pub mod health;
pub mod saints;

use axum::Router;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(calendar::routes())
        .merge(saints::routes())
        .merge(health::routes())
        .with_state(state)
}
