//! Liturgia - JSON service over the liturgical calendar engine.

pub mod config;
pub mod models;
pub mod routes;
pub mod source;
pub mod state;

pub use config::{Config, ConfigError, RemoteConfig};
pub use models::{ApiError, ApiResponse};
pub use routes::create_router;
pub use source::AnyEventSource;
pub use state::AppState;
