use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use liturgia::{create_router, AnyEventSource, AppState, Config};
use liturgia_db::{init_pool, run_migrations, SqliteEventStore};
use liturgia_rest::{RestConfig, RestEventSource};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Optional: LITURGIA_LISTEN_ADDR (default: 0.0.0.0:3000)");
            eprintln!("Optional: DATABASE_URL (default: sqlite://liturgia.db)");
            eprintln!("Optional: LITURGIA_REMOTE_URL + LITURGIA_REMOTE_KEY");
            eprintln!("Optional: LITURGIA_SOURCE_TIMEOUT_MS, LITURGIA_MAX_EVENTS_PER_DAY, LITURGIA_UPCOMING_DAYS, LITURGIA_SEASON_RULES");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting Liturgia server");
    tracing::info!("Listen address: {}", config.listen_addr);
    tracing::info!("Season rules: {:?}", config.season_rules);

    let source = match &config.remote {
        Some(remote) => {
            tracing::info!("Event source: {}", remote.url);
            AnyEventSource::Rest(RestEventSource::new(RestConfig::new(
                remote.url.clone(),
                remote.api_key.clone(),
            )))
        }
        None => {
            tracing::info!("Database: {}", config.database_url);

            let pool = match init_pool(&config.database_url).await {
                Ok(pool) => pool,
                Err(e) => {
                    eprintln!("Database connection error: {}", e);
                    std::process::exit(1);
                }
            };

            if let Err(e) = run_migrations(&pool).await {
                eprintln!("Migration error: {}", e);
                std::process::exit(1);
            }
            tracing::info!("Database migrations completed");

            AnyEventSource::Sqlite(SqliteEventStore::new(pool))
        }
    };
    tracing::info!("Using {} event source", source.kind());

    // Create app state
    let state = AppState::new(source, config.engine_options());

    // Build router
    let app = create_router(state).layer(CorsLayer::permissive());

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server running at http://{}", config.listen_addr);

    axum::serve(listener, app).await.expect("Server error");
}
