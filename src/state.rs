use std::sync::Arc;

use liturgia_engine::{CalendarEngine, EngineOptions, SystemClock};

use crate::source::AnyEventSource;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<CalendarEngine<AnyEventSource>>,
}

impl AppState {
    pub fn new(source: AnyEventSource, options: EngineOptions) -> Self {
        let engine = CalendarEngine::with_clock(Arc::new(source), SystemClock, options);
        Self {
            engine: Arc::new(engine),
        }
    }
}
