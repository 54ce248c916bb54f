use kamus_bugis::kamus::KamusEngine;

/// Shared application state / Status aplikasi bersama
///
/// The engine is immutable after startup, so handlers read it directly.
/// No lock is needed; axum clones the surrounding `Arc` per request.
pub struct AppState {
    pub engine: KamusEngine,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            engine: KamusEngine::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
