//! JSON lookup endpoint / Endpoint pencarian JSON
//!
//! GET /api/search?q=<word>&direction=<bugis->id|id->bugis>
//! Always answers 200 with the echoed query, the echoed direction token
//! and the ranked result list.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use kamus_bugis::config;
use kamus_bugis::kamus::{Direction, MatchResult};

use crate::state::AppState;

/// Query-string parameters / Parameter kueri pencarian
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Raw lookup text; empty when the parameter is absent / Teks pencarian mentah
    #[serde(default)]
    pub q: String,
    /// Direction token; anything but "bugis->id" flips the lookup / Arah pencarian
    #[serde(default = "default_direction")]
    pub direction: String,
}

fn default_direction() -> String {
    "bugis->id".to_string()
}

/// Response body / Badan respons pencarian
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// The query exactly as received / Kueri persis seperti diterima
    pub query: String,
    /// The direction token as received, default applied / Token arah seperti diterima
    pub direction: String,
    pub results: Vec<MatchResult>,
}

/// Dictionary lookup over JSON / Pencarian kamus lewat JSON
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let direction = Direction::from_param(&params.direction);
    let max_results = config::config().search.max_results;
    let results = state.engine.search(&params.q, direction, max_results);

    tracing::debug!(
        "API search q={:?} direction={} results={}",
        params.q,
        direction.as_param(),
        results.len()
    );

    Json(SearchResponse {
        query: params.q,
        direction: params.direction,
        results,
    })
}
