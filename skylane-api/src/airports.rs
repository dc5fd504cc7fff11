use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use skylane_core::MIN_KEYWORD_LEN;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AirportQuery {
    pub keyword: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/airports", get(search_airports))
}

/// Keyword lookup for the origin/destination autocomplete. Short keywords
/// produce an empty list without touching the provider: one- and
/// two-character prefixes match too much to be useful.
async fn search_airports(
    State(state): State<AppState>,
    Query(query): Query<AirportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let keyword = query.keyword.unwrap_or_default();
    let keyword = keyword.trim();
    if keyword.chars().count() < MIN_KEYWORD_LEN {
        return Ok(Json(json!({ "airports": [] })));
    }

    let airports = state.provider.search_locations(keyword).await?;
    Ok(Json(json!({ "airports": airports })))
}
