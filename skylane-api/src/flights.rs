use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

use skylane_core::validate::{validate, RawSearchQuery};
use skylane_search::transform_offer;

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/flights", get(search_flights))
}

/// Validate the query, run one provider offer search, and return the
/// transformed flights plus the carrier dictionary for code resolution.
async fn search_flights(
    State(state): State<AppState>,
    Query(raw): Query<RawSearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let request = validate(&raw)?;

    tracing::info!(
        origin = %request.origin,
        destination = %request.destination,
        departure = %request.departure_date,
        round_trip = request.is_round_trip(),
        passengers = request.total_passengers(),
        "searching flight offers"
    );

    let result = state.provider.search_offers(&request).await?;

    let mut flights = Vec::with_capacity(result.offers.len());
    for offer in &result.offers {
        flights.push(transform_offer(offer, &result.carriers, &result.aircraft)?);
    }

    tracing::info!(count = flights.len(), "flight search complete");

    Ok(Json(json!({
        "flights": flights,
        "carriers": result.carriers,
    })))
}
