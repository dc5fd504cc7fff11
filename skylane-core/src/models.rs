use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A validated flight search. Constructed once per submission by
/// [`crate::validate::validate`], immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    pub non_stop: Option<bool>,
    pub max_price: Option<u32>,
    pub included_airline_codes: Option<Vec<String>>,
}

impl SearchRequest {
    pub fn total_passengers(&self) -> u32 {
        self.adults + self.children + self.infants
    }

    pub fn is_round_trip(&self) -> bool {
        self.return_date.is_some()
    }
}

/// One endpoint of a flown leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightEndpoint {
    pub airport: String,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
}

/// The return direction of a round trip. Same shape as the outbound fields
/// on [`Flight`], minus price: a round-trip price is a single total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightLeg {
    pub airline: String,
    pub airline_code: String,
    pub flight_number: String,
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    pub duration: String,
    pub stops: u32,
    pub aircraft: String,
}

/// Display model derived 1:1 from a provider offer. Departure/arrival are the
/// endpoints of the outbound itinerary; intermediate segments collapse into
/// the stop count. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub airline: String,
    pub airline_code: String,
    pub flight_number: String,
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    pub duration: String,
    pub stops: u32,
    pub price: f64,
    pub currency: String,
    pub aircraft: String,
    pub seats_available: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_flight: Option<FlightLeg>,
}

impl Flight {
    /// Stop count used by the stops filter: the worst leg of the trip.
    pub fn filter_stops(&self) -> u32 {
        match &self.return_flight {
            Some(ret) => self.stops.max(ret.stops),
            None => self.stops,
        }
    }
}

/// A location-search hit, flattened for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub id: String,
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    /// Provider subtype, AIRPORT or CITY.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Committed filter selection. Empty sets mean "no constraint" and a
/// `(0.0, 0.0)` price range means unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub stops: Vec<u32>,
    pub price_range: (f64, f64),
    pub airlines: Vec<String>,
}

impl FilterState {
    pub fn unbounded() -> Self {
        Self {
            stops: Vec::new(),
            price_range: (0.0, 0.0),
            airlines: Vec::new(),
        }
    }

    pub fn price_unbounded(&self) -> bool {
        self.price_range == (0.0, 0.0)
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Sort criterion for the result list. All sorts are ascending and stable so
/// pagination stays deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Price,
    Duration,
    Departure,
    Stops,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Duration => "duration",
            SortKey::Departure => "departure",
            SortKey::Stops => "stops",
        }
    }

    pub fn parse(value: &str) -> Option<SortKey> {
        match value {
            "price" => Some(SortKey::Price),
            "duration" => Some(SortKey::Duration),
            "departure" => Some(SortKey::Departure),
            "stops" => Some(SortKey::Stops),
            _ => None,
        }
    }
}
