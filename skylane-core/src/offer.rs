//! Provider wire model for flight-offer and location searches. These shapes
//! are provider-owned and read-only; the application never mutates them.

use serde::Deserialize;
use std::collections::HashMap;

/// One priced itinerary option as returned by the provider: one itinerary for
/// one-way, two for round-trip.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderOffer {
    pub id: String,
    pub price: OfferPrice,
    pub itineraries: Vec<Itinerary>,
    #[serde(default)]
    pub validating_airline_codes: Vec<String>,
    #[serde(default)]
    pub number_of_bookable_seats: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OfferPrice {
    pub total: String,
    pub currency: String,
}

/// One direction of travel, composed of one or more segments.
#[derive(Debug, Clone, Deserialize)]
pub struct Itinerary {
    pub duration: String,
    pub segments: Vec<Segment>,
}

/// A single flown leg between two airports on one carrier/flight-number.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub departure: SegmentEndpoint,
    pub arrival: SegmentEndpoint,
    pub carrier_code: String,
    pub number: String,
    pub aircraft: AircraftCode,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub number_of_stops: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentEndpoint {
    pub iata_code: String,
    pub at: String,
    pub terminal: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AircraftCode {
    pub code: String,
}

/// Code-to-display-name side tables accompanying an offer response. Provider
/// supplied and possibly incomplete; lookups fall back to the raw code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dictionaries {
    #[serde(default)]
    pub carriers: HashMap<String, String>,
    #[serde(default)]
    pub aircraft: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct OfferSearchBody {
    #[serde(default)]
    pub data: Vec<ProviderOffer>,
    pub dictionaries: Option<Dictionaries>,
}

/// A raw location-search hit.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationEntry {
    pub id: String,
    #[serde(default)]
    pub sub_type: String,
    pub name: String,
    pub iata_code: String,
    #[serde(default)]
    pub address: LocationAddress,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationAddress {
    #[serde(default)]
    pub city_name: String,
    #[serde(default)]
    pub country_name: String,
}

#[derive(Debug, Deserialize)]
pub struct LocationSearchBody {
    #[serde(default)]
    pub data: Vec<LocationEntry>,
}
