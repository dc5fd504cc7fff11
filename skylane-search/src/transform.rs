//! Conversion of provider offers into the display model. Pure functions, no
//! I/O, no side effects.

use std::collections::HashMap;

use skylane_core::error::TransformError;
use skylane_core::models::{Flight, FlightEndpoint, FlightLeg};
use skylane_core::offer::{Itinerary, ProviderOffer};

/// Convert an ISO-8601 `PT#H#M` duration (either component optional) into
/// `"{hours}h {minutes}m"`. Already-humanized or unrecognized input passes
/// through unchanged rather than being silently zeroed.
pub fn parse_duration(input: &str) -> String {
    match parse_iso_duration(input) {
        Some((hours, minutes)) => format!("{}h {}m", hours, minutes),
        None => input.to_string(),
    }
}

fn parse_iso_duration(input: &str) -> Option<(u32, u32)> {
    let rest = input.strip_prefix("PT")?;
    let (hours, rest) = take_component(rest, 'H');
    let (minutes, rest) = take_component(rest, 'M');
    if !rest.is_empty() {
        return None;
    }
    Some((hours.unwrap_or(0), minutes.unwrap_or(0)))
}

fn take_component(input: &str, unit: char) -> (Option<u32>, &str) {
    let digits_end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    if digits_end == 0 {
        return (None, input);
    }
    match input[digits_end..].strip_prefix(unit) {
        Some(rest) => (input[..digits_end].parse().ok(), rest),
        None => (None, input),
    }
}

/// Derive the display model from one provider offer, resolving carrier and
/// aircraft codes via the accompanying dictionaries.
///
/// An offer with no itineraries or an empty segment list violates the
/// provider contract and fails loudly; skipping it would silently
/// under-report available flights.
pub fn transform_offer(
    offer: &ProviderOffer,
    carriers: &HashMap<String, String>,
    aircraft: &HashMap<String, String>,
) -> Result<Flight, TransformError> {
    let outbound = offer
        .itineraries
        .first()
        .ok_or_else(|| TransformError::MissingItinerary {
            offer_id: offer.id.clone(),
        })?;
    let leg = build_leg(&offer.id, 0, outbound, carriers, aircraft)?;

    let price: f64 = offer
        .price
        .total
        .parse()
        .map_err(|_| TransformError::BadPrice {
            offer_id: offer.id.clone(),
            total: offer.price.total.clone(),
        })?;

    // Return leg present iff the offer priced two directions. No separate
    // price: a round-trip total covers both.
    let return_flight = match offer.itineraries.get(1) {
        Some(itinerary) => Some(build_leg(&offer.id, 1, itinerary, carriers, aircraft)?),
        None => None,
    };

    Ok(Flight {
        id: offer.id.clone(),
        airline: leg.airline,
        airline_code: leg.airline_code,
        flight_number: leg.flight_number,
        departure: leg.departure,
        arrival: leg.arrival,
        duration: leg.duration,
        stops: leg.stops,
        price,
        currency: offer.price.currency.clone(),
        aircraft: leg.aircraft,
        seats_available: offer.number_of_bookable_seats,
        return_flight,
    })
}

fn build_leg(
    offer_id: &str,
    index: usize,
    itinerary: &Itinerary,
    carriers: &HashMap<String, String>,
    aircraft: &HashMap<String, String>,
) -> Result<FlightLeg, TransformError> {
    let first = itinerary
        .segments
        .first()
        .ok_or_else(|| TransformError::EmptySegments {
            offer_id: offer_id.to_string(),
            index,
        })?;
    let last = itinerary.segments.last().unwrap_or(first);

    Ok(FlightLeg {
        airline: resolve(carriers, &first.carrier_code),
        airline_code: first.carrier_code.clone(),
        flight_number: format!("{}{}", first.carrier_code, first.number),
        departure: endpoint_of(&first.departure),
        arrival: endpoint_of(&last.arrival),
        duration: parse_duration(&itinerary.duration),
        stops: (itinerary.segments.len() - 1) as u32,
        aircraft: resolve(aircraft, &first.aircraft.code),
    })
}

fn endpoint_of(endpoint: &skylane_core::offer::SegmentEndpoint) -> FlightEndpoint {
    FlightEndpoint {
        airport: endpoint.iata_code.clone(),
        time: endpoint.at.clone(),
        terminal: endpoint.terminal.clone(),
    }
}

fn resolve(dictionary: &HashMap<String, String>, code: &str) -> String {
    dictionary
        .get(code)
        .cloned()
        .unwrap_or_else(|| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{offer_with_itineraries, segment};

    #[test]
    fn iso_durations_humanize() {
        assert_eq!(parse_duration("PT2H30M"), "2h 30m");
        assert_eq!(parse_duration("PT45M"), "0h 45m");
        assert_eq!(parse_duration("PT5H"), "5h 0m");
    }

    #[test]
    fn unparseable_durations_pass_through() {
        assert_eq!(parse_duration("2h 30m"), "2h 30m");
        assert_eq!(parse_duration("PT2X30M"), "PT2X30M");
        assert_eq!(parse_duration(""), "");
    }

    #[test]
    fn one_way_offer_has_no_return_leg() {
        let offer = offer_with_itineraries(vec![vec![segment("JFK", "LHR", "BA", "112")]]);
        let flight = transform_offer(&offer, &HashMap::new(), &HashMap::new()).unwrap();
        assert!(flight.return_flight.is_none());
        assert_eq!(flight.stops, 0);
        assert_eq!(flight.flight_number, "BA112");
    }

    #[test]
    fn round_trip_return_leg_derives_from_second_itinerary() {
        let offer = offer_with_itineraries(vec![
            vec![segment("JFK", "LHR", "BA", "112")],
            vec![
                segment("LHR", "CDG", "AF", "90"),
                segment("CDG", "JFK", "AF", "22"),
            ],
        ]);
        let flight = transform_offer(&offer, &HashMap::new(), &HashMap::new()).unwrap();

        let ret = flight.return_flight.expect("return leg present");
        assert_eq!(ret.departure.airport, "LHR");
        assert_eq!(ret.arrival.airport, "JFK");
        assert_eq!(ret.stops, 1);
        assert_eq!(ret.airline_code, "AF");
        assert_eq!(ret.flight_number, "AF90");
    }

    #[test]
    fn multi_segment_itinerary_collapses_to_endpoints_and_stop_count() {
        let offer = offer_with_itineraries(vec![vec![
            segment("AAA", "BBB", "XX", "1"),
            segment("BBB", "CCC", "XX", "2"),
            segment("CCC", "DDD", "XX", "3"),
        ]]);
        let flight = transform_offer(&offer, &HashMap::new(), &HashMap::new()).unwrap();

        assert_eq!(flight.departure.airport, "AAA");
        assert_eq!(flight.arrival.airport, "DDD");
        assert_eq!(flight.stops, 2);
    }

    #[test]
    fn dictionary_resolution_falls_back_to_raw_code() {
        let offer = offer_with_itineraries(vec![vec![segment("JFK", "LHR", "BA", "112")]]);

        let mut carriers = HashMap::new();
        carriers.insert("BA".to_string(), "BRITISH AIRWAYS".to_string());
        let flight = transform_offer(&offer, &carriers, &HashMap::new()).unwrap();
        assert_eq!(flight.airline, "BRITISH AIRWAYS");
        // Aircraft dictionary had no entry for the code.
        assert_eq!(flight.aircraft, "77W");

        let flight = transform_offer(&offer, &HashMap::new(), &HashMap::new()).unwrap();
        assert_eq!(flight.airline, "BA");
    }

    #[test]
    fn offer_without_itineraries_fails_loudly() {
        let offer = offer_with_itineraries(vec![]);
        let err = transform_offer(&offer, &HashMap::new(), &HashMap::new()).unwrap_err();
        assert!(matches!(err, TransformError::MissingItinerary { .. }));
    }

    #[test]
    fn itinerary_without_segments_fails_loudly() {
        let offer = offer_with_itineraries(vec![vec![]]);
        let err = transform_offer(&offer, &HashMap::new(), &HashMap::new()).unwrap_err();
        assert!(matches!(
            err,
            TransformError::EmptySegments { index: 0, .. }
        ));
    }

    #[test]
    fn unparseable_price_is_a_contract_violation() {
        let mut offer = offer_with_itineraries(vec![vec![segment("JFK", "LHR", "BA", "112")]]);
        offer.price.total = "free".to_string();
        let err = transform_offer(&offer, &HashMap::new(), &HashMap::new()).unwrap_err();
        assert!(matches!(err, TransformError::BadPrice { .. }));
    }

    #[test]
    fn price_and_seats_carry_over() {
        let offer = offer_with_itineraries(vec![vec![segment("JFK", "LHR", "BA", "112")]]);
        let flight = transform_offer(&offer, &HashMap::new(), &HashMap::new()).unwrap();
        assert!((flight.price - 512.30).abs() < f64::EPSILON);
        assert_eq!(flight.currency, "USD");
        assert_eq!(flight.seats_available, 4);
    }
}
