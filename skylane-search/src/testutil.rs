//! Shared fixtures for the unit tests in this crate.

use skylane_core::models::{Flight, FlightEndpoint, FlightLeg};
use skylane_core::offer::{
    AircraftCode, Itinerary, OfferPrice, ProviderOffer, Segment, SegmentEndpoint,
};

pub(crate) fn segment(from: &str, to: &str, carrier: &str, number: &str) -> Segment {
    Segment {
        departure: SegmentEndpoint {
            iata_code: from.to_string(),
            at: "2025-10-01T08:00:00".to_string(),
            terminal: None,
        },
        arrival: SegmentEndpoint {
            iata_code: to.to_string(),
            at: "2025-10-01T12:00:00".to_string(),
            terminal: None,
        },
        carrier_code: carrier.to_string(),
        number: number.to_string(),
        aircraft: AircraftCode {
            code: "77W".to_string(),
        },
        duration: "PT4H0M".to_string(),
        number_of_stops: 0,
    }
}

pub(crate) fn offer_with_itineraries(itineraries: Vec<Vec<Segment>>) -> ProviderOffer {
    ProviderOffer {
        id: "offer-1".to_string(),
        price: OfferPrice {
            total: "512.30".to_string(),
            currency: "USD".to_string(),
        },
        itineraries: itineraries
            .into_iter()
            .map(|segments| Itinerary {
                duration: "PT7H30M".to_string(),
                segments,
            })
            .collect(),
        validating_airline_codes: vec!["BA".to_string()],
        number_of_bookable_seats: 4,
    }
}

pub(crate) fn flight(id: &str, price: f64, stops: u32, airline: &str) -> Flight {
    Flight {
        id: id.to_string(),
        airline: airline.to_string(),
        airline_code: airline.to_string(),
        flight_number: format!("{}100", airline),
        departure: FlightEndpoint {
            airport: "JFK".to_string(),
            time: "2025-10-01T08:00:00".to_string(),
            terminal: None,
        },
        arrival: FlightEndpoint {
            airport: "LHR".to_string(),
            time: "2025-10-01T20:00:00".to_string(),
            terminal: None,
        },
        duration: "7h 0m".to_string(),
        stops,
        price,
        currency: "USD".to_string(),
        aircraft: "Boeing 777".to_string(),
        seats_available: 5,
        return_flight: None,
    }
}

pub(crate) fn with_return(mut base: Flight, stops: u32) -> Flight {
    base.return_flight = Some(FlightLeg {
        airline: base.airline.clone(),
        airline_code: base.airline_code.clone(),
        flight_number: format!("{}101", base.airline_code),
        departure: base.arrival.clone(),
        arrival: base.departure.clone(),
        duration: "7h 30m".to_string(),
        stops,
        aircraft: base.aircraft.clone(),
    });
    base
}
