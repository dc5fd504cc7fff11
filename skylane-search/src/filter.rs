use skylane_core::models::{FilterState, Flight};

/// A flight passes iff every committed filter accepts it. Plain conjunction,
/// no OR-across-categories semantics. Round-trip stop counts use the worst
/// leg of the trip.
pub fn matches_filters(flight: &Flight, filters: &FilterState) -> bool {
    let stops_ok = filters.stops.is_empty() || filters.stops.contains(&flight.filter_stops());
    let price_ok = filters.price_unbounded()
        || (flight.price >= filters.price_range.0 && flight.price <= filters.price_range.1);
    let airline_ok =
        filters.airlines.is_empty() || filters.airlines.iter().any(|a| a == &flight.airline_code);
    stops_ok && price_ok && airline_ok
}

pub fn filter_flights(flights: &[Flight], filters: &FilterState) -> Vec<Flight> {
    flights
        .iter()
        .filter(|flight| matches_filters(flight, filters))
        .cloned()
        .collect()
}
