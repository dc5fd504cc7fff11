use skylane_core::models::{FilterState, Flight};

/// Price summary over a flight list, recomputed whenever the list identity
/// changes (a new search). Doubles as the histogram domain and as the
/// default/reset filter bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl PriceStats {
    pub fn from_flights(flights: &[Flight]) -> Option<PriceStats> {
        if flights.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for flight in flights {
            min = min.min(flight.price);
            max = max.max(flight.price);
            sum += flight.price;
        }
        Some(PriceStats {
            min,
            max,
            mean: sum / flights.len() as f64,
        })
    }
}

/// Default filter state for a fresh flight list: the full observed price
/// range and no stop or airline constraints. Pure; lives outside any UI
/// lifecycle.
pub fn recompute_defaults(flights: &[Flight]) -> FilterState {
    match PriceStats::from_flights(flights) {
        Some(stats) => FilterState {
            stops: Vec::new(),
            price_range: (stats.min, stats.max),
            airlines: Vec::new(),
        },
        None => FilterState::unbounded(),
    }
}
