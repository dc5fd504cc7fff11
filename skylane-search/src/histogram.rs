use skylane_core::models::Flight;

use crate::stats::PriceStats;

/// One bar of the price histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBucket {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Partition the observed price range into `min(10, n)` equal-width buckets.
/// Every bucket is half-open on its upper bound except the last, which is
/// closed on both ends, so each flight lands in exactly one bucket. A zero
/// price range collapses to a single bucket holding everything.
pub fn price_histogram(flights: &[Flight]) -> Vec<PriceBucket> {
    let Some(stats) = PriceStats::from_flights(flights) else {
        return Vec::new();
    };

    let range = stats.max - stats.min;
    if range == 0.0 {
        return vec![PriceBucket {
            lower: stats.min,
            upper: stats.max,
            count: flights.len(),
        }];
    }

    let bucket_count = flights.len().min(10);
    let width = range / bucket_count as f64;

    (0..bucket_count)
        .map(|i| {
            let lower = stats.min + i as f64 * width;
            let upper = stats.min + (i + 1) as f64 * width;
            let last = i == bucket_count - 1;
            let count = flights
                .iter()
                .filter(|f| {
                    f.price >= lower && if last { f.price <= upper } else { f.price < upper }
                })
                .count();
            PriceBucket {
                lower,
                upper,
                count,
            }
        })
        .collect()
}
