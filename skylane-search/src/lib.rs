pub mod filter;
pub mod histogram;
pub mod latest;
pub mod page;
pub mod sort;
pub mod stats;
pub mod transform;
pub mod view;

pub use filter::{filter_flights, matches_filters};
pub use histogram::{price_histogram, PriceBucket};
pub use latest::LatestGuard;
pub use page::{paginate, PAGE_SIZE};
pub use sort::{duration_minutes, sort_flights};
pub use stats::{recompute_defaults, PriceStats};
pub use transform::{parse_duration, transform_offer};
pub use view::ViewState;

#[cfg(test)]
pub(crate) mod testutil;
