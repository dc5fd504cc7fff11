//! Result-view state and its URL-query mirror. The selection is kept
//! bidirectionally synced with query parameters so a search plus its filters
//! is shareable and survives back/forward navigation.

use skylane_core::models::{FilterState, Flight, SortKey};

use crate::filter::filter_flights;
use crate::page::paginate;
use crate::sort::sort_flights;
use crate::stats::recompute_defaults;

/// Current sort, page, and committed filters for one result set.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub sort: SortKey,
    pub page: usize,
    pub filters: FilterState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sort: SortKey::default(),
            page: 1,
            filters: FilterState::unbounded(),
        }
    }
}

impl ViewState {
    /// Adopt a fresh flight list from a new search: filters reset to the
    /// list's observed defaults and the pager returns to page 1. Filter and
    /// sort changes within the same result set deliberately do NOT reset the
    /// page, so the user stays contextually anchored.
    pub fn new_results(&mut self, flights: &[Flight]) {
        self.filters = recompute_defaults(flights);
        self.page = 1;
    }

    /// Filter, sort, and slice one page of the flight list.
    pub fn apply(&self, flights: &[Flight]) -> Vec<Flight> {
        let mut visible = filter_flights(flights, &self.filters);
        sort_flights(&mut visible, self.sort);
        paginate(&visible, self.page).to_vec()
    }

    /// Encode the selection as URL query pairs. Unset filters are omitted so
    /// shared links stay minimal.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("sort".to_string(), self.sort.as_str().to_string()),
            ("page".to_string(), self.page.to_string()),
        ];
        if !self.filters.stops.is_empty() {
            pairs.push(("stops".to_string(), join_numbers(&self.filters.stops)));
        }
        if !self.filters.price_unbounded() {
            pairs.push(("minPrice".to_string(), self.filters.price_range.0.to_string()));
            pairs.push(("maxPrice".to_string(), self.filters.price_range.1.to_string()));
        }
        if !self.filters.airlines.is_empty() {
            pairs.push(("airlines".to_string(), self.filters.airlines.join(",")));
        }
        pairs
    }

    /// Decode a selection from URL query pairs. Malformed or missing values
    /// degrade to defaults rather than failing: URL state is a convenience,
    /// never a validity gate.
    pub fn from_query_pairs<'a, I>(pairs: I) -> ViewState
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut state = ViewState::default();
        let mut min_price: Option<f64> = None;
        let mut max_price: Option<f64> = None;

        for (key, value) in pairs {
            match key {
                "sort" => {
                    if let Some(sort) = SortKey::parse(value) {
                        state.sort = sort;
                    }
                }
                "page" => {
                    if let Ok(page) = value.parse::<usize>() {
                        if page >= 1 {
                            state.page = page;
                        }
                    }
                }
                "stops" => {
                    state.filters.stops = value
                        .split(',')
                        .filter_map(|s| s.trim().parse::<u32>().ok())
                        .collect();
                }
                "minPrice" => min_price = value.parse().ok(),
                "maxPrice" => max_price = value.parse().ok(),
                "airlines" => {
                    state.filters.airlines = value
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_ascii_uppercase)
                        .collect();
                }
                _ => {}
            }
        }

        if let (Some(min), Some(max)) = (min_price, max_price) {
            if min <= max {
                state.filters.price_range = (min, max);
            }
        }

        state
    }
}

fn join_numbers(values: &[u32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
