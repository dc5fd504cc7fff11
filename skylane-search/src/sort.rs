use skylane_core::models::{Flight, SortKey};

/// Sort ascending by the selected criterion. All branches use the standard
/// library's stable sorts, so ties retain relative input order and
/// pagination stays deterministic.
pub fn sort_flights(flights: &mut [Flight], key: SortKey) {
    match key {
        SortKey::Price => flights.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::Duration => flights.sort_by_key(|f| duration_minutes(&f.duration)),
        // Departure timestamps share one ISO-8601 layout, so lexicographic
        // order is chronological order.
        SortKey::Departure => flights.sort_by(|a, b| a.departure.time.cmp(&b.departure.time)),
        SortKey::Stops => flights.sort_by_key(|f| f.stops),
    }
}

/// Total minutes of a humanized `"{h}h {m}m"` duration. Durations that kept
/// their unparseable pass-through form sort last, and provider-supplied hour
/// counts too large for a u32 saturate to the same position instead of
/// overflowing.
pub fn duration_minutes(duration: &str) -> u32 {
    let mut total: Option<u32> = None;
    for token in duration.split_whitespace() {
        if let Some(hours) = token.strip_suffix('h') {
            if let Ok(value) = hours.parse::<u32>() {
                total = Some(total.unwrap_or(0).saturating_add(value.saturating_mul(60)));
                continue;
            }
        }
        if let Some(minutes) = token.strip_suffix('m') {
            if let Ok(value) = minutes.parse::<u32>() {
                total = Some(total.unwrap_or(0).saturating_add(value));
                continue;
            }
        }
        return u32::MAX;
    }
    total.unwrap_or(u32::MAX)
}
