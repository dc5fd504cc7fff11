//! Search-parameter validation. Rules apply in a fixed order and the first
//! failure wins, so the caller always has a single actionable message.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::error::ValidationError;
use crate::models::SearchRequest;

/// Query parameters as they arrive on the wire, before any validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    pub adults: Option<String>,
    pub children: Option<String>,
    pub infants: Option<String>,
    pub non_stop: Option<String>,
    pub max_price: Option<String>,
    pub included_airline_codes: Option<String>,
}

pub fn validate(raw: &RawSearchQuery) -> Result<SearchRequest, ValidationError> {
    validate_at(raw, Utc::now().date_naive())
}

/// Validation against an injected "today" so tests are date-stable.
/// Dates compare at day granularity; time-of-day is ignored.
pub fn validate_at(
    raw: &RawSearchQuery,
    today: NaiveDate,
) -> Result<SearchRequest, ValidationError> {
    let origin = airport_code(raw.origin.as_deref())?;
    let destination = airport_code(raw.destination.as_deref())?;

    if origin == destination {
        return Err(ValidationError::new(
            "Origin and destination cannot be the same",
        ));
    }

    let departure_date = parse_date(
        raw.departure_date.as_deref(),
        "Invalid departure date format",
    )?;
    if departure_date < today {
        return Err(ValidationError::new("Departure date cannot be in the past"));
    }

    let return_date = match raw.return_date.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(value) => {
            let date = parse_date(Some(value), "Invalid return date format")?;
            if date < departure_date {
                return Err(ValidationError::new(
                    "Return date cannot be before departure date",
                ));
            }
            Some(date)
        }
        None => None,
    };

    let adults = match raw.adults.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        None => 1,
        Some(value) => value
            .parse::<u32>()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| ValidationError::new("At least 1 adult is required"))?,
    };

    // Optional counts degrade to zero rather than failing: they are
    // best-effort provider hints, not safety-critical inputs.
    let children = lenient_count(raw.children.as_deref());
    let infants = lenient_count(raw.infants.as_deref());

    // Widened sum: the individual counts are attacker-supplied and may each
    // be up to u32::MAX, so a u32 sum could wrap past the cap.
    if u64::from(adults) + u64::from(children) + u64::from(infants) > 9 {
        return Err(ValidationError::new("Total passengers cannot exceed 9"));
    }
    if infants > adults {
        return Err(ValidationError::new(
            "Each infant must be accompanied by an adult",
        ));
    }

    let non_stop = raw.non_stop.as_deref().and_then(|v| match v.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    });
    let max_price = raw
        .max_price
        .as_deref()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|p| *p > 0);
    let included_airline_codes = raw
        .included_airline_codes
        .as_deref()
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_ascii_uppercase)
                .collect::<Vec<_>>()
        })
        .filter(|codes| !codes.is_empty());

    Ok(SearchRequest {
        origin,
        destination,
        departure_date,
        return_date,
        adults,
        children,
        infants,
        non_stop,
        max_price,
        included_airline_codes,
    })
}

fn airport_code(raw: Option<&str>) -> Result<String, ValidationError> {
    let code = raw.unwrap_or("").trim();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(ValidationError::new("Invalid airport code"))
    }
}

fn parse_date(raw: Option<&str>, message: &str) -> Result<NaiveDate, ValidationError> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .ok_or_else(|| ValidationError::new(message))
}

fn lenient_count(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok()).unwrap_or(0)
}
