//! Authenticated HTTP client for the travel-data provider's location and
//! flight-offer search endpoints.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use skylane_core::error::{AuthError, ProviderError, SearchError, ValidationError};
use skylane_core::models::{Airport, SearchRequest};
use skylane_core::offer::{LocationSearchBody, OfferSearchBody, ProviderOffer};
use skylane_core::MIN_KEYWORD_LEN;

use crate::token::{IssuedToken, TokenCache, TokenSource};

/// Currency every offer search is priced in.
pub const OFFER_CURRENCY: &str = "USD";
/// Result cap for one offer search.
pub const OFFER_LIMIT: u32 = 50;
/// Result cap for one location search.
pub const LOCATION_LIMIT: u32 = 10;

const TOKEN_PATH: &str = "/v1/security/oauth2/token";
const LOCATIONS_PATH: &str = "/v1/reference-data/locations";
const OFFERS_PATH: &str = "/v2/shopping/flight-offers";

/// Connection settings for the provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub timeout_seconds: u64,
}

/// Offers plus the code-resolution side tables that arrived with them.
#[derive(Debug, Default)]
pub struct OfferSearchResult {
    pub offers: Vec<ProviderOffer>,
    pub carriers: HashMap<String, String>,
    pub aircraft: HashMap<String, String>,
}

/// Seam between the HTTP surface and the provider, so handlers and tests
/// depend on the contract rather than on a concrete HTTP client.
#[async_trait]
pub trait FlightProvider: Send + Sync {
    async fn search_locations(&self, keyword: &str) -> Result<Vec<Airport>, SearchError>;

    async fn search_offers(&self, req: &SearchRequest)
        -> Result<OfferSearchResult, SearchError>;
}

#[derive(Debug, Deserialize)]
struct TokenBody {
    access_token: String,
    expires_in: u64,
}

#[derive(Debug, Default, Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    errors: Vec<ProviderErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    detail: Option<String>,
}

/// Client-credentials exchange over reqwest.
pub struct ReqwestTokenSource {
    http: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
}

#[async_trait]
impl TokenSource for ReqwestTokenSource {
    async fn exchange(&self) -> Result<IssuedToken, AuthError> {
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];
        let response = self
            .http
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::Rejected(format!(
                "credential endpoint returned {}",
                response.status()
            )));
        }

        let body: TokenBody = response
            .json()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        Ok(IssuedToken {
            access_token: body.access_token,
            expires_in: Duration::from_secs(body.expires_in),
        })
    }
}

/// Provider client: token cache plus the two search operations.
pub struct AmadeusClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenCache<ReqwestTokenSource>,
}

impl AmadeusClient {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        // Every outbound call carries this timeout; expiry surfaces as an
        // error rather than a hang.
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let source = ReqwestTokenSource {
            http: http.clone(),
            token_url: format!("{}{}", config.base_url, TOKEN_PATH),
            client_id: config.client_id,
            client_secret: config.client_secret,
        };

        Ok(Self {
            http,
            base_url: config.base_url,
            tokens: TokenCache::new(source),
        })
    }

    /// Authenticated GET. A 401 forces exactly one token refresh and one
    /// retry, then the failure is permanent; this bounds the retry loop when
    /// credentials are persistently invalid.
    async fn get_authorized(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<reqwest::Response, SearchError> {
        let url = format!("{}{}", self.base_url, path);
        let token = self.tokens.token().await?;
        let response = self
            .http
            .get(&url)
            .query(query)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(map_send_error)?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        tracing::warn!(path, "provider rejected bearer token, refreshing once");
        let token = self.tokens.refresh_stale(&token).await?;
        let retried = self
            .http
            .get(&url)
            .query(query)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(map_send_error)?;
        Ok(retried)
    }
}

#[async_trait]
impl FlightProvider for AmadeusClient {
    async fn search_locations(&self, keyword: &str) -> Result<Vec<Airport>, SearchError> {
        let keyword = keyword.trim();
        if keyword.chars().count() < MIN_KEYWORD_LEN {
            return Err(
                ValidationError::new("Keyword must be at least 2 characters").into(),
            );
        }

        let query = vec![
            ("subType".to_string(), "AIRPORT,CITY".to_string()),
            ("keyword".to_string(), keyword.to_string()),
            ("page[limit]".to_string(), LOCATION_LIMIT.to_string()),
            ("sort".to_string(), "analytics.travelers.score".to_string()),
            ("view".to_string(), "LIGHT".to_string()),
        ];

        let response = self.get_authorized(LOCATIONS_PATH, &query).await?;
        if !response.status().is_success() {
            return Err(read_error(response, "Failed to search airports").await.into());
        }

        let body: LocationSearchBody = response
            .json()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(body
            .data
            .into_iter()
            .map(|location| Airport {
                id: location.id,
                code: location.iata_code,
                name: location.name,
                city: location.address.city_name,
                country: location.address.country_name,
                kind: location.sub_type,
            })
            .collect())
    }

    async fn search_offers(
        &self,
        req: &SearchRequest,
    ) -> Result<OfferSearchResult, SearchError> {
        let query = offer_query(req);
        let response = self.get_authorized(OFFERS_PATH, &query).await?;
        if !response.status().is_success() {
            return Err(read_error(response, "Failed to search flights").await.into());
        }

        let body: OfferSearchBody = response
            .json()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let dictionaries = body.dictionaries.unwrap_or_default();
        Ok(OfferSearchResult {
            offers: body.data,
            carriers: dictionaries.carriers,
            aircraft: dictionaries.aircraft,
        })
    }
}

/// Provider query for one offer search. Optional filters are emitted only
/// when present and meaningful, so default-valued hints are never sent
/// upstream where they could be misinterpreted.
pub fn offer_query(req: &SearchRequest) -> Vec<(String, String)> {
    let mut query = vec![
        ("originLocationCode".to_string(), req.origin.clone()),
        ("destinationLocationCode".to_string(), req.destination.clone()),
        (
            "departureDate".to_string(),
            req.departure_date.format("%Y-%m-%d").to_string(),
        ),
        ("adults".to_string(), req.adults.to_string()),
        ("currencyCode".to_string(), OFFER_CURRENCY.to_string()),
        ("max".to_string(), OFFER_LIMIT.to_string()),
    ];

    if let Some(return_date) = req.return_date {
        query.push((
            "returnDate".to_string(),
            return_date.format("%Y-%m-%d").to_string(),
        ));
    }
    if req.children > 0 {
        query.push(("children".to_string(), req.children.to_string()));
    }
    if req.infants > 0 {
        query.push(("infants".to_string(), req.infants.to_string()));
    }
    if req.non_stop == Some(true) {
        query.push(("nonStop".to_string(), "true".to_string()));
    }
    if let Some(max_price) = req.max_price {
        query.push(("maxPrice".to_string(), max_price.to_string()));
    }
    if let Some(codes) = req.included_airline_codes.as_ref().filter(|c| !c.is_empty()) {
        query.push(("includedAirlineCodes".to_string(), codes.join(",")));
    }

    query
}

fn map_send_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        ProviderError::Network("provider request timed out".to_string()).into()
    } else {
        ProviderError::Network(err.to_string()).into()
    }
}

/// Map a non-2xx response to a `ProviderError` carrying the first structured
/// error detail when the body parses, else the generic fallback.
async fn read_error(response: reqwest::Response, fallback: &str) -> ProviderError {
    let status = response.status().as_u16();
    let message = response
        .json::<ProviderErrorBody>()
        .await
        .ok()
        .and_then(|body| body.errors.into_iter().find_map(|e| e.detail))
        .unwrap_or_else(|| fallback.to_string());
    ProviderError::Upstream { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn base_request() -> SearchRequest {
        SearchRequest {
            origin: "JFK".to_string(),
            destination: "LHR".to_string(),
            departure_date: NaiveDate::from_ymd_opt(2025, 10, 15).unwrap(),
            return_date: None,
            adults: 1,
            children: 0,
            infants: 0,
            non_stop: None,
            max_price: None,
            included_airline_codes: None,
        }
    }

    fn keys(query: &[(String, String)]) -> Vec<&str> {
        query.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn minimal_request_emits_only_required_params() {
        let query = offer_query(&base_request());
        assert_eq!(
            keys(&query),
            vec![
                "originLocationCode",
                "destinationLocationCode",
                "departureDate",
                "adults",
                "currencyCode",
                "max",
            ]
        );
        assert!(query.contains(&("currencyCode".to_string(), "USD".to_string())));
        assert!(query.contains(&("max".to_string(), "50".to_string())));
        assert!(query.contains(&("departureDate".to_string(), "2025-10-15".to_string())));
    }

    #[test]
    fn optional_params_appear_only_when_meaningful() {
        let mut req = base_request();
        req.return_date = NaiveDate::from_ymd_opt(2025, 10, 22);
        req.children = 2;
        req.infants = 1;
        req.non_stop = Some(true);
        req.max_price = Some(800);
        req.included_airline_codes = Some(vec!["BA".to_string(), "AA".to_string()]);

        let query = offer_query(&req);
        assert!(query.contains(&("returnDate".to_string(), "2025-10-22".to_string())));
        assert!(query.contains(&("children".to_string(), "2".to_string())));
        assert!(query.contains(&("infants".to_string(), "1".to_string())));
        assert!(query.contains(&("nonStop".to_string(), "true".to_string())));
        assert!(query.contains(&("maxPrice".to_string(), "800".to_string())));
        assert!(query.contains(&(
            "includedAirlineCodes".to_string(),
            "BA,AA".to_string()
        )));
    }

    #[test]
    fn false_or_zero_hints_are_suppressed() {
        let mut req = base_request();
        req.non_stop = Some(false);
        req.children = 0;
        req.infants = 0;

        let query = offer_query(&req);
        let emitted = keys(&query);
        assert!(!emitted.contains(&"nonStop"));
        assert!(!emitted.contains(&"children"));
        assert!(!emitted.contains(&"infants"));
    }

    #[test]
    fn error_body_detail_is_preferred_over_fallback() {
        let body: ProviderErrorBody = serde_json::from_str(
            r#"{ "errors": [{ "detail": "Origin city is not supported" }, { "detail": "second" }] }"#,
        )
        .unwrap();
        let detail = body.errors.into_iter().find_map(|e| e.detail);
        assert_eq!(detail.as_deref(), Some("Origin city is not supported"));

        let empty: ProviderErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.errors.is_empty());
    }
}
