use thiserror::Error;

/// A user-correctable input problem. The message is surfaced verbatim as the
/// single actionable error for the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Credential exchange failure. Not user-correctable; detail is logged
/// server-side and the client only ever sees a generic message.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("credential exchange rejected: {0}")]
    Rejected(String),
    #[error("credential endpoint unreachable: {0}")]
    Network(String),
}

/// Upstream search failure: rate limit, malformed query, outage.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Non-2xx response. The message is the provider's first structured
    /// error detail when the body parsed, otherwise a generic fallback.
    #[error("{message}")]
    Upstream { status: u16, message: String },
    #[error("provider request failed: {0}")]
    Network(String),
}

/// A provider offer that violates the documented contract (missing
/// itineraries or segments, unparseable price). Never silently skipped:
/// swallowing a corrupt offer would under-report available flights.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("offer {offer_id} has no itineraries")]
    MissingItinerary { offer_id: String },
    #[error("offer {offer_id} itinerary {index} has no segments")]
    EmptySegments { offer_id: String, index: usize },
    #[error("offer {offer_id} has unparseable total price {total:?}")]
    BadPrice { offer_id: String, total: String },
}

/// Any failure while executing a provider-backed search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Transform(#[from] TransformError),
}
