pub mod error;
pub mod models;
pub mod offer;
pub mod validate;

pub use error::{AuthError, ProviderError, SearchError, TransformError, ValidationError};
pub use models::{Airport, FilterState, Flight, FlightEndpoint, FlightLeg, SearchRequest, SortKey};
pub use validate::{validate, RawSearchQuery};

/// Location keywords shorter than this never reach the provider.
pub const MIN_KEYWORD_LEN: usize = 2;
