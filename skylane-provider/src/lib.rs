pub mod client;
pub mod token;

pub use client::{AmadeusClient, FlightProvider, OfferSearchResult, ProviderConfig};
pub use token::{Clock, IssuedToken, SystemClock, TokenCache, TokenSource};
