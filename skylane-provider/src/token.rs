//! Bearer-credential cache for the travel-data provider. Clock and
//! credential exchange are both injected so tests can simulate expiry and
//! count exchanges without wall-clock sleeps.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;

use skylane_core::error::AuthError;

/// Subtracted from the provider-reported lifetime so a token is refreshed
/// comfortably before it can expire mid-request.
pub const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Injected time source.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A freshly issued bearer credential and its provider-reported lifetime.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: Duration,
}

/// The credential-exchange half of the OAuth2 client-credentials flow.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn exchange(&self) -> Result<IssuedToken, AuthError>;
}

struct TokenState {
    token: String,
    /// Expiry instant already reduced by [`EXPIRY_MARGIN`], so the cached
    /// read path is a single comparison.
    deadline: Instant,
}

/// Caches one bearer token and refreshes it on expiry. Concurrent cold
/// callers coalesce onto a single outstanding exchange: the lock is held
/// across the refresh, and later callers find the fresh token on re-check
/// instead of issuing exchanges of their own.
pub struct TokenCache<S, C = SystemClock> {
    source: S,
    clock: C,
    state: Mutex<Option<TokenState>>,
}

impl<S: TokenSource> TokenCache<S> {
    pub fn new(source: S) -> Self {
        Self::with_clock(source, SystemClock)
    }
}

impl<S: TokenSource, C: Clock> TokenCache<S, C> {
    pub fn with_clock(source: S, clock: C) -> Self {
        Self {
            source,
            clock,
            state: Mutex::new(None),
        }
    }

    /// The cached token while it is comfortably before expiry, otherwise the
    /// result of one fresh credential exchange.
    pub async fn token(&self) -> Result<String, AuthError> {
        let mut state = self.state.lock().await;
        if let Some(current) = state.as_ref() {
            if self.clock.now() < current.deadline {
                return Ok(current.token.clone());
            }
        }
        self.refresh_locked(&mut state).await
    }

    /// Replace a token the provider rejected with 401. Callers whose
    /// rejected token was already replaced by a concurrent refresh get the
    /// cached replacement instead of issuing another exchange.
    pub async fn refresh_stale(&self, rejected: &str) -> Result<String, AuthError> {
        let mut state = self.state.lock().await;
        if let Some(current) = state.as_ref() {
            if current.token != rejected {
                return Ok(current.token.clone());
            }
        }
        *state = None;
        self.refresh_locked(&mut state).await
    }

    async fn refresh_locked(
        &self,
        state: &mut Option<TokenState>,
    ) -> Result<String, AuthError> {
        let issued = self.source.exchange().await?;
        let deadline = self.clock.now() + issued.expires_in.saturating_sub(EXPIRY_MARGIN);
        *state = Some(TokenState {
            token: issued.access_token.clone(),
            deadline,
        });
        tracing::debug!("refreshed provider access token");
        Ok(issued.access_token)
    }
}
