use std::sync::Arc;

use skylane_provider::FlightProvider;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn FlightProvider>,
}
