/// Shared application state
use crate::config::Config;
use crate::store::Store;

/// Everything handlers need, shared through `web::Data`: the configuration
/// and the in-memory stores.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub store: Store,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: Store::new(),
        }
    }
}
