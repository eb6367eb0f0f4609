// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::services::backend_client::BackendClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub backend: BackendClient,
}

impl AppState {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let backend = BackendClient::new(&config.backend_url, config.request_timeout)?;
        Ok(Self::new(backend))
    }
}
