use std::sync::Arc;

use crate::{
    catalog::{CatalogClient, CatalogError},
    config::Config,
};

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogClient,
    pub config: Config,
}

pub type SharedAppState = Arc<AppState>;

impl AppState {
    pub fn init(config: Config) -> Result<Self, CatalogError> {
        let catalog = CatalogClient::new(&config.upstream)?;

        tracing::info!(
            api_url = %config.upstream.api_url,
            uploads_url = %config.upstream.uploads_url,
            "Catalog client ready"
        );

        Ok(AppState { catalog, config })
    }
}
