//! Application state management

use database::mongodb::{get_collection, Client, Collection};
use domain_products::ProductDocument;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub products: Collection<ProductDocument>,
}

impl AppState {
    /// Resolve the configured product collection once for the process lifetime
    pub fn new(config: Config, mongo_client: &Client) -> Self {
        let products = get_collection(
            mongo_client,
            config.mongodb.database(),
            config.mongodb.collection(),
        );

        Self { config, products }
    }
}
