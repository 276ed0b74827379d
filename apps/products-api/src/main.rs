//! Products API - REST server over a MongoDB product collection

use axum_helpers::server::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    // Connect and ping; either failing aborts startup
    let mongo_client = database::mongodb::connect_from_config(&config.mongodb).await?;

    info!(
        database = config.mongodb.database(),
        collection = config.mongodb.collection(),
        "Using MongoDB collection"
    );

    let state = AppState::new(config, &mongo_client);

    let router = create_router::<openapi::ApiDoc>(api::routes(&state));

    info!(
        "Starting Products API on port {}",
        state.config.server.port
    );

    create_app(router, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    Ok(())
}
