use mongodb::{Client, Collection, options::ClientOptions};
use tracing::info;

use super::{MongoConfig, ping};

/// Error type for MongoDB operations
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("MongoDB connection failed: {0}")]
    ConnectionFailed(String),
}

/// Connect to MongoDB and verify the server answers a ping
///
/// # Example
/// ```ignore
/// use database::mongodb::connect;
///
/// let client = connect("mongodb://localhost:27017").await?;
/// let db = client.database("shopweb");
/// ```
pub async fn connect(url: &str) -> Result<Client, MongoError> {
    connect_from_config(&MongoConfig::new(url)).await
}

/// Connect using a MongoConfig
///
/// The driver connects lazily, so the client is pinged before it is handed
/// back. Either step failing is returned as an error; callers at startup
/// treat it as fatal.
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    info!("Attempting to connect to MongoDB at {}", config.url);

    let mut options = ClientOptions::parse(&config.url).await?;

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;

    let latency = ping(&client).await?;

    info!(
        latency_ms = latency.as_millis() as u64,
        "Successfully connected to MongoDB"
    );
    Ok(client)
}

/// Typed handle to `database.collection`
///
/// Handles are cheap to clone and share the client's connection pool.
pub fn get_collection<T>(client: &Client, database: &str, collection: &str) -> Collection<T>
where
    T: Send + Sync,
{
    client.database(database).collection::<T>(collection)
}
