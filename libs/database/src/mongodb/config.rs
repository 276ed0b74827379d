#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_first_of, env_or_default};

/// Connection string used when no URL is configured
pub const DEFAULT_URL: &str = "mongodb://mongo-db:27017";

/// Database used when no database name is configured
pub const DEFAULT_DATABASE: &str = "shopweb";

/// Collection used when no collection name is configured
pub const DEFAULT_COLLECTION: &str = "products";

/// MongoDB connection settings
///
/// Constructed manually or loaded from environment variables (with the
/// `config` feature).
///
/// # Example
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "shopweb");
/// let config = MongoConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: String,

    /// Database name to use
    pub database: String,

    /// Collection holding the service's documents
    pub collection: String,

    /// Optional application name for server logs
    pub app_name: Option<String>,
}

impl MongoConfig {
    /// Create a config for `url` with the default database and collection
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Create a config with a specific database name
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            ..Self::default()
        }
    }

    /// Override the collection name
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Set the application name for server logs
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            app_name: None,
        }
    }
}

/// Load MongoConfig from environment variables
///
/// - `MONGODB_URL` or `MONGO_URL` (default: `mongodb://mongo-db:27017`)
/// - `MONGODB_DATABASE` or `MONGO_DATABASE` (default: `shopweb`)
/// - `MONGODB_COLLECTION` (default: `products`)
/// - `MONGODB_APP_NAME` (optional)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_first_of(&["MONGODB_URL", "MONGO_URL"])
            .unwrap_or_else(|| DEFAULT_URL.to_string());
        let database = env_first_of(&["MONGODB_DATABASE", "MONGO_DATABASE"])
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());
        let collection = env_or_default("MONGODB_COLLECTION", DEFAULT_COLLECTION);
        let app_name = std::env::var("MONGODB_APP_NAME").ok();

        Ok(Self {
            url,
            database,
            collection,
            app_name,
        })
    }
}
