//! Database connectors
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client, startup ping and collection access
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "shopweb");
//! let client = mongodb::connect_from_config(&config).await?;
//! let db = client.database(config.database());
//! ```

#[cfg(feature = "mongodb")]
pub mod mongodb;
