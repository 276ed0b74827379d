//! MongoDB database connector and utilities
//!
//! Provides connection management and MongoDB-specific helpers.

mod config;
mod connector;
mod health;

pub use config::{DEFAULT_COLLECTION, DEFAULT_DATABASE, DEFAULT_URL, MongoConfig};
pub use connector::{MongoError, connect, connect_from_config, get_collection};
pub use health::ping;

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
