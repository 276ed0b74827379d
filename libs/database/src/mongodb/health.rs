use mongodb::{
    Client,
    bson::doc,
    options::{ReadPreference, SelectionCriteria},
};
use std::time::{Duration, Instant};

use super::MongoError;

/// Ping the primary and return the round-trip time
///
/// Runs `{ ping: 1 }` against the `admin` database with a primary read
/// preference, which forces server selection and a real round trip.
pub async fn ping(client: &Client) -> Result<Duration, MongoError> {
    let start = Instant::now();

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .selection_criteria(SelectionCriteria::ReadPreference(ReadPreference::Primary))
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    Ok(start.elapsed())
}
