//! MongoDB-backed document store.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::Client;
use std::time::Duration;

use crate::resilience::with_deadline;
use crate::store::{DocumentStore, StoreError, StoreResult};

/// Document store wrapping a single long-lived MongoDB client.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
}

impl MongoStore {
    /// Parse the URI, build the client and ping the `admin` database.
    ///
    /// The driver connects lazily, so the ping is what proves reachability.
    /// Both steps share one deadline.
    pub async fn connect(uri: &str, timeout: Duration) -> StoreResult<Self> {
        with_deadline("mongo connect", timeout, async {
            let client = Client::with_uri_str(uri).await?;
            client.database("admin").run_command(doc! { "ping": 1 }).await?;
            Ok::<_, StoreError>(Self { client })
        })
        .await
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn list_database_names(&self) -> StoreResult<Vec<String>> {
        Ok(self.client.list_database_names().await?)
    }
}
