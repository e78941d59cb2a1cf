//! PostgreSQL-backed relational store.

use async_trait::async_trait;
use std::time::Duration;
use tokio_postgres::{Client, NoTls};

use crate::resilience::with_deadline;
use crate::store::{RelationalStore, StoreError, StoreResult};

const VERSION_QUERY: &str = "SELECT version()";

/// Relational store wrapping a single PostgreSQL connection.
pub struct PostgresStore {
    client: Client,
}

impl PostgresStore {
    /// Connect without TLS and spawn the connection driver.
    ///
    /// Accepts both `host=... port=...` and `postgres://` strings. If the
    /// server later drops the connection, queries fail; there is no reconnect.
    pub async fn connect(conn_str: &str, timeout: Duration) -> StoreResult<Self> {
        let (client, connection) =
            with_deadline("postgres connect", timeout, async {
                tokio_postgres::connect(conn_str, NoTls)
                    .await
                    .map_err(StoreError::from)
            })
            .await?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!(error = %e, "Postgres connection terminated");
            }
        });

        Ok(Self { client })
    }
}

#[async_trait]
impl RelationalStore for PostgresStore {
    async fn server_version(&self) -> StoreResult<String> {
        let row = self.client.query_one(VERSION_QUERY, &[]).await?;
        Ok(row.try_get::<_, String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_refused_is_an_error() {
        // Port 1 is never a PostgreSQL server.
        let res = PostgresStore::connect(
            "host=127.0.0.1 port=1 user=nobody dbname=none connect_timeout=1",
            Duration::from_secs(5),
        )
        .await;
        assert!(res.is_err());
    }
}
