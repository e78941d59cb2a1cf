//! Shared utilities for integration and load testing.

#![allow(dead_code)]

use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use demo_service::config::AppConfig;
use demo_service::lifecycle::{Dependencies, Shutdown};
use demo_service::store::{DocumentStore, Handle, RelationalStore, StoreError, StoreResult};
use demo_service::HttpServer;

/// Document store returning a fixed list.
pub struct FakeMongo(pub Vec<&'static str>);

#[async_trait]
impl DocumentStore for FakeMongo {
    async fn list_database_names(&self) -> StoreResult<Vec<String>> {
        Ok(self.0.iter().map(|s| s.to_string()).collect())
    }
}

/// Relational store returning a fixed version.
pub struct FakePostgres(pub &'static str);

#[async_trait]
impl RelationalStore for FakePostgres {
    async fn server_version(&self) -> StoreResult<String> {
        Ok(self.0.to_string())
    }
}

/// Store whose every call fails with the given message.
pub struct BrokenStore(pub &'static str);

#[async_trait]
impl DocumentStore for BrokenStore {
    async fn list_database_names(&self) -> StoreResult<Vec<String>> {
        Err(StoreError::Other(self.0.to_string()))
    }
}

#[async_trait]
impl RelationalStore for BrokenStore {
    async fn server_version(&self) -> StoreResult<String> {
        Err(StoreError::Other(self.0.to_string()))
    }
}

/// Store that never answers.
pub struct HangingStore;

#[async_trait]
impl DocumentStore for HangingStore {
    async fn list_database_names(&self) -> StoreResult<Vec<String>> {
        std::future::pending().await
    }
}

#[async_trait]
impl RelationalStore for HangingStore {
    async fn server_version(&self) -> StoreResult<String> {
        std::future::pending().await
    }
}

pub fn document(store: impl DocumentStore + 'static) -> Handle<dyn DocumentStore> {
    Handle::from(Arc::new(store) as Arc<dyn DocumentStore>)
}

pub fn relational(store: impl RelationalStore + 'static) -> Handle<dyn RelationalStore> {
    Handle::from(Arc::new(store) as Arc<dyn RelationalStore>)
}

/// Config with short delays and an external target that refuses connections.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.startup.delay = Duration::ZERO;
    config.endpoints.slow_delay = Duration::from_millis(200);
    config.endpoints.external_url = "http://127.0.0.1:1/todos/1".into();
    config.timeouts.document_query = Duration::from_millis(200);
    config.timeouts.relational_query = Duration::from_millis(200);
    config.timeouts.external_request = Duration::from_secs(2);
    config
}

/// A running server; shuts down when dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, route: &str) -> String {
        format!("http://{}{}", self.addr, route)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the service on an ephemeral port with the given dependencies.
pub async fn start_server(config: AppConfig, deps: Dependencies) -> TestServer {
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, deps).unwrap();
    let signal = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, signal).await;
    });

    TestServer { addr, shutdown }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Start a simple mock upstream that returns a fixed JSON body.
pub async fn start_mock_backend(response: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;

                        let response_str = format!(
                            "HTTP/1.1 200 OK\r\n\
                             Content-Type: application/json\r\n\
                             Content-Length: {}\r\n\
                             Connection: close\r\n\r\n{}",
                            response.len(),
                            response
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}
