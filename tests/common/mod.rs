//! Shared utilities for integration tests.

use std::net::SocketAddr;

use header_echo::config::EchoConfig;
use header_echo::http::HttpServer;
use header_echo::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A running echo server bound to an ephemeral loopback port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let shutdown = Shutdown::new();
        let server_shutdown = shutdown.subscribe();
        let server = HttpServer::new(EchoConfig::default());

        let handle = tokio::spawn(async move {
            server.run(listener, server_shutdown).await.unwrap();
        });

        Self { addr, shutdown, handle }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) {
        self.shutdown.trigger();
        self.handle.await.unwrap();
    }
}

/// Client without pooling or system proxies so each test sees a fresh socket.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
