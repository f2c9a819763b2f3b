//! Mock HTTP server setup for integration tests

#![allow(dead_code)]

use exter::{Client, ClientBuilder, RequestOptions, Route};
use mockito::{Mock, Server, ServerGuard};

/// Test fixture that owns a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Client pointed at the mock server
    pub fn client(&self, routes: Vec<Route>) -> Client {
        self.client_with(routes, RequestOptions::default())
    }

    pub fn client_with(&self, routes: Vec<Route>, defaults: RequestOptions) -> Client {
        ClientBuilder::new()
            .base_url(&self.base_url)
            .default_request_options(defaults)
            .routes(routes)
            .build()
            .expect("client should build against mock server")
    }

    /// Mock a JSON response for `method path`
    pub async fn mock_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock a plain-text response for `method path`
    pub async fn mock_text(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "text/plain")
            .with_body(body)
            .create_async()
            .await
    }
}
