use crate::transport::{RequestBody, Transport, TransportError, TransportRequest, TransportResponse};
use async_trait::async_trait;
use reqwest::Proxy;
use std::env;
use std::time::Duration;

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a client from environment settings.
    ///
    /// - `EXTER_HTTP_TIMEOUT_SECS`: whole-request timeout (none by default)
    /// - `EXTER_PROXY_URL`: route every request through this proxy
    pub fn new() -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();

        if let Some(secs) = env::var("EXTER_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
        {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if let Ok(proxy_url) = env::var("EXTER_PROXY_URL") {
            match Proxy::all(&proxy_url) {
                Ok(proxy) => builder = builder.proxy(proxy),
                Err(e) => tracing::warn!(proxy = proxy_url.as_str(), error = %e, "ignoring invalid EXTER_PROXY_URL"),
            }
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;
        Ok(Self { client })
    }

    /// Use a preconfigured client (custom TLS, default headers, ...).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let TransportRequest {
            method,
            url,
            options,
        } = request;

        let mut req = self.client.request(method, url);

        if let Some(headers) = options.headers {
            req = req.headers(headers);
        }

        if let Some(timeout) = options.timeout {
            req = req.timeout(timeout);
        }

        req = match options.body {
            Some(RequestBody::Json(value)) => req.json(&value),
            Some(RequestBody::Text(text)) => req.body(text),
            Some(RequestBody::Bytes(bytes)) => req.body(bytes),
            Some(RequestBody::Form(pairs)) => req.form(&pairs),
            None => req,
        };

        let resp = req.send().await?;

        let status = resp.status();
        let url = resp.url().clone();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;

        Ok(TransportResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            url,
            headers,
            body,
        })
    }
}
