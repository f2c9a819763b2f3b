use crate::client::core::{Client, ClientOptions};
use crate::client::execution::parse_base_url;
use crate::client::route::Route;
use crate::transport::{HttpTransport, RequestOptions, Transport};
use crate::{Error, ErrorContext, Result};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Builder for [`Client`].
///
/// The base URL falls back to `EXTER_BASE_URL` when not set explicitly.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    default_request_options: RequestOptions,
    transport: Option<Arc<dyn Transport>>,
    routes: Vec<Route>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Settings merged into every call (per-call overrides win per field).
    pub fn default_request_options(mut self, options: RequestOptions) -> Self {
        self.default_request_options = options;
        self
    }

    /// Send through a custom transport instead of [`HttpTransport`].
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    pub fn routes(mut self, routes: impl IntoIterator<Item = Route>) -> Self {
        self.routes.extend(routes);
        self
    }

    pub fn build(self) -> Result<Client> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => std::env::var("EXTER_BASE_URL").map_err(|_| {
                Error::configuration_with_context(
                    "base URL is required",
                    ErrorContext::new()
                        .with_field_path("base_url")
                        .with_details("set it on the builder or via EXTER_BASE_URL")
                        .with_source("client_builder"),
                )
            })?,
        };
        // Parse now so a bad URL fails here instead of on the first call.
        parse_base_url(&base_url)?;

        let mut seen = HashSet::new();
        for route in &self.routes {
            if !seen.insert(route.endpoint()) {
                warn!(
                    endpoint = route.endpoint(),
                    "duplicate endpoint; lookups resolve to the first definition"
                );
            }
        }

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new()?),
        };

        debug!(
            base_url = base_url.as_str(),
            routes = self.routes.len(),
            "client built"
        );

        Ok(Client {
            routes: Arc::new(self.routes),
            options: ClientOptions {
                base_url,
                default_request_options: self.default_request_options,
            },
            transport,
        })
    }
}
