use crate::client::builder::ClientBuilder;
use crate::client::execution::execute;
use crate::client::outcome::Outcome;
use crate::client::query::QueryParams;
use crate::client::route::Route;
use crate::pattern::PathParams;
use crate::transport::{RequestOptions, Transport};
use crate::{Error, Result};
use reqwest::Method;
use std::sync::Arc;

/// Base URL plus the transport settings merged into every call.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: String,
    pub default_request_options: RequestOptions,
}

impl ClientOptions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_request_options: RequestOptions::default(),
        }
    }

    pub fn default_request_options(mut self, options: RequestOptions) -> Self {
        self.default_request_options = options;
        self
    }
}

/// A set of routes bound to one base URL.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) routes: Arc<Vec<Route>>,
    pub(crate) options: ClientOptions,
    pub(crate) transport: Arc<dyn Transport>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn base_url(&self) -> &str {
        &self.options.base_url
    }

    /// Look up a route by its exact endpoint template.
    ///
    /// The first matching route wins. `query` is applied to every call made
    /// through the returned handle.
    pub fn route(
        &self,
        endpoint: &str,
        query: impl Into<Option<QueryParams>>,
    ) -> Result<RouteHandle<'_>> {
        let route = self
            .routes
            .iter()
            .find(|r| r.endpoint() == endpoint)
            .ok_or_else(|| Error::RouteNotFound {
                endpoint: endpoint.to_string(),
            })?;
        Ok(RouteHandle {
            client: self,
            route,
            query: query.into(),
        })
    }
}

/// Per-verb calls for one route.
#[derive(Debug, Clone)]
pub struct RouteHandle<'a> {
    client: &'a Client,
    route: &'a Route,
    query: Option<QueryParams>,
}

impl<'a> RouteHandle<'a> {
    pub fn route(&self) -> &'a Route {
        self.route
    }

    pub fn query(&self) -> Option<&QueryParams> {
        self.query.as_ref()
    }

    pub async fn get(
        &self,
        params: impl Into<PathParams>,
        overrides: impl Into<Option<RequestOptions>>,
    ) -> Result<Outcome> {
        self.request(Method::GET, params, overrides).await
    }

    pub async fn post(
        &self,
        params: impl Into<PathParams>,
        overrides: impl Into<Option<RequestOptions>>,
    ) -> Result<Outcome> {
        self.request(Method::POST, params, overrides).await
    }

    pub async fn put(
        &self,
        params: impl Into<PathParams>,
        overrides: impl Into<Option<RequestOptions>>,
    ) -> Result<Outcome> {
        self.request(Method::PUT, params, overrides).await
    }

    pub async fn delete(
        &self,
        params: impl Into<PathParams>,
        overrides: impl Into<Option<RequestOptions>>,
    ) -> Result<Outcome> {
        self.request(Method::DELETE, params, overrides).await
    }

    pub async fn patch(
        &self,
        params: impl Into<PathParams>,
        overrides: impl Into<Option<RequestOptions>>,
    ) -> Result<Outcome> {
        self.request(Method::PATCH, params, overrides).await
    }

    /// Issue one call with an arbitrary method.
    pub async fn request(
        &self,
        method: Method,
        params: impl Into<PathParams>,
        overrides: impl Into<Option<RequestOptions>>,
    ) -> Result<Outcome> {
        let params = params.into();
        let overrides = overrides.into();
        execute(
            method,
            self.route,
            &params,
            self.query.as_ref(),
            &self.client.options,
            overrides.as_ref(),
            self.client.transport.as_ref(),
        )
        .await
    }
}

/// Bind `routes` to `options`, sending with the default [`crate::transport::HttpTransport`].
///
/// Fails when the base URL does not parse or the HTTP client cannot be built.
pub fn create_client(routes: Vec<Route>, options: ClientOptions) -> Result<Client> {
    ClientBuilder::new()
        .base_url(options.base_url)
        .default_request_options(options.default_request_options)
        .routes(routes)
        .build()
}
