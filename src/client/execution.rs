//! Request execution: one transport call, then success or error mapping.

use crate::client::outcome::{Failure, FailureCode, Outcome, RawBody, Success};
use crate::client::query::QueryParams;
use crate::client::request_error::RequestError;
use crate::client::route::Route;
use crate::client::ClientOptions;
use crate::pattern::PathParams;
use crate::schema::{summarize, Validation};
use crate::transport::{RequestOptions, Transport, TransportRequest, TransportResponse};
use crate::{Error, ErrorContext, Result};
use reqwest::Method;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info, Instrument};
use url::Url;
use uuid::Uuid;

/// Perform one call against `route`.
///
/// Template and configuration problems are returned as `Err`, as is a
/// transport failure that produced no response. Every HTTP response,
/// whatever its status or body, becomes an [`Outcome`].
pub async fn execute(
    method: Method,
    route: &Route,
    params: &PathParams,
    query: Option<&QueryParams>,
    options: &ClientOptions,
    overrides: Option<&RequestOptions>,
    transport: &dyn Transport,
) -> Result<Outcome> {
    let path = route.pattern().format(params)?;
    let url = resolve_url(&options.base_url, &path, query)?;
    let request_options = RequestOptions::merge(&options.default_request_options, overrides);

    let request_id = Uuid::new_v4().to_string();
    let span = tracing::debug_span!(
        "exter_request",
        request_id = request_id.as_str(),
        method = method.as_str(),
        endpoint = route.endpoint(),
    );

    async move {
        debug!(url = url.as_str(), "dispatching request");
        let start = Instant::now();

        let response = transport
            .send(TransportRequest {
                method,
                url,
                options: request_options,
            })
            .await?;

        let outcome = if response.is_success() {
            handle_success_response(route, response)
        } else {
            handle_error_response(route, response)
        };

        match &outcome {
            Outcome::Success(s) => debug!(
                http_status = s.response.status,
                duration_ms = start.elapsed().as_millis() as u64,
                "request succeeded"
            ),
            Outcome::Failure(f) => info!(
                http_status = f.response.status,
                code = %f.code,
                endpoint = route.endpoint(),
                duration_ms = start.elapsed().as_millis() as u64,
                "request failed"
            ),
        }

        Ok(outcome)
    }
    .instrument(span)
    .await
}

/// Join the base URL and a generated path, then apply the query.
///
/// One trailing `/` is removed from the base path and the generated path
/// always starts with `/`. Any query or fragment on the base URL is dropped.
pub(crate) fn resolve_url(base_url: &str, path: &str, query: Option<&QueryParams>) -> Result<Url> {
    let mut url = parse_base_url(base_url)?;

    let base_path = url.path();
    let base_path = base_path.strip_suffix('/').unwrap_or(base_path);
    let full_path = if path.starts_with('/') {
        format!("{}{}", base_path, path)
    } else {
        format!("{}/{}", base_path, path)
    };

    url.set_path(&full_path);
    url.set_query(None);
    url.set_fragment(None);

    if let Some(query) = query {
        query.apply(&mut url);
    }

    Ok(url)
}

pub(crate) fn parse_base_url(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url).map_err(|e| {
        Error::configuration_with_context(
            "invalid base URL",
            ErrorContext::new()
                .with_field_path("base_url")
                .with_details(format!("{}: {}", base_url, e))
                .with_source("url_resolver"),
        )
    })?;
    if url.cannot_be_a_base() {
        return Err(Error::configuration_with_context(
            "base URL cannot carry a path",
            ErrorContext::new()
                .with_field_path("base_url")
                .with_details(base_url)
                .with_source("url_resolver"),
        ));
    }
    Ok(url)
}

fn handle_error_response(route: &Route, response: TransportResponse) -> Outcome {
    let status = response.status;
    let code = FailureCode::RequestFailed(status);
    let text = response.text().into_owned();

    let (error, detail) = match serde_json::from_str::<Value>(&text) {
        Ok(body) => {
            let error = route.result().error().validate(&body).into_result().ok();
            let detail = RequestError::new(format!("Request failed with status {}", status), code);
            (error, detail)
        }
        Err(e) => {
            let detail = RequestError::new(
                format!(
                    "Request failed with status {} and could not parse error response",
                    status
                ),
                code,
            )
            .with_cause(e);
            (None, detail)
        }
    };

    let detail = detail
        .with_status(status, response.status_text.as_str())
        .with_url(&response.url);

    Outcome::Failure(Failure {
        code,
        error,
        raw: Some(RawBody::Text(text)),
        response,
        detail,
    })
}

fn handle_success_response(route: &Route, response: TransportResponse) -> Outcome {
    let data = match response.json() {
        Ok(data) => data,
        Err(e) => {
            let code = FailureCode::CouldNotParseJson;
            let detail = RequestError::new("Failed to parse response as JSON", code)
                .with_cause(e)
                .with_status(response.status, response.status_text.as_str())
                .with_url(&response.url);
            return Outcome::Failure(Failure {
                code,
                error: None,
                raw: Some(RawBody::Text(response.text().into_owned())),
                response,
                detail,
            });
        }
    };

    match route.result().data().validate(&data) {
        Validation::Value(value) => Outcome::Success(Success {
            data: value,
            raw: data,
            response,
        }),
        Validation::Issues(issues) => {
            debug!(issues = summarize(&issues).as_str(), "response validation failed");
            let code = FailureCode::ResponseValidationFailed;
            let detail = RequestError::new("Response validation failed", code)
                .with_cause(issues)
                .with_status(response.status, response.status_text.as_str())
                .with_url(&response.url);
            Outcome::Failure(Failure {
                code,
                error: None,
                raw: Some(RawBody::Json(data)),
                response,
                detail,
            })
        }
    }
}
