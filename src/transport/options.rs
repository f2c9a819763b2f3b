use bytes::Bytes;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::time::Duration;

/// Request body variants understood by the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Text(String),
    Bytes(Bytes),
    Form(Vec<(String, String)>),
}

/// Per-request transport settings.
///
/// Client defaults and per-call overrides are combined with
/// [`RequestOptions::merge`].
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: Option<HeaderMap>,
    pub body: Option<RequestBody>,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn json(self, value: Value) -> Self {
        self.body(RequestBody::Json(value))
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Field-level merge: any field set in `overrides` replaces the default.
    ///
    /// Headers are replaced as a whole, not merged key by key.
    pub fn merge(defaults: &RequestOptions, overrides: Option<&RequestOptions>) -> RequestOptions {
        let Some(overrides) = overrides else {
            return defaults.clone();
        };
        RequestOptions {
            headers: overrides.headers.clone().or_else(|| defaults.headers.clone()),
            body: overrides.body.clone().or_else(|| defaults.body.clone()),
            timeout: overrides.timeout.or(defaults.timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use serde_json::json;

    fn headers(name: &'static str, value: &'static str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(name, HeaderValue::from_static(value));
        map
    }

    #[test]
    fn without_overrides_defaults_apply() {
        let defaults = RequestOptions::new()
            .headers(headers("x-api-key", "secret"))
            .timeout(Duration::from_secs(5));
        let merged = RequestOptions::merge(&defaults, None);
        assert_eq!(merged.timeout, Some(Duration::from_secs(5)));
        assert_eq!(merged.headers.unwrap()["x-api-key"], "secret");
    }

    #[test]
    fn overrides_win_per_field() {
        let defaults = RequestOptions::new()
            .headers(headers("x-api-key", "secret"))
            .timeout(Duration::from_secs(5));
        let overrides = RequestOptions::new().json(json!({"title": "new"}));

        let merged = RequestOptions::merge(&defaults, Some(&overrides));
        assert_eq!(merged.body, Some(RequestBody::Json(json!({"title": "new"}))));
        assert_eq!(merged.timeout, Some(Duration::from_secs(5)));
        assert!(merged.headers.unwrap().contains_key("x-api-key"));
    }

    #[test]
    fn override_headers_replace_defaults() {
        let defaults = RequestOptions::new().headers(headers("x-api-key", "secret"));
        let overrides = RequestOptions::new().headers(headers("x-trace", "1"));

        let merged = RequestOptions::merge(&defaults, Some(&overrides)).headers.unwrap();
        assert!(merged.contains_key("x-trace"));
        assert!(!merged.contains_key("x-api-key"));
    }
}
