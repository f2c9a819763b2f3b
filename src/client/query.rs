//! Query-string inputs.

use crate::{Error, ErrorContext, Result};
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// The three accepted query forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParams {
    /// Used verbatim as the query string; a leading `?` is ignored.
    Raw(String),
    /// A prebuilt collection; repeated keys are kept.
    Pairs(Vec<(String, String)>),
    /// Key/value mapping; `None` values are skipped and a repeated key
    /// replaces the earlier value.
    Map(Vec<(String, Option<String>)>),
}

impl QueryParams {
    pub fn pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        QueryParams::Pairs(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: ToString,
        I: IntoIterator<Item = (K, Option<V>)>,
    {
        QueryParams::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.map(|v| v.to_string())))
                .collect(),
        )
    }

    /// Flatten a serializable struct or map into [`QueryParams::Map`].
    ///
    /// `null` (e.g. `Option::None`) entries are skipped, strings are used as
    /// is, other scalars are stringified and nested values are JSON-encoded.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let value = serde_json::to_value(value).map_err(|e| {
            Error::configuration_with_context(
                "query parameters must serialize to a JSON object",
                ErrorContext::new()
                    .with_details(e.to_string())
                    .with_source("query_params"),
            )
        })?;
        let Value::Object(fields) = value else {
            return Err(Error::configuration_with_context(
                "query parameters must serialize to a JSON object",
                ErrorContext::new()
                    .with_details(format!("got {}", value))
                    .with_source("query_params"),
            ));
        };

        Ok(QueryParams::Map(
            fields
                .into_iter()
                .map(|(k, v)| {
                    let v = match v {
                        Value::Null => None,
                        Value::String(s) => Some(s),
                        other => Some(other.to_string()),
                    };
                    (k, v)
                })
                .collect(),
        ))
    }

    /// Replace the query of `url` with these parameters.
    pub(crate) fn apply(&self, url: &mut Url) {
        match self {
            QueryParams::Raw(raw) => {
                let raw = raw.strip_prefix('?').unwrap_or(raw);
                url.set_query(if raw.is_empty() { None } else { Some(raw) });
            }
            QueryParams::Pairs(pairs) => {
                url.set_query(None);
                if !pairs.is_empty() {
                    url.query_pairs_mut().extend_pairs(pairs.iter());
                }
            }
            QueryParams::Map(entries) => {
                let mut merged: Vec<(&str, &str)> = Vec::new();
                for (key, value) in entries {
                    let Some(value) = value else { continue };
                    match merged.iter_mut().find(|(k, _)| *k == key.as_str()) {
                        Some(slot) => slot.1 = value.as_str(),
                        None => merged.push((key.as_str(), value.as_str())),
                    }
                }
                url.set_query(None);
                if !merged.is_empty() {
                    url.query_pairs_mut().extend_pairs(merged);
                }
            }
        }
    }
}

impl From<&str> for QueryParams {
    fn from(raw: &str) -> Self {
        QueryParams::Raw(raw.to_string())
    }
}

impl From<String> for QueryParams {
    fn from(raw: String) -> Self {
        QueryParams::Raw(raw)
    }
}

impl From<Vec<(String, String)>> for QueryParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        QueryParams::Pairs(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    fn applied(query: QueryParams) -> String {
        let mut url = Url::parse("https://api.example.com/posts?stale=1").unwrap();
        query.apply(&mut url);
        url.query().unwrap_or_default().to_string()
    }

    #[test]
    fn raw_query_is_used_verbatim() {
        assert_eq!(applied("?page=2&sort=desc".into()), "page=2&sort=desc");
        assert_eq!(applied("page=2".into()), "page=2");
        assert_eq!(applied("".into()), "");
    }

    #[test]
    fn pairs_keep_duplicates() {
        let q = QueryParams::pairs([("tag", "a"), ("tag", "b")]);
        assert_eq!(applied(q), "tag=a&tag=b");
    }

    #[test]
    fn map_skips_absent_and_replaces_repeats() {
        let q = QueryParams::map([("page", Some(1)), ("limit", None), ("page", Some(3))]);
        assert_eq!(applied(q), "page=3");
    }

    #[test]
    fn values_are_form_encoded() {
        let q = QueryParams::pairs([("q", "rust & go")]);
        assert_eq!(applied(q), "q=rust+%26+go");
    }

    #[derive(Serialize)]
    struct Filter {
        user_id: u32,
        published: bool,
        title: Option<String>,
        author: &'static str,
    }

    #[test]
    fn from_serialize_stringifies_scalars() {
        let q = QueryParams::from_serialize(&Filter {
            user_id: 7,
            published: true,
            title: None,
            author: "ann",
        })
        .unwrap();
        assert_eq!(applied(q), "author=ann&published=true&user_id=7");
    }

    #[test]
    fn from_serialize_rejects_non_objects() {
        assert!(QueryParams::from_serialize(&[1, 2]).is_err());
    }
}
