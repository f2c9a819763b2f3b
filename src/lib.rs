//! # exter
//!
//! Typed HTTP API clients built from declarative endpoint templates.
//!
//! ## Overview
//!
//! A client is a list of [`Route`]s, each pairing an endpoint template such as
//! `/users/:id{/posts/:postId}` with a schema for successful responses and an
//! optional schema for error responses. Every call returns an [`Outcome`]:
//! validated data on success, or a stable [`FailureCode`] with the decoded
//! error body and a descriptive [`client::RequestError`] on failure.
//!
//! - **Path templates**: `:param`, `*wildcard` and nestable `{optional}`
//!   groups, parsed once per route ([`pattern`])
//! - **Pluggable validation**: anything implementing [`StandardSchema`];
//!   JSON Schema, plain shape descriptors and serde types are built in
//! - **Swappable transport**: [`transport::HttpTransport`] (reqwest) by default
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use exter::{create_client, result, ClientOptions, Route};
//! use serde_json::json;
//!
//! # fn main() -> exter::Result<()> {
//! # tokio_test::block_on(async {
//! let routes = vec![Route::new(
//!     "/posts/:id",
//!     result(
//!         json!({"id": "number", "title": "string"}),
//!         Some(json!({"message": "string"}).into()),
//!     )?,
//! )?];
//! let client = create_client(routes, ClientOptions::new("https://jsonplaceholder.typicode.com"))?;
//!
//! let outcome = client.route("/posts/:id", None)?.get([("id", "1")], None).await?;
//! match outcome.code() {
//!     None => println!("title: {}", outcome.data().unwrap()["title"]),
//!     Some(code) => println!("failed: {code}"),
//! }
//! # Ok(())
//! # })
//! # }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`pattern`] | Endpoint template parsing, path generation, parameter shapes |
//! | [`schema`] | Validator capability, built-in adapters, result schemas |
//! | [`client`] | Routes, client factory, request execution, outcomes |
//! | [`transport`] | Transport seam and the reqwest implementation |
//! | [`error`] | Crate-wide error type |

pub mod client;
pub mod pattern;
pub mod schema;
pub mod transport;

// Re-export main types for convenience
pub use client::{
    create_client, Client, ClientBuilder, ClientOptions, FailureCode, Outcome, QueryParams,
    Route, RouteHandle,
};
pub use pattern::{generate_formatted_path, pattern_to_schema, PathParams};
pub use schema::{result, ResultSchema, StandardSchema, Validation};
pub use transport::{RequestBody, RequestOptions};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
