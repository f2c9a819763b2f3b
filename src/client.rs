//! Typed client: routes bound to a base URL, one call per verb.
//!
//! Implementation is split into submodules under `src/client/`.

pub mod builder;
pub mod core;
mod execution;
mod outcome;
mod query;
mod request_error;
mod route;

pub use builder::ClientBuilder;
pub use core::{create_client, Client, ClientOptions, RouteHandle};
pub use execution::execute;
pub use outcome::{Failure, FailureCode, Outcome, RawBody, Success};
pub use query::QueryParams;
pub use request_error::{RequestError, RequestErrorCause};
pub use route::Route;

pub use crate::pattern::PathParams;
pub use crate::transport::{RequestBody, RequestOptions};
