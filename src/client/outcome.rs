//! The discriminated result of one client call.

use crate::client::request_error::RequestError;
use crate::transport::TransportResponse;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// Stable classification of a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureCode {
    /// Non-2xx status; displayed as `REQUEST_FAILED_<status>`.
    RequestFailed(u16),
    /// 2xx response whose body is not JSON.
    CouldNotParseJson,
    /// 2xx response rejected by the data schema.
    ResponseValidationFailed,
}

impl FailureCode {
    /// HTTP status carried by the code, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            FailureCode::RequestFailed(status) => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for FailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureCode::RequestFailed(status) => write!(f, "REQUEST_FAILED_{}", status),
            FailureCode::CouldNotParseJson => f.write_str("COULD_NOT_PARSE_JSON"),
            FailureCode::ResponseValidationFailed => f.write_str("RESPONSE_VALIDATION_FAILED"),
        }
    }
}

/// Response body as it came off the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum RawBody {
    /// Undecoded text (error responses).
    Text(String),
    /// Decoded JSON.
    Json(Value),
}

#[derive(Debug)]
pub struct Success {
    /// Value produced by the data schema.
    pub data: Value,
    /// Decoded body before validation.
    pub raw: Value,
    pub response: TransportResponse,
}

#[derive(Debug)]
pub struct Failure {
    pub code: FailureCode,
    /// Error body accepted by the route's error schema.
    pub error: Option<Value>,
    pub raw: Option<RawBody>,
    pub response: TransportResponse,
    pub detail: RequestError,
}

/// Exactly one of success or failure per call.
#[derive(Debug)]
pub enum Outcome {
    Success(Success),
    Failure(Failure),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// `None` on success.
    pub fn code(&self) -> Option<FailureCode> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(f) => Some(f.code),
        }
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            Outcome::Success(s) => Some(&s.data),
            Outcome::Failure(_) => None,
        }
    }

    /// Validated error body; always `None` on success.
    pub fn error(&self) -> Option<&Value> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(f) => f.error.as_ref(),
        }
    }

    pub fn response(&self) -> &TransportResponse {
        match self {
            Outcome::Success(s) => &s.response,
            Outcome::Failure(f) => &f.response,
        }
    }

    pub fn raw(&self) -> Option<RawBody> {
        match self {
            Outcome::Success(s) => Some(RawBody::Json(s.raw.clone())),
            Outcome::Failure(f) => f.raw.clone(),
        }
    }

    pub fn detail(&self) -> Option<&RequestError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(f) => Some(&f.detail),
        }
    }

    /// Deserialize the validated data into `T`.
    pub fn data_as<T: DeserializeOwned>(&self) -> Option<Result<T, serde_json::Error>> {
        self.data().map(|v| T::deserialize(v))
    }

    /// Deserialize the validated error body into `T`.
    pub fn error_as<T: DeserializeOwned>(&self) -> Option<Result<T, serde_json::Error>> {
        self.error().map(|v| T::deserialize(v))
    }

    pub fn into_result(self) -> Result<Success, Failure> {
        match self {
            Outcome::Success(s) => Ok(s),
            Outcome::Failure(f) => Err(f),
        }
    }
}
