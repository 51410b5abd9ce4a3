//! Errors raised while building a recorded request.

use hyper::header::{InvalidHeaderName, InvalidHeaderValue};
use hyper::http::method::InvalidMethod;
use hyper::http::uri::InvalidUri;

/// Failure to assemble a [`RecordedRequest`](super::RecordedRequest) from raw parts.
///
/// Only the builder returns this. Matching itself never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The method is not a valid HTTP token.
    Method(String),
    /// The target could not be parsed as a URI.
    Uri(String),
    /// A header name is not a valid token.
    HeaderName(String),
    /// A header value contains forbidden bytes.
    HeaderValue(String),
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::Method(msg) => write!(f, "invalid method: {}", msg),
            RequestError::Uri(msg) => write!(f, "invalid uri: {}", msg),
            RequestError::HeaderName(msg) => write!(f, "invalid header name: {}", msg),
            RequestError::HeaderValue(msg) => write!(f, "invalid header value: {}", msg),
        }
    }
}

impl std::error::Error for RequestError {}

impl From<InvalidMethod> for RequestError {
    fn from(err: InvalidMethod) -> Self {
        RequestError::Method(err.to_string())
    }
}

impl From<InvalidUri> for RequestError {
    fn from(err: InvalidUri) -> Self {
        RequestError::Uri(err.to_string())
    }
}

impl From<InvalidHeaderName> for RequestError {
    fn from(err: InvalidHeaderName) -> Self {
        RequestError::HeaderName(err.to_string())
    }
}

impl From<InvalidHeaderValue> for RequestError {
    fn from(err: InvalidHeaderValue) -> Self {
        RequestError::HeaderValue(err.to_string())
    }
}
