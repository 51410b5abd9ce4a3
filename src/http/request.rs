//! Recorded HTTP request with a body buffered exactly once.

use super::RequestError;
use bytes::Bytes;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, Method, Request, Uri};

/// An HTTP request whose body has already been read into memory.
///
/// Request bodies in `hyper` are one-shot streams. A `RecordedRequest` holds
/// the bytes instead, so the same value can be compared any number of times.
/// An absent body is an empty buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordedRequest {
    /// HTTP method, compared case-insensitively.
    pub method: Method,
    /// Target URI, compared by its rendered string.
    pub uri: Uri,
    /// Header multimap. Names are case-insensitive, values keep insertion order.
    pub headers: HeaderMap,
    /// Buffered body.
    pub body: Bytes,
}

impl RecordedRequest {
    /// Create a request with no headers and an empty body.
    pub fn new(method: Method, uri: Uri) -> Self {
        Self {
            method,
            uri,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Start building a request from raw strings.
    pub fn builder(method: impl Into<String>, uri: impl Into<String>) -> RecordedRequestBuilder {
        RecordedRequestBuilder {
            method: method.into(),
            uri: uri.into(),
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// Append a header value, keeping any values already present for `name`.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Replace the body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Whether the request carries any body bytes.
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    /// Get the body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

impl From<Request<Bytes>> for RecordedRequest {
    fn from(request: Request<Bytes>) -> Self {
        let (parts, body) = request.into_parts();
        Self {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body,
        }
    }
}

impl std::fmt::Display for RecordedRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} headers={{", self.method, self.uri)?;
        for (i, name) in self.headers.keys().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let values: Vec<String> = self
                .headers
                .get_all(name)
                .iter()
                .map(|v| String::from_utf8_lossy(v.as_bytes()).to_string())
                .collect();
            write!(f, "{}: {:?}", name, values)?;
        }
        write!(f, "}} body={:?}", self.text())
    }
}

/// Builder for [`RecordedRequest`] that validates raw strings on `build`.
#[derive(Debug, Clone)]
pub struct RecordedRequestBuilder {
    method: String,
    uri: String,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl RecordedRequestBuilder {
    /// Append a header. Repeated names accumulate values in call order.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the request body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Parse every part and assemble the request.
    pub fn build(self) -> Result<RecordedRequest, RequestError> {
        let method = Method::from_bytes(self.method.as_bytes())?;
        let uri: Uri = self.uri.parse()?;

        let mut headers = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())?;
            let value = HeaderValue::from_str(&value)?;
            headers.append(name, value);
        }

        Ok(RecordedRequest {
            method,
            uri,
            headers,
            body: self.body,
        })
    }
}
