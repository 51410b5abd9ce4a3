//! Equality matcher for HTTP requests.

use super::Matcher;
use crate::http::RecordedRequest;
use bytes::Bytes;
use hyper::{HeaderMap, Method, Request, Uri};
use std::any::Any;
use tracing::debug;

/// Matches a request identical to the expected one.
///
/// Checks run in this order and stop at the first difference:
///
/// 1. method, ignoring ASCII case
/// 2. rendered URI, byte for byte
/// 3. headers: same names, same values in the same order per name
/// 4. body, byte for byte
///
/// The observed argument must be a [`RecordedRequest`] or a `hyper::Request`
/// whose body is already in memory: `Bytes`, `String`, `Vec<u8>`,
/// `&'static str`, or `()` for no body. None of these are consumed by a
/// comparison, so one matcher can be evaluated any number of times against
/// the same argument.
#[derive(Debug, Clone)]
pub struct HttpRequestMatcher {
    expected: RecordedRequest,
}

/// Borrowed view over any request-shaped value.
struct RequestParts<'a> {
    method: &'a Method,
    uri: &'a Uri,
    headers: &'a HeaderMap,
    body: &'a [u8],
}

impl<'a> From<&'a RecordedRequest> for RequestParts<'a> {
    fn from(request: &'a RecordedRequest) -> Self {
        Self {
            method: &request.method,
            uri: &request.uri,
            headers: &request.headers,
            body: &request.body,
        }
    }
}

impl<'a> From<&'a Request<Bytes>> for RequestParts<'a> {
    fn from(request: &'a Request<Bytes>) -> Self {
        Self {
            method: request.method(),
            uri: request.uri(),
            headers: request.headers(),
            body: request.body(),
        }
    }
}

impl<'a> From<&'a Request<()>> for RequestParts<'a> {
    fn from(request: &'a Request<()>) -> Self {
        Self {
            method: request.method(),
            uri: request.uri(),
            headers: request.headers(),
            body: &[],
        }
    }
}

impl<'a> From<&'a Request<String>> for RequestParts<'a> {
    fn from(request: &'a Request<String>) -> Self {
        Self {
            method: request.method(),
            uri: request.uri(),
            headers: request.headers(),
            body: request.body().as_bytes(),
        }
    }
}

impl<'a> From<&'a Request<Vec<u8>>> for RequestParts<'a> {
    fn from(request: &'a Request<Vec<u8>>) -> Self {
        Self {
            method: request.method(),
            uri: request.uri(),
            headers: request.headers(),
            body: request.body(),
        }
    }
}

impl<'a> From<&'a Request<&'static str>> for RequestParts<'a> {
    fn from(request: &'a Request<&'static str>) -> Self {
        Self {
            method: request.method(),
            uri: request.uri(),
            headers: request.headers(),
            body: request.body().as_bytes(),
        }
    }
}

impl HttpRequestMatcher {
    /// Create a matcher expecting `expected`.
    pub fn new(expected: RecordedRequest) -> Self {
        Self { expected }
    }

    /// The request this matcher expects.
    pub fn expected(&self) -> &RecordedRequest {
        &self.expected
    }

    /// Typed form of [`Matcher::matches`].
    pub fn matches_request(&self, actual: &RecordedRequest) -> bool {
        self.matches_parts(RequestParts::from(actual))
    }

    fn matches_parts(&self, actual: RequestParts<'_>) -> bool {
        let expected = RequestParts::from(&self.expected);

        if !expected
            .method
            .as_str()
            .eq_ignore_ascii_case(actual.method.as_str())
        {
            debug!("method mismatch: {} != {}", expected.method, actual.method);
            return false;
        }

        if expected.uri.to_string() != actual.uri.to_string() {
            debug!("uri mismatch: {} != {}", expected.uri, actual.uri);
            return false;
        }

        if !headers_equal(expected.headers, actual.headers) {
            debug!("header mismatch for {} {}", actual.method, actual.uri);
            return false;
        }

        if expected.body != actual.body {
            debug!(
                "body mismatch: {} bytes expected, {} bytes observed",
                expected.body.len(),
                actual.body.len()
            );
            return false;
        }

        true
    }
}

impl Matcher for HttpRequestMatcher {
    fn matches(&self, actual: &dyn Any) -> bool {
        if let Some(request) = actual.downcast_ref::<RecordedRequest>() {
            return self.matches_parts(request.into());
        }
        if let Some(request) = actual.downcast_ref::<Request<Bytes>>() {
            return self.matches_parts(request.into());
        }
        if let Some(request) = actual.downcast_ref::<Request<()>>() {
            return self.matches_parts(request.into());
        }
        if let Some(request) = actual.downcast_ref::<Request<String>>() {
            return self.matches_parts(request.into());
        }
        if let Some(request) = actual.downcast_ref::<Request<Vec<u8>>>() {
            return self.matches_parts(request.into());
        }
        if let Some(request) = actual.downcast_ref::<Request<&'static str>>() {
            return self.matches_parts(request.into());
        }
        false
    }

    fn describe(&self) -> String {
        format!("request is identical to {}", self.expected)
    }
}

impl std::fmt::Display for HttpRequestMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Same set of names, and for each name the same values in the same order.
fn headers_equal(expected: &HeaderMap, actual: &HeaderMap) -> bool {
    if expected.keys_len() != actual.keys_len() {
        return false;
    }

    expected
        .keys()
        .all(|name| expected.get_all(name).iter().eq(actual.get_all(name).iter()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::header::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(*name, HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn test_headers_equal_ignores_name_order() {
        let a = headers(&[("accept", "*/*"), ("x-test", "foo")]);
        let b = headers(&[("x-test", "foo"), ("accept", "*/*")]);
        assert!(headers_equal(&a, &b));
    }

    #[test]
    fn test_headers_equal_respects_value_order() {
        let a = headers(&[("x-test", "foo"), ("x-test", "bar")]);
        let b = headers(&[("x-test", "bar"), ("x-test", "foo")]);
        assert!(!headers_equal(&a, &b));
    }

    #[test]
    fn test_headers_equal_detects_extra_value() {
        let a = headers(&[("x-test", "foo")]);
        let b = headers(&[("x-test", "foo"), ("x-test", "foo")]);
        assert!(!headers_equal(&a, &b));
        assert!(!headers_equal(&b, &a));
    }

    #[test]
    fn test_headers_equal_detects_different_names() {
        let a = headers(&[("x-one", "foo")]);
        let b = headers(&[("x-two", "foo")]);
        assert!(!headers_equal(&a, &b));
        assert!(headers_equal(&HeaderMap::new(), &HeaderMap::new()));
    }

    #[test]
    fn test_matches_hyper_request_with_buffered_body() {
        let expected = RecordedRequest::builder("POST", "https://httpbin.org/get")
            .header("x-test", "foo")
            .body("foo=bar")
            .build()
            .unwrap();
        let matcher = HttpRequestMatcher::new(expected);

        let actual = Request::builder()
            .method("post")
            .uri("https://httpbin.org/get")
            .header("X-Test", "foo")
            .body(Bytes::from_static(b"foo=bar"))
            .unwrap();

        assert!(matcher.matches(&actual));
    }

    #[test]
    fn test_streaming_request_is_not_request_shaped() {
        let matcher = HttpRequestMatcher::new(RecordedRequest::default());
        let actual = Request::builder()
            .uri("/")
            .body(http_body_util::Full::new(Bytes::new()))
            .unwrap();

        assert!(!matcher.matches(&actual));
    }

    #[test]
    fn test_matches_in_memory_request_bodies() {
        let expected = RecordedRequest::builder("POST", "https://httpbin.org/get")
            .body("foo=bar")
            .build()
            .unwrap();
        let matcher = HttpRequestMatcher::new(expected);

        let request = || Request::builder().method("POST").uri("https://httpbin.org/get");

        assert!(matcher.matches(&request().body("foo=bar".to_string()).unwrap()));
        assert!(matcher.matches(&request().body(b"foo=bar".to_vec()).unwrap()));
        assert!(matcher.matches(&request().body("foo=bar").unwrap()));
        assert!(!matcher.matches(&request().body("other".to_string()).unwrap()));
        assert!(!matcher.matches(&request().body(()).unwrap()));
    }

    #[test]
    fn test_matches_bodyless_request() {
        let expected = RecordedRequest::builder("GET", "https://httpbin.org")
            .build()
            .unwrap();
        let matcher = HttpRequestMatcher::new(expected);

        let actual = Request::builder()
            .method("GET")
            .uri("https://httpbin.org")
            .body(())
            .unwrap();

        assert!(matcher.matches(&actual));
    }

    #[test]
    fn test_boxed_argument_must_be_dereferenced() {
        let matcher = HttpRequestMatcher::new(RecordedRequest::default());
        let boxed: Box<dyn Any> = Box::new(RecordedRequest::default());

        assert!(matcher.matches(&*boxed));
        assert!(!matcher.matches(&boxed));
    }
}
