//! # reqmatch - HTTP request matcher for test doubles
//!
//! `reqmatch` decides whether an outbound HTTP request observed by a mock
//! is identical to the one a test expects, so assertions can be made on the
//! shape of a request instead of on object identity.
//!
//! ## Matching
//!
//! An [`HttpRequestMatcher`] compares, in order:
//!
//! 1. the method, ignoring ASCII case
//! 2. the rendered URI, byte for byte
//! 3. the header multimap (same names, same ordered values per name)
//! 4. the body, byte for byte
//!
//! The first difference ends the comparison with `false`. A value that is not
//! request-shaped never matches.
//!
//! ## Usage
//!
//! ```rust
//! use reqmatch::prelude::*;
//!
//! let expected = RecordedRequest::builder("POST", "https://httpbin.org/get")
//!     .body("foo=bar")
//!     .build()
//!     .unwrap();
//! let matcher = HttpRequestMatcher::new(expected);
//!
//! let observed = RecordedRequest::builder("post", "https://httpbin.org/get")
//!     .body("foo=bar")
//!     .build()
//!     .unwrap();
//!
//! assert!(matcher.matches(&observed));
//! assert!(!matcher.matches(&"not a request"));
//! ```
//!
//! ## Bodies
//!
//! Body streams are one-shot. Capture a request once with
//! [`RecordedRequest::capture`] or [`RecordedRequest::from_reader`] and match
//! the buffered copy as often as needed. A body that fails to read, or exceeds
//! a limit set with [`CaptureConfig::max_body_size`], is logged as a warning
//! and recorded as empty rather than failing the capture. No limit is set by
//! default.

pub mod capture;
pub mod http;
pub mod matcher;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::capture::CaptureConfig;
    pub use crate::http::{RecordedRequest, RequestError};
    pub use crate::matcher::{HttpRequestMatcher, Matcher};
}

// Re-export for convenience
pub use capture::CaptureConfig;
pub use http::{RecordedRequest, RecordedRequestBuilder, RequestError};
pub use matcher::{HttpRequestMatcher, Matcher};
