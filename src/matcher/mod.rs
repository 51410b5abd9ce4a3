//! Matchers consulted by a mocking framework when checking recorded calls.

mod http_request;

pub use http_request::HttpRequestMatcher;

use std::any::Any;

/// A predicate over an argument recorded by a test double.
///
/// `matches` receives the argument type-erased; implementations downcast and
/// answer `false` for anything they do not understand. Neither method may
/// fail or panic.
///
/// Pass the argument itself, not a box around it. For a stored
/// `Box<dyn Any>`, call `matcher.matches(&*boxed)`: `&boxed` coerces to a
/// `&dyn Any` whose concrete type is the `Box`, which never downcasts to a
/// request.
pub trait Matcher: Send + Sync {
    /// Whether `actual` satisfies the expectation.
    fn matches(&self, actual: &dyn Any) -> bool;

    /// Describe the expectation for assertion failure output.
    fn describe(&self) -> String;
}
