//! Request-shaped values the matcher compares.

mod error;
mod request;

pub use error::RequestError;
pub use request::{RecordedRequest, RecordedRequestBuilder};
