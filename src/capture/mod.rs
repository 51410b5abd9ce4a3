//! Buffering request bodies from one-shot sources.

mod body;
mod config;

pub use body::{collect_body, read_body};
pub use config::CaptureConfig;
