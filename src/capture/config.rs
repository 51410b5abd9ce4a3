//! Capture configuration.

use serde::{Deserialize, Serialize};

/// Limits applied while buffering a request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Maximum body size in bytes. Larger bodies are treated as unreadable.
    /// `None` reads bodies of any size.
    pub max_body_size: Option<usize>,
}

impl CaptureConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum body size.
    pub fn max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = Some(max_body_size);
        self
    }
}
