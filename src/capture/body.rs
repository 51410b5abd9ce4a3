//! One-shot body reads.
//!
//! A body stream can only be read once, so every source is drained here a
//! single time and the bytes are kept in a [`RecordedRequest`]. A failed read
//! is not an error: it is logged and the body is treated as empty.

use super::CaptureConfig;
use crate::http::RecordedRequest;
use bytes::Bytes;
use http_body_util::{BodyExt, Limited};
use hyper::body::Body;
use hyper::{HeaderMap, Method, Request, Uri};
use std::io::Read;
use tracing::warn;

/// Drain a blocking reader into memory.
///
/// Read errors, and bodies over `config.max_body_size` when a limit is set,
/// yield an empty buffer. Bytes read before a failure are discarded.
pub fn read_body<R: Read>(mut reader: R, config: &CaptureConfig) -> Bytes {
    let mut buf = Vec::new();

    let result = match config.max_body_size {
        Some(max) => reader
            .take((max as u64).saturating_add(1))
            .read_to_end(&mut buf),
        None => reader.read_to_end(&mut buf),
    };

    match (result, config.max_body_size) {
        (Ok(_), Some(max)) if buf.len() > max => {
            warn!("request body exceeds {} bytes, treating it as empty", max);
            Bytes::new()
        }
        (Ok(_), _) => Bytes::from(buf),
        (Err(err), _) => {
            warn!("failed to read request body, because: {}", err);
            Bytes::new()
        }
    }
}

/// Collect an HTTP body frame by frame into memory.
///
/// Same leniency as [`read_body`]: a stream error, or an over-limit body when
/// a limit is set, is logged and produces an empty buffer.
pub async fn collect_body<B>(body: B, config: &CaptureConfig) -> Bytes
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let collected = match config.max_body_size {
        Some(max) => Limited::new(body, max).collect().await,
        None => body.collect().await.map_err(Into::into),
    };

    match collected {
        Ok(collected) => collected.to_bytes(),
        Err(err) => {
            warn!("failed to read request body, because: {}", err);
            Bytes::new()
        }
    }
}

impl RecordedRequest {
    /// Record a request whose body comes from a blocking reader.
    pub fn from_reader<R: Read>(
        method: Method,
        uri: Uri,
        headers: HeaderMap,
        reader: R,
        config: &CaptureConfig,
    ) -> Self {
        Self {
            method,
            uri,
            headers,
            body: read_body(reader, config),
        }
    }

    /// Record a `hyper` request, consuming its body stream.
    pub async fn capture<B>(request: Request<B>, config: &CaptureConfig) -> Self
    where
        B: Body,
        B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let (parts, body) = request.into_parts();
        Self {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body: collect_body(body, config).await,
        }
    }
}
