//! HTTP transport for the gateway.
//!
//! The transport knows nothing about endpoints: it receives a fully resolved
//! [`HttpRequest`] plus the credential snapshot for that call, performs
//! exactly one round trip and normalizes the outcome.

mod http;

pub use http::HttpTransport;

use serde_json::Value;

/// HTTP verbs used by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request ready for the wire: path segments are unencoded and are
/// appended to the base URL one by one.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Slash-joined path, without query string.
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            path.push_str(segment);
        }
        path
    }
}

/// A successful round trip: the 2xx status and the decoded body.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request went out but no response came back (connection refused,
    /// timeout, reset, DNS failure, ...).
    #[error("No response received: {0}")]
    NoResponse(#[source] reqwest::Error),

    /// A response arrived but its body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The request could not be constructed.
    #[error("Request error: {0}")]
    Request(String),
}

impl TransportError {
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_builder() {
            TransportError::Request(err.to_string())
        } else {
            TransportError::NoResponse(err)
        }
    }
}
