//! Endpoint descriptors and per-call request construction.

use crate::transport::{HttpMethod, HttpRequest};
use crate::{Error, ErrorContext, Result};
use serde_json::Value;

/// Whether the selected instance name is appended as the last path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Global,
    Instance,
}

/// Which credential authenticates the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// The client's active credential (global key or instance key).
    Active,
    /// Always the global key, regardless of the active credential.
    Global,
}

/// A fixed verb + path pair on the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: &'static str,
    pub scope: Scope,
    pub auth: Auth,
}

impl Endpoint {
    const fn instance(method: HttpMethod, path: &'static str) -> Self {
        Self {
            method,
            path,
            scope: Scope::Instance,
            auth: Auth::Active,
        }
    }

    pub const fn get(path: &'static str) -> Self {
        Self::instance(HttpMethod::Get, path)
    }

    pub const fn post(path: &'static str) -> Self {
        Self::instance(HttpMethod::Post, path)
    }

    pub const fn put(path: &'static str) -> Self {
        Self::instance(HttpMethod::Put, path)
    }

    pub const fn delete(path: &'static str) -> Self {
        Self::instance(HttpMethod::Delete, path)
    }

    /// Do not append the instance name.
    pub const fn unscoped(self) -> Self {
        Self {
            scope: Scope::Global,
            ..self
        }
    }

    /// Authenticate with the global key.
    pub const fn with_global_auth(self) -> Self {
        Self {
            auth: Auth::Global,
            ..self
        }
    }
}

/// One call against an [`Endpoint`]. Built fresh per call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    endpoint: Endpoint,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl ApiRequest {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            segments: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Extra path segment placed after the endpoint path and before the
    /// instance name.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Add a query parameter only when a non-empty value is present.
    pub fn query_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value.map(|v| v.to_string()) {
            Some(v) if !v.is_empty() => self.query(key, v),
            _ => self,
        }
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Resolve the final path. Instance-scoped endpoints need a non-empty
    /// instance name.
    pub fn resolve(self, instance: Option<&str>) -> Result<HttpRequest> {
        let mut segments: Vec<String> = self
            .endpoint
            .path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        segments.extend(self.segments);

        if self.endpoint.scope == Scope::Instance {
            let name = instance.filter(|n| !n.is_empty()).ok_or_else(|| {
                Error::validation_with_context(
                    "no instance selected",
                    ErrorContext::new()
                        .with_field_path("instance")
                        .with_details(format!("{} {}", self.endpoint.method, self.endpoint.path))
                        .with_source("dispatch"),
                )
            })?;
            segments.push(name.to_string());
        }

        Ok(HttpRequest {
            method: self.endpoint.method,
            segments,
            query: self.query,
            body: self.body,
        })
    }
}
