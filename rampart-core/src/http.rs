// HTTP request and response types
//
// These are shim types: rampart is mounted inside a host server, so the
// request and response carry only what the security middlewares inspect.

use serde::Serialize;
use std::collections::HashMap;

/// HTTP request wrapper
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
    pub query_params: HashMap<String, String>,
    /// Peer address as reported by the host server
    pub remote_addr: Option<String>,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            headers: HashMap::new(),
            body: Vec::new(),
            query_params: HashMap::new(),
            remote_addr: None,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(name.into(), value.into());
        self
    }

    pub fn with_remote_addr(mut self, addr: impl Into<String>) -> Self {
        self.remote_addr = Some(addr.into());
        self
    }

    /// Get a header by name, tolerating lowercased keys
    pub fn header(&self, name: &str) -> Option<&String> {
        self.headers
            .get(name)
            .or_else(|| self.headers.get(&name.to_lowercase()))
    }

    /// Get a query parameter by name
    pub fn query(&self, name: &str) -> Option<&String> {
        self.query_params.get(name)
    }

    /// Whether the body is URL-encoded form data
    pub fn is_form(&self) -> bool {
        self.header("Content-Type")
            .is_some_and(|ct| ct.contains("application/x-www-form-urlencoded"))
    }

    /// Parse the body as URL-encoded form fields
    pub fn form_params(&self) -> Result<HashMap<String, String>, crate::Error> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(&self.body)
            .map_err(|e| crate::Error::BadRequest(format!("Failed to parse form data: {}", e)))?;
        Ok(pairs.into_iter().collect())
    }

    /// Resolve the client IP: first `X-Forwarded-For` hop, else the peer address
    pub fn client_ip(&self) -> Option<String> {
        if let Some(forwarded) = self.header("X-Forwarded-For") {
            let first = forwarded.split(',').map(str::trim).find(|s| !s.is_empty());
            if let Some(ip) = first {
                return Some(ip.to_string());
            }
        }
        self.remote_addr.clone()
    }
}

/// HTTP response wrapper
#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    pub fn ok() -> Self {
        Self::new(200)
    }

    pub fn no_content() -> Self {
        Self::new(204)
    }

    pub fn bad_request() -> Self {
        Self::new(400)
    }

    pub fn internal_server_error() -> Self {
        Self::new(500)
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn with_json<T: Serialize>(mut self, value: &T) -> Result<Self, crate::Error> {
        self.body =
            serde_json::to_vec(value).map_err(|e| crate::Error::Serialization(e.to_string()))?;
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        Ok(self)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Whether a header is already set, tolerating lowercased keys
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains_key(name) || self.headers.contains_key(&name.to_lowercase())
    }
}
