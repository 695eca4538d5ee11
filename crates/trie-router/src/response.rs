//! HTTP response type.

use std::collections::HashMap;

const CONTENT_TYPE: &str = "Content-Type";

/// An HTTP response produced by a handler.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Creates an empty response with the given status.
    #[must_use]
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Creates a 200 OK response.
    #[must_use]
    pub fn ok() -> Self {
        Self::new(200)
    }

    /// Creates a 200 response with plain text content.
    pub fn text(body: impl Into<String>) -> Self {
        let body: String = body.into();
        Self::ok()
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(body)
    }

    /// Creates a 200 response with JSON content, or a 500 if serialization fails.
    pub fn json<T: serde::Serialize>(data: &T) -> Self {
        match serde_json::to_vec(data) {
            Ok(body) => Self::ok().header(CONTENT_TYPE, "application/json").body(body),
            Err(_) => Self::internal_server_error(),
        }
    }

    /// The "no route" response.
    #[must_use]
    pub fn not_found() -> Self {
        Self::new(404).body("Not Found")
    }

    /// Creates a 500 Internal Server Error response.
    #[must_use]
    pub fn internal_server_error() -> Self {
        Self::new(500).body("Internal Server Error")
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the status code.
    #[must_use]
    pub const fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the body as a string.
    #[must_use]
    pub fn body_string(&self) -> Option<String> {
        String::from_utf8(self.body.clone()).ok()
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text() {
        let res = Response::text("hi");
        assert_eq!(res.status, 200);
        assert_eq!(
            res.headers.get(CONTENT_TYPE),
            Some(&"text/plain; charset=utf-8".to_string())
        );
        assert_eq!(res.body_string(), Some("hi".to_string()));
    }

    #[test]
    fn test_response_json() {
        let res = Response::json(&serde_json::json!({"name": "test"}));
        assert_eq!(res.status, 200);
        assert_eq!(
            res.headers.get(CONTENT_TYPE),
            Some(&"application/json".to_string())
        );
        assert_eq!(res.body_string(), Some(r#"{"name":"test"}"#.to_string()));
    }

    #[test]
    fn test_not_found() {
        let res = Response::not_found();
        assert_eq!(res.status, 404);
        assert_eq!(res.body_string(), Some("Not Found".to_string()));
    }

    #[test]
    fn test_response_builder() {
        let res = Response::ok().status(201).header("X-Custom", "value").body("Hello");
        assert_eq!(res.status, 201);
        assert_eq!(res.headers.get("X-Custom"), Some(&"value".to_string()));
    }
}
