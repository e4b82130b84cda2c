//! Mock transport implementation for testing.
//!
//! Provides [`MockTransport`] for exercising the client against fixture
//! pages without network access.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::OschinaError;
use crate::transport::Transport;

/// HTTP method of a recorded call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET request.
    Get,
    /// POST request.
    Post,
}

/// A request received by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Request method.
    pub method: Method,
    /// Request path.
    pub path: String,
    /// Query parameters (GET) or form fields (POST), in order.
    pub params: Vec<(String, String)>,
}

impl Call {
    /// Value of the first parameter named `key`.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone)]
enum Reply {
    Body(String),
    Status(u16, String),
}

/// Mock transport for testing.
///
/// Answers each `(method, path)` with a canned reply and records every call.
/// Unregistered paths answer with HTTP 404.
///
/// # Example
///
/// ```ignore
/// use postie_oschina::{MockTransport, OschinaClient};
///
/// let transport = MockTransport::new()
///     .with_get("/admin/drafts", "<html>...</html>")
///     .with_post("/blog/save_draft", r#"{"code":1,"result":{"draft":"abc123"}}"#);
/// let client = OschinaClient::new(transport);
/// ```
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: RwLock<HashMap<(Method, String), Reply>>,
    calls: RwLock<Vec<Call>>,
}

impl MockTransport {
    /// Create a new mock with no registered replies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer GET `path` with `body`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_get(self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.reply(Method::Get, path.into(), Reply::Body(body.into()))
    }

    /// Answer POST `path` with `body`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_post(self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.reply(Method::Post, path.into(), Reply::Body(body.into()))
    }

    /// Answer `method` on `path` with an error status.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_status(
        self,
        method: Method,
        path: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        self.reply(method, path.into(), Reply::Status(status, body.into()))
    }

    /// All calls received so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.calls.read().unwrap().clone()
    }

    /// Calls received for `method` on `path`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn calls_to(&self, method: Method, path: &str) -> Vec<Call> {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|c| c.method == method && c.path == path)
            .cloned()
            .collect()
    }

    fn reply(self, method: Method, path: String, reply: Reply) -> Self {
        self.replies.write().unwrap().insert((method, path), reply);
        self
    }

    fn answer(&self, call: Call) -> Result<String, OschinaError> {
        let reply = self
            .replies
            .read()
            .unwrap()
            .get(&(call.method, call.path.clone()))
            .cloned();
        self.calls.write().unwrap().push(call);

        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Status(status, body)) => Err(OschinaError::http_status(status, body)),
            None => Err(OschinaError::http_status(404, "not found")),
        }
    }
}

impl Transport for MockTransport {
    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<String, OschinaError> {
        self.answer(Call {
            method: Method::Get,
            path: path.to_owned(),
            params: query
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        })
    }

    fn post(&self, path: &str, form: &[(&'static str, String)]) -> Result<String, OschinaError> {
        self.answer(Call {
            method: Method::Post,
            path: path.to_owned(),
            params: form
                .iter()
                .map(|(k, v)| ((*k).to_owned(), v.clone()))
                .collect(),
        })
    }
}
