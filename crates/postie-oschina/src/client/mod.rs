//! OSChina web client.
//!
//! OSChina has no API for blog drafts, so the client drives the same pages
//! a browser does: list and edit pages are scraped, saves are form posts
//! answered with a small JSON envelope.

mod categories;
mod drafts;
#[cfg(test)]
mod fixtures;
mod publish;

pub use categories::CategorySource;

use std::time::Duration;

use scraper::Html;
use serde::Deserialize;

use crate::error::{ErrorKind, OschinaError};
use crate::transport::{HttpTransport, Transport};

/// Envelope `code` signalling success.
const CODE_OK: i64 = 1;

/// OSChina client over a [`Transport`].
///
/// Stateless between calls: every operation re-fetches the pages it needs.
pub struct OschinaClient<T = HttpTransport> {
    transport: T,
}

impl OschinaClient<HttpTransport> {
    /// Create client from config values.
    ///
    /// # Arguments
    /// * `base_url` - Personal space URL, e.g. `https://my.oschina.net/u/1234567`
    /// * `cookie` - Session cookie of a logged-in browser
    /// * `user_agent` - User agent sent with every request
    /// * `timeout_secs` - Per-request timeout in seconds
    pub fn from_config(base_url: &str, cookie: &str, user_agent: &str, timeout_secs: u64) -> Self {
        Self::new(HttpTransport::new(
            base_url,
            cookie,
            user_agent,
            Duration::from_secs(timeout_secs),
        ))
    }
}

impl<T: Transport> OschinaClient<T> {
    /// Create client over an existing transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Get the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET a page and parse it as HTML.
    fn fetch_document(&self, path: &str, query: &[(&str, &str)]) -> Result<Html, OschinaError> {
        let raw = self.transport.get(path, query)?;
        Ok(Html::parse_document(&raw))
    }

    /// POST a form and check the response envelope.
    fn submit(
        &self,
        path: &str,
        form: &[(&'static str, String)],
    ) -> Result<Envelope, OschinaError> {
        let raw = self.transport.post(path, form)?;
        Envelope::parse(raw)
    }
}

/// JSON envelope of form-post responses.
///
/// Non-JSON bodies are kept raw so callers can decide whether the missing
/// result is fatal. JSON of any other shape is a decode error.
#[derive(Debug)]
struct Envelope {
    raw: String,
    result: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct EnvelopeBody {
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    result: Option<serde_json::Value>,
}

impl Envelope {
    fn parse(raw: String) -> Result<Self, OschinaError> {
        let Ok(value) = serde_json::from_str::<serde_json::Value>(&raw) else {
            return Ok(Self { raw, result: None });
        };
        let body = match EnvelopeBody::deserialize(value) {
            Ok(body) => body,
            Err(e) => {
                return Err(OschinaError::new(ErrorKind::Decode)
                    .with_message("unexpected response envelope")
                    .with_body(raw)
                    .with_source(e));
            }
        };

        if let Some(code) = body.code
            && code != CODE_OK
        {
            let message = body
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| format!("code {code}"));
            return Err(OschinaError::new(ErrorKind::Rejected)
                .with_message(message)
                .with_body(raw));
        }

        Ok(Self {
            raw,
            result: body.result,
        })
    }

    /// Non-empty identifier at `result.<key>`, string or number.
    fn result_id(&self, key: &str) -> Option<String> {
        match self.result.as_ref()?.get(key)? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}
