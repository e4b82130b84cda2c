//! HTTP transport for the OSChina web UI.
//!
//! [`Transport`] is the only way the client talks to the platform, which
//! keeps request plumbing (cookies, headers, timeouts) out of the scraping
//! code and lets tests substitute canned pages.

use std::time::Duration;

use tracing::debug;
use ureq::Agent;

use crate::error::OschinaError;

/// Authenticated access to pages under the user's space URL.
///
/// Paths are relative to the space URL (e.g. `/admin/drafts`).
/// Implementations must surface a non-success status as a
/// [`Transport`](crate::ErrorKind::Transport) error carrying status and body.
pub trait Transport: Send + Sync {
    /// GET `path` with query parameters, returning the response body.
    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<String, OschinaError>;

    /// POST `form` URL-encoded to `path`, returning the response body.
    fn post(&self, path: &str, form: &[(&'static str, String)]) -> Result<String, OschinaError>;
}

/// Blocking HTTP transport authenticated with a browser session cookie.
pub struct HttpTransport {
    agent: Agent,
    base_url: String,
    cookie: String,
    user_agent: String,
}

impl HttpTransport {
    /// Create a transport for the space at `base_url`.
    ///
    /// # Arguments
    /// * `base_url` - Personal space URL, e.g. `https://my.oschina.net/u/1234567`
    /// * `cookie` - Session cookie header value
    /// * `user_agent` - User agent sent with every request
    /// * `timeout` - Global per-request timeout
    pub fn new(base_url: &str, cookie: &str, user_agent: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            cookie: cookie.to_owned(),
            user_agent: user_agent.to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Transport for HttpTransport {
    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<String, OschinaError> {
        let url = self.url(path);
        debug!("GET {} {:?}", url, query);

        let mut request = self
            .agent
            .get(&url)
            .header("Cookie", &self.cookie)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "text/html,application/xhtml+xml");
        for (key, value) in query {
            request = request.query(*key, *value);
        }

        read_body(request.call().map_err(OschinaError::request)?)
    }

    fn post(&self, path: &str, form: &[(&'static str, String)]) -> Result<String, OschinaError> {
        let url = self.url(path);
        debug!("POST {} ({} fields)", url, form.len());

        let response = self
            .agent
            .post(&url)
            .header("Cookie", &self.cookie)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send_form(form.iter().map(|(key, value)| (*key, value.as_str())))
            .map_err(OschinaError::request)?;

        read_body(response)
    }
}

/// Read the body, turning an error status into a transport error.
fn read_body(response: ureq::http::Response<ureq::Body>) -> Result<String, OschinaError> {
    let status = response.status().as_u16();
    let mut body_reader = response.into_body();

    if status >= 400 {
        let error_body = body_reader
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read error body)".to_owned());
        return Err(OschinaError::http_status(status, error_body));
    }

    body_reader.read_to_string().map_err(OschinaError::request)
}
