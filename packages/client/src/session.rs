//! Session state: server base URL and authentication token.
//!
//! One `Session` represents one authenticated identity against one server.
//! It is an explicit struct owned by the embedder - there is no shared or
//! static state - and it is what constructs the configured transport the
//! resource collaborators run on.

use reqwest::blocking::Client;
use url::Url;

use seafront_api::{status, AuthToken};

use crate::error::Error;
use crate::transport::{HttpTransport, DEFAULT_TIMEOUT};

/// Server base URL plus the auth token, once acquired.
#[derive(Debug, Clone)]
pub struct Session {
    server: Url,
    token: Option<String>,
}

impl Session {
    /// Create a session against the given server base URL.
    ///
    /// No token is held yet; call [`acquire_token`](Self::acquire_token)
    /// (or [`with_token`](Self::with_token)) before building a client.
    pub fn new(server: &str) -> Result<Self, Error> {
        Ok(Self {
            server: parse_server_url(server)?,
            token: None,
        })
    }

    /// Create a session with a token obtained elsewhere.
    pub fn with_token(server: &str, token: &str) -> Result<Self, Error> {
        Ok(Self {
            server: parse_server_url(server)?,
            token: Some(token.to_string()),
        })
    }

    pub fn server(&self) -> &Url {
        &self.server
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Ask the server for an API token.
    ///
    /// Performs one `POST {server}/api2/auth-token/` with the credentials
    /// as an urlencoded form. On success the token is stored on the
    /// session and returned. Failures are logged with a status diagnostic
    /// and returned as typed errors; the call is idempotent and safe for
    /// the caller to retry, but is never retried internally.
    pub fn acquire_token(&mut self, username: &str, password: &str) -> Result<&str, Error> {
        let url = self.server.join("api2/auth-token/")?;
        log::debug!("POST {}", url);

        // One-shot client: the session transport needs the token this
        // call is about to fetch.
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;

        let response = client
            .post(url)
            .form(&[("username", username), ("password", password)])
            .send()
            .map_err(|e| {
                log::error!("auth request failed: {}", e);
                e
            })?;

        let code = response.status().as_u16();
        if !status::is_success(code) {
            log::error!("auth request rejected: {}", status::describe(code));
            return Err(Error::from_status(code));
        }

        let AuthToken { token } = response.json()?;
        Ok(self.token.insert(token).as_str())
    }

    /// Build the configured transport for this session.
    ///
    /// Fails with [`Error::NotAuthenticated`] while no token is held.
    pub fn transport(&self) -> Result<HttpTransport, Error> {
        let token = self.token.as_deref().ok_or(Error::NotAuthenticated)?;
        HttpTransport::new(self.server.clone(), token)
    }
}

/// Parse the server URL, normalizing the path to end with a slash so that
/// endpoint joins append instead of replacing the last segment.
fn parse_server_url(server: &str) -> Result<Url, Error> {
    let mut url = Url::parse(server)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_no_token() {
        let session = Session::new("https://seacloud.example.com").unwrap();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_transport_requires_token() {
        let session = Session::new("https://seacloud.example.com").unwrap();
        assert!(matches!(
            session.transport(),
            Err(Error::NotAuthenticated)
        ));
    }

    #[test]
    fn test_with_token() {
        let session = Session::with_token("https://seacloud.example.com", "abc123").unwrap();
        assert_eq!(session.token(), Some("abc123"));
        assert!(session.transport().is_ok());
    }

    #[test]
    fn test_server_path_gets_trailing_slash() {
        let session = Session::new("https://host.example.com/seafile").unwrap();
        assert_eq!(session.server().path(), "/seafile/");

        // Already-normalized URLs are left alone.
        let session = Session::new("https://host.example.com/seafile/").unwrap();
        assert_eq!(session.server().path(), "/seafile/");
    }

    #[test]
    fn test_bad_server_url() {
        assert!(matches!(Session::new("not a url"), Err(Error::Url(_))));
    }
}
