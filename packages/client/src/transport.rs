//! Blocking HTTP transport shared by the resource collaborators.
//!
//! One configured `reqwest` client per session: the base server URL plus a
//! default `Authorization: Token …` header. The helpers here join endpoint
//! paths onto the base URL, attach query pairs, and map non-success
//! responses to [`Error::Status`] with the diagnostics table, so the
//! resource modules only describe *which* endpoint they drive.

use std::time::Duration;

use reqwest::blocking::multipart::Form;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use url::Url;

use seafront_api::status;

use crate::error::Error;

/// Default request timeout, shared with token acquisition.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A blocking HTTP client bound to one server and one auth token.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a transport with the default 30-second timeout.
    pub fn new(base_url: Url, token: &str) -> Result<Self, Error> {
        Self::with_timeout(base_url, token, DEFAULT_TIMEOUT)
    }

    /// Create a transport with the given request timeout.
    pub fn with_timeout(base_url: Url, token: &str, timeout: Duration) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::try_from(format!("Token {}", token))?,
        );

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join an endpoint path onto the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        self.base_url.join(path).map_err(Error::from)
    }

    /// GET an endpoint and deserialize the JSON response body.
    pub fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        let url = self.endpoint(path)?;
        log::debug!("GET {}", url);

        let response = self.client.get(url).query(query).send()?;
        Ok(Self::check(response)?.json()?)
    }

    /// POST an urlencoded form to an endpoint.
    pub fn post_form(
        &self,
        path: &str,
        query: &[(&str, &str)],
        form: &[(&str, &str)],
    ) -> Result<Response, Error> {
        let url = self.endpoint(path)?;
        log::debug!("POST {}", url);

        let response = self.client.post(url).query(query).form(form).send()?;
        Self::check(response)
    }

    /// DELETE an endpoint.
    pub fn delete(&self, path: &str, query: &[(&str, &str)]) -> Result<Response, Error> {
        let url = self.endpoint(path)?;
        log::debug!("DELETE {}", url);

        let response = self.client.delete(url).query(query).send()?;
        Self::check(response)
    }

    /// GET an absolute URL handed out by the server (download links).
    pub fn get_absolute(&self, url: &str) -> Result<Response, Error> {
        let url = Url::parse(url)?;
        log::debug!("GET {}", url);

        let response = self.client.get(url).send()?;
        Self::check(response)
    }

    /// POST a multipart form to an absolute URL handed out by the server
    /// (upload links).
    pub fn post_multipart(&self, url: &str, form: Form) -> Result<Response, Error> {
        let url = Url::parse(url)?;
        log::debug!("POST {} (multipart)", url);

        let response = self.client.post(url).multipart(form).send()?;
        Self::check(response)
    }

    fn check(response: Response) -> Result<Response, Error> {
        let code = response.status().as_u16();
        if !status::is_success(code) {
            log::warn!("request to {} failed: {}", response.url(), status::describe(code));
            return Err(Error::from_status(code));
        }
        Ok(response)
    }
}
