//! CircleCI API v2 client.
//!
//! Implements [`RemoteStore`] over the project `envvar` endpoints.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::RemoteStore;
use crate::core::config::Config;
use crate::core::constants;
use crate::core::domain::{Listing, ProjectSlug, Variable};
use crate::error::{RemoteError, Result};

/// Error body returned by the API.
#[derive(Deserialize)]
struct ApiMessage {
    message: String,
}

#[derive(Serialize)]
struct CreateVariable<'a> {
    name: &'a str,
    value: &'a str,
}

/// HTTP client bound to one API token.
pub struct CircleCi {
    http: Client,
    token: String,
    base_url: String,
}

impl CircleCi {
    /// Create a client against the public CircleCI API.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Request` if the HTTP client cannot be built.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(token, constants::DEFAULT_API_URL)
    }

    /// Create a client against a custom API root (CircleCI server, tests).
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Request` if the HTTP client cannot be built.
    pub fn with_base_url(token: impl Into<String>, base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(constants::REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("ccienv/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| RemoteError::Request {
                operation: "build client",
                source,
            })?;

        Ok(Self {
            http,
            token: token.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the user's configuration.
    ///
    /// `CCIENV_API_URL` takes precedence over `api_url` in the config file.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Request` if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = std::env::var(constants::API_URL_ENV)
            .ok()
            .filter(|url| !url.is_empty())
            .or_else(|| config.api_url.clone())
            .unwrap_or_else(|| constants::DEFAULT_API_URL.to_string());

        Self::with_base_url(config.api_token.as_str(), &base_url)
    }

    /// API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the project record as raw JSON.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` if the request fails.
    pub fn project(&self, project: &ProjectSlug) -> Result<serde_json::Value> {
        let operation = "show project";
        let url = format!("{}/project/{}", self.base_url, project);
        debug!(%url, "{}", operation);

        let resp = self.send(operation, self.http.get(&url))?;
        decode(operation, resp)
    }

    fn envvar_url(&self, project: &ProjectSlug) -> String {
        format!("{}/project/{}/envvar", self.base_url, project)
    }

    fn envvar_item_url(&self, project: &ProjectSlug, name: &str) -> String {
        format!("{}/{}", self.envvar_url(project), urlencoding::encode(name))
    }

    /// Attach auth headers and send, without judging the status.
    fn dispatch(&self, operation: &'static str, req: RequestBuilder) -> Result<Response> {
        req.header(constants::TOKEN_HEADER, self.token.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(|source| RemoteError::Request { operation, source }.into())
    }

    /// Send and turn any non-2xx answer into `RemoteError::Status`.
    fn send(&self, operation: &'static str, req: RequestBuilder) -> Result<Response> {
        let resp = self.dispatch(operation, req)?;
        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(status_error(operation, resp))
        }
    }
}

fn status_error(operation: &'static str, resp: Response) -> crate::error::Error {
    let status = resp.status();
    let body = resp.text().unwrap_or_default();
    let message = serde_json::from_str::<ApiMessage>(&body)
        .map(|m| m.message)
        .unwrap_or_else(|_| {
            if body.is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                body
            }
        });

    RemoteError::Status {
        operation,
        status: status.as_u16(),
        message,
    }
    .into()
}

fn decode<T: DeserializeOwned>(operation: &'static str, resp: Response) -> Result<T> {
    resp.json()
        .map_err(|source| RemoteError::Decode { operation, source }.into())
}

impl RemoteStore for CircleCi {
    fn list(&self, project: &ProjectSlug) -> Result<Listing> {
        let operation = "list variables";
        debug!(%project, "{}", operation);

        let resp = self.send(operation, self.http.get(self.envvar_url(project)))?;
        decode(operation, resp)
    }

    fn get(&self, project: &ProjectSlug, name: &str) -> Result<Option<Variable>> {
        let operation = "get variable";
        debug!(%project, name, "{}", operation);

        let resp = self.dispatch(operation, self.http.get(self.envvar_item_url(project, name)))?;
        match resp.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => decode(operation, resp).map(Some),
            _ => Err(status_error(operation, resp)),
        }
    }

    fn put(&self, project: &ProjectSlug, name: &str, value: &str) -> Result<Variable> {
        let operation = "create variable";
        debug!(%project, name, "{}", operation);

        let req = self
            .http
            .post(self.envvar_url(project))
            .json(&CreateVariable { name, value });
        let resp = self.send(operation, req)?;
        decode(operation, resp)
    }

    fn delete(&self, project: &ProjectSlug, name: &str) -> Result<()> {
        let operation = "delete variable";
        debug!(%project, name, "{}", operation);

        self.send(operation, self.http.delete(self.envvar_item_url(project, name)))?;
        Ok(())
    }
}
