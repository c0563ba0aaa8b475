// Lucifer client implementation
//
// HTTP client that sends one request to the Lucifer server and classifies
// the response. Each invocation builds its own client; nothing is pooled
// or retried.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{redirect, Client};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use super::types::{Filename, InvalidateRequest, RunRequest};
use crate::config::ClientConfig;
use crate::errors::ClientError;

/// User-Agent header value for every request
pub const USER_AGENT_VALUE: &str = concat!("lucifer-client/", env!("CARGO_PKG_VERSION"));

/// Accept header value: JSON, then problem+json, then anything
pub const ACCEPT_VALUE: &str =
    "application/json, q=0.8; application/problem+json, q=0.6; */*, q=0.3";

const INVALIDATE_PATH: &str = "/v1/cache/invalidate";
const TEST_RUNS_PATH: &str = "/v1/test_runs";

/// HTTP client for communicating with the Lucifer server
pub struct LuciferClient {
    base_url: String,
    client: Client,
}

impl LuciferClient {
    /// Build a client with the fixed headers and timeout
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));

        let client = Client::builder()
            .user_agent(USER_AGENT_VALUE)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .pool_max_idle_per_host(0) // Disable connection pooling
            .redirect(redirect::Policy::none()) // 3xx is an application error, not a hop
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Ask the server to drop cached state for `files`
    pub async fn invalidate(&self, files: Vec<Filename>) -> Result<Vec<u8>, ClientError> {
        let request = InvalidateRequest { files };
        self.post(INVALIDATE_PATH, &request).await
    }

    /// Ask the server to run the tests in `files`
    pub async fn run(&self, files: Vec<Filename>, bail: bool) -> Result<Vec<u8>, ClientError> {
        let request = RunRequest::new(files, bail);
        self.post(TEST_RUNS_PATH, &request).await
    }

    /// POST a JSON body and return the raw response body.
    ///
    /// The body is never decoded. Status >= 300 becomes `ClientError::Application`
    /// carrying the body bytes as received.
    async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Vec<u8>, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Sending request to lucifer server");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let status = response.status();
        debug!(url = %url, status = status.as_u16(), "Received response");

        let raw = response
            .bytes()
            .await
            .map_err(|e| transport_error(&url, e))?
            .to_vec();

        if status.as_u16() >= 300 {
            return Err(ClientError::Application {
                status: status.as_u16(),
                body: raw,
            });
        }

        Ok(raw)
    }
}

fn transport_error(url: &str, source: reqwest::Error) -> ClientError {
    let kind = if source.is_timeout() {
        "timeout"
    } else if source.is_connect() {
        "connection"
    } else if source.is_body() || source.is_decode() {
        "body"
    } else if source.is_request() {
        "request"
    } else {
        "other"
    };
    debug!(url = %url, kind, error = %source, "HTTP request failed");

    ClientError::Transport {
        url: url.to_string(),
        source,
    }
}

/// Invalidate cached results for `files` with a freshly built client
pub async fn execute_invalidate(
    config: ClientConfig,
    files: Vec<Filename>,
) -> Result<Vec<u8>, ClientError> {
    debug!(count = files.len(), "Invalidating files");
    LuciferClient::new(config)?.invalidate(files).await
}

/// Trigger a test run over `files` with a freshly built client
pub async fn execute_run(
    config: ClientConfig,
    files: Vec<Filename>,
    bail: bool,
) -> Result<Vec<u8>, ClientError> {
    debug!(count = files.len(), bail, "Starting test run");
    LuciferClient::new(config)?.run(files, bail).await
}
