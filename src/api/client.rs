use log::debug;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::decoder::decode;
use super::error::{ApiError, ApiResult};
use crate::common::constants::{CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetcherConfig {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl From<&Settings> for FetcherConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            connect_timeout: Duration::from_secs(settings.connect_timeout_secs),
            request_timeout: Duration::from_secs(settings.request_timeout_secs),
        }
    }
}

/// Blocking GET client with bounded timeouts.
///
/// `request_timeout` is a deadline for the whole request, body included.
/// reqwest's blocking client has no per-read timeout.
///
/// Idle connections are not pooled, so every request opens its own
/// connection and releases it once the response is dropped.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(config: FetcherConfig) -> ApiResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { client })
    }

    /// GET `url` and return the body of a 2xx response.
    ///
    /// Failures are logged at debug level only; callers decide how loud a
    /// failed request should be.
    pub fn fetch(&self, url: &str) -> ApiResult<String> {
        debug!("Sending GET request to {}", url);
        let response = self.client.get(url).send().map_err(|source| {
            debug!("Request to {} failed: {}", url, source);
            ApiError::Transport {
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        debug!("Received response with status: {}", status);

        let http_error = || ApiError::Http {
            url: url.to_string(),
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("Unknown").to_string(),
        };

        let body = match response.text() {
            Ok(body) => body,
            Err(source) if !status.is_success() => {
                debug!("Failed to read {} error body from {}: {}", status, url, source);
                return Err(http_error());
            }
            Err(source) => {
                debug!("Failed to read response body from {}: {}", url, source);
                return Err(ApiError::Transport {
                    url: url.to_string(),
                    source,
                });
            }
        };
        debug!("Response from {}: {}", url, body);

        if !status.is_success() {
            debug!("HTTP request to {} failed with status: {}", url, status);
            return Err(http_error());
        }

        Ok(body)
    }

    pub fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let body = self.fetch(url)?;
        decode(&body)
    }
}
