//! OKX HTTP Client - Signed REST API Client
//!
//! Wraps reqwest with OKX authentication for all REST interactions.
//! Every call is signed with a fresh timestamp and decoded into the
//! generic response envelope. HTTP status codes are not interpreted:
//! OKX reports business failures inside the envelope, and the body is
//! decoded regardless of status. There are no retries.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Method};
use serde::Serialize;
use tracing::debug;

use super::auth::OkxAuth;
use super::types::with_query;
use crate::config::ApiConfig;
use crate::domain::ResponseEnvelope;

/// Header that routes requests to the OKX demo-trading environment.
const SIMULATED_TRADING_HEADER: &str = "x-simulated-trading";

/// Configuration for the OKX HTTP client.
#[derive(Debug, Clone)]
pub struct OkxClientConfig {
  /// Base URL for the REST API.
  pub base_url: String,
  /// Optional request timeout. `None` leaves requests unbounded.
  pub timeout: Option<Duration>,
  /// Send the demo-trading header on every request.
  pub simulated: bool,
}

impl From<&ApiConfig> for OkxClientConfig {
  fn from(api: &ApiConfig) -> Self {
    Self {
      base_url: api.base_url.trim_end_matches('/').to_string(),
      timeout: api.timeout_seconds.map(Duration::from_secs),
      simulated: api.simulated,
    }
  }
}

/// Authenticated HTTP client for the OKX v5 REST API.
pub struct OkxClient {
  /// Underlying HTTP client.
  http: Client,
  /// Authentication manager.
  auth: Arc<OkxAuth>,
  /// Client configuration.
  config: OkxClientConfig,
}

impl OkxClient {
  /// Create a new OKX client.
  pub fn new(auth: Arc<OkxAuth>, config: OkxClientConfig) -> Result<Self> {
    let mut builder = Client::builder().pool_max_idle_per_host(2);
    if let Some(timeout) = config.timeout {
      builder = builder.timeout(timeout);
    }
    let http = builder.build().context("Failed to build HTTP client")?;

    Ok(Self { http, auth, config })
  }

  /// Signed GET. `params` become the query string, which is part of the
  /// signed path.
  pub async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<ResponseEnvelope> {
    let path = with_query(path, params);
    self.execute(Method::GET, &path, String::new()).await
  }

  /// Signed POST. `params` are serialized to JSON once; the same bytes
  /// are signed and sent.
  pub async fn post<T>(&self, path: &str, params: &T) -> Result<ResponseEnvelope>
  where
    T: Serialize + ?Sized + Sync,
  {
    let body = serde_json::to_string(params).context("Failed to serialize request body")?;
    self.execute(Method::POST, path, body).await
  }

  /// Execute one signed request and decode the envelope.
  async fn execute(&self, method: Method, path: &str, body: String) -> Result<ResponseEnvelope> {
    let url = format!("{}{}", self.config.base_url, path);
    let headers = self.auth.headers(method.as_str(), path, &body);

    let mut request = self
      .http
      .request(method.clone(), &url)
      .header("OK-ACCESS-KEY", &headers.key)
      .header("OK-ACCESS-SIGN", &headers.sign)
      .header("OK-ACCESS-TIMESTAMP", &headers.timestamp)
      .header("OK-ACCESS-PASSPHRASE", &headers.passphrase)
      .header("Content-Type", "application/json");

    if self.config.simulated {
      request = request.header(SIMULATED_TRADING_HEADER, "1");
    }
    if !body.is_empty() {
      request = request.body(body);
    }

    let response = request
      .send()
      .await
      .with_context(|| format!("{method} {path} failed"))?;

    let status = response.status();
    let text = response
      .text()
      .await
      .with_context(|| format!("Failed to read {method} {path} response body"))?;

    debug!(%method, path, status = status.as_u16(), "OKX response received");

    serde_json::from_str(&text).with_context(|| {
      format!("Undecodable {method} {path} response (HTTP {status}): {}", preview(&text))
    })
  }
}

/// First 200 characters of a response body for error messages.
fn preview(text: &str) -> String {
  text.chars().take(200).collect()
}
