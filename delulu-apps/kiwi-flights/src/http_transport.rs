//!  Delulu Travel Agent
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! # HTTP Transport
//!
//! Effectful (network) JSON GET requests. Lookups and searches only talk to
//! the [`HttpTransport`] trait so tests can swap in canned responses.

use anyhow::{Context, Result, bail};
use std::future::Future;
use std::time::Duration;
use wreq::redirect::Policy;

/// A GET request against one provider endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub base: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn get(base: &str, path: &str) -> Self {
        Self {
            base: base.to_string(),
            path: path.to_string(),
            query: Vec::new(),
            headers: Vec::new(),
        }
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    pub fn header(mut self, key: &str, value: impl Into<String>) -> Self {
        self.headers.push((key.to_string(), value.into()));
        self
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn url(&self) -> String {
        let mut url = format!("{}{}", self.base, self.path);
        for (i, (key, value)) in self.query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }
}

pub trait HttpTransport {
    /// Send the request and decode the body as JSON.
    fn get_json(&self, request: &ApiRequest) -> impl Future<Output = Result<serde_json::Value>>;
}

#[derive(Clone)]
pub struct WreqTransport {
    client: wreq::Client,
}

impl WreqTransport {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = wreq::Client::builder()
            .redirect(Policy::default())
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl HttpTransport for WreqTransport {
    async fn get_json(&self, request: &ApiRequest) -> Result<serde_json::Value> {
        // Query strings may carry the AirLabs key, so only the path is logged.
        tracing::debug!("[get_json] GET {}{}", request.base, request.path);

        let http_start = std::time::Instant::now();
        let mut builder = self.client.get(request.url());
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        let response = builder
            .send()
            .await
            .map_err(wreq::Error::without_uri)
            .context(format!("Request to {} failed", request.path))?;
        tracing::trace!("[get_json] HTTP request completed in {:?}", http_start.elapsed());

        let status = response.status();
        tracing::debug!(
            "[get_json] HTTP Status: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        );

        // wreq errors carry the full URI, which may hold the AirLabs key.
        let body = response
            .text()
            .await
            .map_err(wreq::Error::without_uri)
            .context("Read body")?;
        if !status.is_success() {
            let body_preview = body.chars().take(500).collect::<String>();
            bail!("HTTP error {} from {}: {}", status, request.path, body_preview);
        }

        serde_json::from_str(&body).context(format!("Invalid JSON from {}", request.path))
    }
}
