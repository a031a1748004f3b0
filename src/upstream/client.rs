//! Upstream HTTP client.
//!
//! # Responsibilities
//! - Fetch remote HTML documents for extraction
//! - Pass SSL Labs and alt-text calls through as JSON
//! - Probe a URL for redirects without following them
//! - Apply connect and total timeouts to every call

use std::time::Duration;

use reqwest::header::LOCATION;
use reqwest::{redirect, Client, Response};
use serde_json::Value;
use url::Url;

use crate::config::{TimeoutConfig, UpstreamConfig};
use crate::upstream::error::FetchError;
use crate::upstream::redirect::RedirectReport;

/// Client for every outbound call the service makes.
#[derive(Clone)]
pub struct UpstreamClient {
    /// Follows redirects (document fetches, passthrough APIs).
    http: Client,
    /// Never follows redirects (redirect probe).
    probe: Client,
    ssl_labs_url: String,
    alttext_url: String,
}

impl UpstreamClient {
    /// Build the client pair from configuration.
    pub fn new(upstreams: &UpstreamConfig, timeouts: &TimeoutConfig) -> Result<Self, FetchError> {
        let builder = || {
            Client::builder()
                .user_agent(upstreams.user_agent.clone())
                .connect_timeout(Duration::from_secs(timeouts.connect_secs))
                .timeout(Duration::from_secs(timeouts.upstream_secs))
        };

        Ok(Self {
            http: builder().build()?,
            probe: builder().redirect(redirect::Policy::none()).build()?,
            ssl_labs_url: upstreams.ssl_labs_url.trim_end_matches('/').to_string(),
            alttext_url: upstreams.alttext_url.clone(),
        })
    }

    /// GET a document and return its body as text.
    pub async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let target = parse_target(url)?;
        tracing::debug!(url = %target, "Fetching document");

        let response = self.http.get(target).send().await?;
        let response = ensure_success(response)?;
        Ok(response.text().await?)
    }

    /// Start (or poll) an SSL Labs analysis for `hostname`.
    pub async fn ssl_analyze(&self, hostname: &str) -> Result<Value, FetchError> {
        let mut url = Url::parse(&format!("{}/analyze", self.ssl_labs_url)).map_err(|e| {
            FetchError::InvalidUrl {
                url: self.ssl_labs_url.clone(),
                reason: e.to_string(),
            }
        })?;
        url.query_pairs_mut()
            .append_pair("host", hostname)
            .append_pair("all", "on");

        tracing::debug!(hostname = %hostname, "Requesting SSL Labs analysis");
        let response = self.http.get(url).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }

    /// Ask the alt-text service to describe `image`.
    pub async fn alt_text(&self, image: &Value) -> Result<Value, FetchError> {
        let response = self
            .http
            .post(&self.alttext_url)
            .json(&serde_json::json!({ "image": image }))
            .send()
            .await?;
        Ok(ensure_success(response)?.json().await?)
    }

    /// Send one GET without following redirects and report where it points.
    pub async fn check_redirect(&self, url: &str) -> Result<RedirectReport, FetchError> {
        let target = parse_target(url)?;
        let response = self.probe.get(target.clone()).send().await?;

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok());

        RedirectReport::classify(&target, response.status(), location)
    }
}

/// Accept only absolute http(s) URLs.
pub fn parse_target(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(FetchError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", scheme),
        }),
    }
}

fn ensure_success(response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(FetchError::Status {
            url: response.url().to_string(),
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target() {
        assert!(parse_target("https://example.com/a?b=c").is_ok());
        assert!(parse_target("http://127.0.0.1:8080").is_ok());

        let err = parse_target("example.com").unwrap_err();
        assert!(err.to_string().starts_with("Invalid URL 'example.com'"));

        let err = parse_target("file:///etc/passwd").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'file'"));
    }

    #[test]
    fn test_client_builds_from_defaults() {
        let client = UpstreamClient::new(&UpstreamConfig::default(), &TimeoutConfig::default());
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url_never_sends() {
        let client =
            UpstreamClient::new(&UpstreamConfig::default(), &TimeoutConfig::default()).unwrap();
        let err = client.fetch_html("not a url").await.unwrap_err();
        assert_eq!(err.kind(), "invalid_url");
    }
}
