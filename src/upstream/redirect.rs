//! Redirect classification.
//!
//! The response being classified must come from a client that does not follow
//! redirects, so a 3xx status and its `Location` header are visible.

use reqwest::StatusCode;
use serde::Serialize;
use url::Url;

use crate::upstream::error::FetchError;

pub const NO_REDIRECTION: &str = "No redirection found";

/// Either the plain status of a non-redirecting response or a description
/// of the redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RedirectType {
    Status(u16),
    Described(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectReport {
    pub redirect_url: String,
    pub redirect_type: RedirectType,
}

impl RedirectReport {
    /// Classify the first response for `target`.
    ///
    /// 2xx means no redirect; 3xx resolves `Location` against `target`;
    /// anything else is an error.
    pub fn classify(
        target: &Url,
        status: StatusCode,
        location: Option<&str>,
    ) -> Result<Self, FetchError> {
        if status.is_success() {
            return Ok(Self {
                redirect_url: NO_REDIRECTION.to_string(),
                redirect_type: RedirectType::Status(status.as_u16()),
            });
        }

        if status.is_redirection() {
            let resolved = location
                .and_then(|loc| target.join(loc).ok())
                .ok_or_else(|| FetchError::MissingLocation {
                    url: target.to_string(),
                    status: status.as_u16(),
                })?;

            return Ok(Self {
                redirect_url: resolved.to_string(),
                redirect_type: RedirectType::Described(format!(
                    "Redirected with status {}",
                    status.as_u16()
                )),
            });
        }

        Err(FetchError::Status {
            url: target.to_string(),
            status: status.as_u16(),
        })
    }
}
