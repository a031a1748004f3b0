//! Audit endpoint handlers.
//!
//! GET variants fetch the page named in the query string; POST variants take
//! the document as the raw request body.

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extract::{HeadingGroup, MetaEntry, PageFeatures};
use crate::http::response::AuditError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::upstream::{FetchError, RedirectReport};

pub const NO_CANONICAL: &str = "No canonical tag found";

#[derive(Debug, Deserialize)]
pub struct HostnameQuery {
    pub hostname: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteQuery {
    pub website_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UrlQuery {
    pub url: Option<String>,
}

/// `image` is forwarded as-is; any JSON value is accepted.
#[derive(Debug, Deserialize)]
pub struct AltTextRequest {
    #[serde(default)]
    pub image: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalResponse {
    pub canonical_tag: String,
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// Absent and empty parameters are both missing.
fn required(value: Option<String>, name: &'static str) -> Result<String, AuditError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(AuditError::InputMissing(name))
}

/// JSON values that count as absent: null, false, 0 and "".
fn present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn ssl_analyze(
    State(state): State<AppState>,
    Query(query): Query<HostnameQuery>,
) -> Result<Json<Value>, AuditError> {
    let hostname = required(query.hostname, "Hostname")?;
    Ok(Json(state.upstream.ssl_analyze(&hostname).await?))
}

pub async fn heading_tags(
    State(state): State<AppState>,
    Query(query): Query<WebsiteQuery>,
) -> Result<Json<Vec<HeadingGroup>>, AuditError> {
    let url = required(query.website_url, "Website URL")?;
    let html = state.upstream.fetch_html(&url).await?;

    let groups = state.extractor.extract_headings(&html)?;
    metrics::record_extracted("headings", groups.len());
    tracing::debug!(url = %url, groups = groups.len(), "Extracted headings");
    Ok(Json(groups))
}

pub async fn heading_tags_from_body(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<HeadingGroup>>, AuditError> {
    let groups = state.extractor.extract_headings_from_bytes(&body)?;
    metrics::record_extracted("headings", groups.len());
    Ok(Json(groups))
}

pub async fn meta_tags(
    State(state): State<AppState>,
    Query(query): Query<WebsiteQuery>,
) -> Result<Json<Vec<MetaEntry>>, AuditError> {
    let url = required(query.website_url, "Website URL")?;
    let html = state.upstream.fetch_html(&url).await?;

    let entries = state.extractor.extract_meta_tags(&html)?;
    metrics::record_extracted("meta", entries.len());
    tracing::debug!(url = %url, entries = entries.len(), "Extracted meta tags");
    Ok(Json(entries))
}

pub async fn meta_tags_from_body(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<MetaEntry>>, AuditError> {
    let entries = state.extractor.extract_meta_tags_from_bytes(&body)?;
    metrics::record_extracted("meta", entries.len());
    Ok(Json(entries))
}

pub async fn page_features(
    State(state): State<AppState>,
    Query(query): Query<WebsiteQuery>,
) -> Result<Json<PageFeatures>, AuditError> {
    let url = required(query.website_url, "Website URL")?;
    let html = state.upstream.fetch_html(&url).await?;

    let features = state.extractor.extract(&html)?;
    metrics::record_extracted("headings", features.headings.len());
    metrics::record_extracted("meta", features.meta.len());
    Ok(Json(features))
}

pub async fn check_redirection(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<Json<RedirectReport>, AuditError> {
    let url = required(query.url, "URL")?;
    let report = state.upstream.check_redirect(&url).await?;
    tracing::debug!(url = %url, redirect_url = %report.redirect_url, "Checked redirection");
    Ok(Json(report))
}

pub async fn check_canonical(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<Json<CanonicalResponse>, AuditError> {
    let url = required(query.url, "URL")?;
    let html = state
        .upstream
        .fetch_html(&url)
        .await
        .map_err(|e| FetchError::Unavailable(Box::new(e)))?;
    if html.trim().is_empty() {
        return Err(FetchError::EmptyBody(url).into());
    }

    let canonical = state.extractor.extract_canonical(&html)?;
    Ok(Json(CanonicalResponse {
        canonical_tag: canonical.unwrap_or_else(|| NO_CANONICAL.to_string()),
    }))
}

pub async fn alt_text(
    State(state): State<AppState>,
    request: Result<Json<AltTextRequest>, JsonRejection>,
) -> Result<Json<Value>, AuditError> {
    let image = match request {
        Ok(Json(AltTextRequest { image })) if present(&image) => image,
        Ok(_) => return Err(AuditError::InputMissing("Image")),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable alt-text request body");
            return Err(AuditError::InputMissing("Image"));
        }
    };
    Ok(Json(state.upstream.alt_text(&image).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert_eq!(required(Some("x".into()), "X").unwrap(), "x");
        assert!(matches!(
            required(None, "Hostname"),
            Err(AuditError::InputMissing("Hostname"))
        ));
        assert!(matches!(
            required(Some(String::new()), "Image"),
            Err(AuditError::InputMissing("Image"))
        ));
    }

    #[test]
    fn test_present_follows_json_truthiness() {
        use serde_json::json;

        for absent in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!present(&absent), "{absent} should count as missing");
        }
        for given in [json!(5), json!(true), json!("a.png"), json!([]), json!({})] {
            assert!(present(&given), "{given} should count as present");
        }
    }
}
