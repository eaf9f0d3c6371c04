//! # stay-api
//!
//! HTTP client for the accommodations listing backend.
//!
//! Endpoints, relative to the configured base URL:
//! - `GET establishments/`: browse listings
//! - `GET establishments/{id}`: one listing
//! - `POST enquiries/`: create a stay enquiry
//!
//! The enquiry workflow talks to the backend through the [`EnquiryApi`]
//! trait so it can run against [`ApiClient`] or an in-memory double.

pub mod enquiries;
pub mod establishments;

mod error;
mod http;

pub use error::ApiError;

use std::future::Future;
use std::time::Duration;

use reqwest::Url;
use stay_core::entities::{Establishment, EstablishmentId, EnquiryPayload, SubmissionResult};

// ── Seam ───────────────────────────────────────────────────────────

/// The two backend calls the enquiry workflow depends on.
pub trait EnquiryApi {
    /// Look up one establishment by id.
    fn fetch_establishment(
        &self,
        id: &EstablishmentId,
    ) -> impl Future<Output = Result<Establishment, ApiError>> + Send;

    /// Create an enquiry and return the backend's response verbatim.
    fn create_enquiry(
        &self,
        payload: &EnquiryPayload,
    ) -> impl Future<Output = Result<SubmissionResult, ApiError>> + Send;
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the listings backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Default per-request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a client rooted at `base_url`.
    ///
    /// A trailing `/` is added when missing so endpoint paths are appended
    /// rather than replacing the last path segment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if `base_url` is not an absolute
    /// http(s) URL, or [`ApiError::Http`] if the underlying client fails to
    /// build.
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { http, base_url })
    }

    /// The normalized base URL requests are built from.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

impl EnquiryApi for ApiClient {
    async fn fetch_establishment(&self, id: &EstablishmentId) -> Result<Establishment, ApiError> {
        self.get_establishment(id).await
    }

    async fn create_enquiry(&self, payload: &EnquiryPayload) -> Result<SubmissionResult, ApiError> {
        self.post_enquiry(payload).await
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&with_slash).map_err(|e| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, ApiClient::DEFAULT_TIMEOUT, "stay-test").expect("client builds")
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let client = client("https://api.example.com/v1");
        assert_eq!(client.base_url().as_str(), "https://api.example.com/v1/");
    }

    #[test]
    fn endpoints_append_to_base_path() {
        let client = client("https://api.example.com/v1/");
        let url = client.endpoint("enquiries/").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/enquiries/");
    }

    #[test]
    fn rejects_relative_base_url() {
        let result = ApiClient::new("localhost", ApiClient::DEFAULT_TIMEOUT, "stay-test");
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let result = ApiClient::new(
            "ftp://files.example.com/",
            ApiClient::DEFAULT_TIMEOUT,
            "stay-test",
        );
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl { .. })));
    }
}
