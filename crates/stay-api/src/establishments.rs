//! Establishment lookups.

use serde::Deserialize;
use stay_core::entities::{Establishment, EstablishmentId};

use crate::{
    ApiClient,
    error::ApiError,
    http::{check_response, read_json},
};

/// Listing responses arrive either as a bare array or wrapped in `data`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListingResponse {
    Bare(Vec<Establishment>),
    Wrapped { data: Vec<Establishment> },
}

impl ListingResponse {
    fn into_vec(self) -> Vec<Establishment> {
        match self {
            Self::Bare(items) | Self::Wrapped { data: items } => items,
        }
    }
}

/// Path of a single establishment, with the id percent-encoded.
fn establishment_path(id: &EstablishmentId) -> String {
    format!("establishments/{}", urlencoding::encode(id.as_str()))
}

impl ApiClient {
    /// `GET {base_url}establishments/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the body is not an establishment record.
    pub async fn get_establishment(&self, id: &EstablishmentId) -> Result<Establishment, ApiError> {
        let url = self.endpoint(&establishment_path(id))?;
        tracing::debug!(establishment_id = %id, %url, "fetching establishment");

        let resp = check_response(self.http.get(url).send().await?).await?;
        read_json(resp).await
    }

    /// `GET {base_url}establishments/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the body is not a list of establishments.
    pub async fn list_establishments(&self) -> Result<Vec<Establishment>, ApiError> {
        let url = self.endpoint("establishments/")?;
        tracing::debug!(%url, "listing establishments");

        let resp = check_response(self.http.get(url).send().await?).await?;
        let listing: ListingResponse = read_json(resp).await?;
        Ok(listing.into_vec())
    }
}
