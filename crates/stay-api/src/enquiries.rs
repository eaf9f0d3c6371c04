//! Enquiry creation.

use stay_core::entities::{EnquiryPayload, SubmissionResult};

use crate::{
    ApiClient,
    error::ApiError,
    http::{check_response, read_json},
};

impl ApiClient {
    /// `POST {base_url}enquiries/` with the validated payload as JSON.
    ///
    /// The response body is returned untouched as a [`SubmissionResult`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the body is not JSON.
    pub async fn post_enquiry(&self, payload: &EnquiryPayload) -> Result<SubmissionResult, ApiError> {
        let url = self.endpoint("enquiries/")?;
        tracing::debug!(
            %url,
            establishment_name = %payload.establishment_name,
            "posting enquiry"
        );

        let resp = check_response(self.http.post(url).json(payload).send().await?).await?;
        read_json(resp).await
    }
}
