use std::time::Duration;

use anyhow::Context;
use stay_api::ApiClient;
use stay_config::StayConfig;
use stay_core::validation::EnquirySchema;
use stay_session::FileSessionStore;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: StayConfig,
    pub api: ApiClient,
    pub session: FileSessionStore,
}

impl AppContext {
    pub fn init(config: StayConfig) -> anyhow::Result<Self> {
        let api = ApiClient::new(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
            &config.api.user_agent,
        )
        .context("failed to build API client")?;

        let session = match config.session.path_override() {
            Some(path) => FileSessionStore::at(path),
            None => FileSessionStore::default_location()
                .context("failed to resolve session file location")?,
        };

        tracing::debug!(
            base_url = %api.base_url(),
            session = %session.path().display(),
            "application context ready"
        );

        Ok(Self {
            config,
            api,
            session,
        })
    }

    /// Validation rules for the enquiry form, honoring `[form]` config.
    #[must_use]
    pub const fn schema(&self) -> EnquirySchema {
        EnquirySchema::new(self.config.form.minimum_name_characters)
    }
}
