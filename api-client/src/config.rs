use serde::Deserialize;

use crate::error::ApiError;

/// Client settings for talking to the battle-rap backend.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    /// Base URL of the upstream REST API, e.g. `https://api.example.com`.
    pub api_base_url: String,
    /// Base URL that media storage keys resolve against.
    pub media_base_url: String,
}

impl ApiSettings {
    /// Load settings from an optional `configuration` file layered with
    /// `BATTLE_RAP`-prefixed environment variables
    /// (`BATTLE_RAP_API_BASE_URL`, `BATTLE_RAP_MEDIA_BASE_URL`).
    pub fn load() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("BATTLE_RAP").separator("__"))
            .build()?;

        let mut settings: Self = settings.try_deserialize()?;
        settings.api_base_url = normalize_base_url(&settings.api_base_url);
        settings.media_base_url = normalize_base_url(&settings.media_base_url);
        Ok(settings)
    }

    /// Resolve a storage key to a fetchable media URL. Absolute URLs pass
    /// through unchanged.
    pub fn build_media_url(&self, storage_key: &str) -> String {
        if is_absolute_url(storage_key) {
            return storage_key.to_string();
        }
        let key = storage_key.strip_prefix('/').unwrap_or(storage_key);
        format!("{}/{}", self.media_base_url, key)
    }
}

pub(crate) fn normalize_base_url(value: &str) -> String {
    value.trim_end_matches('/').to_string()
}

pub(crate) fn is_absolute_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
