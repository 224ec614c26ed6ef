pub mod config;
pub mod error;
pub mod handlers;
pub mod proxy;
pub mod startup;
pub mod telemetry;

use std::sync::Arc;

use battle_rap_api::BattleRapApi;

/// Shared application state: the typed backend client plus the raw client
/// and upstream origin used by the reverse proxy.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<BattleRapApi>,
    pub proxy_client: reqwest::Client,
    pub upstream_api_base_url: String,
}

impl AppState {
    pub fn new(api: Arc<BattleRapApi>, upstream_api_base_url: String) -> Self {
        // Redirects are relayed to the browser, not chased by the proxy.
        let proxy_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            api,
            proxy_client,
            upstream_api_base_url,
        }
    }
}
