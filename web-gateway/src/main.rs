use std::sync::Arc;

use battle_rap_api::BattleRapApi;
use dotenvy::dotenv;
use tracing::info;
use web_gateway::AppState;
use web_gateway::config::get_configuration;
use web_gateway::startup::build_router;
use web_gateway::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("web-gateway", "info");

    let api = BattleRapApi::new(&configuration.upstream_api_base_url);
    let state = AppState::new(Arc::new(api), configuration.upstream_api_base_url.clone());

    let app = build_router(state);

    let address = format!(
        "{}:{}",
        configuration.server.host, configuration.server.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting web-gateway on {}", address);
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
