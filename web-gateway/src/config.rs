use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    /// Origin of the battle-rap backend; target of both the typed client
    /// and the `/api/battle-rap` reverse proxy.
    pub upstream_api_base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Optional `configuration` file layered with `BATTLE_RAP`-prefixed
/// environment variables (`BATTLE_RAP_UPSTREAM_API_BASE_URL`,
/// `BATTLE_RAP_SERVER__PORT`, ...).
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    dotenvy::dotenv().ok();

    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(config::Environment::with_prefix("BATTLE_RAP").separator("__"))
        .build()?;

    let mut settings: Settings = settings.try_deserialize()?;
    settings.upstream_api_base_url = settings
        .upstream_api_base_url
        .trim_end_matches('/')
        .to_string();
    Ok(settings)
}
