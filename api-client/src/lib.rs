//! Typed client for the battle-rap competition backend.
//!
//! [`BattleRapApi`] composes one resource client per backend surface over a
//! shared [`transport::Transport`]. Wire records are snake_case; the
//! mappers in [`wire`] convert them into the camelCase-facing view models
//! in [`models`], defaulting absent optional fields and normalizing roles
//! and statuses on the way in.

pub mod config;
pub mod error;
pub mod models;
pub mod modules;
pub mod roles;
pub mod statuses;
pub mod transport;
pub mod wire;

pub use config::ApiSettings;
pub use error::ApiError;
pub use roles::{normalize_roles, UserRole};
pub use transport::{Query, RequestOptions, Transport};

use modules::admin_battles::AdminBattlesApi;
use modules::admin_users::AdminUsersApi;
use modules::applications::ApplicationsApi;
use modules::auth::AuthApi;
use modules::battles::BattlesApi;
use modules::judge::JudgeApi;
use modules::media::MediaApi;
use modules::moderator::ModeratorApi;
use modules::participants::ParticipantsApi;
use modules::profiles::ProfilesApi;
use modules::rounds::RoundsApi;

/// Composed client over every backend resource.
#[derive(Debug, Clone)]
pub struct BattleRapApi {
    transport: Transport,
}

impl BattleRapApi {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            transport: Transport::new(base_url),
        }
    }

    pub fn from_settings(settings: &ApiSettings) -> Self {
        Self::new(&settings.api_base_url)
    }

    /// Applies a default bearer token to every request; per-request tokens
    /// in [`RequestOptions`] still win.
    pub fn with_token(self, token: impl Into<String>) -> Self {
        Self {
            transport: self.transport.with_token(token),
        }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.transport)
    }

    pub fn profiles(&self) -> ProfilesApi<'_> {
        ProfilesApi::new(&self.transport)
    }

    pub fn admin_users(&self) -> AdminUsersApi<'_> {
        AdminUsersApi::new(&self.transport)
    }

    pub fn admin_battles(&self) -> AdminBattlesApi<'_> {
        AdminBattlesApi::new(&self.transport)
    }

    pub fn media(&self) -> MediaApi<'_> {
        MediaApi::new(&self.transport)
    }

    pub fn moderator(&self) -> ModeratorApi<'_> {
        ModeratorApi::new(&self.transport)
    }

    pub fn participants(&self) -> ParticipantsApi<'_> {
        ParticipantsApi::new(&self.transport)
    }

    pub fn battles(&self) -> BattlesApi<'_> {
        BattlesApi::new(&self.transport)
    }

    pub fn judge(&self) -> JudgeApi<'_> {
        JudgeApi::new(&self.transport)
    }

    pub fn rounds(&self) -> RoundsApi<'_> {
        RoundsApi::new(&self.transport)
    }

    pub fn applications(&self) -> ApplicationsApi<'_> {
        ApplicationsApi::new(&self.transport)
    }
}
