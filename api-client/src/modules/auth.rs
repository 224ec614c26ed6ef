use crate::error::ApiError;
use crate::models::{AuthSession, RefreshTokens};
use crate::roles::UserRole;
use crate::transport::{RequestOptions, Transport};
use crate::wire::{LoginBody, RefreshBody, RegisterBody, WireAuthSession, WireRefreshTokens};

const AUTH_ROOT: &str = "/api/v1/auth";

#[derive(Debug, Clone)]
pub struct RegisterPayload {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub roles: Option<Vec<UserRole>>,
}

#[derive(Debug, Clone)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Registration, login, and token refresh.
pub struct AuthApi<'a> {
    transport: &'a Transport,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn register(
        &self,
        payload: &RegisterPayload,
        options: &RequestOptions,
    ) -> Result<AuthSession, ApiError> {
        let body = RegisterBody {
            email: &payload.email,
            password: &payload.password,
            display_name: &payload.display_name,
            roles: payload
                .roles
                .as_ref()
                .map(|roles| roles.iter().map(UserRole::as_str).collect()),
        };
        let session: WireAuthSession = self
            .transport
            .post(&format!("{AUTH_ROOT}/register"), Some(&body), options)
            .await?;
        Ok(session.into())
    }

    pub async fn login(
        &self,
        payload: &LoginPayload,
        options: &RequestOptions,
    ) -> Result<AuthSession, ApiError> {
        let body = LoginBody {
            email: &payload.email,
            password: &payload.password,
        };
        let session: WireAuthSession = self
            .transport
            .post(&format!("{AUTH_ROOT}/login"), Some(&body), options)
            .await?;
        Ok(session.into())
    }

    pub async fn refresh(
        &self,
        refresh_token: &str,
        options: &RequestOptions,
    ) -> Result<RefreshTokens, ApiError> {
        let body = RefreshBody { refresh_token };
        let tokens: WireRefreshTokens = self
            .transport
            .post(&format!("{AUTH_ROOT}/refresh"), Some(&body), options)
            .await?;
        Ok(tokens.into())
    }
}
