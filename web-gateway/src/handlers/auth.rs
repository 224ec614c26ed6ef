use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use battle_rap_api::{RequestOptions, models::AuthUser};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{AppState, error::GatewayError};

/// Session key holding the persisted auth state, mirroring the storage
/// key the browser clients use.
pub const SESSION_KEY: &str = "battle-rap-auth";

/// Token and user snapshot persisted in the session between requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAuthState {
    pub token: String,
    pub user: AuthUser,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn register_handler(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let session_data = state
        .api
        .auth()
        .register(
            &battle_rap_api::modules::auth::RegisterPayload {
                email: payload.email,
                password: payload.password,
                display_name: payload.display_name,
                roles: None,
            },
            &RequestOptions::default(),
        )
        .await?;

    session
        .insert(
            SESSION_KEY,
            StoredAuthState {
                token: session_data.access_token.clone(),
                user: session_data.user.clone(),
            },
        )
        .await?;

    tracing::info!(user_id = %session_data.user.id, "user registered");
    Ok(Json(session_data))
}

pub async fn login_handler(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let session_data = state
        .api
        .auth()
        .login(
            &battle_rap_api::modules::auth::LoginPayload {
                email: payload.email,
                password: payload.password,
            },
            &RequestOptions::default(),
        )
        .await?;

    session
        .insert(
            SESSION_KEY,
            StoredAuthState {
                token: session_data.access_token.clone(),
                user: session_data.user.clone(),
            },
        )
        .await?;

    tracing::info!(user_id = %session_data.user.id, "user logged in");
    Ok(Json(session_data))
}

pub async fn logout_handler(session: Session) -> Result<impl IntoResponse, GatewayError> {
    session.flush().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Current viewer: re-validates the stored token against the backend so a
/// revoked account drops out of the session immediately.
pub async fn me_handler(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, GatewayError> {
    // Malformed stored state reads as a missing session rather than a 500.
    let stored: Option<StoredAuthState> = session.get(SESSION_KEY).await.ok().flatten();
    let Some(stored) = stored else {
        return Err(GatewayError::Unauthorized("Not logged in".to_string()));
    };

    let options = RequestOptions::with_token(&stored.token);
    match state.api.profiles().get_authenticated(&options).await {
        Ok(profile) => Ok(Json(profile).into_response()),
        Err(err) if err.is_status(401) => {
            session.flush().await?;
            Err(GatewayError::Unauthorized("Session expired".to_string()))
        }
        Err(err) => Err(err.into()),
    }
}
