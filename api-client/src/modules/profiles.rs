use crate::error::ApiError;
use crate::models::UserProfile;
use crate::transport::{RequestOptions, Transport};
use crate::wire::WireProfileView;

const AUTH_ROOT: &str = "/api/v1/auth";
const PROFILE_ROOT: &str = "/api/v1/profile";

/// Profile views with viewer-context flags resolved by the backend.
pub struct ProfilesApi<'a> {
    transport: &'a Transport,
}

impl<'a> ProfilesApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Profile of the authenticated account, from the auth surface.
    pub async fn get_authenticated(&self, options: &RequestOptions) -> Result<UserProfile, ApiError> {
        let profile: WireProfileView = self
            .transport
            .get(&format!("{AUTH_ROOT}/me"), options)
            .await?;
        Ok(profile.into())
    }

    /// Own profile from the profile surface (includes private fields).
    pub async fn get_self(&self, options: &RequestOptions) -> Result<UserProfile, ApiError> {
        let profile: WireProfileView = self
            .transport
            .get(&format!("{PROFILE_ROOT}/me"), options)
            .await?;
        Ok(profile.into())
    }

    pub async fn get_by_id(
        &self,
        profile_id: &str,
        options: &RequestOptions,
    ) -> Result<UserProfile, ApiError> {
        let profile: WireProfileView = self
            .transport
            .get(&format!("{PROFILE_ROOT}/{profile_id}"), options)
            .await?;
        Ok(profile.into())
    }
}
