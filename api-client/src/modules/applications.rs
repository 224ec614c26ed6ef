use crate::error::ApiError;
use crate::models::{ParticipationApplication, SubmitApplicationPayload};
use crate::transport::{RequestOptions, Transport};
use crate::wire::{ApplicationBody, WireParticipationApplication};

const APPLICATIONS_ROOT: &str = "/api/v1/applications";

/// Artist applications to enter the tournament.
pub struct ApplicationsApi<'a> {
    transport: &'a Transport,
}

impl<'a> ApplicationsApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn submit(
        &self,
        payload: &SubmitApplicationPayload,
        options: &RequestOptions,
    ) -> Result<ParticipationApplication, ApiError> {
        let body = ApplicationBody::from(payload);
        let application: WireParticipationApplication = self
            .transport
            .post(APPLICATIONS_ROOT, Some(&body), options)
            .await?;
        Ok(application.into())
    }

    /// The caller's own application, `None` when nothing was submitted yet.
    pub async fn get_own(
        &self,
        options: &RequestOptions,
    ) -> Result<Option<ParticipationApplication>, ApiError> {
        let application: Option<WireParticipationApplication> = self
            .transport
            .get(&format!("{APPLICATIONS_ROOT}/me"), options)
            .await?;
        Ok(application.map(Into::into))
    }
}
