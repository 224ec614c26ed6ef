use crate::error::ApiError;
use crate::models::{
    CompleteUploadPayload, MediaAssetStatus, PresignUploadPayload, PresignUploadResponse,
};
use crate::transport::{RequestOptions, Transport};
use crate::wire::{CompleteBody, PresignBody, WireMediaAssetStatus, WirePresignResponse};

const MEDIA_ROOT: &str = "/api/v1/media";

/// Two-step upload protocol: presign a target, push the bytes, confirm
/// completion. The backend owns the storage entirely.
pub struct MediaApi<'a> {
    transport: &'a Transport,
}

impl<'a> MediaApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn presign_upload(
        &self,
        payload: &PresignUploadPayload,
        options: &RequestOptions,
    ) -> Result<PresignUploadResponse, ApiError> {
        let body = PresignBody::from(payload);
        let response: WirePresignResponse = self
            .transport
            .post(&format!("{MEDIA_ROOT}/presign"), Some(&body), options)
            .await?;
        Ok(response.into())
    }

    /// Pushes raw bytes to the presigned target with whatever headers the
    /// presign response demanded. The upload URL is absolute and bypasses
    /// the configured API base.
    pub async fn upload_binary(
        &self,
        presign: &PresignUploadResponse,
        bytes: Vec<u8>,
        mime: &str,
    ) -> Result<(), ApiError> {
        self.transport
            .put_raw(
                &presign.upload_url,
                bytes,
                Some(mime),
                &presign.headers,
                &RequestOptions::new(),
            )
            .await?;
        Ok(())
    }

    pub async fn complete_upload(
        &self,
        payload: &CompleteUploadPayload,
        options: &RequestOptions,
    ) -> Result<MediaAssetStatus, ApiError> {
        let body = CompleteBody::from(payload);
        let status: WireMediaAssetStatus = self
            .transport
            .post(&format!("{MEDIA_ROOT}/complete"), Some(&body), options)
            .await?;
        Ok(status.into())
    }
}
