use serde_json::Value;

use crate::error::ApiError;
use crate::models::{ModerationSubmission, ModerationSubmissionList};
use crate::transport::{Query, RequestOptions, Transport};
use crate::wire::{WireModerationSubmission, WireModerationSubmissionList};

const SUBMISSIONS_ROOT: &str = "/api/v1/mod/submissions";

#[derive(Debug, Clone, Default)]
pub struct ListSubmissionsParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<String>,
    pub round_id: Option<String>,
    pub search: Option<String>,
}

/// Moderation queue over artist submissions.
pub struct ModeratorApi<'a> {
    transport: &'a Transport,
}

impl<'a> ModeratorApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn list_submissions(
        &self,
        params: &ListSubmissionsParams,
        options: &RequestOptions,
    ) -> Result<ModerationSubmissionList, ApiError> {
        let query = Query::new()
            .push_opt("page", params.page)
            .push_opt("limit", params.limit)
            .push_opt("status", params.status.as_deref())
            .push_opt("round_id", params.round_id.as_deref())
            .push_opt("search", params.search.as_deref());
        let options = options.clone().merged_query(query);
        let list: WireModerationSubmissionList =
            self.transport.get(SUBMISSIONS_ROOT, &options).await?;
        Ok(list.into())
    }

    pub async fn get_submission(
        &self,
        submission_id: &str,
        options: &RequestOptions,
    ) -> Result<ModerationSubmission, ApiError> {
        let submission: WireModerationSubmission = self
            .transport
            .get(&format!("{SUBMISSIONS_ROOT}/{submission_id}"), options)
            .await?;
        Ok(submission.into())
    }

    pub async fn publish_submission(
        &self,
        submission_id: &str,
        options: &RequestOptions,
    ) -> Result<(), ApiError> {
        let _: Option<Value> = self
            .transport
            .post(
                &format!("{SUBMISSIONS_ROOT}/{submission_id}/publish"),
                None::<&Value>,
                options,
            )
            .await?;
        Ok(())
    }
}
