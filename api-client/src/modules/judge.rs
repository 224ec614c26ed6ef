use serde_json::Value;

use crate::error::ApiError;
use crate::models::{JudgeAssignment, JudgeBattleDetails, JudgeScorePayload};
use crate::statuses::AssignmentStatus;
use crate::transport::{RequestOptions, Transport};
use crate::wire::{
    AssignmentStatusBody, JudgeScoreBody, WireJudgeAssignment, WireJudgeBattleDetails,
};

const JUDGE_ROOT: &str = "/api/v1/judge";

/// Assignment queue and scoring surface for judges.
pub struct JudgeApi<'a> {
    transport: &'a Transport,
}

impl<'a> JudgeApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn list_assignments(
        &self,
        options: &RequestOptions,
    ) -> Result<Vec<JudgeAssignment>, ApiError> {
        let assignments: Vec<WireJudgeAssignment> = self
            .transport
            .get(&format!("{JUDGE_ROOT}/assignments"), options)
            .await?;
        Ok(assignments.into_iter().map(Into::into).collect())
    }

    /// Asks the backend for one more battle to judge. `None` when the pool
    /// is exhausted.
    pub async fn request_random_assignment(
        &self,
        options: &RequestOptions,
    ) -> Result<Option<JudgeAssignment>, ApiError> {
        let assignment: Option<WireJudgeAssignment> = self
            .transport
            .post(
                &format!("{JUDGE_ROOT}/assignments/random"),
                None::<&Value>,
                options,
            )
            .await?;
        Ok(assignment.map(Into::into))
    }

    pub async fn update_assignment_status(
        &self,
        assignment_id: &str,
        status: AssignmentStatus,
        options: &RequestOptions,
    ) -> Result<JudgeAssignment, ApiError> {
        let body = AssignmentStatusBody { status };
        let assignment: WireJudgeAssignment = self
            .transport
            .post(
                &format!("{JUDGE_ROOT}/assignments/{assignment_id}/status"),
                Some(&body),
                options,
            )
            .await?;
        Ok(assignment.into())
    }

    pub async fn get_battle_details(
        &self,
        match_id: &str,
        options: &RequestOptions,
    ) -> Result<JudgeBattleDetails, ApiError> {
        let details: WireJudgeBattleDetails = self
            .transport
            .get(&format!("{JUDGE_ROOT}/battles/{match_id}"), options)
            .await?;
        Ok(details.into())
    }

    pub async fn submit_battle_score(
        &self,
        match_id: &str,
        payload: &JudgeScorePayload,
        options: &RequestOptions,
    ) -> Result<(), ApiError> {
        let body = JudgeScoreBody::from(payload);
        let _: Option<Value> = self
            .transport
            .post(
                &format!("{JUDGE_ROOT}/battles/{match_id}/scores"),
                Some(&body),
                options,
            )
            .await?;
        Ok(())
    }
}
