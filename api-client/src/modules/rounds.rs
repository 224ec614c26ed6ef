use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{Round, RubricCriterion};
use crate::transport::{RequestOptions, Transport};
use crate::wire::{WireRound, WireRubricCriterion};

const ROUNDS_ROOT: &str = "/api/v1/rounds";

#[derive(Debug, Deserialize)]
struct WireCriteriaResponse {
    #[serde(default)]
    criteria: Vec<WireRubricCriterion>,
}

/// Read-only round metadata and judging criteria.
pub struct RoundsApi<'a> {
    transport: &'a Transport,
}

impl<'a> RoundsApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn get(&self, round_id: &str, options: &RequestOptions) -> Result<Round, ApiError> {
        let round: WireRound = self
            .transport
            .get(&format!("{ROUNDS_ROOT}/{round_id}"), options)
            .await?;
        Ok(round.into())
    }

    pub async fn get_criteria(
        &self,
        round_id: &str,
        options: &RequestOptions,
    ) -> Result<Vec<RubricCriterion>, ApiError> {
        let response: WireCriteriaResponse = self
            .transport
            .get(&format!("{ROUNDS_ROOT}/{round_id}/criteria"), options)
            .await?;
        Ok(response.criteria.into_iter().map(Into::into).collect())
    }
}
