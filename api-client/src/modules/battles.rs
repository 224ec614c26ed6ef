use crate::error::ApiError;
use crate::models::PublicBattleList;
use crate::transport::{Query, RequestOptions, Transport};
use crate::wire::WirePublicBattleList;

const BATTLES_ROOT: &str = "/api/v1/battles";

/// Coarse public filter over the match lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicBattleStatusFilter {
    Current,
    Finished,
}

impl PublicBattleStatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublicBattleStatusFilter::Current => "current",
            PublicBattleStatusFilter::Finished => "finished",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListPublicBattlesParams {
    pub status: Option<PublicBattleStatusFilter>,
    pub limit: Option<u32>,
}

/// Public, read-only battle listing.
pub struct BattlesApi<'a> {
    transport: &'a Transport,
}

impl<'a> BattlesApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn list(
        &self,
        params: &ListPublicBattlesParams,
        options: &RequestOptions,
    ) -> Result<PublicBattleList, ApiError> {
        let query = Query::new()
            .push_opt("status", params.status.map(|status| status.as_str()))
            .push_opt("limit", params.limit);
        let options = options.clone().merged_query(query);
        let list: WirePublicBattleList = self.transport.get(BATTLES_ROOT, &options).await?;
        Ok(list.into())
    }
}
