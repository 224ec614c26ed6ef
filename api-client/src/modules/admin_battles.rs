use serde_json::Value;

use crate::error::ApiError;
use crate::models::{AdminBattle, AdminBattleList};
use crate::statuses::MatchStatus;
use crate::transport::{Query, RequestOptions, Transport};
use crate::wire::{
    CreateAdminBattlePayload, CreateBattleBody, UpdateAdminBattlePayload, UpdateBattleBody,
    WireAdminBattle, WireAdminBattleList,
};

const ADMIN_BATTLES_ROOT: &str = "/api/v1/admin/battles";

#[derive(Debug, Clone, Default)]
pub struct ListAdminBattlesParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<MatchStatus>,
    pub round_id: Option<String>,
    pub tournament_id: Option<String>,
}

/// Admin battle CRUD: scheduling, reseeding, and cancellation all go
/// through create/update with partial bodies.
pub struct AdminBattlesApi<'a> {
    transport: &'a Transport,
}

impl<'a> AdminBattlesApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn list(
        &self,
        params: &ListAdminBattlesParams,
        options: &RequestOptions,
    ) -> Result<AdminBattleList, ApiError> {
        let query = Query::new()
            .push_opt("page", params.page)
            .push_opt("limit", params.limit)
            .push_opt("status", params.status.map(|status| status.as_str()))
            .push_opt("round_id", params.round_id.as_deref())
            .push_opt("tournament_id", params.tournament_id.as_deref());
        let options = options.clone().merged_query(query);
        let list: WireAdminBattleList = self.transport.get(ADMIN_BATTLES_ROOT, &options).await?;
        Ok(list.into())
    }

    pub async fn get(
        &self,
        battle_id: &str,
        options: &RequestOptions,
    ) -> Result<AdminBattle, ApiError> {
        let battle: WireAdminBattle = self
            .transport
            .get(&format!("{ADMIN_BATTLES_ROOT}/{battle_id}"), options)
            .await?;
        Ok(battle.into())
    }

    pub async fn create(
        &self,
        payload: &CreateAdminBattlePayload,
        options: &RequestOptions,
    ) -> Result<AdminBattle, ApiError> {
        let body = CreateBattleBody::from(payload);
        let battle: WireAdminBattle = self
            .transport
            .post(ADMIN_BATTLES_ROOT, Some(&body), options)
            .await?;
        Ok(battle.into())
    }

    /// Partial update: only fields present in the payload reach the wire.
    pub async fn update(
        &self,
        battle_id: &str,
        payload: &UpdateAdminBattlePayload,
        options: &RequestOptions,
    ) -> Result<AdminBattle, ApiError> {
        let body = UpdateBattleBody::from(payload);
        let battle: WireAdminBattle = self
            .transport
            .patch(&format!("{ADMIN_BATTLES_ROOT}/{battle_id}"), Some(&body), options)
            .await?;
        Ok(battle.into())
    }

    pub async fn delete(&self, battle_id: &str, options: &RequestOptions) -> Result<(), ApiError> {
        let _: Option<Value> = self
            .transport
            .delete(&format!("{ADMIN_BATTLES_ROOT}/{battle_id}"), options)
            .await?;
        Ok(())
    }
}
