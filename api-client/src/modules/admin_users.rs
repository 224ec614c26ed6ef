use crate::error::ApiError;
use crate::models::{AdminUserList, RoleChangeOp, UserRolesState};
use crate::roles::UserRole;
use crate::transport::{Query, RequestOptions, Transport};
use crate::wire::{RoleChangeBody, WireAdminUserList, WireUserRolesState};

const ADMIN_USERS_ROOT: &str = "/api/v1/admin/users";

#[derive(Debug, Clone, Default)]
pub struct ListAdminUsersParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub role: Option<UserRole>,
}

/// Admin-only user listing and role management.
pub struct AdminUsersApi<'a> {
    transport: &'a Transport,
}

impl<'a> AdminUsersApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn list(
        &self,
        params: &ListAdminUsersParams,
        options: &RequestOptions,
    ) -> Result<AdminUserList, ApiError> {
        let query = Query::new()
            .push_opt("page", params.page)
            .push_opt("limit", params.limit)
            .push_opt("search", params.search.as_deref())
            .push_opt("role", params.role.map(|role| role.as_str()));
        let options = options.clone().merged_query(query);
        let list: WireAdminUserList = self.transport.get(ADMIN_USERS_ROOT, &options).await?;
        Ok(list.into())
    }

    /// Grant or revoke a single role; the backend answers with the user's
    /// full normalized role set.
    pub async fn change_role(
        &self,
        user_id: &str,
        op: RoleChangeOp,
        role: UserRole,
        options: &RequestOptions,
    ) -> Result<UserRolesState, ApiError> {
        let body = RoleChangeBody { op, role };
        let state: WireUserRolesState = self
            .transport
            .post(&format!("{ADMIN_USERS_ROOT}/{user_id}/roles"), Some(&body), options)
            .await?;
        Ok(state.into())
    }
}
