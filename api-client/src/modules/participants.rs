use crate::error::ApiError;
use crate::models::PublicParticipantList;
use crate::transport::{Query, RequestOptions, Transport};
use crate::wire::WirePublicParticipantList;

const PARTICIPANTS_ROOT: &str = "/api/v1/artists";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantRoleFilter {
    Artist,
    Judge,
}

impl ParticipantRoleFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantRoleFilter::Artist => "artist",
            ParticipantRoleFilter::Judge => "judge",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantSort {
    JoinedAt,
    Wins,
    Rating,
}

impl ParticipantSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantSort::JoinedAt => "joined_at",
            ParticipantSort::Wins => "wins",
            ParticipantSort::Rating => "rating",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListParticipantsParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub role: Option<ParticipantRoleFilter>,
    pub sort: Option<ParticipantSort>,
}

/// Public roster of artists and judges.
pub struct ParticipantsApi<'a> {
    transport: &'a Transport,
}

impl<'a> ParticipantsApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn list(
        &self,
        params: &ListParticipantsParams,
        options: &RequestOptions,
    ) -> Result<PublicParticipantList, ApiError> {
        let query = Query::new()
            .push_opt("page", params.page)
            .push_opt("limit", params.limit)
            .push_opt("search", params.search.as_deref())
            .push_opt("role", params.role.map(|role| role.as_str()))
            .push_opt("sort", params.sort.map(|sort| sort.as_str()));
        let options = options.clone().merged_query(query);
        let list: WirePublicParticipantList =
            self.transport.get(PARTICIPANTS_ROOT, &options).await?;
        Ok(list.into())
    }
}
