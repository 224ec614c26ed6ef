//! Wire-format DTOs and the pure mappers between them and the domain
//! models.
//!
//! Incoming shapes mirror the backend's snake_case records and convert via
//! `From` impls, applying optional-field defaulting and role/status
//! normalization on the way in. Outgoing shapes emit only the fields the
//! backend expects. No validation happens here; the mapper trusts the
//! backend contract.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::*;
use crate::roles::normalize_roles;
use crate::statuses::{ApplicationStatus, AssignmentStatus, MatchStatus, RoundStatus};

// ---------------------------------------------------------------------------
// Auth

#[derive(Debug, Deserialize)]
pub struct WireAuthUser {
    pub id: String,
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl From<WireAuthUser> for AuthUser {
    fn from(wire: WireAuthUser) -> Self {
        AuthUser {
            id: wire.id,
            email: wire.email,
            display_name: wire.display_name,
            roles: normalize_roles(&wire.roles),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WireAuthSession {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: WireAuthUser,
}

impl From<WireAuthSession> for AuthSession {
    fn from(wire: WireAuthSession) -> Self {
        AuthSession {
            access_token: wire.access_token,
            token_type: wire.token_type,
            expires_in: wire.expires_in,
            user: wire.user.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WireRefreshTokens {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl From<WireRefreshTokens> for RefreshTokens {
    fn from(wire: WireRefreshTokens) -> Self {
        RefreshTokens {
            access_token: wire.access_token,
            token_type: wire.token_type,
            expires_in: wire.expires_in,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub display_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<&'a str>>,
}

#[derive(Debug, Serialize)]
pub struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RefreshBody<'a> {
    pub refresh_token: &'a str,
}

// ---------------------------------------------------------------------------
// Profiles

#[derive(Debug, Deserialize)]
pub struct WireViewerContext {
    pub is_self: bool,
    pub can_edit: bool,
    pub can_moderate: bool,
    pub can_view_private: bool,
}

#[derive(Debug, Deserialize)]
pub struct WireProfileAvatar {
    pub key: String,
    pub url: String,
}

impl From<WireProfileAvatar> for ProfileAvatar {
    fn from(wire: WireProfileAvatar) -> Self {
        ProfileAvatar {
            key: wire.key,
            url: wire.url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WireProfileView {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    pub viewer_context: WireViewerContext,
    #[serde(default)]
    pub avatar: Option<WireProfileAvatar>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub vk_id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub socials: Option<Value>,
}

impl From<WireProfileView> for UserProfile {
    fn from(wire: WireProfileView) -> Self {
        UserProfile {
            id: wire.id,
            display_name: wire.display_name,
            roles: normalize_roles(&wire.roles),
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            viewer_context: ViewerContext {
                is_self: wire.viewer_context.is_self,
                can_edit: wire.viewer_context.can_edit,
                can_moderate: wire.viewer_context.can_moderate,
                can_view_private: wire.viewer_context.can_view_private,
            },
            avatar: wire.avatar.map(Into::into),
            bio: wire.bio,
            city: wire.city,
            email: wire.email,
            age: wire.age,
            vk_id: wire.vk_id,
            full_name: wire.full_name,
            socials: wire.socials,
        }
    }
}

// ---------------------------------------------------------------------------
// Admin users

#[derive(Debug, Deserialize)]
pub struct WireAdminUser {
    pub id: String,
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub last_login_at: Option<String>,
}

impl From<WireAdminUser> for AdminUser {
    fn from(wire: WireAdminUser) -> Self {
        AdminUser {
            id: wire.id,
            email: wire.email,
            display_name: wire.display_name,
            roles: normalize_roles(&wire.roles),
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            last_login_at: wire.last_login_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WireAdminUserList {
    pub data: Vec<WireAdminUser>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

impl From<WireAdminUserList> for AdminUserList {
    fn from(wire: WireAdminUserList) -> Self {
        AdminUserList {
            data: wire.data.into_iter().map(Into::into).collect(),
            page: wire.page,
            limit: wire.limit,
            total: wire.total,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WireUserRolesState {
    pub user_id: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl From<WireUserRolesState> for UserRolesState {
    fn from(wire: WireUserRolesState) -> Self {
        UserRolesState {
            user_id: wire.user_id,
            roles: normalize_roles(&wire.roles),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoleChangeBody {
    pub op: RoleChangeOp,
    pub role: crate::roles::UserRole,
}

// ---------------------------------------------------------------------------
// Media

/// The presign endpoint answers in camelCase, unlike the rest of the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePresignResponse {
    pub asset_id: String,
    pub storage_key: String,
    pub upload_url: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl From<WirePresignResponse> for PresignUploadResponse {
    fn from(wire: WirePresignResponse) -> Self {
        PresignUploadResponse {
            asset_id: wire.asset_id,
            storage_key: wire.storage_key,
            upload_url: wire.upload_url,
            headers: wire.headers,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WireMediaAssetStatus {
    pub id: String,
    pub status: String,
}

impl From<WireMediaAssetStatus> for MediaAssetStatus {
    fn from(wire: WireMediaAssetStatus) -> Self {
        MediaAssetStatus {
            id: wire.id,
            status: wire.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PresignBody<'a> {
    pub filename: &'a str,
    pub mime: &'a str,
    pub size_bytes: u64,
    #[serde(rename = "type")]
    pub kind: UploadKind,
}

impl<'a> From<&'a PresignUploadPayload> for PresignBody<'a> {
    fn from(payload: &'a PresignUploadPayload) -> Self {
        PresignBody {
            filename: &payload.filename,
            mime: &payload.mime,
            size_bytes: payload.size_bytes,
            kind: payload.kind,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompleteBody<'a> {
    pub asset_id: &'a str,
    pub storage_key: &'a str,
    pub mime: &'a str,
    pub size_bytes: u64,
    pub kind: UploadKind,
}

impl<'a> From<&'a CompleteUploadPayload> for CompleteBody<'a> {
    fn from(payload: &'a CompleteUploadPayload) -> Self {
        CompleteBody {
            asset_id: &payload.asset_id,
            storage_key: &payload.storage_key,
            mime: &payload.mime,
            size_bytes: payload.size_bytes,
            kind: payload.kind,
        }
    }
}

// ---------------------------------------------------------------------------
// Moderation

#[derive(Debug, Deserialize)]
pub struct WireModerationRound {
    pub id: String,
    pub number: u32,
    pub kind: String,
    pub tournament_id: String,
    pub tournament_title: String,
}

#[derive(Debug, Deserialize)]
pub struct WireModerationArtist {
    pub id: String,
    pub display_name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct WireModerationAudio {
    pub id: String,
    pub mime: String,
    pub status: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WireModerationSubmission {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub submitted_at: Option<String>,
    pub updated_at: String,
    #[serde(default)]
    pub lyrics: Option<String>,
    pub round: WireModerationRound,
    pub artist: WireModerationArtist,
    pub audio: WireModerationAudio,
}

impl From<WireModerationSubmission> for ModerationSubmission {
    fn from(wire: WireModerationSubmission) -> Self {
        ModerationSubmission {
            id: wire.id,
            status: wire.status,
            submitted_at: wire.submitted_at,
            updated_at: wire.updated_at,
            lyrics: wire.lyrics,
            round: ModerationRound {
                id: wire.round.id,
                number: wire.round.number,
                kind: wire.round.kind,
                tournament_id: wire.round.tournament_id,
                tournament_title: wire.round.tournament_title,
            },
            artist: ModerationArtist {
                id: wire.artist.id,
                display_name: wire.artist.display_name,
                email: wire.artist.email,
            },
            audio: ModerationAudio {
                id: wire.audio.id,
                mime: wire.audio.mime,
                status: wire.audio.status,
                url: wire.audio.url,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WireModerationSubmissionList {
    pub data: Vec<WireModerationSubmission>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

impl From<WireModerationSubmissionList> for ModerationSubmissionList {
    fn from(wire: WireModerationSubmissionList) -> Self {
        ModerationSubmissionList {
            data: wire.data.into_iter().map(Into::into).collect(),
            page: wire.page,
            limit: wire.limit,
            total: wire.total,
        }
    }
}

// ---------------------------------------------------------------------------
// Battles

#[derive(Debug, Deserialize)]
pub struct WireTrack {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default)]
    pub status: Option<String>,
}

impl From<WireTrack> for Track {
    fn from(wire: WireTrack) -> Self {
        Track {
            id: wire.id,
            audio_url: wire.audio_url,
            lyrics: wire.lyrics,
            likes: wire.likes,
            status: wire.status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WireBattleRound {
    pub id: String,
    pub number: u32,
    pub kind: String,
}

impl From<WireBattleRound> for BattleRoundSummary {
    fn from(wire: WireBattleRound) -> Self {
        BattleRoundSummary {
            id: wire.id,
            number: wire.number,
            kind: wire.kind,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WireBattleTournament {
    pub id: String,
    pub title: String,
}

impl From<WireBattleTournament> for BattleTournament {
    fn from(wire: WireBattleTournament) -> Self {
        BattleTournament {
            id: wire.id,
            title: wire.title,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WireAdminBattleParticipant {
    pub participant_id: String,
    pub display_name: String,
    #[serde(default)]
    pub seed: Option<i32>,
    #[serde(default)]
    pub track: Option<WireTrack>,
}

impl From<WireAdminBattleParticipant> for AdminBattleParticipant {
    fn from(wire: WireAdminBattleParticipant) -> Self {
        AdminBattleParticipant {
            participant_id: wire.participant_id,
            display_name: wire.display_name,
            seed: wire.seed,
            track: wire.track.map(Into::into),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WireAdminBattle {
    pub id: String,
    #[serde(default)]
    pub status: MatchStatus,
    pub round_id: String,
    pub round: WireBattleRound,
    pub tournament: WireBattleTournament,
    #[serde(default)]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub ends_at: Option<String>,
    #[serde(default)]
    pub participants: Vec<WireAdminBattleParticipant>,
}

impl From<WireAdminBattle> for AdminBattle {
    fn from(wire: WireAdminBattle) -> Self {
        AdminBattle {
            id: wire.id,
            status: wire.status,
            round_id: wire.round_id,
            round: wire.round.into(),
            tournament: wire.tournament.into(),
            starts_at: wire.starts_at,
            ends_at: wire.ends_at,
            participants: wire.participants.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WireAdminBattleList {
    pub data: Vec<WireAdminBattle>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

impl From<WireAdminBattleList> for AdminBattleList {
    fn from(wire: WireAdminBattleList) -> Self {
        AdminBattleList {
            data: wire.data.into_iter().map(Into::into).collect(),
            page: wire.page,
            limit: wire.limit,
            total: wire.total,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BattleParticipantBody {
    pub participant_id: String,
    pub seed: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminBattleParticipantInput {
    pub participant_id: String,
    pub seed: Option<i32>,
}

fn serialize_participants(participants: &[AdminBattleParticipantInput]) -> Vec<BattleParticipantBody> {
    participants
        .iter()
        .map(|entry| BattleParticipantBody {
            participant_id: entry.participant_id.clone(),
            seed: entry.seed,
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateAdminBattlePayload {
    pub round_id: String,
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
    pub status: Option<MatchStatus>,
    pub participants: Vec<AdminBattleParticipantInput>,
}

#[derive(Debug, Serialize)]
pub struct CreateBattleBody {
    pub round_id: String,
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MatchStatus>,
    pub participants: Vec<BattleParticipantBody>,
}

impl From<&CreateAdminBattlePayload> for CreateBattleBody {
    fn from(payload: &CreateAdminBattlePayload) -> Self {
        CreateBattleBody {
            round_id: payload.round_id.clone(),
            starts_at: payload.starts_at.clone(),
            ends_at: payload.ends_at.clone(),
            status: payload.status,
            participants: serialize_participants(&payload.participants),
        }
    }
}

/// Partial update: outer `None` omits the field entirely, `Some(None)` on
/// the timestamp fields sends an explicit null to clear them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateAdminBattlePayload {
    pub round_id: Option<String>,
    pub starts_at: Option<Option<String>>,
    pub ends_at: Option<Option<String>>,
    pub status: Option<MatchStatus>,
    pub participants: Option<Vec<AdminBattleParticipantInput>>,
}

#[derive(Debug, Serialize)]
pub struct UpdateBattleBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MatchStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<BattleParticipantBody>>,
}

impl From<&UpdateAdminBattlePayload> for UpdateBattleBody {
    fn from(payload: &UpdateAdminBattlePayload) -> Self {
        UpdateBattleBody {
            round_id: payload.round_id.clone(),
            starts_at: payload.starts_at.clone(),
            ends_at: payload.ends_at.clone(),
            status: payload.status,
            participants: payload
                .participants
                .as_deref()
                .map(serialize_participants),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WirePublicBattleParticipant {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub avatar: Option<WireProfileAvatar>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub avg_total_score: Option<f64>,
    #[serde(default)]
    pub seed: Option<i32>,
    #[serde(default)]
    pub track: Option<WireTrack>,
}

impl From<WirePublicBattleParticipant> for PublicBattleParticipant {
    fn from(wire: WirePublicBattleParticipant) -> Self {
        PublicBattleParticipant {
            id: wire.id,
            display_name: wire.display_name,
            avatar: wire.avatar.map(Into::into),
            city: wire.city,
            age: wire.age,
            avg_total_score: wire.avg_total_score,
            seed: wire.seed,
            track: wire.track.map(Into::into),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WirePublicBattle {
    pub id: String,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(default)]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub ends_at: Option<String>,
    pub round: WireBattleRound,
    pub tournament: WireBattleTournament,
    #[serde(default)]
    pub participants: Vec<WirePublicBattleParticipant>,
}

impl From<WirePublicBattle> for PublicBattle {
    fn from(wire: WirePublicBattle) -> Self {
        PublicBattle {
            id: wire.id,
            status: wire.status,
            starts_at: wire.starts_at,
            ends_at: wire.ends_at,
            round: wire.round.into(),
            tournament: wire.tournament.into(),
            participants: wire.participants.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WirePublicBattleList {
    pub data: Vec<WirePublicBattle>,
}

impl From<WirePublicBattleList> for PublicBattleList {
    fn from(wire: WirePublicBattleList) -> Self {
        PublicBattleList {
            data: wire.data.into_iter().map(Into::into).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Public participants

#[derive(Debug, Deserialize)]
pub struct WirePublicParticipant {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub avatar: Option<WireProfileAvatar>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub avg_total_score: Option<f64>,
    #[serde(default)]
    pub total_wins: u32,
    #[serde(default)]
    pub joined_at: Option<String>,
}

impl From<WirePublicParticipant> for PublicParticipant {
    fn from(wire: WirePublicParticipant) -> Self {
        PublicParticipant {
            id: wire.id,
            display_name: wire.display_name,
            roles: normalize_roles(&wire.roles),
            avatar: wire.avatar.map(Into::into),
            full_name: wire.full_name,
            city: wire.city,
            avg_total_score: wire.avg_total_score,
            total_wins: wire.total_wins,
            joined_at: wire.joined_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WirePublicParticipantList {
    pub data: Vec<WirePublicParticipant>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

impl From<WirePublicParticipantList> for PublicParticipantList {
    fn from(wire: WirePublicParticipantList) -> Self {
        PublicParticipantList {
            data: wire.data.into_iter().map(Into::into).collect(),
            page: wire.page,
            limit: wire.limit,
            total: wire.total,
        }
    }
}

// ---------------------------------------------------------------------------
// Judge

#[derive(Debug, Deserialize)]
pub struct WireJudgeAssignment {
    pub id: String,
    pub match_id: String,
    #[serde(default)]
    pub status: AssignmentStatus,
    #[serde(default)]
    pub round_number: Option<u32>,
    #[serde(default)]
    pub round_kind: Option<String>,
    #[serde(default)]
    pub round_strategy: Option<String>,
    #[serde(default)]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub judging_deadline_at: Option<String>,
}

impl From<WireJudgeAssignment> for JudgeAssignment {
    fn from(wire: WireJudgeAssignment) -> Self {
        JudgeAssignment {
            id: wire.id,
            match_id: wire.match_id,
            status: wire.status,
            round_number: wire.round_number,
            round_kind: wire.round_kind,
            round_strategy: wire.round_strategy,
            starts_at: wire.starts_at,
            judging_deadline_at: wire.judging_deadline_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WireRubricCriterion {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub min_value: Option<f64>,
    #[serde(default)]
    pub max_value: Option<f64>,
}

impl From<WireRubricCriterion> for RubricCriterion {
    fn from(wire: WireRubricCriterion) -> Self {
        RubricCriterion {
            key: wire.key,
            name: wire.name,
            weight: wire.weight,
            min_value: wire.min_value,
            max_value: wire.max_value,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WireJudgeEvaluation {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub pass_decision: Option<String>,
    #[serde(default)]
    pub rubric: Option<HashMap<String, f64>>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl From<WireJudgeEvaluation> for JudgeEvaluation {
    fn from(wire: WireJudgeEvaluation) -> Self {
        JudgeEvaluation {
            score: wire.score,
            pass_decision: wire.pass_decision,
            rubric: wire.rubric,
            comment: wire.comment,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WireJudgeBattleParticipant {
    pub participant_id: String,
    pub display_name: String,
    #[serde(default)]
    pub track: Option<WireTrack>,
}

#[derive(Debug, Deserialize)]
pub struct WireJudgeBattleDetails {
    pub match_id: String,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(default)]
    pub participants: Vec<WireJudgeBattleParticipant>,
    #[serde(default)]
    pub rubric: Vec<WireRubricCriterion>,
    #[serde(default)]
    pub evaluation: Option<WireJudgeEvaluation>,
}

impl From<WireJudgeBattleDetails> for JudgeBattleDetails {
    fn from(wire: WireJudgeBattleDetails) -> Self {
        JudgeBattleDetails {
            match_id: wire.match_id,
            status: wire.status,
            participants: wire
                .participants
                .into_iter()
                .map(|participant| JudgeBattleParticipant {
                    participant_id: participant.participant_id,
                    display_name: participant.display_name,
                    track: participant.track.map(Into::into),
                })
                .collect(),
            rubric: wire.rubric.into_iter().map(Into::into).collect(),
            evaluation: wire.evaluation.map(Into::into),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AssignmentStatusBody {
    pub status: AssignmentStatus,
}

#[derive(Debug, Serialize)]
pub struct JudgeScoreBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_decision: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rubric: Option<&'a HashMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<&'a str>,
}

impl<'a> From<&'a JudgeScorePayload> for JudgeScoreBody<'a> {
    fn from(payload: &'a JudgeScorePayload) -> Self {
        JudgeScoreBody {
            score: payload.score,
            pass_decision: payload.pass_decision.as_deref(),
            rubric: payload.rubric.as_ref(),
            comment: payload.comment.as_deref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Applications

#[derive(Debug, Deserialize)]
pub struct WireParticipationApplication {
    pub id: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub vk_id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub beat_author: Option<String>,
    #[serde(default)]
    pub audio_id: Option<String>,
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl From<WireParticipationApplication> for ParticipationApplication {
    fn from(wire: WireParticipationApplication) -> Self {
        ParticipationApplication {
            id: wire.id,
            status: wire.status,
            city: wire.city,
            age: wire.age,
            vk_id: wire.vk_id,
            full_name: wire.full_name,
            beat_author: wire.beat_author,
            audio_id: wire.audio_id,
            lyrics: wire.lyrics,
            submitted_at: wire.submitted_at,
            updated_at: wire.updated_at,
        }
    }
}

/// Reverse mapper for outgoing application submissions: absent fields are
/// omitted entirely, never sent as null.
#[derive(Debug, Serialize)]
pub struct ApplicationBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vk_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beat_author: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<&'a str>,
}

impl<'a> From<&'a SubmitApplicationPayload> for ApplicationBody<'a> {
    fn from(payload: &'a SubmitApplicationPayload) -> Self {
        ApplicationBody {
            city: payload.city.as_deref(),
            age: payload.age,
            vk_id: payload.vk_id.as_deref(),
            full_name: payload.full_name.as_deref(),
            beat_author: payload.beat_author.as_deref(),
            audio_id: payload.audio_id.as_deref(),
            lyrics: payload.lyrics.as_deref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Rounds

#[derive(Debug, Deserialize)]
pub struct WireRound {
    pub id: String,
    pub number: u32,
    pub kind: String,
    #[serde(default)]
    pub status: RoundStatus,
    #[serde(default)]
    pub strategy: Option<String>,
    #[serde(default)]
    pub tournament_id: Option<String>,
    #[serde(default)]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub ends_at: Option<String>,
}

impl From<WireRound> for Round {
    fn from(wire: WireRound) -> Self {
        Round {
            id: wire.id,
            number: wire.number,
            kind: wire.kind,
            status: wire.status,
            strategy: wire.strategy,
            tournament_id: wire.tournament_id,
            starts_at: wire.starts_at,
            ends_at: wire.ends_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn presign_body_uses_type_key_on_the_wire() {
        let payload = PresignUploadPayload {
            filename: "verse.mp3".into(),
            mime: "audio/mpeg".into(),
            size_bytes: 1024,
            kind: UploadKind::Audio,
        };
        let body = serde_json::to_value(PresignBody::from(&payload)).unwrap();
        assert_eq!(
            body,
            json!({
                "filename": "verse.mp3",
                "mime": "audio/mpeg",
                "size_bytes": 1024,
                "type": "audio"
            })
        );
    }

    #[test]
    fn update_battle_body_serializes_only_provided_fields() {
        let payload = UpdateAdminBattlePayload {
            status: Some(MatchStatus::Judging),
            starts_at: Some(None),
            ..Default::default()
        };
        let body = serde_json::to_value(UpdateBattleBody::from(&payload)).unwrap();
        assert_eq!(body, json!({ "status": "judging", "starts_at": null }));
    }

    #[test]
    fn create_battle_body_keeps_explicit_null_timestamps() {
        let payload = CreateAdminBattlePayload {
            round_id: "round-1".into(),
            participants: vec![AdminBattleParticipantInput {
                participant_id: "p-1".into(),
                seed: None,
            }],
            ..Default::default()
        };
        let body = serde_json::to_value(CreateBattleBody::from(&payload)).unwrap();
        assert_eq!(
            body,
            json!({
                "round_id": "round-1",
                "starts_at": null,
                "ends_at": null,
                "participants": [{ "participant_id": "p-1", "seed": null }]
            })
        );
    }

    #[test]
    fn application_body_omits_absent_fields() {
        let payload = SubmitApplicationPayload {
            city: Some("Moscow".into()),
            audio_id: Some("asset-9".into()),
            ..Default::default()
        };
        let body = serde_json::to_value(ApplicationBody::from(&payload)).unwrap();
        assert_eq!(body, json!({ "city": "Moscow", "audio_id": "asset-9" }));
    }
}
