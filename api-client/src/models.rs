//! Domain view models produced by the wire mappers.
//!
//! These are the camelCase shapes the rest of the application consumes;
//! serde renames keep the JSON boundary camelCase while the structs stay
//! idiomatic Rust. Absent optional wire fields always land as `None`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::roles::UserRole;
use crate::statuses::{ApplicationStatus, AssignmentStatus, MatchStatus, RoundStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub roles: Vec<UserRole>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: AuthUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokens {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerContext {
    pub is_self: bool,
    pub can_edit: bool,
    pub can_moderate: bool,
    pub can_view_private: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAvatar {
    pub key: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub display_name: String,
    pub roles: Vec<UserRole>,
    pub created_at: String,
    pub updated_at: String,
    pub viewer_context: ViewerContext,
    pub avatar: Option<ProfileAvatar>,
    pub bio: Option<String>,
    pub city: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub vk_id: Option<String>,
    pub full_name: Option<String>,
    pub socials: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub roles: Vec<UserRole>,
    pub created_at: String,
    pub updated_at: String,
    pub last_login_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserList {
    pub data: Vec<AdminUser>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleChangeOp {
    Grant,
    Revoke,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRolesState {
    pub user_id: String,
    pub roles: Vec<UserRole>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadKind {
    Audio,
    Image,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresignUploadPayload {
    pub filename: String,
    pub mime: String,
    pub size_bytes: u64,
    pub kind: UploadKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignUploadResponse {
    pub asset_id: String,
    pub storage_key: String,
    pub upload_url: String,
    /// Headers the backend requires on the direct upload request.
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteUploadPayload {
    pub asset_id: String,
    pub storage_key: String,
    pub mime: String,
    pub size_bytes: u64,
    pub kind: UploadKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAssetStatus {
    pub id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationRound {
    pub id: String,
    pub number: u32,
    pub kind: String,
    pub tournament_id: String,
    pub tournament_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationArtist {
    pub id: String,
    pub display_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationAudio {
    pub id: String,
    pub mime: String,
    pub status: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationSubmission {
    pub id: String,
    pub status: String,
    pub submitted_at: Option<String>,
    pub updated_at: String,
    pub lyrics: Option<String>,
    pub round: ModerationRound,
    pub artist: ModerationArtist,
    pub audio: ModerationAudio,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationSubmissionList {
    pub data: Vec<ModerationSubmission>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

/// A submitted track attached to a battle participant. Presence of
/// individual fields depends on the viewer's access level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: Option<String>,
    pub audio_url: Option<String>,
    pub lyrics: Option<String>,
    pub likes: Option<u64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleRoundSummary {
    pub id: String,
    pub number: u32,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleTournament {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBattleParticipant {
    pub participant_id: String,
    pub display_name: String,
    pub seed: Option<i32>,
    pub track: Option<Track>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBattle {
    pub id: String,
    pub status: MatchStatus,
    pub round_id: String,
    pub round: BattleRoundSummary,
    pub tournament: BattleTournament,
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
    pub participants: Vec<AdminBattleParticipant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBattleList {
    pub data: Vec<AdminBattle>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicBattleParticipant {
    pub id: String,
    pub display_name: String,
    pub avatar: Option<ProfileAvatar>,
    pub city: Option<String>,
    pub age: Option<u32>,
    pub avg_total_score: Option<f64>,
    pub seed: Option<i32>,
    pub track: Option<Track>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicBattle {
    pub id: String,
    pub status: MatchStatus,
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
    pub round: BattleRoundSummary,
    pub tournament: BattleTournament,
    pub participants: Vec<PublicBattleParticipant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicBattleList {
    pub data: Vec<PublicBattle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicParticipant {
    pub id: String,
    pub display_name: String,
    pub roles: Vec<UserRole>,
    pub avatar: Option<ProfileAvatar>,
    pub full_name: Option<String>,
    pub city: Option<String>,
    pub avg_total_score: Option<f64>,
    pub total_wins: u32,
    pub joined_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicParticipantList {
    pub data: Vec<PublicParticipant>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeAssignment {
    pub id: String,
    pub match_id: String,
    pub status: AssignmentStatus,
    pub round_number: Option<u32>,
    pub round_kind: Option<String>,
    pub round_strategy: Option<String>,
    pub starts_at: Option<String>,
    pub judging_deadline_at: Option<String>,
}

/// One named, weighted judging criterion with optional score bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricCriterion {
    pub key: String,
    pub name: String,
    pub weight: Option<f64>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeEvaluation {
    pub score: Option<f64>,
    pub pass_decision: Option<String>,
    pub rubric: Option<HashMap<String, f64>>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeBattleParticipant {
    pub participant_id: String,
    pub display_name: String,
    pub track: Option<Track>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeBattleDetails {
    pub match_id: String,
    pub status: MatchStatus,
    pub participants: Vec<JudgeBattleParticipant>,
    pub rubric: Vec<RubricCriterion>,
    /// The judge's own previously submitted evaluation, when any.
    pub evaluation: Option<JudgeEvaluation>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JudgeScorePayload {
    pub score: Option<f64>,
    pub pass_decision: Option<String>,
    pub rubric: Option<HashMap<String, f64>>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationApplication {
    pub id: String,
    pub status: ApplicationStatus,
    pub city: Option<String>,
    pub age: Option<u32>,
    pub vk_id: Option<String>,
    pub full_name: Option<String>,
    pub beat_author: Option<String>,
    pub audio_id: Option<String>,
    pub lyrics: Option<String>,
    pub submitted_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitApplicationPayload {
    pub city: Option<String>,
    pub age: Option<u32>,
    pub vk_id: Option<String>,
    pub full_name: Option<String>,
    pub beat_author: Option<String>,
    pub audio_id: Option<String>,
    pub lyrics: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: String,
    pub number: u32,
    pub kind: String,
    pub status: RoundStatus,
    pub strategy: Option<String>,
    pub tournament_id: Option<String>,
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
}
