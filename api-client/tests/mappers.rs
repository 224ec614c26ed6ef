//! Fixture-driven mapper checks: wire JSON in, view models out.

use battle_rap_api::models::*;
use battle_rap_api::statuses::{ApplicationStatus, AssignmentStatus, MatchStatus};
use battle_rap_api::wire::*;
use battle_rap_api::UserRole;
use serde_json::json;

#[test]
fn auth_session_fixture_maps_with_normalized_roles() {
    let fixture = json!({
        "access_token": "tok-123",
        "token_type": "bearer",
        "expires_in": 3600,
        "user": {
            "id": "u-1",
            "email": "mc@example.com",
            "display_name": "MC Fixture",
            "roles": ["user", "artist", "user", "vip"]
        }
    });

    let session: AuthSession = serde_json::from_value::<WireAuthSession>(fixture)
        .unwrap()
        .into();

    assert_eq!(session.access_token, "tok-123");
    assert_eq!(session.expires_in, 3600);
    assert_eq!(session.user.display_name, "MC Fixture");
    // duplicates and the unknown "vip" are gone, priority order applied
    assert_eq!(session.user.roles, vec![UserRole::Artist, UserRole::User]);
}

#[test]
fn profile_fixture_defaults_absent_optionals_to_none() {
    let fixture = json!({
        "id": "p-1",
        "display_name": "MC Sparse",
        "roles": ["artist"],
        "created_at": "2026-01-10T12:00:00Z",
        "updated_at": "2026-02-01T08:30:00Z",
        "viewer_context": {
            "is_self": false,
            "can_edit": false,
            "can_moderate": true,
            "can_view_private": false
        }
    });

    let profile: UserProfile = serde_json::from_value::<WireProfileView>(fixture)
        .unwrap()
        .into();

    assert!(profile.avatar.is_none());
    assert!(profile.bio.is_none());
    assert!(profile.age.is_none());
    assert!(profile.socials.is_none());
    assert!(profile.viewer_context.can_moderate);
}

#[test]
fn admin_battle_fixture_maps_rounds_participants_and_status() {
    let fixture = json!({
        "id": "b-7",
        "status": "judging",
        "round_id": "r-2",
        "round": { "id": "r-2", "number": 2, "kind": "bracket" },
        "tournament": { "id": "t-1", "title": "Season One" },
        "starts_at": "2026-03-01T18:00:00Z",
        "ends_at": null,
        "participants": [
            {
                "participant_id": "pa-1",
                "display_name": "MC Left",
                "seed": 1,
                "track": { "audio_url": "https://media.example.com/left.mp3", "lyrics": "yo" }
            },
            { "participant_id": "pa-2", "display_name": "MC Right" }
        ]
    });

    let battle: AdminBattle = serde_json::from_value::<WireAdminBattle>(fixture)
        .unwrap()
        .into();

    assert_eq!(battle.status, MatchStatus::Judging);
    assert_eq!(battle.round.number, 2);
    assert_eq!(battle.tournament.title, "Season One");
    assert_eq!(battle.participants.len(), 2);
    assert_eq!(battle.participants[0].seed, Some(1));
    let track = battle.participants[0].track.as_ref().unwrap();
    assert_eq!(track.audio_url.as_deref(), Some("https://media.example.com/left.mp3"));
    assert!(battle.participants[1].track.is_none());
    assert!(battle.ends_at.is_none());
}

#[test]
fn unknown_battle_status_in_fixture_falls_back_to_scheduled() {
    let fixture = json!({
        "id": "b-9",
        "status": "postponed-indefinitely",
        "round_id": "r-1",
        "round": { "id": "r-1", "number": 1, "kind": "qualifier" },
        "tournament": { "id": "t-1", "title": "Season One" },
        "participants": []
    });

    let battle: AdminBattle = serde_json::from_value::<WireAdminBattle>(fixture)
        .unwrap()
        .into();
    assert_eq!(battle.status, MatchStatus::Scheduled);
}

#[test]
fn judge_assignment_fixture_maps_status_and_deadlines() {
    let fixture = json!({
        "id": "a-1",
        "match_id": "b-7",
        "status": "completed",
        "round_number": 2,
        "round_kind": "bracket",
        "round_strategy": "rubric",
        "judging_deadline_at": "2026-03-05T00:00:00Z"
    });

    let assignment: JudgeAssignment = serde_json::from_value::<WireJudgeAssignment>(fixture)
        .unwrap()
        .into();

    assert_eq!(assignment.status, AssignmentStatus::Completed);
    assert_eq!(assignment.round_number, Some(2));
    assert!(assignment.starts_at.is_none());
    assert_eq!(
        assignment.judging_deadline_at.as_deref(),
        Some("2026-03-05T00:00:00Z")
    );
}

#[test]
fn judge_battle_details_fixture_maps_rubric_and_prior_evaluation() {
    let fixture = json!({
        "match_id": "b-7",
        "status": "judging",
        "participants": [
            {
                "participant_id": "pa-1",
                "display_name": "MC Left",
                "track": { "audio_url": "https://media.example.com/left.mp3", "lyrics": "bars" }
            }
        ],
        "rubric": [
            { "key": "flow", "name": "Flow", "weight": 0.4, "max_value": 10.0 },
            { "key": "delivery", "name": "Delivery" }
        ],
        "evaluation": { "score": 8.5, "rubric": { "flow": 9.0 } }
    });

    let details: JudgeBattleDetails = serde_json::from_value::<WireJudgeBattleDetails>(fixture)
        .unwrap()
        .into();

    assert_eq!(details.rubric.len(), 2);
    assert_eq!(details.rubric[0].weight, Some(0.4));
    assert!(details.rubric[1].min_value.is_none());
    let evaluation = details.evaluation.unwrap();
    assert_eq!(evaluation.score, Some(8.5));
    assert_eq!(evaluation.rubric.unwrap()["flow"], 9.0);
}

#[test]
fn presign_fixture_keeps_camel_case_wire_shape() {
    let fixture = json!({
        "assetId": "asset-1",
        "storageKey": "uploads/asset-1.mp3",
        "uploadUrl": "https://storage.example.com/put/asset-1",
        "headers": { "x-amz-acl": "private" }
    });

    let presign: PresignUploadResponse = serde_json::from_value::<WirePresignResponse>(fixture)
        .unwrap()
        .into();

    assert_eq!(presign.asset_id, "asset-1");
    assert_eq!(presign.headers["x-amz-acl"], "private");
}

#[test]
fn moderation_submission_fixture_maps_nested_summaries() {
    let fixture = json!({
        "id": "s-1",
        "status": "pending",
        "updated_at": "2026-02-20T10:00:00Z",
        "round": {
            "id": "r-1",
            "number": 1,
            "kind": "qualifier",
            "tournament_id": "t-1",
            "tournament_title": "Season One"
        },
        "artist": { "id": "u-2", "display_name": "MC Pending", "email": "mc2@example.com" },
        "audio": { "id": "m-1", "mime": "audio/mpeg", "status": "ready" }
    });

    let submission: ModerationSubmission =
        serde_json::from_value::<WireModerationSubmission>(fixture)
            .unwrap()
            .into();

    assert_eq!(submission.round.tournament_title, "Season One");
    assert!(submission.submitted_at.is_none());
    assert!(submission.lyrics.is_none());
    assert!(submission.audio.url.is_none());
}

#[test]
fn application_round_trip_preserves_semantic_fields() {
    // outgoing reverse mapper
    let payload = SubmitApplicationPayload {
        city: Some("Kazan".into()),
        age: Some(24),
        vk_id: Some("id123".into()),
        full_name: None,
        beat_author: Some("prod. beats".into()),
        audio_id: Some("asset-1".into()),
        lyrics: Some("line one".into()),
    };
    let body = serde_json::to_value(ApplicationBody::from(&payload)).unwrap();
    assert_eq!(
        body,
        json!({
            "city": "Kazan",
            "age": 24,
            "vk_id": "id123",
            "beat_author": "prod. beats",
            "audio_id": "asset-1",
            "lyrics": "line one"
        })
    );

    // what the backend echoes back maps onto the same fields
    let mut echo = body.clone();
    echo["id"] = json!("app-1");
    echo["status"] = json!("submitted");
    let application: ParticipationApplication =
        serde_json::from_value::<WireParticipationApplication>(echo)
            .unwrap()
            .into();

    assert_eq!(application.status, ApplicationStatus::Submitted);
    assert_eq!(application.city, payload.city);
    assert_eq!(application.age, payload.age);
    assert_eq!(application.vk_id, payload.vk_id);
    assert_eq!(application.beat_author, payload.beat_author);
    assert_eq!(application.audio_id, payload.audio_id);
    assert_eq!(application.lyrics, payload.lyrics);
    assert!(application.full_name.is_none());
}

#[test]
fn public_participant_fixture_defaults_missing_wins_to_zero() {
    let fixture = json!({
        "data": [
            {
                "id": "u-5",
                "display_name": "MC Roster",
                "roles": ["artist", "judge"],
                "city": "SPb",
                "avg_total_score": 7.25,
                "joined_at": "2025-11-02T00:00:00Z"
            }
        ],
        "page": 1,
        "limit": 20,
        "total": 1
    });

    let list: PublicParticipantList = serde_json::from_value::<WirePublicParticipantList>(fixture)
        .unwrap()
        .into();

    let participant = &list.data[0];
    assert_eq!(participant.roles, vec![UserRole::Judge, UserRole::Artist]);
    assert_eq!(participant.total_wins, 0);
    assert_eq!(participant.avg_total_score, Some(7.25));
    assert!(participant.avatar.is_none());
}
