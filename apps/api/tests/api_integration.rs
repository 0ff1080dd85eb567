//! End-to-end API integration tests
//!
//! These tests drive the full router over the in-memory store:
//! - User registration, login and admin gating
//! - Team and player registration
//! - Match ingestion and the leaderboard
//! - Aadhaar verification and trial sign-ups

mod common;

use axum::http::StatusCode;
use common::{admin_token, call, call_text, create_team, member_token, setup_app};
use serde_json::json;

#[tokio::test]
async fn test_health_check() {
    let app = setup_app();

    let (status, body, _) = call_text(&app, "GET", "/health", None, "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_register_and_login_flow() {
    let app = setup_app();

    // Step 1: Register the configured admin account
    let (status, json) = call(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "email": "Admin@League.in",
            "password": "securepass456",
            "full_name": "League Admin"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "User registered successfully");

    // Step 2: Login, email case does not matter
    let (status, json) = call(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "admin@league.in", "password": "securepass456" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["is_admin"], true);
    let token = json["token"].as_str().unwrap().to_string();

    // Step 3: The token unlocks admin routes
    let (status, json) = call(&app, "GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["is_admin"], true);

    let (status, _) = call(&app, "GET", "/api/admin/dashboard", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let app = setup_app();
    let payload = json!({
        "email": "coach@league.in",
        "password": "rightpassword",
        "full_name": "Coach"
    });
    call(&app, "POST", "/api/auth/register", None, Some(payload)).await;

    let (status, json) = call(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "coach@league.in", "password": "wrongpassword" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let app = setup_app();
    let payload = json!({
        "email": "coach@league.in",
        "password": "coachpass123",
        "full_name": "Coach"
    });

    let (first, _) = call(&app, "POST", "/api/auth/register", None, Some(payload.clone())).await;
    let (second, json) = call(&app, "POST", "/api/auth/register", None, Some(payload)).await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(json["error"], "Email already registered");
}

#[tokio::test]
async fn test_short_password_rejected() {
    let app = setup_app();

    let (status, json) = call(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "email": "a@b.in", "password": "short", "full_name": "A" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Password must be at least 8 characters");
}

#[tokio::test]
async fn test_admin_routes_require_admin_token() {
    let app = setup_app();

    let (status, _) = call(&app, "GET", "/api/trials", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, json) = call(&app, "GET", "/api/trials", Some(&member_token()), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"], "Admin access required");

    let (status, _) = call(&app, "GET", "/api/trials", Some("not-a-token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_team_with_players() {
    let app = setup_app();

    let (status, json) = call(
        &app,
        "POST",
        "/api/teams",
        None,
        Some(json!({
            "name": "  Royal Strikers ",
            "zone": "North",
            "contact_email": "captain@strikers.in",
            "players": [
                { "name": "Asha", "age": 21, "aadhaar": "234123412346", "preferred_role": "Bowler" },
                { "name": "Ravi", "age": "19" }
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["team"]["name"], "Royal Strikers");
    assert_eq!(json["players"].as_array().unwrap().len(), 2);
    assert_eq!(json["players"][0]["team_name"], "Royal Strikers");
    assert_eq!(json["players"][1]["age"], 19);

    let team_id = json["team"]["id"].as_str().unwrap();
    let (status, json) = call(&app, "GET", &format!("/api/teams/{}", team_id), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["zone"], "North");
}

#[tokio::test]
async fn test_invalid_player_rejects_whole_team() {
    let app = setup_app();

    let (status, json) = call(
        &app,
        "POST",
        "/api/teams",
        None,
        Some(json!({
            "name": "Royal Strikers",
            "contact_email": "captain@strikers.in",
            "players": [
                { "name": "Asha", "age": 21 },
                { "name": "Kid", "age": 10 }
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Player #2 valid age required (whole number >= 12)");

    let (_, teams) = call(&app, "GET", "/api/teams", None, None).await;
    assert!(teams.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_team_requires_contact_email() {
    let app = setup_app();

    let (status, json) = call(
        &app,
        "POST",
        "/api/teams",
        None,
        Some(json!({ "name": "Royal Strikers", "contact_email": "not-an-email" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Valid contact email required");
}

#[tokio::test]
async fn test_player_search_and_unknown_team() {
    let app = setup_app();
    call(
        &app,
        "POST",
        "/api/teams",
        None,
        Some(json!({
            "name": "Harbour XI",
            "contact_email": "c@harbour.in",
            "players": [
                { "name": "Meera Nair", "age": 24, "phone": "9800011111" },
                { "name": "Arjun", "age": 30 }
            ]
        })),
    )
    .await;

    let (status, json) = call(&app, "GET", "/api/players?q=MEERA", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 2);
    assert_eq!(json["shown"], 1);
    assert_eq!(json["players"][0]["name"], "Meera Nair");

    // Team name is searchable too
    let (_, json) = call(&app, "GET", "/api/players?q=harbour", None, None).await;
    assert_eq!(json["shown"], 2);

    let team_id = json["players"][0]["team_id"].as_str().unwrap().to_string();
    let (status, _) = call(
        &app,
        "DELETE",
        &format!("/api/teams/{}", team_id),
        Some(&admin_token()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, json) = call(&app, "GET", "/api/players", None, None).await;
    assert_eq!(json["players"][0]["team_name"], "Unknown");
}

#[tokio::test]
async fn test_leaderboard_computed_from_matches() {
    let app = setup_app();
    let admin = admin_token();
    let east = create_team(&app, "East").await;
    let west = create_team(&app, "West").await;
    let south = create_team(&app, "South").await;

    // Current shape: East beats West on scores
    let (status, _) = call(
        &app,
        "POST",
        "/api/matches",
        Some(&admin),
        Some(json!({ "teamAId": east, "teamBId": west, "scoreA": 180, "scoreB": 150 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Legacy shape: West and South draw
    let (status, _) = call(
        &app,
        "POST",
        "/api/matches",
        Some(&admin),
        Some(json!({ "team1": west, "team2": south, "isDraw": true })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = call(&app, "GET", "/api/leaderboard", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["mode"], "computed");

    let rows = json["rows"].as_array().unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["East", "South", "West"]);
    assert_eq!(rows[0]["points"], 3);
    assert_eq!(rows[2]["played"], 2);
    assert_eq!(rows[2]["lost"], 1);
    assert_eq!(rows[2]["drawn"], 1);
}

#[tokio::test]
async fn test_leaderboard_switches_to_direct_mode() {
    let app = setup_app();
    let admin = admin_token();
    let east = create_team(&app, "East").await;
    let west = create_team(&app, "West").await;

    call(
        &app,
        "POST",
        "/api/matches",
        Some(&admin),
        Some(json!({ "teamAId": east, "teamBId": west, "winnerId": east })),
    )
    .await;

    // Stored totals take over as soon as any team carries points
    let (status, _) = call(
        &app,
        "PUT",
        &format!("/api/teams/{}/season", west),
        Some(&admin),
        Some(json!({ "played": 5, "won": 4, "lost": 1, "points": 8, "nrr": 0.75 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = call(&app, "GET", "/api/leaderboard", None, None).await;
    assert_eq!(json["mode"], "direct");
    assert_eq!(json["rows"][0]["name"], "West");
    assert_eq!(json["rows"][0]["points"], 8);
    assert_eq!(json["rows"][1]["points"], 0);
}

#[tokio::test]
async fn test_match_with_identical_sides_rejected() {
    let app = setup_app();
    let east = create_team(&app, "East").await;

    let (status, json) = call(
        &app,
        "POST",
        "/api/matches",
        Some(&admin_token()),
        Some(json!({ "teamAId": east, "teamBId": east })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Match must reference two distinct teams");
}

#[tokio::test]
async fn test_leaderboard_csv_export() {
    let app = setup_app();
    let east = create_team(&app, "East, Kolkata").await;
    call(
        &app,
        "PUT",
        &format!("/api/teams/{}/season", east),
        Some(&admin_token()),
        Some(json!({ "points": 4 })),
    )
    .await;

    let (status, body, content_type) = call_text(&app, "GET", "/api/leaderboard.csv", None, "").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/csv"));
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines[0], "rank,teamId,team,played,won,drawn,lost,points,nrr");
    assert_eq!(lines[1], format!("1,{},\"East, Kolkata\",0,0,0,0,4,", east));
}

#[tokio::test]
async fn test_aadhaar_verification() {
    let app = setup_app();

    let (status, json) = call(
        &app,
        "POST",
        "/api/aadhaar/verify",
        None,
        Some(json!({ "aadhaar": "234123412346" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["valid"], true);
    assert_eq!(json["message"], "Aadhaar verified successfully");

    let (status, json) = call(
        &app,
        "POST",
        "/api/aadhaar/verify",
        None,
        Some(json!({ "aadhaar": "123456789012" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Invalid Aadhaar number");

    let (status, json) = call(
        &app,
        "POST",
        "/api/aadhaar/verify",
        None,
        Some(json!({ "aadhaar": "1234" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["valid"], false);
    assert_eq!(json["message"], "Aadhaar must be 12 digits");
}

#[tokio::test]
async fn test_trial_signup_flow() {
    let app = setup_app();

    let (status, json) = call(
        &app,
        "POST",
        "/api/trials",
        None,
        Some(json!({ "name": "Vikram", "aadhaar": "12ab", "age": 22, "zone": "North", "role": "Bowler" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Please enter a valid 12-digit Aadhaar number");

    let (status, json) = call(
        &app,
        "POST",
        "/api/trials",
        None,
        Some(json!({ "name": "Vikram", "aadhaar": "234123412346", "age": 45, "zone": "North", "role": "Bowler" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Age must be between 16 and 40");

    let (status, _) = call(
        &app,
        "POST",
        "/api/trials",
        None,
        Some(json!({ "name": "Vikram", "aadhaar": "234123412346", "age": "22", "zone": "North", "role": "Bowler" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = call(&app, "GET", "/api/trials", Some(&admin_token()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["age"], 22);
}
