// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::{
    aadhaar, auth, checkin, dashboard, import, leaderboard, matches, players, registrations,
    sessions, teams, trials,
};
pub use state::AppState;

/// Builds the full application router with tracing and CORS layers
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(auth::health_check))
        // Auth routes
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/aadhaar/verify", post(aadhaar::verify_aadhaar))
        // Teams and players
        .route("/api/teams", post(teams::create_team).get(teams::list_teams))
        .route("/api/teams/:id", get(teams::get_team).delete(teams::delete_team))
        .route("/api/teams/:id/season", put(teams::update_season))
        .route("/api/players", get(players::list_players))
        .route("/api/players/:id", delete(players::delete_player))
        .route("/api/players/:id/qr", get(checkin::badge))
        .route("/api/players/:id/checkin/toggle", post(checkin::toggle))
        // Matches and standings
        .route("/api/matches", post(matches::create_match).get(matches::list_matches))
        .route("/api/leaderboard", get(leaderboard::get_leaderboard))
        .route("/api/leaderboard.csv", get(leaderboard::leaderboard_export))
        // Trials
        .route("/api/trials", post(trials::submit_trial).get(trials::list_trials))
        // Sessions and registrations
        .route("/api/sessions", post(sessions::create_session).get(sessions::list_sessions))
        .route("/api/sessions/upcoming", get(sessions::upcoming_sessions))
        .route("/api/sessions/:id", get(sessions::get_session).delete(sessions::delete_session))
        .route(
            "/api/sessions/:id/registrations",
            post(registrations::register_for_session).get(registrations::list_registrations),
        )
        .route(
            "/api/sessions/:id/registrations.csv",
            get(registrations::registrations_export),
        )
        .route("/api/registrations/:id", delete(registrations::delete_registration))
        .route("/api/registrations/:id/approval", post(registrations::toggle_approval))
        // Check-in
        .route("/api/checkin", get(checkin::roster))
        .route("/api/checkin/scan", post(checkin::scan))
        // Import
        .route("/api/import/players", post(import::import_players))
        .route("/api/import/players/errors.csv", post(import::import_errors_export))
        .route("/api/import/template.csv", get(import::template))
        // Admin
        .route("/api/admin/dashboard", get(dashboard::dashboard))
        .route("/api/admin/export/players.csv", get(dashboard::export_players))
        .route("/api/admin/export/users.csv", get(dashboard::export_users))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
