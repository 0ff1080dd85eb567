// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

mod convert;
pub mod memory;
pub mod postgres_match_repository;
pub mod postgres_player_repository;
pub mod postgres_session_repository;
pub mod postgres_team_repository;
pub mod postgres_trial_repository;
pub mod postgres_user_repository;

pub use memory::InMemoryStore;
pub use postgres_match_repository::PostgresMatchRepository;
pub use postgres_player_repository::PostgresPlayerRepository;
pub use postgres_session_repository::{PostgresRegistrationRepository, PostgresSessionRepository};
pub use postgres_team_repository::PostgresTeamRepository;
pub use postgres_trial_repository::PostgresTrialRepository;
pub use postgres_user_repository::PostgresUserRepository;
