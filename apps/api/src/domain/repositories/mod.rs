// Repository ports
// Implemented by the infrastructure layer (PostgreSQL, in-memory)

pub mod errors;
pub mod match_repository;
pub mod player_repository;
pub mod registration_repository;
pub mod session_repository;
pub mod team_repository;
pub mod trial_repository;
pub mod user_repository;

pub use errors::{RepositoryError, RepositoryResult};
pub use match_repository::MatchRepository;
pub use player_repository::PlayerRepository;
pub use registration_repository::RegistrationRepository;
pub use session_repository::SessionRepository;
pub use team_repository::TeamRepository;
pub use trial_repository::TrialRepository;
pub use user_repository::{User, UserRepository};
