// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod checkin;
pub mod errors;
pub mod identity;
pub mod import;
pub mod matches;
pub mod player;
pub mod repositories;
pub mod sessions;
pub mod standings;
pub mod team;
pub mod trial;
pub mod user;
