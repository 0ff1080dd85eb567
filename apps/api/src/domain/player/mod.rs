// Player domain module
// Squad members registered by teams or imported in bulk

#![allow(clippy::module_inception)]

pub mod player;
pub mod value_objects;

pub use player::{Player, PlayerDetails};
pub use value_objects::{Age, AgeInput, PLAYER_MIN_AGE};
