// Standings domain module
// Pure derivation of the league table from teams and match records

pub mod aggregator;
pub mod row;

pub use aggregator::{compute_standings, Standings, StandingsMode};
pub use row::{StandingsRow, DRAW_POINTS, LOSS_POINTS, WIN_POINTS};
