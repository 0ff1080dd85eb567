use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Points for a win
pub const WIN_POINTS: u32 = 3;
/// Points for a draw
pub const DRAW_POINTS: u32 = 1;
/// Points for a loss
pub const LOSS_POINTS: u32 = 0;

/// One line of the league table
///
/// Derived fresh on every aggregation run and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsRow {
    pub team_id: Uuid,
    pub name: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub drawn: u32,
    pub points: u32,
    pub nrr: Option<Decimal>,
}

impl StandingsRow {
    /// A row with every counter at zero
    pub fn zeroed(team_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            team_id,
            name: name.into(),
            played: 0,
            won: 0,
            lost: 0,
            drawn: 0,
            points: 0,
            nrr: None,
        }
    }

    pub(crate) fn record_win(&mut self) {
        self.won += 1;
        self.points += WIN_POINTS;
    }

    pub(crate) fn record_loss(&mut self) {
        self.lost += 1;
        self.points += LOSS_POINTS;
    }

    pub(crate) fn record_draw(&mut self) {
        self.drawn += 1;
        self.points += DRAW_POINTS;
    }
}
