use std::cmp::Ordering;
use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::row::StandingsRow;
use crate::domain::matches::{MatchOutcome, MatchRecord};
use crate::domain::team::Team;

/// Where the numbers in a table came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StandingsMode {
    /// Season totals stored on the team records
    Direct,
    /// Replayed from match records
    Computed,
}

/// An ordered league table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standings {
    pub mode: StandingsMode,
    pub rows: Vec<StandingsRow>,
}

/// Team-name lookup built once per aggregation call
struct TeamNames<'a> {
    by_id: HashMap<Uuid, &'a str>,
}

impl<'a> TeamNames<'a> {
    fn new(teams: &'a [Team]) -> Self {
        Self {
            by_id: teams.iter().map(|t| (t.id(), t.name())).collect(),
        }
    }

    fn get(&self, id: Uuid) -> Option<&'a str> {
        self.by_id.get(&id).copied()
    }
}

/// Computes the league table
///
/// Mode selection:
/// - any team record carrying a points total: direct mode, matches ignored
/// - no matches at all: direct mode over the team records, all defaults zero
/// - otherwise: computed mode, replaying every played match
///
/// The result depends only on the contents of `teams` and `matches`, never
/// on their order.
///
/// # Example
/// ```
/// use league_portal_api::domain::matches::normalize_match;
/// use league_portal_api::domain::standings::{compute_standings, StandingsMode};
/// use league_portal_api::domain::team::Team;
/// use serde_json::json;
/// use uuid::Uuid;
///
/// let east = Team::named("East").unwrap();
/// let west = Team::named("West").unwrap();
/// let doc = json!({
///     "teamAId": east.id().to_string(),
///     "teamBId": west.id().to_string(),
///     "scoreA": 180,
///     "scoreB": 150
/// });
/// let matches = vec![normalize_match(Uuid::new_v4(), &doc).unwrap()];
///
/// let table = compute_standings(&[east, west], &matches);
/// assert_eq!(table.mode, StandingsMode::Computed);
/// assert_eq!(table.rows[0].name, "East");
/// assert_eq!(table.rows[0].points, 3);
/// ```
pub fn compute_standings(teams: &[Team], matches: &[MatchRecord]) -> Standings {
    let any_points = teams.iter().any(|t| t.season().has_points());

    if (!teams.is_empty() && any_points) || matches.is_empty() {
        return Standings {
            mode: StandingsMode::Direct,
            rows: direct_rows(teams),
        };
    }

    Standings {
        mode: StandingsMode::Computed,
        rows: computed_rows(teams, matches),
    }
}

fn direct_rows(teams: &[Team]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = teams
        .iter()
        .map(|team| {
            let season = team.season();
            let name = if team.name().trim().is_empty() {
                format!("Team {}", team.id())
            } else {
                team.name().to_string()
            };
            StandingsRow {
                team_id: team.id(),
                name,
                played: season.played.unwrap_or(0),
                won: season.won.unwrap_or(0),
                lost: season.lost.unwrap_or(0),
                drawn: season.drawn.unwrap_or(0),
                points: season.points.unwrap_or(0),
                nrr: season.nrr,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| nrr_or_zero(b).cmp(&nrr_or_zero(a)))
            .then_with(|| stable_tiebreak(a, b))
    });
    rows
}

fn computed_rows(teams: &[Team], matches: &[MatchRecord]) -> Vec<StandingsRow> {
    let names = TeamNames::new(teams);

    let mut stats: HashMap<Uuid, StandingsRow> = teams
        .iter()
        .map(|t| (t.id(), StandingsRow::zeroed(t.id(), t.id().to_string())))
        .collect();

    for record in matches.iter().filter(|m| m.is_played()) {
        for side in [record.team_a, record.team_b] {
            stats
                .entry(side)
                .or_insert_with(|| StandingsRow::zeroed(side, side.to_string()))
                .played += 1;
        }

        match record.outcome() {
            MatchOutcome::Win { winner, loser } => {
                if let Some(row) = stats.get_mut(&winner) {
                    row.record_win();
                }
                if let Some(row) = stats.get_mut(&loser) {
                    row.record_loss();
                }
            }
            MatchOutcome::Draw => {
                for side in [record.team_a, record.team_b] {
                    if let Some(row) = stats.get_mut(&side) {
                        row.record_draw();
                    }
                }
            }
            // played stands, no result recorded
            MatchOutcome::Undecided => {}
        }
    }

    let mut rows: Vec<StandingsRow> = stats
        .into_values()
        .map(|mut row| {
            if let Some(name) = names.get(row.team_id) {
                row.name = name.to_string();
            }
            row
        })
        .collect();

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.won.cmp(&a.won))
            .then_with(|| a.lost.cmp(&b.lost))
            .then_with(|| stable_tiebreak(a, b))
    });
    rows
}

fn nrr_or_zero(row: &StandingsRow) -> Decimal {
    row.nrr.unwrap_or(Decimal::ZERO)
}

// Final keys so equal teams come out in the same order on every run
fn stable_tiebreak(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    a.name.cmp(&b.name).then_with(|| a.team_id.cmp(&b.team_id))
}
