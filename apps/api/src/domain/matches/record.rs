use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A match as stored: an id plus whatever JSON shape the writer used
#[derive(Debug, Clone, Serialize)]
pub struct MatchDocument {
    pub id: Uuid,
    pub body: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Canonical match record consumed by the standings aggregator
///
/// Built only through [`crate::domain::matches::normalize_match`], which
/// guarantees `team_a != team_b` and that `winner`, when present, is one
/// of the two sides.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub id: Uuid,
    pub team_a: Uuid,
    pub team_b: Uuid,
    pub score_a: Option<f64>,
    pub score_b: Option<f64>,
    pub winner: Option<Uuid>,
    pub draw: bool,
    pub played: Option<bool>,
}

/// Result of a played match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Win { winner: Uuid, loser: Uuid },
    Draw,
    /// Counted as played, but no result can be resolved
    Undecided,
}

impl MatchRecord {
    /// Whether the match counts towards the table
    ///
    /// Three-way fallback, kept in this exact precedence:
    /// 1. the explicit `played` flag, when present;
    /// 2. otherwise, both scores present means played, exactly one score
    ///    means the scorecard is incomplete and the match is not played;
    /// 3. no signal at all counts as played.
    pub fn is_played(&self) -> bool {
        if let Some(played) = self.played {
            return played;
        }
        match (self.score_a.is_some(), self.score_b.is_some()) {
            (true, true) => true,
            (false, false) => true,
            _ => false,
        }
    }

    /// Resolves the result: explicit winner, then scores, then draw flag
    pub fn outcome(&self) -> MatchOutcome {
        if let Some(winner) = self.winner {
            let loser = if winner == self.team_a {
                self.team_b
            } else {
                self.team_a
            };
            return MatchOutcome::Win { winner, loser };
        }

        if let (Some(a), Some(b)) = (self.score_a, self.score_b) {
            return match a.partial_cmp(&b) {
                Some(std::cmp::Ordering::Greater) => MatchOutcome::Win {
                    winner: self.team_a,
                    loser: self.team_b,
                },
                Some(std::cmp::Ordering::Less) => MatchOutcome::Win {
                    winner: self.team_b,
                    loser: self.team_a,
                },
                Some(std::cmp::Ordering::Equal) => MatchOutcome::Draw,
                None => MatchOutcome::Undecided,
            };
        }

        if self.draw {
            MatchOutcome::Draw
        } else {
            MatchOutcome::Undecided
        }
    }
}
