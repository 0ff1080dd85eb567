use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pre-aggregated season totals stored on a team record
///
/// Every field is optional because legacy team records carry any subset of
/// them. When `points` is present on at least one team, the leaderboard
/// trusts these totals instead of replaying matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonTotals {
    pub played: Option<u32>,
    pub won: Option<u32>,
    pub lost: Option<u32>,
    pub drawn: Option<u32>,
    pub points: Option<u32>,
    /// Net run rate, carried as an opaque figure
    pub nrr: Option<Decimal>,
}

impl SeasonTotals {
    /// Returns true if the record carries a points total
    pub fn has_points(&self) -> bool {
        self.points.is_some()
    }

    /// Returns true if no total is recorded at all
    pub fn is_empty(&self) -> bool {
        *self == SeasonTotals::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let totals = SeasonTotals::default();
        assert!(totals.is_empty());
        assert!(!totals.has_points());
    }

    #[test]
    fn zero_points_still_counts_as_present() {
        let totals = SeasonTotals {
            points: Some(0),
            ..SeasonTotals::default()
        };
        assert!(totals.has_points());
        assert!(!totals.is_empty());
    }

    #[test]
    fn nrr_serializes_as_number() {
        let totals = SeasonTotals {
            nrr: Some(Decimal::new(125, 2)),
            ..SeasonTotals::default()
        };
        let json = serde_json::to_value(totals).unwrap();
        assert_eq!(json["nrr"], serde_json::json!(1.25));
    }
}
