use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::ValidationError;

/// Session type used when the scheduler leaves it blank
pub const DEFAULT_SESSION_TYPE: &str = "Trial";

/// Scheduler form input
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewSession {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub ground: String,
    pub date: Option<DateTime<Utc>>,
    pub max_players: Option<u32>,
    pub notes: Option<String>,
}

/// A scheduled trial or practice session at a ground
///
/// # Invariants
/// - Zone and ground are non-empty for sessions created by the scheduler
/// - `max_players` of `None` or `0` means unlimited
///
/// Stored sessions may lack a date; such sessions are always listed as
/// upcoming.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialSession {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub zone: String,
    pub ground: String,
    pub date: Option<DateTime<Utc>>,
    pub max_players: Option<u32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TrialSession {
    /// Validates scheduler input and creates a session
    ///
    /// # Business Rules Enforced
    /// - Zone, ground and date are required
    /// - Blank type becomes [`DEFAULT_SESSION_TYPE`]
    /// - Blank notes become absent
    pub fn schedule(input: NewSession) -> Result<Self, ValidationError> {
        let zone = input.zone.trim();
        if zone.is_empty() {
            return Err(ValidationError::Required("zone"));
        }
        let ground = input.ground.trim();
        if ground.is_empty() {
            return Err(ValidationError::Required("ground name"));
        }
        let date = input.date.ok_or(ValidationError::Required("date/time"))?;

        let kind = input
            .kind
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .unwrap_or(DEFAULT_SESSION_TYPE)
            .to_string();

        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            zone: zone.to_string(),
            ground: ground.to_string(),
            date: Some(date),
            max_players: input.max_players,
            notes: input
                .notes
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
            created_at: Utc::now(),
        })
    }

    /// Dated now or later, or undated
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date.map_or(true, |d| d >= now)
    }

    /// True when a positive capacity is set and `registered` has reached it
    pub fn is_full(&self, registered: usize) -> bool {
        match self.max_players {
            Some(max) if max > 0 => registered >= max as usize,
            _ => false,
        }
    }

    /// Exact, case-insensitive zone comparison
    pub fn in_zone(&self, zone: &str) -> bool {
        self.zone.trim().eq_ignore_ascii_case(zone.trim())
    }

    /// Admin search across zone, ground, type and notes
    ///
    /// `needle` must already be lowercase.
    pub fn matches_query(&self, needle: &str) -> bool {
        let haystack = format!(
            "{} {} {} {}",
            self.zone,
            self.ground,
            self.kind,
            self.notes.as_deref().unwrap_or("")
        )
        .to_lowercase();
        haystack.contains(needle)
    }
}
