use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use super::value_objects::{Age, AgeInput, PLAYER_MIN_AGE};
use crate::domain::errors::ValidationError;
use crate::domain::identity::Aadhaar;

/// Player fields as submitted by the registration form or an import row
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerDetails {
    #[serde(default)]
    pub name: String,
    pub age: Option<AgeInput>,
    pub aadhaar: Option<String>,
    pub phone: Option<String>,
    pub preferred_role: Option<String>,
}

/// Player aggregate
///
/// # Invariants
/// - Name is trimmed and non-empty
/// - Age is a whole number of at least [`PLAYER_MIN_AGE`]
/// - Aadhaar, when present, is 12 digits
#[derive(Debug, Clone)]
pub struct Player {
    id: Uuid,
    team_id: Option<Uuid>,
    name: String,
    age: Age,
    aadhaar: Option<Aadhaar>,
    phone: Option<String>,
    preferred_role: Option<String>,
    checked_in: bool,
    checked_in_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl Player {
    /// Enrolls a player, optionally linked to a team
    ///
    /// Checks run in form order: name, age, then aadhaar.
    pub fn enroll(team_id: Option<Uuid>, details: &PlayerDetails) -> Result<Self, ValidationError> {
        let name = details.name.trim();
        if name.is_empty() {
            return Err(ValidationError::Required("name"));
        }
        let age = Age::at_least(details.age.as_ref(), PLAYER_MIN_AGE)?;
        let aadhaar = Aadhaar::parse_optional(details.aadhaar.as_deref())?;

        Ok(Self {
            id: Uuid::new_v4(),
            team_id,
            name: name.to_string(),
            age,
            aadhaar,
            phone: non_blank(details.phone.as_deref()),
            preferred_role: non_blank(details.preferred_role.as_deref()),
            checked_in: false,
            checked_in_at: None,
            created_at: Utc::now(),
        })
    }

    /// Marks the player as present at the ground
    pub fn check_in(&mut self, at: DateTime<Utc>) {
        self.checked_in = true;
        self.checked_in_at = Some(at);
    }

    /// Flips the checked-in flag and returns the new value
    ///
    /// The check-in timestamp is left untouched.
    pub fn toggle_checked_in(&mut self) -> bool {
        self.checked_in = !self.checked_in;
        self.checked_in
    }

    /// Case-insensitive substring search over name, phone, team name and aadhaar
    ///
    /// `needle` must already be lowercase.
    pub fn matches_query(&self, team_name: Option<&str>, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [
            Some(self.name.as_str()),
            self.phone.as_deref(),
            team_name,
            self.aadhaar.as_ref().map(Aadhaar::as_str),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn team_id(&self) -> Option<Uuid> {
        self.team_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> Age {
        self.age
    }

    pub fn aadhaar(&self) -> Option<&Aadhaar> {
        self.aadhaar.as_ref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn preferred_role(&self) -> Option<&str> {
        self.preferred_role.as_deref()
    }

    pub fn checked_in(&self) -> bool {
        self.checked_in
    }

    pub fn checked_in_at(&self) -> Option<DateTime<Utc>> {
        self.checked_in_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Player from persistence layer data
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        team_id: Option<Uuid>,
        name: String,
        age: Age,
        aadhaar: Option<Aadhaar>,
        phone: Option<String>,
        preferred_role: Option<String>,
        checked_in: bool,
        checked_in_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            team_id,
            name,
            age,
            aadhaar,
            phone,
            preferred_role,
            checked_in,
            checked_in_at,
            created_at,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
