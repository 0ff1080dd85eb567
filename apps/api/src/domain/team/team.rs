use super::value_objects::SeasonTotals;
use crate::domain::errors::ValidationError;
use crate::domain::user::Email;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Team aggregate root
///
/// Represents a club registered for the league season.
///
/// # Invariants
/// - Name is trimmed and non-empty for teams registered through the portal
/// - Contact email, when present, looks like `local@domain.tld`
/// - Zone is trimmed; blank zones are stored as absent
///
/// # Example
/// ```
/// use league_portal_api::domain::team::Team;
///
/// let team = Team::register("East Strikers", Some("East"), "captain@east.in")
///     .expect("valid team");
///
/// assert_eq!(team.name(), "East Strikers");
/// assert_eq!(team.zone(), Some("East"));
/// ```
#[derive(Debug, Clone)]
pub struct Team {
    id: Uuid,
    name: String,
    zone: Option<String>,
    contact_email: Option<Email>,
    season: SeasonTotals,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Registers a new team from the public registration form
    ///
    /// # Business Rules Enforced
    /// - Team name must not be blank
    /// - Contact email is required and must look like `local@domain.tld`
    pub fn register(
        name: &str,
        zone: Option<&str>,
        contact_email: &str,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::Required("Team name"));
        }
        let contact_email = Email::contact(contact_email)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            zone: non_blank(zone),
            contact_email: Some(contact_email),
            season: SeasonTotals::default(),
            created_at: Utc::now(),
        })
    }

    /// Creates a team known only by name, as done when an import row
    /// references a team that does not exist yet
    pub fn named(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::Required("Team name"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            zone: None,
            contact_email: None,
            season: SeasonTotals::default(),
            created_at: Utc::now(),
        })
    }

    /// Replaces the stored season totals
    pub fn record_season(&mut self, totals: SeasonTotals) {
        self.season = totals;
    }

    /// Returns true if `name` refers to this team, ignoring case and padding
    pub fn is_named(&self, name: &str) -> bool {
        let wanted = name.trim().to_lowercase();
        !wanted.is_empty() && self.name.trim().to_lowercase() == wanted
    }

    // ===== Getters =====

    /// Returns the team's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the zone the team plays in, if any
    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    /// Returns the contact email, if any
    pub fn contact_email(&self) -> Option<&Email> {
        self.contact_email.as_ref()
    }

    /// Returns the stored season totals
    pub fn season(&self) -> &SeasonTotals {
        &self.season
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Bypasses validation: stored records may predate the current rules.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        zone: Option<String>,
        contact_email: Option<Email>,
        season: SeasonTotals,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            zone,
            contact_email,
            season,
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
