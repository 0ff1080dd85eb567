use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::ValidationError;
use crate::domain::identity::Aadhaar;
use crate::domain::player::{Age, AgeInput};

/// Youngest age accepted at open trials
pub const TRIAL_MIN_AGE: u32 = 16;
/// Oldest age accepted at open trials
pub const TRIAL_MAX_AGE: u32 = 40;

/// Open-trial sign-up form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrialForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub aadhaar: String,
    pub age: Option<AgeInput>,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub role: String,
}

/// An open-trial sign-up
///
/// Unlike squad players, trial candidates must supply an Aadhaar number and
/// fall within the trial age band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialSignup {
    pub id: Uuid,
    pub name: String,
    pub aadhaar: Aadhaar,
    pub age: Age,
    pub zone: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl TrialSignup {
    pub fn submit(form: &TrialForm) -> Result<Self, ValidationError> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err(ValidationError::Required("Full name"));
        }
        let aadhaar = Aadhaar::parse(&form.aadhaar).map_err(|_| ValidationError::TrialAadhaar)?;
        let age = Age::between(form.age.as_ref(), TRIAL_MIN_AGE, TRIAL_MAX_AGE)?;
        let zone = form.zone.trim();
        if zone.is_empty() {
            return Err(ValidationError::Required("Zone"));
        }
        let role = form.role.trim();
        if role.is_empty() {
            return Err(ValidationError::Required("Role"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            aadhaar,
            age,
            zone: zone.to_string(),
            role: role.to_string(),
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> TrialForm {
        TrialForm {
            name: "Vikram".to_string(),
            aadhaar: "234123412346".to_string(),
            age: Some(AgeInput::from("22")),
            zone: "North".to_string(),
            role: "Bowler".to_string(),
        }
    }

    #[test]
    fn valid_trial() {
        let trial = TrialSignup::submit(&form()).unwrap();
        assert_eq!(trial.age.years(), 22);
        assert_eq!(trial.zone, "North");
    }

    #[test]
    fn aadhaar_is_mandatory() {
        let mut f = form();
        f.aadhaar.clear();
        assert_eq!(
            TrialSignup::submit(&f).unwrap_err(),
            ValidationError::TrialAadhaar
        );
    }

    #[test]
    fn age_band_enforced() {
        let mut f = form();
        f.age = Some(AgeInput::from("41"));
        assert_eq!(
            TrialSignup::submit(&f).unwrap_err(),
            ValidationError::AgeOutOfRange { min: 16, max: 40 }
        );

        f.age = Some(AgeInput::Number(15.0));
        assert!(TrialSignup::submit(&f).is_err());
    }

    #[test]
    fn zone_and_role_required() {
        let mut f = form();
        f.role = "  ".to_string();
        assert_eq!(
            TrialSignup::submit(&f).unwrap_err(),
            ValidationError::Required("Role")
        );
    }
}
