use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::ValidationError;
use crate::domain::identity::Aadhaar;
use crate::domain::player::{Age, AgeInput, PLAYER_MIN_AGE};

/// Sign-up form for a specific session
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub name: String,
    pub age: Option<AgeInput>,
    pub phone: Option<String>,
    pub aadhaar: Option<String>,
}

/// A participant signed up for a session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub id: Uuid,
    pub session_id: Uuid,
    pub name: String,
    pub age: Age,
    pub phone: Option<String>,
    pub aadhaar: Option<Aadhaar>,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Registration {
    /// Validates the sign-up form
    ///
    /// Capacity is checked by the caller, which knows the current count.
    pub fn sign_up(session_id: Uuid, form: &RegistrationForm) -> Result<Self, ValidationError> {
        let name = form.name.trim();
        if name.is_empty() || form.age.is_none() {
            return Err(ValidationError::Required("Name and age"));
        }
        let age = Age::at_least(form.age.as_ref(), PLAYER_MIN_AGE)?;
        let aadhaar = Aadhaar::parse_optional(form.aadhaar.as_deref())?;

        Ok(Self {
            id: Uuid::new_v4(),
            session_id,
            name: name.to_string(),
            age,
            phone: form
                .phone
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            aadhaar,
            approved: false,
            created_at: Utc::now(),
        })
    }

    /// Flips approval and returns the new value
    pub fn toggle_approved(&mut self) -> bool {
        self.approved = !self.approved;
        self.approved
    }

    /// Search across name, phone and aadhaar; `needle` must be lowercase
    pub fn matches_query(&self, needle: &str) -> bool {
        [
            Some(self.name.as_str()),
            self.phone.as_deref(),
            self.aadhaar.as_ref().map(Aadhaar::as_str),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, age: Option<&str>) -> RegistrationForm {
        RegistrationForm {
            name: name.to_string(),
            age: age.map(AgeInput::from),
            ..RegistrationForm::default()
        }
    }

    #[test]
    fn sign_up_valid() {
        let session_id = Uuid::new_v4();
        let reg = Registration::sign_up(session_id, &form("Asha", Some("19"))).unwrap();

        assert_eq!(reg.session_id, session_id);
        assert_eq!(reg.age.years(), 19);
        assert!(!reg.approved);
    }

    #[test]
    fn name_and_age_required() {
        assert_eq!(
            Registration::sign_up(Uuid::new_v4(), &form("", Some("19"))).unwrap_err(),
            ValidationError::Required("Name and age")
        );
        assert_eq!(
            Registration::sign_up(Uuid::new_v4(), &form("Asha", None)).unwrap_err(),
            ValidationError::Required("Name and age")
        );
    }

    #[test]
    fn age_minimum_and_aadhaar_format() {
        assert!(Registration::sign_up(Uuid::new_v4(), &form("Asha", Some("10"))).is_err());

        let mut f = form("Asha", Some("19"));
        f.aadhaar = Some("12ab".to_string());
        assert_eq!(
            Registration::sign_up(Uuid::new_v4(), &f).unwrap_err(),
            ValidationError::AadhaarFormat
        );
    }

    #[test]
    fn toggle_and_search() {
        let mut f = form("Asha Verma", Some("19"));
        f.phone = Some("98100 11111".to_string());
        let mut reg = Registration::sign_up(Uuid::new_v4(), &f).unwrap();

        assert!(reg.toggle_approved());
        assert!(!reg.toggle_approved());
        assert!(reg.matches_query("verma"));
        assert!(reg.matches_query("98100"));
        assert!(!reg.matches_query("kumar"));
    }
}
