use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::ValidationError;

/// Email value object representing a valid email address
///
/// # Invariants
/// - Must contain '@' character
/// - Must be at least 3 characters long
/// - Surrounding whitespace is trimmed
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Creates a new Email value object for account sign-in
    ///
    /// # Example
    /// ```
    /// use league_portal_api::domain::user::value_objects::Email;
    ///
    /// let email = Email::new("test@example.com").expect("valid email");
    /// assert_eq!(email.as_str(), "test@example.com");
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into().trim().to_string();
        if email.contains('@') && email.len() >= 3 {
            Ok(Email(email))
        } else {
            Err(ValidationError::Email(email))
        }
    }

    /// Creates a team contact address, which must look like `local@domain.tld`
    ///
    /// # Example
    /// ```
    /// use league_portal_api::domain::user::value_objects::Email;
    ///
    /// assert!(Email::contact("captain@club.in").is_ok());
    /// assert!(Email::contact("captain@club").is_err());
    /// ```
    pub fn contact(email: &str) -> Result<Self, ValidationError> {
        let email = email.trim();
        if is_contact_address(email) {
            Ok(Email(email.to_string()))
        } else {
            Err(ValidationError::ContactEmail)
        }
    }

    /// Returns true if both addresses are equal ignoring ASCII case
    pub fn matches_ignore_case(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }

    /// Returns the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_contact_address(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some(at) = email.find('@') else {
        return false;
    };
    let (local, domain) = (&email[..at], &email[at + 1..]);
    if local.is_empty() {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
