use thiserror::Error;

/// Validation failures raised while constructing domain objects from user input
///
/// Display strings are shown to portal users verbatim, so they read as
/// form feedback rather than developer diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} required")]
    Required(&'static str),

    #[error("Valid contact email required")]
    ContactEmail,

    #[error("Invalid email: {0}")]
    Email(String),

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("Aadhaar must be 12 digits")]
    AadhaarFormat,

    #[error("Please enter a valid 12-digit Aadhaar number")]
    TrialAadhaar,

    #[error("valid age required (whole number >= {min})")]
    AgeBelowMinimum { min: u32 },

    #[error("Age must be between {min} and {max}")]
    AgeOutOfRange { min: u32, max: u32 },

    #[error("Player #{index} {reason}")]
    Player {
        index: usize,
        reason: Box<ValidationError>,
    },

    #[error("Match must reference two distinct teams")]
    MatchTeams,
}

impl ValidationError {
    /// Wraps an error with the 1-based position of the offending player row
    pub fn for_player(index: usize, reason: ValidationError) -> Self {
        ValidationError::Player {
            index,
            reason: Box::new(reason),
        }
    }
}
