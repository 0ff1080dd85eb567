// Trial sessions scheduled by admins and the registrations against them

pub mod registration;
pub mod session;

pub use registration::{Registration, RegistrationForm};
pub use session::{NewSession, TrialSession, DEFAULT_SESSION_TYPE};
