// Authentication module
// Provides JWT token management and password hashing

pub mod jwt;
pub mod password;
