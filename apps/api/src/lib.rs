//! League Portal API Library
//!
//! Backend for a cricket league portal: team and player registration,
//! trials, sessions, ground check-in, CSV import/export, and the league
//! standings aggregator.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod exports;
pub mod infrastructure;
