// Bulk player import from CSV: header canonicalization and row checks

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::identity::Aadhaar;
use crate::domain::player::{Age, AgeInput, PlayerDetails, PLAYER_MIN_AGE};

/// Data rows start on line 2, after the header
const FIRST_DATA_LINE: usize = 2;

/// Reasons a single import row is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportRowError {
    #[error("Missing name")]
    MissingName,

    #[error("Invalid or missing age (must be numeric >= 12)")]
    InvalidAge,

    #[error("Invalid Aadhaar (should be 12 digits)")]
    InvalidAadhaar,
}

/// One CSV data row with recognized columns mapped to canonical names
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRow {
    pub name: String,
    pub age: String,
    pub aadhaar: String,
    pub phone: String,
    pub preferred_role: String,
    pub team_name: String,
    /// Columns the importer does not recognize, kept for reporting
    #[serde(flatten)]
    pub extras: BTreeMap<String, String>,
}

/// Outcome of importing one row
#[derive(Debug, Clone, Serialize)]
pub struct ImportResult {
    pub row_index: usize,
    pub ok: bool,
    pub error: Option<String>,
    pub created_id: Option<Uuid>,
    pub raw: ImportRow,
}

impl ImportResult {
    pub fn created(row_index: usize, raw: ImportRow, id: Uuid) -> Self {
        Self {
            row_index,
            ok: true,
            error: None,
            created_id: Some(id),
            raw,
        }
    }

    pub fn failed(row_index: usize, raw: ImportRow, error: impl Into<String>) -> Self {
        Self {
            row_index,
            ok: false,
            error: Some(error.into()),
            created_id: None,
            raw,
        }
    }
}

/// Spreadsheet line number of the `index`-th data row
pub fn line_number(index: usize) -> usize {
    index + FIRST_DATA_LINE
}

impl ImportRow {
    /// Maps a header/value pair list onto canonical columns
    ///
    /// Header matching is trimmed and case-insensitive:
    /// `preferredrole`, `preferred_role` and `role` all mean the preferred
    /// role; `teamname`, `team_name` and `team` all mean the team name.
    /// Values are trimmed.
    pub fn canonicalize<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut row = ImportRow::default();
        for (header, value) in pairs {
            let value = value.trim().to_string();
            match header.trim().to_lowercase().as_str() {
                "name" => row.name = value,
                "age" => row.age = value,
                "aadhaar" => row.aadhaar = value,
                "phone" => row.phone = value,
                "preferredrole" | "preferred_role" | "role" => row.preferred_role = value,
                "teamname" | "team_name" | "team" => row.team_name = value,
                _ => {
                    row.extras.insert(header.trim().to_string(), value);
                }
            }
        }
        row
    }

    /// Runs the row checks in order: name, age, aadhaar
    pub fn check(&self) -> Result<(), ImportRowError> {
        if self.name.is_empty() {
            return Err(ImportRowError::MissingName);
        }
        Age::at_least(Some(&AgeInput::from(self.age.as_str())), PLAYER_MIN_AGE)
            .map_err(|_| ImportRowError::InvalidAge)?;
        Aadhaar::parse_optional(Some(&self.aadhaar)).map_err(|_| ImportRowError::InvalidAadhaar)?;
        Ok(())
    }

    /// Team name to find or create, if the row names one
    pub fn team(&self) -> Option<&str> {
        Some(self.team_name.as_str()).filter(|t| !t.is_empty())
    }

    /// Player fields for enrollment
    pub fn details(&self) -> PlayerDetails {
        PlayerDetails {
            name: self.name.clone(),
            age: Some(AgeInput::from(self.age.as_str())),
            aadhaar: Some(self.aadhaar.clone()),
            phone: Some(self.phone.clone()),
            preferred_role: Some(self.preferred_role.clone()),
        }
    }
}

/// Parses CSV text with a header row into canonical rows
///
/// Blank lines are skipped; rows may have fewer or more cells than the
/// header.
pub fn parse_rows(text: &str) -> Result<Vec<ImportRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(ImportRow::canonicalize(headers.iter().zip(record.iter())));
    }
    Ok(rows)
}
