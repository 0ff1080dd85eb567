// Column conversions shared by the PostgreSQL repositories

use crate::domain::identity::Aadhaar;
use crate::domain::player::Age;
use crate::domain::repositories::RepositoryError;

/// Counters are stored as INTEGER; negative values are treated as absent
pub(crate) fn count_from_db(value: Option<i32>) -> Option<u32> {
    value.and_then(|v| u32::try_from(v).ok())
}

pub(crate) fn count_to_db(value: Option<u32>) -> Option<i32> {
    value.map(|v| i32::try_from(v).unwrap_or(i32::MAX))
}

pub(crate) fn age_from_db(entity: &'static str, value: i32) -> Result<Age, RepositoryError> {
    u32::try_from(value)
        .map(Age::from_years)
        .map_err(|_| RepositoryError::Corrupt {
            entity,
            reason: format!("negative age {}", value),
        })
}

pub(crate) fn age_to_db(age: Age) -> i32 {
    i32::try_from(age.years()).unwrap_or(i32::MAX)
}

pub(crate) fn aadhaar_from_db(
    entity: &'static str,
    value: Option<String>,
) -> Result<Option<Aadhaar>, RepositoryError> {
    Aadhaar::parse_optional(value.as_deref()).map_err(|e| RepositoryError::Corrupt {
        entity,
        reason: e.to_string(),
    })
}
