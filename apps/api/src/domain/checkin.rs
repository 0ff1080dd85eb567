// Ground check-in: QR badge payloads and badge file naming

use serde_json::Value;

const BADGE_NAME_MAX: usize = 40;

/// Extracts the player id from a scanned QR payload
///
/// Badges normally encode the raw player id. JSON payloads are also
/// accepted, taking the first string among `id`, `playerId` and `uid`;
/// anything else is treated as a raw id.
pub fn player_id_from_payload(payload: &str) -> String {
    let trimmed = payload.trim();
    if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(trimmed) {
        for key in ["id", "playerId", "uid"] {
            if let Some(id) = fields.get(key).and_then(Value::as_str).filter(|s| !s.is_empty()) {
                return id.to_string();
            }
        }
    }
    trimmed.to_string()
}

/// File stem for a player's badge image: `<name>_<id>`
///
/// Characters outside `[A-Za-z0-9_-]` become `_` and the name part is cut
/// to 40 characters.
pub fn badge_file_stem(name: &str, id: &str) -> String {
    let base = if name.trim().is_empty() { "player" } else { name };
    let sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(BADGE_NAME_MAX)
        .collect();
    format!("{}_{}", sanitized, id)
}
