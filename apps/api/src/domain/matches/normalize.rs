// Ingestion boundary: every accepted match shape becomes one MatchRecord here

use serde_json::{Map, Value};
use uuid::Uuid;

use super::record::{MatchDocument, MatchRecord};

const FIRST_SIDE_KEYS: [&str; 4] = ["teamAId", "teamA", "team1Id", "team1"];
const SECOND_SIDE_KEYS: [&str; 4] = ["teamBId", "teamB", "team2Id", "team2"];

/// Converts a stored match document into the canonical record
///
/// Returns `None` when the document cannot identify two distinct teams;
/// such documents are excluded from standings without error.
///
/// Accepted fields:
/// - sides: the first non-empty string among `teamAId`, `teamA`, `team1Id`,
///   `team1` (and the `B`/`2` equivalents), parsed as team ids
/// - `scoreA`, `scoreB`: JSON numbers only
/// - `winnerId`: kept only if it names one of the two sides
/// - draw: `isDraw` with any truthy value, or `draw == true`
/// - `played`: JSON booleans only
///
/// # Example
/// ```
/// use league_portal_api::domain::matches::normalize_match;
/// use serde_json::json;
/// use uuid::Uuid;
///
/// let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
/// let doc = json!({ "team1": a.to_string(), "team2": b.to_string(), "scoreA": 140 });
/// let record = normalize_match(Uuid::new_v4(), &doc).expect("two sides");
/// assert_eq!(record.team_a, a);
/// assert_eq!(record.score_a, Some(140.0));
/// ```
pub fn normalize_match(id: Uuid, body: &Value) -> Option<MatchRecord> {
    let fields = body.as_object()?;

    let team_a = side(fields, &FIRST_SIDE_KEYS)?;
    let team_b = side(fields, &SECOND_SIDE_KEYS)?;
    if team_a == team_b {
        return None;
    }

    let winner = non_empty_str(fields.get("winnerId"))
        .and_then(|raw| Uuid::parse_str(raw).ok())
        .filter(|w| *w == team_a || *w == team_b);

    let draw = fields.get("isDraw").is_some_and(is_truthy)
        || fields.get("draw").and_then(Value::as_bool) == Some(true);

    Some(MatchRecord {
        id,
        team_a,
        team_b,
        score_a: fields.get("scoreA").and_then(Value::as_f64),
        score_b: fields.get("scoreB").and_then(Value::as_f64),
        winner,
        draw,
        played: fields.get("played").and_then(Value::as_bool),
    })
}

/// Normalizes a batch of documents, returning the usable records and the
/// number of documents that were skipped
pub fn normalize_all(docs: &[MatchDocument]) -> (Vec<MatchRecord>, usize) {
    let records: Vec<MatchRecord> = docs
        .iter()
        .filter_map(|doc| normalize_match(doc.id, &doc.body))
        .collect();
    let skipped = docs.len() - records.len();
    (records, skipped)
}

fn side(fields: &Map<String, Value>, keys: &[&str]) -> Option<Uuid> {
    let raw = keys.iter().find_map(|key| non_empty_str(fields.get(*key)))?;
    Uuid::parse_str(raw.trim()).ok()
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
