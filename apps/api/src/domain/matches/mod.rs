// Match domain module
// Raw match documents, their canonical form, and the mapping between them

pub mod normalize;
pub mod record;

pub use normalize::{normalize_all, normalize_match};
pub use record::{MatchDocument, MatchOutcome, MatchRecord};
