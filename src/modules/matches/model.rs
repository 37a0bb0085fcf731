use serde::Serialize;
use sqlx::prelude::FromRow;
use uuid::Uuid;

/// Canonical storage order for an unordered profile pair; together with
/// the unique constraint it makes "one match per pair" hold no matter
/// which side swiped last.
pub fn canonical_pair(profile_id_a: Uuid, profile_id_b: Uuid) -> (Uuid, Uuid) {
    if profile_id_a <= profile_id_b {
        (profile_id_a, profile_id_b)
    } else {
        (profile_id_b, profile_id_a)
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct MatchRow {
    pub match_id: Uuid,
    pub profile_id: Uuid,
    pub first_name: String,
    pub matched_at: chrono::DateTime<chrono::Utc>,
}

/// Listing entry: the match plus the counterpart profile's summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub first_name: String,
    pub matched_at: chrono::DateTime<chrono::Utc>,
}

impl From<MatchRow> for MatchResponse {
    fn from(row: MatchRow) -> Self {
        MatchResponse {
            id: row.match_id,
            profile_id: row.profile_id,
            first_name: row.first_name,
            matched_at: row.matched_at,
        }
    }
}
