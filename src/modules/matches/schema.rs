use serde::Serialize;
use sqlx::prelude::FromRow;
use uuid::Uuid;

/// Mutual-RIGHT outcome; the pair is stored canonically with
/// profile_id_1 < profile_id_2.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntity {
    pub id: Uuid,
    pub profile_id_1: Uuid,
    pub profile_id_2: Uuid,
    pub matched_at: chrono::DateTime<chrono::Utc>,
}

impl MatchEntity {
    pub fn involves(&self, profile_id: &Uuid) -> bool {
        self.profile_id_1 == *profile_id || self.profile_id_2 == *profile_id
    }
}
