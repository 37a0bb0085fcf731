use uuid::Uuid;

use crate::{
    api::error,
    modules::matches::{model::MatchRow, repository::MatchRepository, schema::MatchEntity},
};

#[derive(Clone)]
pub struct MatchRepositoryPg {
    pool: sqlx::PgPool,
}

impl MatchRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl MatchRepository for MatchRepositoryPg {
    async fn find_matches_for_profile(
        &self,
        profile_id: &Uuid,
    ) -> Result<Vec<MatchRow>, error::SystemError> {
        // The join lands on the counterpart row: profiles.id != $1 keeps the
        // other participant, the second clause keeps matches involving $1.
        let matches = sqlx::query_as::<_, MatchRow>(
            r#"
            SELECT
                matches.id AS match_id,
                profiles.id AS profile_id,
                profiles.first_name,
                matches.matched_at
            FROM matches
            JOIN profiles
              ON (profiles.id = matches.profile_id_1 OR profiles.id = matches.profile_id_2)
            WHERE profiles.id != $1
              AND (matches.profile_id_1 = $1 OR matches.profile_id_2 = $1)
            ORDER BY matches.matched_at DESC
            "#,
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(matches)
    }

    async fn find_by_id(
        &self,
        match_id: &Uuid,
    ) -> Result<Option<MatchEntity>, error::SystemError> {
        let found = sqlx::query_as::<_, MatchEntity>("SELECT * FROM matches WHERE id = $1")
            .bind(match_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found)
    }

    async fn delete(&self, match_id: &Uuid) -> Result<(), error::SystemError> {
        sqlx::query("DELETE FROM matches WHERE id = $1")
            .bind(match_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
