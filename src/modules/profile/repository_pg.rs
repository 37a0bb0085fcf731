use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    api::error,
    constants::CANDIDATE_LIMIT,
    modules::profile::{
        model::{CandidateRow, InsertProfile, UpdateProfile},
        repository::ProfileRepository,
        schema::ProfileEntity,
    },
};

#[derive(Clone)]
pub struct ProfileRepositoryPg {
    pool: sqlx::PgPool,
}

impl ProfileRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProfileRepository for ProfileRepositoryPg {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<ProfileEntity>, error::SystemError> {
        let profile = sqlx::query_as::<_, ProfileEntity>("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(profile)
    }

    async fn create(&self, profile: &InsertProfile) -> Result<ProfileEntity, error::SystemError> {
        let profile = sqlx::query_as::<_, ProfileEntity>(
            r#"
            INSERT INTO profiles (
                id, first_name, date_of_birth, gender, bio,
                last_latitude, last_longitude, looking_for,
                search_distance, age_range_minimum, age_range_maximum
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(profile.id)
        .bind(&profile.first_name)
        .bind(profile.date_of_birth)
        .bind(profile.gender)
        .bind(&profile.bio)
        .bind(profile.last_latitude)
        .bind(profile.last_longitude)
        .bind(profile.looking_for)
        .bind(profile.search_distance)
        .bind(profile.age_range_minimum)
        .bind(profile.age_range_maximum)
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    async fn update(
        &self,
        id: &Uuid,
        changes: &UpdateProfile,
    ) -> Result<Option<ProfileEntity>, error::SystemError> {
        let profile = sqlx::query_as::<_, ProfileEntity>(
            r#"
            UPDATE profiles
            SET
                bio               = $2,
                last_latitude     = $3,
                last_longitude    = $4,
                looking_for       = $5,
                search_distance   = $6,
                age_range_minimum = $7,
                age_range_maximum = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.bio)
        .bind(changes.last_latitude)
        .bind(changes.last_longitude)
        .bind(changes.looking_for)
        .bind(changes.search_distance)
        .bind(changes.age_range_minimum)
        .bind(changes.age_range_maximum)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    async fn update_location(
        &self,
        id: &Uuid,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<ProfileEntity>, error::SystemError> {
        let profile = sqlx::query_as::<_, ProfileEntity>(
            r#"
            UPDATE profiles
            SET last_latitude = $2, last_longitude = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(latitude)
        .bind(longitude)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, error::SystemError> {
        let rows = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows > 0)
    }

    async fn refill_quota(
        &self,
        id: &Uuid,
        swipes_left: i32,
        wait_until: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<(), error::SystemError> {
        // A NULL deadline never satisfies the comparison, so a profile that
        // has not swiped yet is left alone.
        sqlx::query(
            r#"
            UPDATE profiles
            SET swipes_left = $2, wait_until = $3
            WHERE id = $1 AND wait_until < $4
            "#,
        )
        .bind(id)
        .bind(swipes_left)
        .bind(wait_until)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_candidates(
        &self,
        viewer: &ProfileEntity,
    ) -> Result<Vec<CandidateRow>, error::SystemError> {
        let today = Utc::now().date_naive();
        let (oldest, youngest) = viewer.birth_date_window(today);

        // point(lon, lat) <@> point(lon, lat) is the earthdistance operator,
        // statute miles.
        let candidates = match viewer.looking_for.preferred_gender() {
            Some(gender) => {
                sqlx::query_as::<_, CandidateRow>(
                    r#"
                    SELECT
                        id,
                        first_name,
                        CAST(EXTRACT(YEAR FROM AGE(CURRENT_DATE, date_of_birth)) AS INT4) AS age,
                        gender,
                        bio,
                        point($2, $3) <@> point(last_longitude, last_latitude) AS distance
                    FROM profiles
                    WHERE id != $1
                      AND gender = $6
                      AND NOT EXISTS (
                          SELECT 1 FROM swipes
                          WHERE receiver_id = profiles.id AND sender_id = $1
                      )
                      AND date_of_birth BETWEEN $4 AND $5
                      AND point($2, $3) <@> point(last_longitude, last_latitude) < $7
                    ORDER BY random()
                    LIMIT $8
                    "#,
                )
                .bind(viewer.id)
                .bind(viewer.last_longitude)
                .bind(viewer.last_latitude)
                .bind(oldest)
                .bind(youngest)
                .bind(gender)
                .bind(f64::from(viewer.search_distance))
                .bind(CANDIDATE_LIMIT)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, CandidateRow>(
                    r#"
                    SELECT
                        id,
                        first_name,
                        CAST(EXTRACT(YEAR FROM AGE(CURRENT_DATE, date_of_birth)) AS INT4) AS age,
                        gender,
                        bio,
                        point($2, $3) <@> point(last_longitude, last_latitude) AS distance
                    FROM profiles
                    WHERE id != $1
                      AND NOT EXISTS (
                          SELECT 1 FROM swipes
                          WHERE receiver_id = profiles.id AND sender_id = $1
                      )
                      AND date_of_birth BETWEEN $4 AND $5
                      AND point($2, $3) <@> point(last_longitude, last_latitude) < $6
                    ORDER BY random()
                    LIMIT $7
                    "#,
                )
                .bind(viewer.id)
                .bind(viewer.last_longitude)
                .bind(viewer.last_latitude)
                .bind(oldest)
                .bind(youngest)
                .bind(f64::from(viewer.search_distance))
                .bind(CANDIDATE_LIMIT)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(candidates)
    }
}
