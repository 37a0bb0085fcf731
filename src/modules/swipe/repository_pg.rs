use chrono::Utc;
use uuid::Uuid;

use crate::{
    api::error,
    modules::{
        matches::{model::canonical_pair, schema::MatchEntity},
        profile::{quota, schema::ProfileEntity},
        swipe::{
            model::SwipeOutcome,
            repository::SwipeRepository,
            schema::{SwipeDirection, SwipeEntity},
        },
    },
};

#[derive(Clone)]
pub struct SwipeRepositoryPg {
    pool: sqlx::PgPool,
}

impl SwipeRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl SwipeRepository for SwipeRepositoryPg {
    async fn record_swipe_atomic(
        &self,
        sender_id: &Uuid,
        receiver_id: &Uuid,
        direction: SwipeDirection,
    ) -> Result<SwipeOutcome, error::SystemError> {
        let mut tx = self.pool.begin().await?;

        let sender =
            sqlx::query_as::<_, ProfileEntity>("SELECT * FROM profiles WHERE id = $1 FOR UPDATE")
                .bind(sender_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| {
                    error::SystemError::unprocessable(
                        "Cannot swipe the profile due to non-existing profile",
                    )
                })?;

        let now = Utc::now();
        let swipes_left = quota::effective_swipes_left(sender.swipes_left, sender.wait_until, now);

        if swipes_left == 0 {
            tx.rollback().await?;
            return Err(error::SystemError::unprocessable("You have no swipes left"));
        }

        if sender_id == receiver_id {
            tx.rollback().await?;
            return Err(error::SystemError::unprocessable("You cannot swipe yourself"));
        }

        let already_swiped: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM swipes WHERE sender_id = $1 AND receiver_id = $2",
        )
        .bind(sender_id)
        .bind(receiver_id)
        .fetch_one(&mut *tx)
        .await?;

        if already_swiped > 0 {
            tx.rollback().await?;
            return Err(error::SystemError::conflict("You already swiped that profile"));
        }

        let reciprocal_right: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM swipes
                WHERE sender_id = $1 AND receiver_id = $2 AND direction = $3
            )
            "#,
        )
        .bind(receiver_id)
        .bind(sender_id)
        .bind(SwipeDirection::Right)
        .fetch_one(&mut *tx)
        .await?;

        // A missing receiver surfaces here as the foreign key violation.
        let swipe = sqlx::query_as::<_, SwipeEntity>(
            r#"
            INSERT INTO swipes (id, sender_id, receiver_id, direction, swiped_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext)))
        .bind(sender_id)
        .bind(receiver_id)
        .bind(direction)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        let (swipes_left, wait_until) = quota::consume(swipes_left, now);
        sqlx::query("UPDATE profiles SET swipes_left = $2, wait_until = $3 WHERE id = $1")
            .bind(sender_id)
            .bind(swipes_left)
            .bind(wait_until)
            .execute(&mut *tx)
            .await?;

        if direction == SwipeDirection::Right && reciprocal_right {
            let (profile_id_1, profile_id_2) = canonical_pair(*sender_id, *receiver_id);
            let created = sqlx::query_as::<_, MatchEntity>(
                r#"
                INSERT INTO matches (id, profile_id_1, profile_id_2, matched_at)
                VALUES ($1, $2, $3, $4)
                RETURNING *
                "#,
            )
            .bind(Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext)))
            .bind(profile_id_1)
            .bind(profile_id_2)
            .bind(now)
            .fetch_one(&mut *tx)
            .await?;

            tx.commit().await?;
            return Ok(SwipeOutcome::Matched(created));
        }

        tx.commit().await?;
        Ok(SwipeOutcome::Swiped(swipe))
    }
}
