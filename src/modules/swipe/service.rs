use std::sync::Arc;

use uuid::Uuid;

use crate::{
    api::error,
    modules::swipe::{model::SwipeOutcome, repository::SwipeRepository, schema::SwipeDirection},
};

/// Constraint violations inside the swipe transaction all surface as a
/// missing swiped profile. That covers the real missing-receiver case
/// (foreign key) but also the losing side of a concurrent double swipe or
/// double match (unique). The conflation is long-observed API behavior and
/// is kept.
fn translate_integrity_race(err: error::SystemError) -> error::SystemError {
    match err {
        error::SystemError::UniqueViolation(_) | error::SystemError::IntegrityViolation(_) => {
            error::SystemError::not_found("The profile you swiped does not exist yet")
        }
        other => other,
    }
}

#[derive(Clone)]
pub struct SwipeService<S>
where
    S: SwipeRepository,
{
    swipe_repo: Arc<S>,
}

impl<S> SwipeService<S>
where
    S: SwipeRepository,
{
    pub fn with_dependencies(swipe_repo: Arc<S>) -> Self {
        SwipeService { swipe_repo }
    }

    pub async fn swipe(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        direction: SwipeDirection,
    ) -> Result<SwipeOutcome, error::SystemError> {
        self.swipe_repo
            .record_swipe_atomic(&sender_id, &receiver_id, direction)
            .await
            .map_err(translate_integrity_race)
    }
}
