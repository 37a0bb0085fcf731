use uuid::Uuid;

use crate::api::error;
use crate::modules::swipe::model::SwipeOutcome;
use crate::modules::swipe::schema::SwipeDirection;

#[async_trait::async_trait]
pub trait SwipeRepository: Send + Sync {
    /// Records one swipe in a single transaction: locks the sender's
    /// profile row, applies the lazy quota refill, checks the quota,
    /// self-swipe and duplicate preconditions, inserts the swipe, spends
    /// one swipe, and on a reciprocal RIGHT inserts the match. Any
    /// failure rolls the whole sequence back.
    async fn record_swipe_atomic(
        &self,
        sender_id: &Uuid,
        receiver_id: &Uuid,
        direction: SwipeDirection,
    ) -> Result<SwipeOutcome, error::SystemError>;
}
