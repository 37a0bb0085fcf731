use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::api::error;
use crate::modules::profile::model::{CandidateRow, InsertProfile, UpdateProfile};
use crate::modules::profile::schema::ProfileEntity;

#[async_trait::async_trait]
pub trait ProfileRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<ProfileEntity>, error::SystemError>;

    async fn create(&self, profile: &InsertProfile) -> Result<ProfileEntity, error::SystemError>;

    async fn update(
        &self,
        id: &Uuid,
        changes: &UpdateProfile,
    ) -> Result<Option<ProfileEntity>, error::SystemError>;

    async fn update_location(
        &self,
        id: &Uuid,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<ProfileEntity>, error::SystemError>;

    async fn delete(&self, id: &Uuid) -> Result<bool, error::SystemError>;

    /// Persist a lapsed-cooldown refill. The write re-checks the stored
    /// deadline against `now`, so a swipe committing in between keeps its
    /// fresher count and deadline.
    async fn refill_quota(
        &self,
        id: &Uuid,
        swipes_left: i32,
        wait_until: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<(), error::SystemError>;

    /// Eligible-profile sample for the viewer: gender preference, age range
    /// and distance applied, already-swiped targets excluded, random order.
    async fn find_candidates(
        &self,
        viewer: &ProfileEntity,
    ) -> Result<Vec<CandidateRow>, error::SystemError>;
}
