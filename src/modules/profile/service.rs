use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    api::error,
    constants::SWIPE_ALLOWANCE,
    modules::profile::{
        model::{
            CandidateResponse, InsertProfile, LocationBody, RegistrationBody, UpdateProfile,
            UpdateProfileBody,
        },
        quota,
        repository::ProfileRepository,
        schema::ProfileEntity,
    },
};

#[derive(Clone)]
pub struct ProfileService<P>
where
    P: ProfileRepository + Send + Sync,
{
    profile_repo: Arc<P>,
}

impl<P> ProfileService<P>
where
    P: ProfileRepository + Send + Sync,
{
    pub fn with_dependencies(profile_repo: Arc<P>) -> Self {
        ProfileService { profile_repo }
    }

    pub async fn register(
        &self,
        profile_id: Uuid,
        body: RegistrationBody,
    ) -> Result<ProfileEntity, error::SystemError> {
        if self.profile_repo.find_by_id(&profile_id).await?.is_some() {
            return Err(error::SystemError::conflict(
                "Cannot create the profile because it already exists",
            ));
        }

        let new_profile = InsertProfile {
            id: profile_id,
            first_name: body.first_name,
            date_of_birth: body.date_of_birth,
            gender: body.gender,
            bio: body.bio,
            last_latitude: body.last_latitude,
            last_longitude: body.last_longitude,
            looking_for: body.looking_for,
            search_distance: body.search_distance,
            age_range_minimum: body.age_range_minimum,
            age_range_maximum: body.age_range_maximum,
        };

        match self.profile_repo.create(&new_profile).await {
            // Two registrations racing on the same id: the loser hits the
            // primary key instead of the precondition.
            Err(error::SystemError::UniqueViolation(_)) => Err(error::SystemError::conflict(
                "Cannot create the profile because it already exists",
            )),
            other => other,
        }
    }

    pub async fn my_profile(&self, profile_id: Uuid) -> Result<ProfileEntity, error::SystemError> {
        self.profile_repo.find_by_id(&profile_id).await?.ok_or_else(|| {
            error::SystemError::unprocessable("Cannot get the profile because it does not exist")
        })
    }

    pub async fn update(
        &self,
        profile_id: Uuid,
        body: UpdateProfileBody,
    ) -> Result<ProfileEntity, error::SystemError> {
        let changes = UpdateProfile {
            bio: body.bio,
            last_latitude: body.last_latitude,
            last_longitude: body.last_longitude,
            looking_for: body.looking_for,
            search_distance: body.search_distance,
            age_range_minimum: body.age_range_minimum,
            age_range_maximum: body.age_range_maximum,
        };

        self.profile_repo.update(&profile_id, &changes).await?.ok_or_else(|| {
            error::SystemError::unprocessable("Cannot update the profile because it does not exist")
        })
    }

    pub async fn update_location(
        &self,
        profile_id: Uuid,
        body: LocationBody,
    ) -> Result<ProfileEntity, error::SystemError> {
        self.profile_repo
            .update_location(&profile_id, body.last_latitude, body.last_longitude)
            .await?
            .ok_or_else(|| {
                error::SystemError::unprocessable(
                    "Cannot update the location due to non-existing profile",
                )
            })
    }

    pub async fn delete(&self, profile_id: Uuid) -> Result<(), error::SystemError> {
        // Idempotent: deleting a missing profile is still a 204.
        self.profile_repo.delete(&profile_id).await?;
        Ok(())
    }

    /// Remaining quota; a lapsed cooldown is persisted back as a full
    /// allowance with a fresh deadline before reporting.
    pub async fn swipes_left(&self, profile_id: Uuid) -> Result<i32, error::SystemError> {
        let profile = self.profile_repo.find_by_id(&profile_id).await?.ok_or_else(|| {
            error::SystemError::unprocessable(
                "Cannot get swipes left count due to non-existing profile",
            )
        })?;

        let now = Utc::now();
        if quota::cooldown_elapsed(profile.wait_until, now) {
            self.profile_repo
                .refill_quota(&profile_id, SWIPE_ALLOWANCE, quota::next_refill_at(now), now)
                .await?;
            return Ok(SWIPE_ALLOWANCE);
        }

        Ok(profile.swipes_left)
    }

    pub async fn candidates(
        &self,
        profile_id: Uuid,
    ) -> Result<Vec<CandidateResponse>, error::SystemError> {
        let viewer: ProfileEntity =
            self.profile_repo.find_by_id(&profile_id).await?.ok_or_else(|| {
                error::SystemError::unprocessable(
                    "Cannot find profiles to swipe due to non-existing profile",
                )
            })?;

        let rows = self.profile_repo.find_candidates(&viewer).await?;
        Ok(rows.into_iter().map(CandidateResponse::from).collect())
    }
}
