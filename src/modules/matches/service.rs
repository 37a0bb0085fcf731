use std::sync::Arc;

use uuid::Uuid;

use crate::{
    api::error,
    modules::{
        matches::{model::MatchResponse, repository::MatchRepository},
        profile::repository::ProfileRepository,
    },
};

#[derive(Clone)]
pub struct MatchService<M, P>
where
    M: MatchRepository + Send + Sync,
    P: ProfileRepository + Send + Sync,
{
    match_repo: Arc<M>,
    profile_repo: Arc<P>,
}

impl<M, P> MatchService<M, P>
where
    M: MatchRepository + Send + Sync,
    P: ProfileRepository + Send + Sync,
{
    pub fn with_dependencies(match_repo: Arc<M>, profile_repo: Arc<P>) -> Self {
        MatchService { match_repo, profile_repo }
    }

    pub async fn list(&self, profile_id: Uuid) -> Result<Vec<MatchResponse>, error::SystemError> {
        let (profile, rows) = tokio::try_join!(
            self.profile_repo.find_by_id(&profile_id),
            self.match_repo.find_matches_for_profile(&profile_id),
        )?;

        if profile.is_none() {
            return Err(error::SystemError::unprocessable(
                "Cannot get matches due to non-existing profile",
            ));
        }

        Ok(rows.into_iter().map(MatchResponse::from).collect())
    }

    /// Unmatch. Only a participant may remove a match; the counterpart's
    /// listing loses the row at the same moment.
    pub async fn delete(&self, profile_id: Uuid, match_id: Uuid) -> Result<(), error::SystemError> {
        let (profile, found) = tokio::try_join!(
            self.profile_repo.find_by_id(&profile_id),
            self.match_repo.find_by_id(&match_id),
        )?;

        if profile.is_none() {
            return Err(error::SystemError::unprocessable(
                "Cannot delete the match due to non-existing profile",
            ));
        }

        let found = found.ok_or_else(|| {
            error::SystemError::unprocessable("The match with given id does not exist")
        })?;

        if !found.involves(&profile_id) {
            return Err(error::SystemError::forbidden(
                "You are not allowed to delete this match",
            ));
        }

        self.match_repo.delete(&match_id).await
    }
}
