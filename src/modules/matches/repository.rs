use uuid::Uuid;

use crate::api::error;
use crate::modules::matches::model::MatchRow;
use crate::modules::matches::schema::MatchEntity;

#[async_trait::async_trait]
pub trait MatchRepository {
    /// Matches the profile participates in, counterpart summary included,
    /// most recent first.
    async fn find_matches_for_profile(
        &self,
        profile_id: &Uuid,
    ) -> Result<Vec<MatchRow>, error::SystemError>;

    async fn find_by_id(
        &self,
        match_id: &Uuid,
    ) -> Result<Option<MatchEntity>, error::SystemError>;

    async fn delete(&self, match_id: &Uuid) -> Result<(), error::SystemError>;
}
