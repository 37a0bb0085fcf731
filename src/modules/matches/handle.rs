use actix_web::{delete, get, web, HttpRequest};
use uuid::Uuid;

use crate::{
    api::{error, success},
    middlewares::get_identity,
    modules::{
        matches::{
            model::MatchResponse, repository_pg::MatchRepositoryPg, service::MatchService,
        },
        profile::repository_pg::ProfileRepositoryPg,
    },
};

pub type MatchSvc = MatchService<MatchRepositoryPg, ProfileRepositoryPg>;

#[get("")]
pub async fn list_matches(
    match_service: web::Data<MatchSvc>,
    req: HttpRequest,
) -> Result<success::Success<Vec<MatchResponse>>, error::Error> {
    let profile_id = get_identity(&req)?;
    let matches = match_service.list(profile_id).await?;

    Ok(success::Success::ok(Some(matches)).message("Matches retrieved successfully"))
}

#[delete("/{match_id}")]
pub async fn delete_match(
    match_service: web::Data<MatchSvc>,
    path: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let profile_id = get_identity(&req)?;
    match_service.delete(profile_id, path.into_inner()).await?;

    Ok(success::Success::no_content())
}
