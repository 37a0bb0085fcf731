use actix_web::{delete, get, post, put, web, HttpRequest};

use crate::{
    api::{error, success},
    middlewares::get_identity,
    modules::profile::{
        model::{
            CandidateResponse, LocationBody, ProfileResponse, RegistrationBody,
            SwipesLeftResponse, UpdateProfileBody,
        },
        repository_pg::ProfileRepositoryPg,
        service::ProfileService,
    },
    utils::ValidatedJson,
};

pub type ProfileSvc = ProfileService<ProfileRepositoryPg>;

#[post("")]
pub async fn register(
    profile_service: web::Data<ProfileSvc>,
    body: ValidatedJson<RegistrationBody>,
    req: HttpRequest,
) -> Result<success::Success<ProfileResponse>, error::Error> {
    let profile_id = get_identity(&req)?;
    let profile = profile_service.register(profile_id, body.0).await?;

    Ok(success::Success::created(Some(profile.into())).message("Profile created successfully"))
}

#[get("")]
pub async fn find_candidates(
    profile_service: web::Data<ProfileSvc>,
    req: HttpRequest,
) -> Result<success::Success<Vec<CandidateResponse>>, error::Error> {
    let profile_id = get_identity(&req)?;
    let candidates = profile_service.candidates(profile_id).await?;

    Ok(success::Success::ok(Some(candidates)).message("Profiles to swipe retrieved successfully"))
}

#[get("/me")]
pub async fn get_my_profile(
    profile_service: web::Data<ProfileSvc>,
    req: HttpRequest,
) -> Result<success::Success<ProfileResponse>, error::Error> {
    let profile_id = get_identity(&req)?;
    let profile = profile_service.my_profile(profile_id).await?;

    Ok(success::Success::ok(Some(profile.into())).message("Profile retrieved successfully"))
}

#[put("")]
pub async fn update_profile(
    profile_service: web::Data<ProfileSvc>,
    body: ValidatedJson<UpdateProfileBody>,
    req: HttpRequest,
) -> Result<success::Success<ProfileResponse>, error::Error> {
    let profile_id = get_identity(&req)?;
    let profile = profile_service.update(profile_id, body.0).await?;

    Ok(success::Success::ok(Some(profile.into())).message("Profile updated successfully"))
}

#[put("/location")]
pub async fn update_location(
    profile_service: web::Data<ProfileSvc>,
    body: ValidatedJson<LocationBody>,
    req: HttpRequest,
) -> Result<success::Success<ProfileResponse>, error::Error> {
    let profile_id = get_identity(&req)?;
    let profile = profile_service.update_location(profile_id, body.0).await?;

    Ok(success::Success::ok(Some(profile.into())).message("Location updated successfully"))
}

#[delete("")]
pub async fn delete_my_profile(
    profile_service: web::Data<ProfileSvc>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let profile_id = get_identity(&req)?;
    profile_service.delete(profile_id).await?;

    Ok(success::Success::no_content())
}

#[get("/swipes-left")]
pub async fn get_swipes_left(
    profile_service: web::Data<ProfileSvc>,
    req: HttpRequest,
) -> Result<success::Success<SwipesLeftResponse>, error::Error> {
    let profile_id = get_identity(&req)?;
    let swipes_left = profile_service.swipes_left(profile_id).await?;

    Ok(success::Success::ok(Some(SwipesLeftResponse { swipes_left })))
}
