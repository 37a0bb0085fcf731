use actix_web::{post, web, HttpRequest};
use uuid::Uuid;

use crate::{
    api::{error, success},
    middlewares::get_identity,
    modules::swipe::{
        model::SwipeOutcome, repository_pg::SwipeRepositoryPg, schema::SwipeDirection,
        service::SwipeService,
    },
};

pub type SwipeSvc = SwipeService<SwipeRepositoryPg>;

#[post("/{profile_id}/{direction}")]
pub async fn swipe(
    swipe_service: web::Data<SwipeSvc>,
    path: web::Path<(Uuid, SwipeDirection)>,
    req: HttpRequest,
) -> Result<success::Success<SwipeOutcome>, error::Error> {
    let sender_id = get_identity(&req)?;
    let (receiver_id, direction) = path.into_inner();
    let outcome = swipe_service.swipe(sender_id, receiver_id, direction).await?;

    let message = match &outcome {
        SwipeOutcome::Swiped(_) => "Swipe created successfully",
        SwipeOutcome::Matched(_) => "It's a match",
    };

    Ok(success::Success::created(Some(outcome)).message(message))
}
