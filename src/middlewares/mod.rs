use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    Error, HttpMessage, HttpRequest,
};
use uuid::Uuid;

use crate::api::error;

/// Profile id of the caller, extracted from the `X-Profile-Id` header.
#[derive(Debug, Clone, Copy)]
pub struct Identity(pub Uuid);

pub async fn identification<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<B>, Error>
where
    B: MessageBody + 'static,
{
    let header = req.headers().get("X-Profile-Id").and_then(|h| h.to_str().ok());
    let profile_id = match header.and_then(|h| Uuid::parse_str(h).ok()) {
        Some(id) => id,
        None => {
            return Err(error::Error::unauthorized("Missing or invalid X-Profile-Id header").into());
        }
    };

    req.extensions_mut().insert(Identity(profile_id));

    next.call(req).await
}

pub fn get_identity(req: &HttpRequest) -> Result<Uuid, error::Error> {
    let extensions = req.extensions();

    let identity = extensions
        .get::<Identity>()
        .ok_or_else(|| error::Error::unauthorized("Unauthorized"))?;

    Ok(identity.0)
}
