use crate::modules::matches::handle::*;
use actix_web::web::{ServiceConfig, scope};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(scope("/matches").service(list_matches).service(delete_match));
}
