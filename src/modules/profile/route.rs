use crate::modules::profile::handle::*;
use actix_web::web::{ServiceConfig, scope};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/profiles")
            .service(register)
            .service(get_my_profile)
            .service(get_swipes_left)
            .service(update_location)
            .service(update_profile)
            .service(delete_my_profile)
            .service(find_candidates),
    );
}
