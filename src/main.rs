use actix_cors::Cors;
use actix_web::{
    self, App, HttpServer,
    middleware::{Logger, from_fn},
    web,
};
use std::sync::{Arc, LazyLock};

use crate::{
    configs::connect_database,
    middlewares::identification,
    modules::{
        matches::{repository_pg::MatchRepositoryPg, service::MatchService},
        profile::{repository_pg::ProfileRepositoryPg, service::ProfileService},
        swipe::{repository_pg::SwipeRepositoryPg, service::SwipeService},
    },
    test::*,
};

mod api;
mod configs;
mod constants;
mod middlewares;
mod modules;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::get("/")]
async fn health_check(db_pool: web::Data<sqlx::PgPool>) -> &'static str {
    "Server is running"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let db_pool =
        connect_database().await.map_err(|_| std::io::Error::other("Database connection error"))?;

    let _profile_repo = ProfileRepositoryPg::new(db_pool.clone());
    let _swipe_repo = SwipeRepositoryPg::new(db_pool.clone());
    let _match_repo = MatchRepositoryPg::new(db_pool.clone());

    let profile_service = ProfileService::with_dependencies(Arc::new(_profile_repo.clone()));
    let swipe_service = SwipeService::with_dependencies(Arc::new(_swipe_repo));
    let match_service =
        MatchService::with_dependencies(Arc::new(_match_repo), Arc::new(_profile_repo.clone()));

    println!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(ENV.frontend_url.as_str())
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec!["Content-Type", "X-Profile-Id"])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(profile_service.clone()))
            .app_data(web::Data::new(swipe_service.clone()))
            .app_data(web::Data::new(match_service.clone()))
            .app_data(web::Data::new(db_pool.clone()))
            .service(health_check)
            .service(
                web::scope("/api")
                    .wrap(from_fn(identification))
                    .configure(modules::profile::route::configure)
                    .configure(modules::swipe::route::configure)
                    .configure(modules::matches::route::configure),
            )
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(2)
    .run()
    .await
}
