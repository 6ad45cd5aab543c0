//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(posts::root))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .service(
                    web::resource("")
                        .route(web::get().to(posts::index))
                        .route(web::post().to(posts::create)),
                )
                // Registered before `/{id}` so "new" is never taken for an id.
                .service(web::resource("/new").route(web::get().to(posts::new_form)))
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(posts::show))
                        .route(web::put().to(posts::update))
                        .route(web::patch().to(posts::update))
                        .route(web::delete().to(posts::destroy)),
                )
                .service(web::resource("/{id}/edit").route(web::get().to(posts::edit))),
        );
}

/// Serve static assets under `/static`.
pub fn configure_static(cfg: &mut web::ServiceConfig, dir: Option<&str>) {
    if let Some(dir) = dir {
        cfg.service(actix_files::Files::new("/static", dir));
    }
}
