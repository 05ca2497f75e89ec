//! HTTP handlers and route configuration.

mod health;
mod posts;
mod users;

#[cfg(test)]
mod tests;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/users")
                    .route("", web::get().to(users::list_users))
                    .route("", web::post().to(users::create_user))
                    .route("/{id}", web::get().to(users::get_user))
                    .route("/{id}", web::delete().to(users::delete_user))
                    .route("/{id}/posts", web::get().to(posts::list_posts_for_user))
                    .route("/{id}/posts", web::post().to(posts::create_post_for_user))
                    .route(
                        "/{user_id}/posts/{post_id}",
                        web::get().to(posts::get_post_for_user),
                    ),
            ),
    );
}
