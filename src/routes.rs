/// Route table
///
/// Shared by `main` and the HTTP tests so both exercise identical routing.
/// Literal segments are registered before `{id}` captures where they share a
/// prefix; actix matches in registration order.
use actix_web::web;

use crate::handlers::{comments, friendships, health, likes, posts, sessions, users};
use crate::metrics;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Service endpoints outside the API version prefix
    cfg.route("/health", web::get().to(health::health))
        .route("/metrics", web::get().to(metrics::metrics_handler));

    cfg.service(
        web::scope("/api/v1")
            .service(
                web::scope("/users")
                    .route("", web::post().to(users::register))
                    .route("/sign_in", web::get().to(sessions::sign_in_form))
                    .route("/sign_in", web::post().to(sessions::sign_in))
                    .route("/{id}", web::get().to(users::show_user))
                    .route("/{user_id}/posts", web::get().to(posts::user_posts))
                    .route("/{user_id}/posts", web::post().to(posts::create_user_post))
                    .route("/{user_id}/posts/new", web::get().to(posts::new_post_form))
                    .route(
                        "/{user_id}/friendships",
                        web::post().to(friendships::create_friendship),
                    )
                    .route(
                        "/{user_id}/friendships",
                        web::delete().to(friendships::destroy_friendship),
                    ),
            )
            .service(
                web::scope("/posts")
                    .route("", web::post().to(posts::create_post))
                    .route("/{id}", web::get().to(posts::show_post))
                    .route("/{id}", web::put().to(posts::update_post))
                    .route("/{id}", web::delete().to(posts::destroy_post))
                    .route("/{id}/edit", web::get().to(posts::edit_post_form))
                    .route("/{post_id}/comments", web::get().to(comments::post_comments))
                    .route(
                        "/{post_id}/comments",
                        web::post().to(comments::create_comment),
                    )
                    .route("/{post_id}/like", web::post().to(likes::like_post))
                    .route("/{post_id}/like", web::delete().to(likes::unlike_post))
                    .route("/{post_id}/likes", web::get().to(likes::post_likes)),
            )
            .route("/comments/{id}", web::delete().to(comments::destroy_comment))
            .route("/friendships", web::get().to(friendships::my_friendships)),
    );
}
