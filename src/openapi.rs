/// OpenAPI documentation for the Postline API
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Postline API",
        version = "0.1.0",
        description = "Social posting service. Users register and sign in, author text posts, and browse anyone's posts; comments, likes and friendships hang off them. Reading is public, authoring requires sign-in, editing and deleting are owner-only.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server"),
    ),
    paths(
        crate::handlers::health::health,
        crate::handlers::users::register,
        crate::handlers::users::show_user,
        crate::handlers::sessions::sign_in_form,
        crate::handlers::sessions::sign_in,
        crate::handlers::posts::new_post_form,
        crate::handlers::posts::create_post,
        crate::handlers::posts::create_user_post,
        crate::handlers::posts::show_post,
        crate::handlers::posts::user_posts,
        crate::handlers::posts::edit_post_form,
        crate::handlers::posts::update_post,
        crate::handlers::posts::destroy_post,
        crate::handlers::comments::create_comment,
        crate::handlers::comments::post_comments,
        crate::handlers::comments::destroy_comment,
        crate::handlers::likes::like_post,
        crate::handlers::likes::unlike_post,
        crate::handlers::likes::post_likes,
        crate::handlers::friendships::create_friendship,
        crate::handlers::friendships::my_friendships,
        crate::handlers::friendships::destroy_friendship,
    ),
    components(schemas(
        crate::models::RegisterUserRequest,
        crate::models::SignInRequest,
        crate::models::Post,
        crate::models::Comment,
        crate::models::Like,
        crate::models::Friendship,
        crate::models::FriendshipStatus,
        crate::handlers::users::SessionResponse,
        crate::handlers::users::ProfileResponse,
        crate::handlers::posts::PostParams,
        crate::handlers::comments::CommentParams,
        crate::handlers::likes::PostLikes,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "Health", description = "Service health checks"),
        (name = "Users", description = "Registration and public profiles"),
        (name = "Sessions", description = "Sign-in and token issuance"),
        (name = "Posts", description = "Post creation, retrieval, updates, and deletion"),
        (name = "Comments", description = "Comments on posts"),
        (name = "Likes", description = "Likes on posts"),
        (name = "Friendships", description = "Friend requests and friendships"),
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Bearer token issued at registration or sign-in"))
                        .build(),
                ),
            )
        }
    }
}

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/api/v1/openapi.json"
    }
}
