//! Post resource handlers - posts live under their owning user.

use actix_web::http::header;
use actix_web::{HttpResponse, web};

use pinboard_core::DomainError;
use pinboard_core::domain::{NewPost, User};
use pinboard_shared::LinkedEntity;
use pinboard_shared::dto::CreatePostRequest;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

async fn resolve_user(state: &AppState, id: i32) -> Result<User, AppError> {
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound { entity: "user", id })?;
    Ok(user)
}

/// GET /api/users/{id}/posts
pub async fn list_posts_for_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = resolve_user(&state, path.into_inner()).await?;

    let posts = state.posts.find_by_user_id(user.id).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/users/{id}/posts
pub async fn create_post_for_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let user = resolve_user(&state, path.into_inner()).await?;

    let req = body.into_inner();
    if req.description.trim().is_empty() {
        return Err(DomainError::Validation(vec![
            "description must not be blank".to_string(),
        ])
        .into());
    }

    let saved = state
        .posts
        .save(NewPost::new(user.id, req.description))
        .await?;

    tracing::info!(user_id = user.id, post_id = saved.id, "Created post");

    let location = format!("/api/users/{}/posts/{}", user.id, saved.id);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(saved))
}

/// GET /api/users/{user_id}/posts/{post_id}
///
/// The post must belong to that user: a post id that exists under a different
/// owner is still a 404 here.
pub async fn get_post_for_user(
    state: web::Data<AppState>,
    path: web::Path<(i32, i32)>,
) -> AppResult<HttpResponse> {
    let (user_id, post_id) = path.into_inner();

    let user = resolve_user(&state, user_id).await?;

    // Per-user post counts are small; a linear scan over the owned collection
    // is fine, and ids are unique so the first match is the only one.
    let post = state
        .posts
        .find_by_user_id(user.id)
        .await?
        .into_iter()
        .find(|post| post.id == post_id)
        .ok_or(DomainError::NotFound {
            entity: "post",
            id: post_id,
        })?;

    let body = LinkedEntity::of(post).with_link("user", format!("/api/users/{}", user.id));
    Ok(HttpResponse::Ok().json(body))
}
