//! User resource handlers.

use actix_web::http::header;
use actix_web::{HttpResponse, web};

use pinboard_core::DomainError;
use pinboard_core::domain::NewUser;
use pinboard_shared::LinkedEntity;
use pinboard_shared::dto::CreateUserRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.find_all().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// GET /api/users/{id}
pub async fn get_user(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound { entity: "user", id })?;

    let body = LinkedEntity::of(user).with_link("all-users", "/api/users");
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/users
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    let mut errors = Vec::new();
    if req.name.trim().is_empty() {
        errors.push("name must not be blank".to_string());
    }
    if req.birth_date >= chrono::Utc::now().date_naive() {
        errors.push("birth_date must be in the past".to_string());
    }
    if !errors.is_empty() {
        return Err(DomainError::Validation(errors).into());
    }

    let saved = state
        .users
        .save(NewUser::new(req.name, req.birth_date))
        .await?;

    tracing::info!(user_id = saved.id, "Created user");

    let location = format!("/api/users/{}", saved.id);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(saved))
}

/// DELETE /api/users/{id} - idempotent, succeeds whether or not the user exists.
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.users.delete_by_id(id).await?;

    Ok(HttpResponse::NoContent().finish())
}
