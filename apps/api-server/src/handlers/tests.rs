use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, Error, test, web};
use serde_json::{Value, json};

use crate::handlers::configure_routes;
use crate::state::AppState;

async fn spawn_app()
-> impl Service<actix_http::Request, Response = ServiceResponse, Error = Error> {
    let state = AppState::in_memory();
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await
}

async fn create_jack(app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = Error>)
-> String {
    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({"name": "Jack", "birth_date": "1997-01-01"}))
        .to_request();
    let res = test::call_service(app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    res.headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned()
}

#[actix_web::test]
async fn health_reports_active_store_mode() {
    let app = spawn_app().await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "in-memory");
}

#[actix_web::test]
async fn create_user_then_get_location_round_trips() {
    let app = spawn_app().await;

    let location = create_jack(&app).await;
    assert_eq!(location, "/api/users/1");

    let res = test::call_service(&app, test::TestRequest::get().uri(&location).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Jack");
    assert_eq!(body["birth_date"], "1997-01-01");
    assert_eq!(body["_links"]["all-users"], "/api/users");
}

#[actix_web::test]
async fn get_unknown_user_is_not_found() {
    let app = spawn_app().await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/users/9999").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["title"], "Not Found");
}

#[actix_web::test]
async fn create_user_with_blank_name_fails_validation() {
    let app = spawn_app().await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({"name": "   ", "birth_date": "1997-01-01"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(res).await;
    assert!(body["detail"].as_str().unwrap().contains("name"));
}

#[actix_web::test]
async fn list_users_returns_everyone() {
    let app = spawn_app().await;
    create_jack(&app).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({"name": "Jill", "birth_date": "1999-06-15"}))
        .to_request();
    test::call_service(&app, req).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/users").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
}

#[actix_web::test]
async fn delete_user_is_idempotent_and_get_after_delete_is_not_found() {
    let app = spawn_app().await;
    let location = create_jack(&app).await;

    let res =
        test::call_service(&app, test::TestRequest::delete().uri(&location).to_request()).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = test::call_service(&app, test::TestRequest::get().uri(&location).to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Deleting again, or deleting an id that never existed, still succeeds.
    let res =
        test::call_service(&app, test::TestRequest::delete().uri(&location).to_request()).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = test::call_service(
        &app,
        test::TestRequest::delete().uri("/api/users/9999").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn create_post_then_get_it_with_user_link() {
    let app = spawn_app().await;
    create_jack(&app).await;

    let req = test::TestRequest::post()
        .uri("/api/users/1/posts")
        .set_json(json!({"description": "hi"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    assert_eq!(location, "/api/users/1/posts/1");

    let res = test::call_service(&app, test::TestRequest::get().uri(&location).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["user_id"], 1);
    assert_eq!(body["description"], "hi");
    assert_eq!(body["_links"]["user"], "/api/users/1");
}

#[actix_web::test]
async fn list_posts_contains_created_post_exactly_once() {
    let app = spawn_app().await;
    create_jack(&app).await;

    let req = test::TestRequest::post()
        .uri("/api/users/1/posts")
        .set_json(json!({"description": "hi"}))
        .to_request();
    test::call_service(&app, req).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/users/1/posts").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    let posts = body.as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["description"], "hi");
}

#[actix_web::test]
async fn post_routes_require_an_existing_user() {
    let app = spawn_app().await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/users/5/posts").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/users/5/posts")
        .set_json(json!({"description": "hi"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn create_post_with_blank_description_fails_validation() {
    let app = spawn_app().await;
    create_jack(&app).await;

    let req = test::TestRequest::post()
        .uri("/api/users/1/posts")
        .set_json(json!({"description": ""}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn post_owned_by_another_user_is_not_found() {
    let app = spawn_app().await;
    create_jack(&app).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({"name": "Jill", "birth_date": "1999-06-15"}))
        .to_request();
    test::call_service(&app, req).await;

    // Post id 1 belongs to user 1.
    let req = test::TestRequest::post()
        .uri("/api/users/1/posts")
        .set_json(json!({"description": "hi"}))
        .to_request();
    test::call_service(&app, req).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/users/2/posts/1").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
